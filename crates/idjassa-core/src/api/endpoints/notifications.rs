use serde_json::Value;

use crate::api::{ApiClient, ApiOutcome, RequestDescriptor};

pub struct Notifications<'a> {
    client: &'a ApiClient,
}

impl<'a> Notifications<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ApiOutcome<Value> {
        self.client
            .perform(RequestDescriptor::get("/api/notifications").authenticated())
            .await
    }

    pub async fn mark_all_read(&self) -> ApiOutcome<Value> {
        self.client
            .perform(
                RequestDescriptor::patch("/api/notifications/read-all")
                    .empty_body()
                    .authenticated(),
            )
            .await
    }
}
