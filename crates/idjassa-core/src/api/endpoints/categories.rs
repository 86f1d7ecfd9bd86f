use serde_json::Value;

use crate::api::{ApiClient, ApiOutcome, RequestDescriptor};

pub struct Categories<'a> {
    client: &'a ApiClient,
}

impl<'a> Categories<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Public category tree
    pub async fn list(&self) -> ApiOutcome<Value> {
        self.client.perform(RequestDescriptor::get("/api/categories")).await
    }
}
