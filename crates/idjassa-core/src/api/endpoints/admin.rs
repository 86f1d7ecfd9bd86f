use std::fmt::Display;

use serde_json::{json, Value};

use crate::api::{ApiClient, ApiOutcome, Query, RequestDescriptor};
use crate::models::{BanRequest, ReportResolution, UserFilters, DEFAULT_REPORT_STATUS};

/// Moderation endpoints. The server checks the admin role; the client only
/// requires a session.
pub struct Admin<'a> {
    client: &'a ApiClient,
}

impl<'a> Admin<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> ApiOutcome<Value> {
        self.get("/api/admin/stats".to_string()).await
    }

    /// All categories, including disabled ones
    pub async fn categories(&self) -> ApiOutcome<Value> {
        self.get("/api/admin/categories".to_string()).await
    }

    pub async fn toggle_category(&self, id: impl Display) -> ApiOutcome<Value> {
        self.client
            .perform(
                RequestDescriptor::patch(format!("/api/admin/categories/{}/toggle", id))
                    .empty_body()
                    .authenticated(),
            )
            .await
    }

    pub async fn users(&self, filters: &UserFilters) -> ApiOutcome<Value> {
        let path = Query::new()
            .text("q", filters.q.as_deref())
            .text("badge", filters.badge.as_deref())
            .text("kyc", filters.kyc.as_deref())
            .value("banned", filters.banned)
            .value("page", filters.page)
            .to_path("/api/admin/users");
        self.get(path).await
    }

    pub async fn ban_user(&self, id: impl Display, request: &BanRequest) -> ApiOutcome<Value> {
        self.client
            .perform_json(
                RequestDescriptor::patch(format!("/api/admin/users/{}/ban", id)).authenticated(),
                request,
            )
            .await
    }

    pub async fn update_kyc(&self, id: impl Display, status: &str) -> ApiOutcome<Value> {
        self.client
            .perform(
                RequestDescriptor::patch(format!("/api/admin/users/{}/kyc", id))
                    .json(json!({ "status": status }))
                    .authenticated(),
            )
            .await
    }

    /// Reports with the given status, `pending` by default
    pub async fn reports(&self, statut: Option<&str>) -> ApiOutcome<Value> {
        let statut = statut.unwrap_or(DEFAULT_REPORT_STATUS);
        let path = Query::new()
            .value("statut", Some(statut))
            .to_path("/api/admin/signalements");
        self.get(path).await
    }

    pub async fn resolve_report(&self, id: impl Display, resolution: &ReportResolution) -> ApiOutcome<Value> {
        self.client
            .perform_json(
                RequestDescriptor::patch(format!("/api/admin/signalements/{}", id)).authenticated(),
                resolution,
            )
            .await
    }

    pub async fn delete_annonce(&self, id: impl Display, reason: Option<&str>) -> ApiOutcome<Value> {
        let mut body = serde_json::Map::new();
        if let Some(reason) = reason {
            body.insert("reason".to_string(), Value::String(reason.to_string()));
        }
        self.client
            .perform(
                RequestDescriptor::delete(format!("/api/admin/annonces/{}", id))
                    .json(Value::Object(body))
                    .authenticated(),
            )
            .await
    }

    async fn get(&self, path: String) -> ApiOutcome<Value> {
        self.client
            .perform(RequestDescriptor::get(path).authenticated())
            .await
    }
}
