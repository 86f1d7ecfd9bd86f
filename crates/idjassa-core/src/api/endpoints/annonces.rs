use std::fmt::Display;

use serde::Serialize;
use serde_json::Value;

use crate::api::{ApiClient, ApiOutcome, Query, RequestDescriptor};
use crate::models::AnnonceFilters;

/// Classified listings.
pub struct Annonces<'a> {
    client: &'a ApiClient,
}

impl<'a> Annonces<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, filters: &AnnonceFilters) -> ApiOutcome<Value> {
        let path = Query::new()
            .text("cat", filters.cat.as_deref())
            .text("ville", filters.ville.as_deref())
            .text("q", filters.q.as_deref())
            .value("min_prix", filters.min_prix)
            .value("max_prix", filters.max_prix)
            .text("badge", filters.badge.as_deref())
            .text("sort", filters.sort.as_deref())
            .value("page", filters.page)
            .to_path("/api/annonces");
        self.client.perform(RequestDescriptor::get(path)).await
    }

    pub async fn get(&self, id: impl Display) -> ApiOutcome<Value> {
        self.client
            .perform(RequestDescriptor::get(format!("/api/annonces/{}", id)))
            .await
    }

    /// Publish a listing. The payload is passed through as-is.
    pub async fn create<B: Serialize + ?Sized>(&self, listing: &B) -> ApiOutcome<Value> {
        self.client
            .perform_json(RequestDescriptor::post("/api/annonces").authenticated(), listing)
            .await
    }
}
