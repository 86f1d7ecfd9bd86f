use std::fmt::Display;

use serde_json::Value;

use crate::api::{ApiClient, ApiOutcome, RequestDescriptor};
use crate::models::{RdvConclusion, RdvProposal};

/// Appointments between buyers and sellers. All calls need a session.
pub struct Rdv<'a> {
    client: &'a ApiClient,
}

impl<'a> Rdv<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Appointments the user takes part in, on either side
    pub async fn mine(&self) -> ApiOutcome<Value> {
        self.client
            .perform(RequestDescriptor::get("/api/rdv/mes-rdv").authenticated())
            .await
    }

    pub async fn propose(&self, proposal: &RdvProposal) -> ApiOutcome<Value> {
        self.client
            .perform_json(RequestDescriptor::post("/api/rdv").authenticated(), proposal)
            .await
    }

    pub async fn confirm(&self, id: impl Display) -> ApiOutcome<Value> {
        self.client
            .perform(
                RequestDescriptor::patch(format!("/api/rdv/{}/confirmer", id))
                    .empty_body()
                    .authenticated(),
            )
            .await
    }

    pub async fn conclude(&self, id: impl Display, conclusion: &RdvConclusion) -> ApiOutcome<Value> {
        self.client
            .perform_json(
                RequestDescriptor::post(format!("/api/rdv/{}/conclure", id)).authenticated(),
                conclusion,
            )
            .await
    }
}
