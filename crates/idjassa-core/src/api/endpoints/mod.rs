//! Endpoint facades, one per API area.
//!
//! Each facade borrows the `ApiClient` and maps named operations onto
//! request descriptors. Responses are returned as JSON values unless the
//! client reads them itself.

mod admin;
mod annonces;
mod auth;
mod categories;
mod notifications;
mod rdv;

pub use admin::Admin;
pub use annonces::Annonces;
pub use auth::Auth;
pub use categories::Categories;
pub use notifications::Notifications;
pub use rdv::Rdv;

use super::ApiClient;

impl ApiClient {
    pub fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    pub fn annonces(&self) -> Annonces<'_> {
        Annonces::new(self)
    }

    pub fn rdv(&self) -> Rdv<'_> {
        Rdv::new(self)
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications::new(self)
    }

    pub fn admin(&self) -> Admin<'_> {
        Admin::new(self)
    }
}

impl ApiClient {
    /// Attach a typed body and perform the call
    async fn perform_json<B: serde::Serialize + ?Sized>(
        &self,
        request: super::RequestDescriptor,
        body: &B,
    ) -> super::ApiOutcome<serde_json::Value> {
        match request.json_from(body) {
            Ok(request) => self.perform(request).await,
            Err(err) => super::ApiOutcome::Failed(err),
        }
    }
}
