use serde_json::{json, Value};
use tracing::error;

use crate::api::{ApiClient, ApiError, ApiOutcome, Navigation, RequestDescriptor, SignInRedirect};
use crate::models::{VerifyOtp, VerifyOtpResponse};

/// SMS one-time-code sign-in and the current session.
pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Ask the server to text a code to `telephone`
    pub async fn send_otp(&self, telephone: &str) -> ApiOutcome<Value> {
        self.client
            .perform(RequestDescriptor::post("/api/auth/send-otp").json(json!({ "telephone": telephone })))
            .await
    }

    /// Check a code, signing in or signing up.
    /// When the server hands back both a non-empty token and a user they
    /// become the stored session.
    pub async fn verify_otp(&self, request: &VerifyOtp) -> ApiOutcome<VerifyOtpResponse> {
        self.client
            .perform_json(RequestDescriptor::post("/api/auth/verify-otp"), request)
            .await
            .decode::<VerifyOtpResponse>()
            .and_then(|response| {
                if let (Some(token), Some(user)) = (&response.token, &response.user) {
                    if !token.is_empty() {
                        self.client.session().save(token, user).map_err(|e| {
                            error!(error = %e, "Failed to store session after sign-in");
                            ApiError::from(e)
                        })?;
                    }
                }
                Ok(response)
            })
    }

    /// Profile of the signed-in user
    pub async fn me(&self) -> ApiOutcome<Value> {
        self.client
            .perform(RequestDescriptor::get("/api/auth/me").authenticated())
            .await
    }

    /// Forget the session and send the user home
    pub fn logout(&self) -> Result<Navigation, ApiError> {
        self.client.session().clear()?;
        Ok(Navigation::Home)
    }

    /// `None` when signed in, otherwise where to send the visitor
    pub fn require_login(&self) -> Option<SignInRedirect> {
        if self.client.session().is_authenticated() {
            None
        } else {
            Some(SignInRedirect::new(self.client.page()))
        }
    }
}
