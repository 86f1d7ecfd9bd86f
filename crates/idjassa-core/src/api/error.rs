use thiserror::Error;

use super::outcome::SignInRedirect;
use crate::auth::StorageError;

/// Message used when a failed response carries no usable `error` field
pub const GENERIC_ERROR_MESSAGE: &str = "Erreur serveur";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a non-success status.
    /// Displays as the server's message alone so it can go straight to a toast.
    #[error("{message}")]
    Remote { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Sign-in required: {0}")]
    Unauthenticated(SignInRedirect),
}

impl ApiError {
    /// Build the error for a failed response from its parsed JSON body.
    pub fn from_status(status: reqwest::StatusCode, body: &serde_json::Value) -> Self {
        let message = body
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|e| !e.is_empty())
            .unwrap_or(GENERIC_ERROR_MESSAGE)
            .to_string();
        ApiError::Remote {
            status: status.as_u16(),
            message,
        }
    }

    /// True for failures where no usable response was obtained
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::InvalidResponse(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}
