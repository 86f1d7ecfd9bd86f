//! Result type for gateway calls.
//!
//! A protected call made without a session is neither a success nor a
//! failure: the caller is expected to send the user to the sign-in page.
//! `ApiOutcome` keeps that case separate so the caller decides how to
//! navigate.

use std::fmt;

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use super::ApiError;

/// Sign-in entry point
pub const SIGN_IN_PAGE: &str = "/inscription.html";

/// Landing page after logout
pub const HOME_PAGE: &str = "/index.html";

/// Where to send a visitor who needs to sign in, and where to bring them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInRedirect {
    /// Path of the page the protected call was made from
    pub next: String,
}

impl SignInRedirect {
    pub fn new(next: impl Into<String>) -> Self {
        Self { next: next.into() }
    }

    /// `/inscription.html?next=<encoded path>`
    pub fn location(&self) -> String {
        let next: String = form_urlencoded::byte_serialize(self.next.as_bytes()).collect();
        format!("{}?next={}", SIGN_IN_PAGE, next)
    }
}

impl fmt::Display for SignInRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

/// Page changes the client asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Home,
    SignIn(SignInRedirect),
}

impl Navigation {
    pub fn location(&self) -> String {
        match self {
            Navigation::Home => HOME_PAGE.to_string(),
            Navigation::SignIn(redirect) => redirect.location(),
        }
    }
}

#[derive(Debug)]
#[must_use]
pub enum ApiOutcome<T> {
    Ok(T),
    /// No request was sent; the caller should navigate to the sign-in page
    Unauthenticated(SignInRedirect),
    Failed(ApiError),
}

impl<T> ApiOutcome<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiOutcome::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiOutcome::Ok(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Ok(value) => ApiOutcome::Ok(f(value)),
            ApiOutcome::Unauthenticated(redirect) => ApiOutcome::Unauthenticated(redirect),
            ApiOutcome::Failed(err) => ApiOutcome::Failed(err),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, ApiError>) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Ok(value) => match f(value) {
                Ok(mapped) => ApiOutcome::Ok(mapped),
                Err(err) => ApiOutcome::Failed(err),
            },
            ApiOutcome::Unauthenticated(redirect) => ApiOutcome::Unauthenticated(redirect),
            ApiOutcome::Failed(err) => ApiOutcome::Failed(err),
        }
    }

    /// Collapse into a `Result`, treating a missing session as an error.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiOutcome::Ok(value) => Ok(value),
            ApiOutcome::Unauthenticated(redirect) => Err(ApiError::Unauthenticated(redirect)),
            ApiOutcome::Failed(err) => Err(err),
        }
    }

    /// The navigation to perform, if this outcome calls for one
    pub fn navigation(&self) -> Option<Navigation> {
        match self {
            ApiOutcome::Unauthenticated(redirect) => Some(Navigation::SignIn(redirect.clone())),
            _ => None,
        }
    }
}

impl ApiOutcome<serde_json::Value> {
    /// Check the JSON payload against a typed model.
    pub fn decode<T: DeserializeOwned>(self) -> ApiOutcome<T> {
        self.and_then(|value| serde_json::from_value(value).map_err(ApiError::from))
    }
}

impl<T> From<Result<T, ApiError>> for ApiOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => ApiOutcome::Ok(value),
            Err(err) => ApiOutcome::Failed(err),
        }
    }
}
