//! Request gateway for the I-Djassa REST API.
//!
//! Every facade call ends up in `ApiClient::perform`, which attaches the
//! bearer token for protected calls, sends the request once and turns the
//! response into an `ApiOutcome`.

use std::time::Duration;

use reqwest::{header, Client, Method};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use super::outcome::{ApiOutcome, SignInRedirect};
use super::ApiError;
use crate::auth::SessionStore;

// ============================================================================
// Constants
// ============================================================================

/// Production API origin
pub const DEFAULT_API_URL: &str = "https://i-djassa-api-production.up.railway.app";

/// Page assumed when the caller never said where it is
const DEFAULT_PAGE: &str = "/";

/// One call to make: method, path relative to the API origin, optional JSON
/// body and whether it needs the session token.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub requires_auth: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            requires_auth: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize a typed body. Failures surface when the call is performed.
    pub fn json_from<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, ApiError> {
        Ok(self.json(serde_json::to_value(body)?))
    }

    /// Send an empty JSON object, as the state-change endpoints expect
    pub fn empty_body(self) -> Self {
        self.json(Value::Object(serde_json::Map::new()))
    }

    pub fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }
}

/// API client for I-Djassa.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling
/// and the session store is a shared handle.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    session: SessionStore,
    page: String,
}

impl ApiClient {
    /// Create a client without a request timeout
    pub fn new(base_url: &str, session: SessionStore) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, session, None)
    }

    pub fn with_timeout(
        base_url: &str,
        session: SessionStore,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http_client(builder.build()?, base_url, session))
    }

    /// Wrap an existing reqwest client, sharing its connection pool
    pub fn with_http_client(client: Client, base_url: &str, session: SessionStore) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            page: DEFAULT_PAGE.to_string(),
        }
    }

    /// A client that reports `path` as the page calls are made from.
    /// Shares the connection pool and the session store.
    pub fn on_page(&self, path: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            session: self.session.clone(),
            page: path.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Issue one call. Protected calls without a session never reach the
    /// network and come back as `ApiOutcome::Unauthenticated`.
    pub async fn perform(&self, request: RequestDescriptor) -> ApiOutcome<Value> {
        let token = if request.requires_auth {
            match self.session.token().filter(|t| !t.is_empty()) {
                Some(token) => Some(token),
                None => {
                    debug!(path = %request.path, page = %self.page, "No session token, sign-in required");
                    return ApiOutcome::Unauthenticated(SignInRedirect::new(self.page.clone()));
                }
            }
        } else {
            None
        };

        match self.send(&request, token.as_deref()).await {
            Ok(data) => ApiOutcome::Ok(data),
            Err(err) => {
                error!(method = %request.method, path = %request.path, error = %err, "[API] request failed");
                ApiOutcome::Failed(err)
            }
        }
    }

    async fn send(&self, request: &RequestDescriptor, token: Option<&str>) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        debug!(method = %request.method, url = %url, "Sending request");
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // The body is JSON on both paths; errors carry { "error": "..." }
        let data: Value = serde_json::from_slice(&bytes)?;

        if !status.is_success() {
            return Err(ApiError::from_status(status, &data));
        }
        Ok(data)
    }
}
