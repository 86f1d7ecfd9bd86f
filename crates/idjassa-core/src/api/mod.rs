//! REST API client module for the I-Djassa marketplace.
//!
//! This module provides the `ApiClient` gateway and the endpoint facades
//! built on it (`auth`, `categories`, `annonces`, `rdv`, `notifications`,
//! `admin`).
//!
//! Protected endpoints use a bearer token obtained through SMS one-time
//! code verification and kept in the `SessionStore`.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod outcome;
pub mod query;

pub use client::{ApiClient, RequestDescriptor, DEFAULT_API_URL};
pub use endpoints::{Admin, Annonces, Auth, Categories, Notifications, Rdv};
pub use error::{ApiError, GENERIC_ERROR_MESSAGE};
pub use outcome::{ApiOutcome, Navigation, SignInRedirect, HOME_PAGE, SIGN_IN_PAGE};
pub use query::Query;
