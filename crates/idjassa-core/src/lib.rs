//! Client library for the I-Djassa classified-ads marketplace.
//!
//! The library wraps the marketplace's REST API:
//!
//! - `auth`: the session store (bearer token + user profile)
//! - `api`: the request gateway (`ApiClient`) and endpoint facades
//! - `models`: request bodies, filters and the user profile
//! - `ui`: navbar, toast and badge helpers for the pages
//! - `utils`: price and relative-date formatting
//! - `config`: API origin and on-disk locations
//!
//! A protected call made without a session is never sent; it comes back as
//! `ApiOutcome::Unauthenticated` carrying the sign-in redirect, and the
//! caller decides how to navigate.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod ui;
pub mod utils;

pub use api::{ApiClient, ApiError, ApiOutcome, Navigation, RequestDescriptor, SignInRedirect};
pub use auth::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};
pub use config::Config;
pub use models::{EntityId, Profile};
