//! Data models for the I-Djassa API.
//!
//! Request bodies and filters are typed so that optional fields are left out
//! of the JSON instead of being sent as `null`. Responses stay as
//! `serde_json::Value` except where the client itself reads them:
//!
//! - `Profile`, `EntityId`: the signed-in user
//! - `VerifyOtp`, `VerifyOtpResponse`: OTP sign-in
//! - `AnnonceFilters`, `FilterError`: listing search
//! - `RdvProposal`, `RdvConclusion`: appointments
//! - `UserFilters`, `BanRequest`, `ReportResolution`: moderation

pub mod admin;
pub mod annonce;
pub mod auth;
pub mod profile;
pub mod rdv;

pub use admin::{BanRequest, ReportResolution, UserFilters, DEFAULT_REPORT_STATUS};
pub use annonce::{AnnonceFilters, FilterError};
pub use auth::{VerifyOtp, VerifyOtpResponse};
pub use profile::{EntityId, Profile};
pub use rdv::{RdvConclusion, RdvProposal};
