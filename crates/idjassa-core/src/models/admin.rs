use serde::Serialize;

/// Report status listed when the caller does not pick one
pub const DEFAULT_REPORT_STATUS: &str = "pending";

/// Filters for `GET /api/admin/users`.
///
/// `banned` is tri-state: `None` lists everyone, `Some(false)` only users
/// who are not banned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub q: Option<String>,
    pub badge: Option<String>,
    pub kyc: Option<String>,
    pub banned: Option<bool>,
    pub page: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BanRequest {
    pub ban: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportResolution {
    pub statut: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_prise: Option<String>,
}
