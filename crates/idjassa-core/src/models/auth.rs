use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Profile;

/// Body of `POST /api/auth/verify-otp`.
/// `prenom` and `nom` are only needed the first time a number signs up.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VerifyOtp {
    pub telephone: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
}

impl VerifyOtp {
    pub fn new(telephone: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            telephone: telephone.into(),
            code: code.into(),
            prenom: None,
            nom: None,
        }
    }

    pub fn with_name(mut self, prenom: impl Into<String>, nom: impl Into<String>) -> Self {
        self.prenom = Some(prenom.into());
        self.nom = Some(nom.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Profile>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
