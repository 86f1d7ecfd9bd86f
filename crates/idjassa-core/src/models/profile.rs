use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server identifier, numeric or textual depending on the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(id) => write!(f, "{}", id),
            EntityId::Text(id) => f.write_str(id),
        }
    }
}

/// Signed-in user as returned by the auth endpoints.
///
/// Only the fields the client reads are typed; everything else the server
/// sends is kept in `extra` so a stored profile round-trips unchanged.
/// A profile without an id is still a usable session user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prenom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn new(id: EntityId) -> Self {
        Self {
            id: Some(id),
            prenom: None,
            nom: None,
            telephone: None,
            badge: None,
            role: None,
            extra: Map::new(),
        }
    }

    /// Name shown in the navbar
    pub fn display_name(&self) -> &str {
        self.prenom.as_deref().unwrap_or_default()
    }

    pub fn full_name(&self) -> String {
        match (&self.prenom, &self.nom) {
            (Some(p), Some(n)) => format!("{} {}", p, n),
            (Some(p), None) => p.clone(),
            (None, Some(n)) => n.clone(),
            (None, None) => String::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_keeps_unknown_fields() {
        let json = r#"{"id":42,"prenom":"Awa","nom":"Koné","kyc_status":"verified","note_moyenne":4.5}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, Some(EntityId::Int(42)));
        assert_eq!(profile.full_name(), "Awa Koné");
        assert_eq!(profile.extra["kyc_status"], "verified");

        let back: Value = serde_json::to_value(&profile).unwrap();
        let original: Value = serde_json::from_str(json).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_entity_id_accepts_uuid_strings() {
        let profile: Profile =
            serde_json::from_str(r#"{"id":"6f1c2a9e-1b0d-4c55-9a8e-2f4b9d7c3e10"}"#).unwrap();
        assert_eq!(profile.id.as_ref().unwrap().to_string(), "6f1c2a9e-1b0d-4c55-9a8e-2f4b9d7c3e10");
        assert_eq!(profile.display_name(), "");
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_profile_without_id() {
        let profile: Profile = serde_json::from_str(r#"{"prenom":"Awa"}"#).unwrap();
        assert_eq!(profile.id, None);
        assert_eq!(profile.display_name(), "Awa");
        assert_eq!(serde_json::to_string(&profile).unwrap(), r#"{"prenom":"Awa"}"#);
    }
}
