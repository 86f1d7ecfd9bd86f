use chrono::NaiveDate;
use serde::Serialize;

use super::EntityId;

/// Body of `POST /api/rdv`: a buyer proposes a meeting for a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RdvProposal {
    pub annonce_id: EntityId,
    pub date_rdv: NaiveDate,
    /// Local time as `HH:MM`
    pub heure_rdv: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lieu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_rdv: Option<String>,
}

/// Body of `POST /api/rdv/{id}/conclure`: the outcome of a meeting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RdvConclusion {
    pub type_eval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motif: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_motif: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_serializes_date_as_iso() {
        let proposal = RdvProposal {
            annonce_id: EntityId::Int(12),
            date_rdv: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            heure_rdv: "14:30".to_string(),
            lieu: Some("Marché de Cocody".to_string()),
            note_rdv: None,
        };
        let body = serde_json::to_value(&proposal).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "annonce_id": 12,
                "date_rdv": "2024-06-03",
                "heure_rdv": "14:30",
                "lieu": "Marché de Cocody"
            })
        );
    }
}
