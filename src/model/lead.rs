use serde::{Deserialize, Serialize};

/// A tracked foreclosure/tax-deed case. Field names serialize camelCase so
/// the storage blobs, bulk-upload payloads, and exports keep the wire format
/// of the scraped data feeds.
///
/// Monetary amounts stay as the feed's display strings (`"$8,631,405"`);
/// nothing downstream does arithmetic on them. Every field carries a serde
/// default so partial upload records parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lead {
    pub id: String,
    /// Court case number; the merge key for bulk uploads.
    pub case_number: String,
    pub county: String,
    pub lead_type: LeadType,
    pub auction_date: String,
    pub property_address: String,
    pub property_city: String,
    pub property_zip: String,
    pub assessed_value: String,
    pub judgment_amount: String,
    pub sold_amount: String,
    pub surplus: String,
    pub defendants: String,
    pub plaintiffs: String,
    pub parcel_id: String,
    pub case_url: String,
    pub zillow_url: String,
    pub property_appraiser_url: String,
    pub status: LeadStatus,
    /// Id of the user responsible for follow-up, if any.
    pub assigned_to: Option<String>,
    /// Append-only, insertion order preserved.
    pub notes: Vec<Note>,
    pub created_at: String,
    pub last_modified: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadType {
    #[default]
    #[serde(rename = "Future Auction")]
    FutureAuction,
    Surplus,
}

impl std::fmt::Display for LeadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadType::FutureAuction => write!(f, "Future Auction"),
            LeadType::Surplus => write!(f, "Surplus"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Interested,
    #[serde(rename = "Not Interested")]
    NotInterested,
    Dead,
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadStatus::New => write!(f, "New"),
            LeadStatus::Contacted => write!(f, "Contacted"),
            LeadStatus::Interested => write!(f, "Interested"),
            LeadStatus::NotInterested => write!(f, "Not Interested"),
            LeadStatus::Dead => write!(f, "Dead"),
        }
    }
}

/// A single activity note on a lead. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Millisecond epoch timestamp of creation; the store bumps it past the
    /// previous id when two notes land in the same millisecond.
    pub id: i64,
    pub text: String,
    /// Display name of the creator.
    pub author: String,
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_serializes_camel_case() {
        let lead = Lead {
            id: "LEAD_00001".to_string(),
            case_number: "2024-004542-CA-01".to_string(),
            ..Lead::default()
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["caseNumber"], "2024-004542-CA-01");
        assert!(json.get("case_number").is_none());
        assert_eq!(json["leadType"], "Future Auction");
        assert_eq!(json["status"], "New");
        assert_eq!(json["assignedTo"], serde_json::Value::Null);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&LeadStatus::NotInterested).unwrap(),
            "\"Not Interested\""
        );
        let status: LeadStatus = serde_json::from_str("\"Dead\"").unwrap();
        assert_eq!(status, LeadStatus::Dead);
    }

    #[test]
    fn test_partial_lead_parses_with_defaults() {
        let lead: Lead =
            serde_json::from_str(r#"{"caseNumber": "2025-1-CA", "county": "Broward"}"#).unwrap();
        assert_eq!(lead.case_number, "2025-1-CA");
        assert_eq!(lead.county, "Broward");
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.lead_type, LeadType::FutureAuction);
        assert!(lead.notes.is_empty());
        assert!(lead.assigned_to.is_none());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let result = serde_json::from_str::<Lead>(r#"{"status": "Archived"}"#);
        assert!(result.is_err());
    }
}
