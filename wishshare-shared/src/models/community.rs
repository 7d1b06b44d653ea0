use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community as returned by the owned/joined list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /v1/community`. The server derives a unique slug from the
/// name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCommunityRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_community_with_rfc3339_timestamp() {
        let body = r#"{"id": "c9", "name": "Hiking club", "created_at": "2024-11-30T08:15:00Z"}"#;
        let community: Community = serde_json::from_str(body).unwrap();
        assert_eq!(community.id, "c9");
        assert_eq!(community.created_at.format("%Y-%m-%d").to_string(), "2024-11-30");
    }

    #[test]
    fn create_request_serializes_name_only() {
        let request = CreateCommunityRequest {
            name: "Hiking club".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Hiking club"}));
    }
}
