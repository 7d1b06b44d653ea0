//! Tests for the API client functionality
//!
//! Validates client construction, endpoint URL shapes and the error
//! mapping callers rely on for toast messages.

#[cfg(test)]
mod tests {
    use crate::api::WishShareClient;
    use shared::models::{Ack, AddMemberRequest, ApiError, MemberRole};

    /// Tests API client creation
    #[test]
    fn test_api_client_creation() {
        let _client = WishShareClient::new("http://localhost:8080");
        let _trimmed = WishShareClient::new("http://localhost:8080/");
        // Client should be created successfully
    }

    /// Tests API endpoint URLs
    #[test]
    fn test_api_endpoints() {
        let community_id = "c-123";
        let member_id = "m-456";

        let members_url = format!("/v1/community/{}/members", community_id);
        assert_eq!(members_url, "/v1/community/c-123/members");

        let remove_url = format!("/v1/member/{}/{}", community_id, member_id);
        assert_eq!(remove_url, "/v1/member/c-123/m-456");
    }

    /// Tests the add-member payload sent to the server
    #[test]
    fn test_add_member_payload() {
        let request = AddMemberRequest::new("c-123", "u-789", MemberRole::Admin);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["community"], "c-123");
        assert_eq!(json["user"], "u-789");
        assert_eq!(json["role"], "Community Admin");
    }

    /// Tests error mapping for the authorization-denied special case
    #[test]
    fn test_forbidden_error_mapping() {
        let err = ApiError::Api {
            status: Some(403),
            message: None,
        };
        assert!(err.is_forbidden());

        let err = ApiError::Api {
            status: Some(500),
            message: Some("boom".to_string()),
        };
        assert!(!err.is_forbidden());
        assert_eq!(err.server_message(), Some("boom"));
    }

    /// Tests that failure envelopes decode with their server message
    #[test]
    fn test_failure_envelope_decoding() {
        let ack: Ack =
            serde_json::from_str(r#"{"status": false, "message": "user not found"}"#).unwrap();
        assert!(!ack.status);
        assert_eq!(ack.message.as_deref(), Some("user not found"));
    }
}
