use serde::{Deserialize, Serialize};

/// Pagination block attached to collection responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    /// The page this response covers, 1-based.
    pub page: u32,
    /// Total number of pages in the collection.
    pub pages: u32,
    /// Total number of items across all pages.
    pub total: u64,
}

/// Payload of a successful response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Content<T> {
    pub data: T,
    pub meta: Option<PageMeta>,
}

/// The envelope every WishShare endpoint wraps its response in.
///
/// `status` reports whether the operation succeeded; `content` carries the
/// payload on success and `message` a human-readable explanation on failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub status: bool,
    pub content: Option<Content<T>>,
    pub message: Option<String>,
}

/// Envelope for write endpoints that acknowledge without returning data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ack {
    pub status: bool,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Community;

    #[test]
    fn decodes_paginated_collection() {
        let body = r#"{
            "status": true,
            "content": {
                "data": [
                    {"id": "c1", "name": "Board games", "created_at": "2024-05-01T10:00:00Z"}
                ],
                "meta": {"page": 2, "pages": 7, "total": 61}
            }
        }"#;

        let envelope: ApiEnvelope<Vec<Community>> = serde_json::from_str(body).unwrap();
        assert!(envelope.status);
        assert!(envelope.message.is_none());

        let content = envelope.content.unwrap();
        assert_eq!(content.data.len(), 1);
        assert_eq!(content.data[0].name, "Board games");

        let meta = content.meta.unwrap();
        assert_eq!(meta.page, 2);
        assert_eq!(meta.pages, 7);
        assert_eq!(meta.total, 61);
    }

    #[test]
    fn decodes_envelope_without_meta() {
        let body = r#"{
            "status": true,
            "content": {
                "data": {"id": "u1", "name": "Dana", "email": "dana@example.com"}
            }
        }"#;

        let envelope: ApiEnvelope<crate::models::SessionUser> = serde_json::from_str(body).unwrap();
        let content = envelope.content.unwrap();
        assert!(content.meta.is_none());
        assert_eq!(content.data.email, "dana@example.com");
    }

    #[test]
    fn decodes_failure_ack() {
        let body = r#"{"status": false, "message": "name already taken"}"#;
        let ack: Ack = serde_json::from_str(body).unwrap();
        assert!(!ack.status);
        assert_eq!(ack.message.as_deref(), Some("name already taken"));
    }

    #[test]
    fn decodes_bare_ack() {
        let ack: Ack = serde_json::from_str(r#"{"status": true}"#).unwrap();
        assert!(ack.status);
        assert!(ack.message.is_none());
    }
}
