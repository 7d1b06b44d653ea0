use thiserror::Error;

/// Failure surfaced by the API client.
///
/// `Api` covers responses the server produced (non-2xx, or an envelope with
/// `status == false`); `Transport` covers requests that never got a
/// response; `Decode` covers responses that did not match the expected
/// envelope shape.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{}", .message.as_deref().unwrap_or("request rejected by server"))]
    Api {
        status: Option<u16>,
        message: Option<String>,
    },
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => *status,
            _ => None,
        }
    }

    /// The server-supplied message, when there was one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The user lacks the role required for the operation.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// The credential is missing, expired or invalid.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_prefers_server_message() {
        let err = ApiError::Api {
            status: Some(409),
            message: Some("name already taken".to_string()),
        };
        assert_eq!(err.to_string(), "name already taken");
        assert_eq!(err.server_message(), Some("name already taken"));
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn api_error_falls_back_to_generic_text() {
        let err = ApiError::Api {
            status: Some(500),
            message: None,
        };
        assert_eq!(err.to_string(), "request rejected by server");
        assert!(err.server_message().is_none());
    }

    #[test]
    fn status_helpers() {
        let forbidden = ApiError::Api {
            status: Some(403),
            message: None,
        };
        assert!(forbidden.is_forbidden());
        assert!(!forbidden.is_unauthorized());

        let unauthorized = ApiError::Api {
            status: Some(401),
            message: None,
        };
        assert!(unauthorized.is_unauthorized());

        let transport = ApiError::Transport("connection refused".to_string());
        assert_eq!(transport.status(), None);
        assert!(!transport.is_forbidden());
        assert_eq!(transport.to_string(), "network error: connection refused");
    }
}
