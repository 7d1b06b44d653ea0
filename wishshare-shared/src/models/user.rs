use serde::{Deserialize, Serialize};

/// The signed-in user as held by the session store.
///
/// Never persisted; re-derived from the stored credential at startup via
/// `GET /v1/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Body of `POST /v1/auth/signin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /v1/auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Payload of a successful sign-in or sign-up: the user's profile plus a
/// fresh bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthGrant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl AuthGrant {
    /// Split the grant into the session user and the credential to persist.
    pub fn into_parts(self) -> (SessionUser, String) {
        let AuthGrant {
            id,
            name,
            email,
            token,
        } = self;
        (SessionUser { id, name, email }, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_splits_into_user_and_token() {
        let grant = AuthGrant {
            id: "u42".to_string(),
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            token: "abc".to_string(),
        };

        let (user, token) = grant.into_parts();
        assert_eq!(token, "abc");
        assert_eq!(user.id, "u42");
        assert_eq!(user.name, "Priya");
        assert_eq!(user.email, "priya@example.com");
    }

    #[test]
    fn decodes_auth_grant() {
        let body = r#"{"id": "u1", "name": "Dana", "email": "dana@example.com", "token": "tok-1"}"#;
        let grant: AuthGrant = serde_json::from_str(body).unwrap();
        assert_eq!(grant.token, "tok-1");
    }

    #[test]
    fn sign_in_request_serializes_expected_fields() {
        let request = SignInRequest {
            email: "dana@example.com".to_string(),
            password: "hunter22".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "dana@example.com");
        assert_eq!(json["password"], "hunter22");
    }
}
