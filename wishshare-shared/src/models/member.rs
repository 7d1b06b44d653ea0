use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// Role display name the server expects when adding an admin.
pub const ROLE_COMMUNITY_ADMIN: &str = "Community Admin";
/// Role display name the server expects when adding a regular member.
pub const ROLE_COMMUNITY_MEMBER: &str = "Community Member";

/// Placeholder avatar shown until profile pictures are served by the API.
pub const DEFAULT_PROFILE_PIC: &str = "https://cdn-icons-png.flaticon.com/512/3135/3135715.png";

/// Client-side role bucket derived from the server's role display name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
}

impl MemberRole {
    /// Classify a server role display name.
    ///
    /// The API exposes no stable role code, only a display name, so any
    /// name containing "admin" (case-insensitive) counts as admin.
    pub fn classify(role_name: &str) -> Self {
        if role_name.to_lowercase().contains("admin") {
            MemberRole::Admin
        } else {
            MemberRole::Member
        }
    }

    /// The display name to send back in `POST /v1/member`.
    pub fn wire_name(self) -> &'static str {
        match self {
            MemberRole::Admin => ROLE_COMMUNITY_ADMIN,
            MemberRole::Member => ROLE_COMMUNITY_MEMBER,
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, MemberRole::Admin)
    }
}

/// Nested user block of a membership row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberUser {
    pub id: String,
    pub name: String,
}

/// Nested role block of a membership row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberRoleName {
    pub name: String,
}

/// A membership row exactly as `GET /v1/community/:id/members` returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberRecord {
    pub id: String,
    pub user: MemberUser,
    pub role: MemberRoleName,
    pub created_at: DateTime<Utc>,
}

/// A member projected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityMember {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
    pub profile_pic: String,
}

impl From<MemberRecord> for CommunityMember {
    fn from(record: MemberRecord) -> Self {
        CommunityMember {
            id: record.id,
            user_id: record.user.id,
            user_name: record.user.name,
            role: MemberRole::classify(&record.role.name),
            created_at: record.created_at,
            profile_pic: DEFAULT_PROFILE_PIC.to_string(),
        }
    }
}

/// Body of `POST /v1/member`. `role` carries the server's display name,
/// not the client-side bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddMemberRequest {
    pub community: String,
    pub user: String,
    pub role: String,
}

impl AddMemberRequest {
    pub fn new(community_id: &str, user_id: &str, role: MemberRole) -> Self {
        AddMemberRequest {
            community: community_id.to_string(),
            user: user_id.to_string(),
            role: role.wire_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_admin_display_names() {
        assert_eq!(MemberRole::classify("Community Admin"), MemberRole::Admin);
        assert_eq!(MemberRole::classify("admin_role"), MemberRole::Admin);
        assert_eq!(MemberRole::classify("ADMINISTRATOR"), MemberRole::Admin);
    }

    #[test]
    fn classifies_everything_else_as_member() {
        assert_eq!(MemberRole::classify("Community Member"), MemberRole::Member);
        assert_eq!(MemberRole::classify("moderator"), MemberRole::Member);
        assert_eq!(MemberRole::classify(""), MemberRole::Member);
    }

    #[test]
    fn role_displays_lowercase() {
        assert_eq!(MemberRole::Admin.to_string(), "admin");
        assert_eq!(MemberRole::Member.to_string(), "member");
    }

    #[test]
    fn decodes_member_record_and_projects_it() {
        let body = r#"{
            "id": "m7",
            "user": {"id": "u3", "name": "Ravi"},
            "role": {"name": "Community Admin"},
            "created_at": "2025-01-12T09:30:00Z"
        }"#;

        let record: MemberRecord = serde_json::from_str(body).unwrap();
        let member = CommunityMember::from(record);

        assert_eq!(member.id, "m7");
        assert_eq!(member.user_id, "u3");
        assert_eq!(member.user_name, "Ravi");
        assert_eq!(member.role, MemberRole::Admin);
        assert_eq!(member.profile_pic, DEFAULT_PROFILE_PIC);
    }

    #[test]
    fn add_member_request_carries_wire_role_names() {
        let admin = AddMemberRequest::new("c1", "u2", MemberRole::Admin);
        assert_eq!(admin.role, ROLE_COMMUNITY_ADMIN);

        let member = AddMemberRequest::new("c1", "u2", MemberRole::Member);
        assert_eq!(member.role, ROLE_COMMUNITY_MEMBER);
        assert_eq!(member.community, "c1");
        assert_eq!(member.user, "u2");
    }
}
