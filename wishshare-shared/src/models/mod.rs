pub mod community;
pub mod envelope;
pub mod errors;
pub mod member;
pub mod user;

pub use community::{Community, CreateCommunityRequest};
pub use envelope::{Ack, ApiEnvelope, Content, PageMeta};
pub use errors::ApiError;
pub use member::{AddMemberRequest, CommunityMember, MemberRecord, MemberRole};
pub use user::{AuthGrant, SessionUser, SignInRequest, SignUpRequest};
