mod community_members;
mod dashboard;
mod error;
mod joined_communities;
pub mod login;
mod owned_communities;

pub use community_members::CommunityMembersPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use joined_communities::JoinedCommunitiesPage;
pub use login::LoginPage;
pub use owned_communities::OwnedCommunitiesPage;
