pub(crate) mod community_card;
pub(crate) mod loading;
pub(crate) mod member_card;
pub(crate) mod modal;
pub(crate) mod page_controls;
pub(crate) mod toast;

// Re-export components for convenience
pub use community_card::CommunityCard;
pub use loading::Loading;
pub use member_card::MemberCard;
pub use modal::Modal;
pub use page_controls::PageControls;
pub use toast::{Toast, ToastMessage};
