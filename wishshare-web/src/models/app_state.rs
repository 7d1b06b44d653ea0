use shared::models::SessionUser;
use yewdux::Store;

/// Global application state: the signed-in user, if any.
#[derive(Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<SessionUser>,
}
