//! Session lifecycle: restore at startup, establish after sign-in or
//! sign-up, clear on logout.
//!
//! All mutations of the signed-in user go through this module and an
//! injected [`Dispatch`], so pages never touch the store or the stored
//! credential directly.

use crate::api::{self, WishShareClient};
use crate::models::app_state::AppState;
use shared::models::SessionUser;
use yewdux::Dispatch;

/// Restore the session from a previously stored credential.
///
/// Makes no network call when no credential is stored. A failed `/v1/auth/me`
/// call leaves the user signed out without any toast; the stored credential
/// is not purged.
pub async fn restore(client: &WishShareClient, dispatch: &Dispatch<AppState>) {
    if api::stored_token().is_none() {
        return;
    }

    match client.get_current_user().await {
        Ok(user) => dispatch.set(AppState { user: Some(user) }),
        Err(err) => {
            log::warn!("session restore failed: {err}");
            dispatch.set(AppState { user: None });
        }
    }
}

/// Persist the granted token and install the signed-in user.
pub fn establish(dispatch: &Dispatch<AppState>, user: SessionUser, token: &str) {
    api::store_token(token);
    dispatch.set(AppState { user: Some(user) });
}

/// Drop the in-memory user and delete the stored credential.
pub fn clear(dispatch: &Dispatch<AppState>) {
    api::delete_token();
    dispatch.set(AppState { user: None });
}
