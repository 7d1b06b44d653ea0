//! Wire types shared across the WishShare client.
//!
//! Everything the web frontend sends to or receives from the WishShare API
//! lives here: the response envelope, the auth/community/member models and
//! the API error type.

pub mod models;
