//! Access/refresh token persistence for the JWT session.
//!
//! The backend authenticates with bearer tokens rather than cookies, so the
//! pair obtained at login is kept in `localStorage` and attached to every
//! request by the API layer. Clearing both keys is the whole of logout on
//! the client side.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use super::storage;
use crate::net::types::TokenPair;

const ACCESS_KEY: &str = "lms_access_token";
const REFRESH_KEY: &str = "lms_refresh_token";

/// Persist a freshly obtained token pair.
pub fn store(pair: &TokenPair) {
    storage::write_item(ACCESS_KEY, &pair.access);
    storage::write_item(REFRESH_KEY, &pair.refresh);
}

/// The stored access token, if any.
pub fn read_access() -> Option<String> {
    storage::read_item(ACCESS_KEY)
}

/// Whether a session token is present (not necessarily still valid).
pub fn has_session() -> bool {
    read_access().is_some()
}

/// Drop both tokens.
pub fn clear() {
    storage::remove_item(ACCESS_KEY);
    storage::remove_item(REFRESH_KEY);
}
