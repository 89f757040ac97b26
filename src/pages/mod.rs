//! Screen controllers.
//!
//! One module per screen of the original application. Each controller holds
//! that screen's state, fetches its own data on load, and calls the API
//! client for mutations. Form validation happens here, before any request is
//! issued.

pub mod auth;
pub mod dashboard;
pub mod domains;
pub mod profile;
pub mod resume;
pub mod roadmap;

use crate::errors::ClientError;
use crate::models::User;
use crate::session::SessionProvider;

/// Fetch the current user or fail with `NotAuthenticated`.
pub fn require_user(session: &dyn SessionProvider) -> Result<User, ClientError> {
    session.current().ok_or(ClientError::NotAuthenticated)
}
