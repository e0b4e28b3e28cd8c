//! Auth-session snapshot for the current client user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by route guards and user-aware views to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::UserProfile;

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only while the startup check is in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for AuthState {
    /// A fresh store starts bootstrapping.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Coarse lifecycle phase derived from an [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Bootstrapping,
    Authenticated,
    Anonymous,
}

impl AuthState {
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, loading: false }
    }

    #[must_use]
    pub fn authenticated(user: UserProfile) -> Self {
        Self { user: Some(user), loading: false }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        match (self.loading, &self.user) {
            (true, _) => AuthPhase::Bootstrapping,
            (false, Some(_)) => AuthPhase::Authenticated,
            (false, None) => AuthPhase::Anonymous,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.phase() == AuthPhase::Authenticated
    }
}
