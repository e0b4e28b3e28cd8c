//! Route table and navigation decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Front ends render whichever route these helpers pick. Nothing here
//! navigates on its own; pages return the next [`Route`] and the caller
//! follows it.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::auth::{AuthPhase, AuthState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Dashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }

    /// Routes that require a signed-in user.
    #[must_use]
    pub fn is_protected(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// True once auth has loaded and no user is present.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Landing route after startup. `None` while the bootstrap check is pending.
#[must_use]
pub fn initial_route(state: &AuthState) -> Option<Route> {
    match state.phase() {
        AuthPhase::Bootstrapping => None,
        AuthPhase::Authenticated => Some(Route::Dashboard),
        AuthPhase::Anonymous => Some(Route::Login),
    }
}

/// Resolve a requested route against the session. Protected routes send
/// anonymous users to `Login`; `None` means "wait, still loading".
#[must_use]
pub fn resolve(requested: Route, state: &AuthState) -> Option<Route> {
    if state.loading {
        return None;
    }
    if requested.is_protected() && should_redirect_unauth(state) {
        return Some(Route::Login);
    }
    Some(requested)
}
