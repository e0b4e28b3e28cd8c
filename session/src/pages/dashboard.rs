//! Dashboard page: greets the signed-in user and offers logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Anonymous visitors are sent to
//! `/login` once bootstrap has finished.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::routes::{Route, should_redirect_unauth};
use crate::state::auth::AuthState;
use crate::state::store::SessionStore;

pub const HEADING: &str = "Dashboard";

/// `Welcome, {username}!`; the name is blank when the profile has none.
#[must_use]
pub fn welcome_message(state: &AuthState) -> String {
    let name = state.user.as_ref().and_then(|u| u.username()).unwrap_or_default();
    format!("Welcome, {name}!")
}

/// Redirect target for this page, if the session does not allow it.
#[must_use]
pub fn redirect(state: &AuthState) -> Option<Route> {
    should_redirect_unauth(state).then_some(Route::Login)
}

/// Lines a text front end prints for the dashboard.
#[must_use]
pub fn render(state: &AuthState) -> Vec<String> {
    vec![HEADING.to_owned(), welcome_message(state)]
}

/// Log out, then go to `Login`.
pub fn logout(store: &SessionStore) -> Route {
    store.logout();
    Route::Login
}
