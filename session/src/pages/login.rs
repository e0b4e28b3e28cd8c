//! Login page: username + password against `POST /auth/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::AuthApi;
use crate::net::http::ApiError;
use crate::net::types::Credentials;
use crate::routes::Route;
use crate::state::store::SessionStore;

pub const LOGIN_FAILED: &str = "Login failed.";
pub const MISSING_CREDENTIALS: &str = "Enter both username and password.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Require both fields. Both are sent exactly as typed; a username of only
/// whitespace counts as blank.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] when either field is blank.
pub fn validate_login_input(form: &LoginForm) -> Result<Credentials, &'static str> {
    if form.username.trim().is_empty() || form.password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials { username: form.username.clone(), password: form.password.clone() })
}

/// Inline message for a failed login: the server's `message`, else a generic one.
#[must_use]
pub fn login_error_message(err: &ApiError) -> String {
    err.message().unwrap_or(LOGIN_FAILED).to_owned()
}

#[derive(Debug, Default)]
pub struct LoginPage {
    pub form: LoginForm,
    error: Option<String>,
}

impl LoginPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_form(form: LoginForm) -> Self {
        Self { form, error: None }
    }

    /// Message shown above the form after a failed submit.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn register_link(&self) -> Route {
        Route::Register
    }

    /// Submit the form. On success the session is logged in and the page
    /// returns `Dashboard`; on failure the error is set and nothing navigates.
    pub async fn submit(&mut self, api: &dyn AuthApi, store: &SessionStore) -> Option<Route> {
        self.error = None;
        let credentials = match validate_login_input(&self.form) {
            Ok(credentials) => credentials,
            Err(msg) => {
                self.error = Some(msg.to_owned());
                return None;
            }
        };

        match api.login(&credentials).await {
            Ok(resp) => {
                store.login(&resp.token, resp.user);
                Some(Route::Dashboard)
            }
            Err(e) => {
                tracing::debug!(error = %e, "login request failed");
                self.error = Some(login_error_message(&e));
                None
            }
        }
    }
}
