//! Registration page: creates an account, then sends the user to login.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::api::AuthApi;
use crate::net::http::ApiError;
use crate::net::types::Registration;
use crate::routes::Route;

pub const REGISTRATION_FAILED: &str = "Registration failed.";
pub const MISSING_FIELDS: &str = "Enter username, email, and password.";
pub const REGISTERED_NOTICE: &str = "Registration successful. Please log in.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Require every field. Values are sent as typed, like the login form.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS`] when any field is blank.
pub fn validate_register_input(form: &RegisterForm) -> Result<Registration, &'static str> {
    if form.username.trim().is_empty() || form.email.trim().is_empty() || form.password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Registration { username: form.username.clone(), email: form.email.clone(), password: form.password.clone() })
}

#[must_use]
pub fn register_error_message(err: &ApiError) -> String {
    err.message().unwrap_or(REGISTRATION_FAILED).to_owned()
}

#[derive(Debug, Default)]
pub struct RegisterPage {
    pub form: RegisterForm,
    error: Option<String>,
    notice: Option<&'static str>,
}

impl RegisterPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_form(form: RegisterForm) -> Self {
        Self { form, ..Self::default() }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Confirmation to show on the login route after a successful submit.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Submit the form. Registration does not sign the user in; success
    /// returns `Login`.
    pub async fn submit(&mut self, api: &dyn AuthApi) -> Option<Route> {
        self.error = None;
        self.notice = None;
        let registration = match validate_register_input(&self.form) {
            Ok(registration) => registration,
            Err(msg) => {
                self.error = Some(msg.to_owned());
                return None;
            }
        };

        match api.register(&registration).await {
            Ok(_) => {
                tracing::info!("account registered");
                self.notice = Some(REGISTERED_NOTICE);
                Some(Route::Login)
            }
            Err(e) => {
                tracing::debug!(error = %e, "register request failed");
                self.error = Some(register_error_message(&e));
                None
            }
        }
    }
}
