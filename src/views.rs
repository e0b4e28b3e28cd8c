//! Terminal rendering for the session routes.

#[cfg(test)]
#[path = "views_test.rs"]
mod views_test;

use std::io::{self, Write};

use session::pages::dashboard;
use session::routes::{Route, initial_route};
use session::state::auth::{AuthPhase, AuthState};

pub fn render_route(out: &mut impl Write, route: Route, state: &AuthState) -> io::Result<()> {
    match route {
        Route::Dashboard => {
            for line in dashboard::render(state) {
                writeln!(out, "{line}")?;
            }
        }
        Route::Login => {
            writeln!(out, "Login")?;
            writeln!(out, "Don't have an account? Register: authflow register ({})", Route::Register.path())?;
        }
        Route::Register => writeln!(out, "Register")?,
    }
    writeln!(out, "-> {}", route.path())
}

pub fn render_status(out: &mut impl Write, state: &AuthState) -> io::Result<()> {
    match state.phase() {
        AuthPhase::Authenticated => {
            let name = state.user.as_ref().and_then(|u| u.username()).unwrap_or("(unknown)");
            writeln!(out, "logged in as {name}")?;
        }
        AuthPhase::Anonymous => writeln!(out, "logged out")?,
        AuthPhase::Bootstrapping => writeln!(out, "checking session")?,
    }
    if let Some(route) = initial_route(state) {
        writeln!(out, "-> {}", route.path())?;
    }
    Ok(())
}
