//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and route-scoped orchestration. Pages take
//! the API and the session store as arguments and return the next
//! [`Route`](crate::routes::Route) instead of navigating themselves, so any
//! front end can render them.

pub mod dashboard;
pub mod login;
pub mod register;
