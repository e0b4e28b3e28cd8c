//! Session state for the current client user.
//!
//! `auth` is the plain snapshot type; `store` owns the lifecycle and
//! publishes snapshots to subscribers.

pub mod auth;
pub mod store;
