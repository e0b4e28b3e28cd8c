//! Networking modules for the auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport wrapper that attaches the stored bearer token,
//! `api` is the three-call auth facade, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;
