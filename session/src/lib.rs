//! Client-side authentication session for the authflow front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! `net` talks to the auth service, `storage` keeps the bearer token across
//! process restarts, `state` owns the session lifecycle, and `pages`/`routes`
//! hold the view logic that front ends render.

pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod storage;

pub use config::ClientConfig;
pub use net::api::{AuthApi, HttpAuthApi};
pub use net::http::ApiError;
pub use net::types::{Credentials, LoginResponse, Registration, UserProfile};
pub use routes::Route;
pub use state::auth::{AuthPhase, AuthState};
pub use state::store::SessionStore;
pub use storage::{FileStorage, MemoryStorage, StorageError, TOKEN_KEY, TokenStorage};
