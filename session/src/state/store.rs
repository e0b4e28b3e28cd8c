//! Session store: bootstrap, login, and logout over an injected API and storage.
//!
//! ARCHITECTURE
//! ============
//! The store is the single owner of [`AuthState`]. Views receive it by
//! reference (or `Arc`) and either read snapshots with [`SessionStore::state`]
//! or hold a [`watch::Receiver`] from [`SessionStore::subscribe`]; dropping the
//! receiver unsubscribes.
//!
//! LIFECYCLE
//! =========
//! `Bootstrapping -> Authenticated | Anonymous` happens once, in
//! [`SessionStore::initialize`]. After that only `login`/`logout` move the
//! state. Every `login`, `logout`, and `close` bumps a generation counter; a
//! bootstrap response that comes back under a stale generation is dropped
//! without touching state or storage.
//!
//! Mutations serialize on a small write mutex: storage I/O and the generation
//! check happen under it, and the watch channel's own lock is only held for
//! the state swap, so subscribers never wait on disk.
//!
//! A dropped `initialize` future (timeout, `select!`) leaves the store
//! bootstrapping but re-arms it, so the next call runs the check again.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use super::auth::{AuthPhase, AuthState};
use crate::net::api::AuthApi;
use crate::net::types::UserProfile;
use crate::storage::{TOKEN_KEY, TokenStorage};

pub struct SessionStore {
    api: Arc<dyn AuthApi>,
    storage: Arc<dyn TokenStorage>,
    state: watch::Sender<AuthState>,
    generation: AtomicU64,
    started: AtomicBool,
    closed: AtomicBool,
    writes: Mutex<()>,
}

/// Clears `started` if `initialize` is dropped before the outcome lands.
struct BootstrapAttempt<'a> {
    started: &'a AtomicBool,
    settled: bool,
}

impl Drop for BootstrapAttempt<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::debug!("bootstrap cancelled before completion; re-arming");
            self.started.store(false, Ordering::Release);
        }
    }
}

impl SessionStore {
    /// Create a store in the bootstrapping state. Nothing is read until
    /// [`SessionStore::initialize`] runs.
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, storage: Arc<dyn TokenStorage>) -> Self {
        let (state, _) = watch::channel(AuthState::default());
        Self {
            api,
            storage,
            state,
            generation: AtomicU64::new(0),
            started: AtomicBool::new(false),
            closed: AtomicBool::new(false),
            writes: Mutex::new(()),
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        self.state.borrow().phase()
    }

    /// Watch state changes. The receiver starts at the current snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.receiver_count()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// The persisted bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read_token()
    }

    /// Restore a session from the persisted token.
    ///
    /// Runs its check at most once per store; later calls (and calls made
    /// after `login`/`logout` already settled the state) return the current
    /// snapshot without touching the network. Any verification failure,
    /// including a profile response with no user object, clears the token and
    /// ends anonymous. If the returned future is dropped mid-request the store
    /// stays bootstrapping and the next call retries.
    pub async fn initialize(&self) -> AuthState {
        if self.started.swap(true, Ordering::AcqRel) {
            return self.state();
        }
        if !self.state.borrow().loading || self.is_closed() {
            return self.state();
        }

        let mut attempt = BootstrapAttempt { started: &self.started, settled: false };
        let generation = self.generation.load(Ordering::Acquire);

        let user = if self.read_token().is_none() {
            tracing::debug!("no persisted token; session is anonymous");
            None
        } else {
            match self.api.get_profile().await {
                Ok(user) if user.is_present() => {
                    tracing::debug!("persisted token verified");
                    Some(user)
                }
                Ok(_) => {
                    tracing::debug!("profile response carried no user; clearing token");
                    None
                }
                Err(e) => {
                    tracing::debug!(error = %e, "persisted token rejected; clearing");
                    None
                }
            }
        };
        self.finish_bootstrap(generation, user);
        attempt.settled = true;
        self.state()
    }

    /// Persist `token` and mark `user` as signed in. Does not call the network.
    pub fn login(&self, token: &str, user: UserProfile) {
        let _writes = self.lock_writes();
        if let Err(e) = self.storage.set(TOKEN_KEY, token) {
            tracing::warn!(error = %e, "failed to persist token");
        }
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::AcqRel);
            *state = AuthState::authenticated(user);
        });
        tracing::info!("session logged in");
    }

    /// Clear the persisted token and the current user. Idempotent.
    pub fn logout(&self) {
        let _writes = self.lock_writes();
        if let Err(e) = self.storage.remove(TOKEN_KEY) {
            tracing::warn!(error = %e, "failed to clear persisted token");
        }
        self.state.send_modify(|state| {
            self.generation.fetch_add(1, Ordering::AcqRel);
            *state = AuthState::anonymous();
        });
        tracing::info!("session logged out");
    }

    /// Detach the store from any in-flight bootstrap. Later bootstrap results
    /// are discarded; `login`/`logout` keep working.
    pub fn close(&self) {
        let _writes = self.lock_writes();
        self.closed.store(true, Ordering::Release);
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "token storage read failed; treating as absent");
                None
            }
        }
    }

    /// Apply a bootstrap outcome unless the generation moved on. `None`
    /// clears the persisted token.
    fn finish_bootstrap(&self, generation: u64, user: Option<UserProfile>) {
        let _writes = self.lock_writes();
        if self.closed.load(Ordering::Acquire) || self.generation.load(Ordering::Acquire) != generation {
            tracing::debug!("discarding stale bootstrap result");
            return;
        }
        let next = match user {
            Some(user) => AuthState::authenticated(user),
            None => {
                if let Err(e) = self.storage.remove(TOKEN_KEY) {
                    tracing::warn!(error = %e, "failed to clear rejected token");
                }
                AuthState::anonymous()
            }
        };
        self.state.send_replace(next);
    }
}
