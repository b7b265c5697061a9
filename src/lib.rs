// SPDX-License-Identifier: MIT

//! SquadUp client core: session and profile state synchronization.
//!
//! This crate is the state layer of a mobile social app for gamers. It keeps
//! a single reducer-driven [`state::Store`] in step with the remote
//! authentication/document backend, reached only through the
//! [`gateway::Gateway`] trait.

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod profile;
pub mod state;
pub mod sync;

use std::sync::Arc;

use auth::AuthService;
use gateway::Gateway;
use profile::ProfileEditCoordinator;
use state::Store;
use sync::SessionSynchronizer;

/// Composition root: the store plus every component that may touch it.
///
/// Constructed once at the root of the UI tree; tearing it down cancels the
/// session subscription.
pub struct AppCore<G: Gateway> {
    pub store: Store,
    pub auth: AuthService<G>,
    pub profile: ProfileEditCoordinator<G>,
    synchronizer: SessionSynchronizer,
}

impl<G: Gateway> AppCore<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        let store = Store::new();
        let synchronizer = SessionSynchronizer::spawn(store.clone(), Arc::clone(&gateway));
        Self {
            auth: AuthService::new(store.clone(), Arc::clone(&gateway)),
            profile: ProfileEditCoordinator::new(store.clone(), gateway),
            store,
            synchronizer,
        }
    }

    /// Stop the session synchronizer; no dispatches happen afterwards.
    pub fn shutdown(self) {
        self.synchronizer.shutdown();
    }
}
