// SPDX-License-Identifier: MIT

//! Session synchronizer: bridges gateway session notifications into store
//! transitions and keeps the profile in step with the current identity.
//!
//! Loads are tagged with the uid they were issued for; a completion whose tag
//! no longer matches the store's identity is discarded silently. Completions
//! apply in completion order, not issuance order, so the guard is what keeps
//! a slow load for an old session from clobbering a newer one.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::gateway::Gateway;
use crate::models::{Identity, UserDocument};
use crate::state::{Action, Store};

type LoadResult = (String, Result<Option<UserDocument>, AppError>);

/// Handle to the running synchronizer task.
///
/// Dropping the handle (or calling [`shutdown`](Self::shutdown)) cancels the
/// session subscription; no dispatches happen after teardown.
pub struct SessionSynchronizer {
    task: JoinHandle<()>,
}

impl SessionSynchronizer {
    /// Subscribe to the gateway and start the synchronization task.
    pub fn spawn<G: Gateway>(store: Store, gateway: Arc<G>) -> Self {
        let task = tokio::spawn(run(store, gateway));
        Self { task }
    }

    /// Tear the synchronizer down explicitly.
    pub fn shutdown(self) {
        self.task.abort();
    }
}

impl Drop for SessionSynchronizer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run<G: Gateway>(store: Store, gateway: Arc<G>) {
    let mut sessions = gateway.subscribe_to_session_changes();
    let (load_tx, mut load_rx) = mpsc::unbounded_channel::<LoadResult>();

    // The subscription always carries the current session; apply it before
    // waiting for changes, like the auth-state callback firing on registration.
    let initial = sessions.borrow_and_update().clone();
    let mut current_uid = apply_identity(&store, &gateway, &load_tx, None, initial);

    loop {
        tokio::select! {
            changed = sessions.changed() => {
                if changed.is_err() {
                    tracing::debug!("Session channel closed, synchronizer stopping");
                    break;
                }
                let identity = sessions.borrow_and_update().clone();
                current_uid = apply_identity(&store, &gateway, &load_tx, current_uid, identity);
            }

            Some((requested_uid, result)) = load_rx.recv() => {
                apply_load_result(&store, requested_uid, result);
            }
        }
    }
}

/// Dispatch an identity change and kick off a profile load when the identity
/// became non-null or switched to a different user.
///
/// Returns the uid now considered current.
fn apply_identity<G: Gateway>(
    store: &Store,
    gateway: &Arc<G>,
    load_tx: &mpsc::UnboundedSender<LoadResult>,
    previous_uid: Option<String>,
    identity: Option<Identity>,
) -> Option<String> {
    let uid = identity.as_ref().map(|id| id.uid.clone());
    store.dispatch(Action::IdentityChanged(identity));

    if let Some(uid) = &uid {
        if previous_uid.as_deref() != Some(uid.as_str()) {
            start_load(store, gateway, load_tx, uid.clone());
        }
    }

    uid
}

/// Issue a tagged profile load as its own task so a slow fetch never blocks
/// newer session notifications.
fn start_load<G: Gateway>(
    store: &Store,
    gateway: &Arc<G>,
    load_tx: &mpsc::UnboundedSender<LoadResult>,
    uid: String,
) {
    store.dispatch(Action::ProfileLoading(true));
    tracing::debug!(%uid, "Loading user document");

    let gateway = Arc::clone(gateway);
    let load_tx = load_tx.clone();
    tokio::spawn(async move {
        let result = gateway.fetch_user_document(&uid).await;
        // Receiver gone means the synchronizer was torn down; nothing to do.
        let _ = load_tx.send((uid, result));
    });
}

fn apply_load_result(
    store: &Store,
    requested_uid: String,
    result: Result<Option<UserDocument>, AppError>,
) {
    // Stale-response guard: only the load issued for the current identity
    // may touch the store.
    if store.snapshot().uid() != Some(requested_uid.as_str()) {
        tracing::debug!(uid = %requested_uid, "Discarding stale profile load");
        return;
    }

    match result {
        Ok(document) => {
            store.dispatch(Action::ProfileDocumentLoaded(document));
        }
        Err(err) => {
            tracing::warn!(uid = %requested_uid, error = %err, "Profile load failed");
            store.dispatch(Action::Error(Some(err.user_message())));
            store.dispatch(Action::ProfileLoading(false));
        }
    }
}
