use std::sync::Arc;

use tokio::sync::watch;

use super::{reduce, Action, AppState};

/// Shared application state container.
///
/// Constructed once at the composition root and cloned into every component
/// that needs to read or dispatch. All writes funnel through [`Store::dispatch`]
/// and the pure reducer; readers get snapshots or a change subscription.
#[derive(Clone)]
pub struct Store {
    tx: Arc<watch::Sender<AppState>>,
}

impl Store {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AppState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Apply an action through the reducer.
    ///
    /// `send_modify` serializes writers, so transitions never interleave even
    /// when several components hold a clone of the store.
    pub fn dispatch(&self, action: Action) {
        tracing::debug!(?action, "dispatch");
        self.tx.send_modify(|state| {
            let next = reduce(std::mem::take(state), action);
            *state = next;
        });
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> AppState {
        self.tx.borrow().clone()
    }

    /// Subscription for the UI layer; resolves whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
