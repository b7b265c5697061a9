//! Application state: the single source of truth for session and profile data.
//!
//! State only advances through [`Action`] values fed to the pure [`reduce`]
//! function; the [`Store`] enforces the single-writer discipline and hands
//! out read-only snapshots and change subscriptions to the UI layer.

mod actions;
mod reducer;
mod store;

pub use actions::Action;
pub use reducer::reduce;
pub use store::Store;

use crate::models::{Identity, UserDocument, UserProfile};

/// Process-wide application state.
///
/// Invariant: `authenticated == identity.is_some()` after every transition,
/// and a null identity always implies a null document and profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub identity: Option<Identity>,
    pub authenticated: bool,

    /// Cached copy of the remote user document (gateway-owned, possibly stale)
    pub user_document: Option<UserDocument>,
    /// Denormalized from `user_document` for convenient access
    pub profile: Option<UserProfile>,

    pub identity_loading: bool,
    pub profile_loading: bool,

    pub error: Option<String>,
}

impl AppState {
    /// Current identity's uid, if signed in.
    pub fn uid(&self) -> Option<&str> {
        self.identity.as_ref().map(|id| id.uid.as_str())
    }
}
