// SPDX-License-Identifier: MIT

//! The fixed interface to the remote session/profile backend.
//!
//! Everything behind this trait is gateway-owned: session lifecycle, the
//! persisted document layout, and merge-write semantics. The core never talks
//! to the backend except through these operations.

mod firebase;

pub use firebase::FirebaseGateway;

use std::future::Future;

use tokio::sync::watch;

use crate::error::Result;
use crate::models::{Identity, ProfilePatch, UserDocument};

/// Remote session/profile gateway.
///
/// Async methods return `Send` futures so the synchronizer can run loads as
/// spawned tasks.
pub trait Gateway: Send + Sync + 'static {
    /// Subscribe to session-change notifications.
    ///
    /// The receiver always holds the current session; dropping it cancels the
    /// subscription. `None` means no authenticated session.
    fn subscribe_to_session_changes(&self) -> watch::Receiver<Option<Identity>>;

    /// Fetch the user document for an identity. `Ok(None)` when absent.
    fn fetch_user_document(
        &self,
        uid: &str,
    ) -> impl Future<Output = Result<Option<UserDocument>>> + Send;

    /// Merge-write a partial profile: only the patch's fields are overwritten
    /// server-side, and the document's update timestamp is refreshed.
    fn update_user_profile(
        &self,
        uid: &str,
        patch: &ProfilePatch,
    ) -> impl Future<Output = Result<()>> + Send;

    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity>> + Send;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity>> + Send;

    fn sign_out(&self) -> impl Future<Output = Result<()>> + Send;
}
