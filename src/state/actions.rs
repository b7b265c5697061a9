use crate::models::{Identity, ProfilePatch, UserDocument};

/// All transitions the store understands.
///
/// The reducer matches exhaustively; adding a variant is a compile error
/// until every consequence is spelled out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Session identity changed (None on sign-out or expiry)
    IdentityChanged(Option<Identity>),
    /// A user-document fetch completed (None when the document is absent)
    ProfileDocumentLoaded(Option<UserDocument>),
    ProfileLoading(bool),
    /// Dispatched by the UI layer's sign-in/sign-up screens while credentials
    /// are being verified; cleared by `IdentityChanged`
    IdentityLoading(bool),
    /// Record (or clear) the last error; leaves everything else alone
    Error(Option<String>),
    /// Explicit sign-out: resets session, document, profile, and error at once
    SignedOut,
    /// Shallow-merge an accepted profile edit without re-fetching
    ProfileMerged(ProfilePatch),
}
