// SPDX-License-Identifier: MIT

//! Application error types shared by the store, synchronizer, and gateway.

/// Application error type.
///
/// Stale profile-load responses are deliberately not represented here: the
/// synchronizer discards them silently instead of surfacing a user error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    NotAuthenticated,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message suitable for inline display in the UI layer.
    ///
    /// Provider-surfaced failures pass their message through opaquely.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Classify an opaque backend error message onto the taxonomy.
    ///
    /// The document store reports failures as gRPC status text embedded in
    /// the message; permission and missing-document cases get their own
    /// variants, everything else stays a database error.
    pub fn from_gateway_message(message: String) -> Self {
        if message.contains("PermissionDenied") || message.contains("Unauthenticated") {
            AppError::PermissionDenied(message)
        } else if message.contains("NotFound") {
            AppError::NotFound(message)
        } else {
            AppError::Database(message)
        }
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AppError>;
