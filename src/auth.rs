// SPDX-License-Identifier: MIT

//! Sign-in / sign-up / sign-out flows.
//!
//! Successful sign-in reaches the store through the gateway's session
//! channel, not from here; only sign-out dispatches directly, mirroring the
//! app context's sign-out helper.

use std::sync::Arc;

use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::Identity;
use crate::state::{Action, Store};

pub struct AuthService<G> {
    store: Store,
    gateway: Arc<G>,
}

impl<G: Gateway> AuthService<G> {
    pub fn new(store: Store, gateway: Arc<G>) -> Self {
        Self { store, gateway }
    }

    /// Sign in with email and password.
    ///
    /// Errors carry the provider's message for inline display.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        self.gateway.sign_in(email, password).await
    }

    /// Create a new account.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<Identity> {
        self.gateway.sign_up(email, password).await
    }

    /// Sign out and reset session state in one step.
    ///
    /// A failed sign-out records the error and keeps the session.
    pub async fn sign_out(&self) -> Result<()> {
        match self.gateway.sign_out().await {
            Ok(()) => {
                self.store.dispatch(Action::SignedOut);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Sign-out failed");
                self.store
                    .dispatch(Action::Error(Some(err.user_message())));
                Err(err)
            }
        }
    }
}
