// SPDX-License-Identifier: MIT

//! Profile editing: form normalization and the optimistic merge submit path.

use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::gateway::Gateway;
use crate::models::ProfilePatch;
use crate::state::{Action, Store};

/// Raw fields as the edit screen holds them.
///
/// `age` stays free text and `timezone` is whatever the chip selector
/// produced; both are normalized by [`into_patch`](Self::into_patch).
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub display_name: String,
    pub bio: String,
    pub age: String,
    pub avatar_url: String,
    pub timezone: Vec<String>,
    pub platforms: Vec<String>,
    pub play_times: Vec<String>,
    pub preferred_games: Vec<String>,
    pub tags: Vec<String>,
}

impl ProfileForm {
    /// Normalize the form into a merge patch.
    ///
    /// Every field is submitted (the edit screen always saves the whole
    /// form); set-valued fields pass through as toggled by the caller.
    pub fn into_patch(self) -> ProfilePatch {
        ProfilePatch {
            display_name: Some(self.display_name),
            bio: Some(self.bio),
            age: Some(parse_age(&self.age)),
            avatar_url: Some(self.avatar_url),
            // Last-picked value wins; empty selection clears the field
            timezone: Some(self.timezone.last().cloned().unwrap_or_default()),
            platforms: Some(self.platforms),
            play_times: Some(self.play_times),
            preferred_games: Some(self.preferred_games),
            tags: Some(self.tags),
        }
    }
}

/// Parse an age out of free text: leading digits only, anything else is 0.
fn parse_age(input: &str) -> u32 {
    let digits: String = input
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Submits staged profile edits and reconciles the store without a re-fetch.
pub struct ProfileEditCoordinator<G> {
    store: Store,
    gateway: Arc<G>,
}

impl<G: Gateway> ProfileEditCoordinator<G> {
    pub fn new(store: Store, gateway: Arc<G>) -> Self {
        Self { store, gateway }
    }

    /// Submit staged edits for the currently signed-in user.
    ///
    /// On success the accepted patch is merged into the local store
    /// optimistically. On failure the store is left untouched and the error
    /// is returned for inline display.
    pub async fn submit(&self, form: ProfileForm) -> Result<()> {
        let snapshot = self.store.snapshot();
        let Some(identity) = snapshot.identity else {
            return Err(AppError::NotAuthenticated);
        };

        let patch = form.into_patch();
        self.gateway
            .update_user_profile(&identity.uid, &patch)
            .await?;

        self.store.dispatch(Action::ProfileMerged(patch));
        tracing::info!(uid = %identity.uid, "Profile updated");
        Ok(())
    }
}
