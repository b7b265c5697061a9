// SPDX-License-Identifier: MIT

//! Shared test fixtures: a programmable mock gateway and store helpers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;

use squadup_core::error::{AppError, Result};
use squadup_core::gateway::Gateway;
use squadup_core::models::{Identity, ProfilePatch, UserDocument, UserProfile};
use squadup_core::state::{AppState, Store};

/// In-memory gateway with programmable documents, per-uid fetch delays, and
/// failure switches. Records every profile update it accepts.
#[allow(dead_code)]
pub struct MockGateway {
    sessions: watch::Sender<Option<Identity>>,
    docs: Mutex<HashMap<String, UserDocument>>,
    fetch_delays: Mutex<HashMap<String, Duration>>,
    fail_fetch: AtomicBool,
    fail_update: AtomicBool,
    fail_sign_out: AtomicBool,
    pub updates: Mutex<Vec<(String, ProfilePatch)>>,
}

#[allow(dead_code)]
impl MockGateway {
    pub fn new() -> Self {
        Self {
            sessions: watch::channel(None).0,
            docs: Mutex::new(HashMap::new()),
            fetch_delays: Mutex::new(HashMap::new()),
            fail_fetch: AtomicBool::new(false),
            fail_update: AtomicBool::new(false),
            fail_sign_out: AtomicBool::new(false),
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Simulate the backend reporting a session change.
    pub fn emit_session(&self, identity: Option<Identity>) {
        self.sessions.send_replace(identity);
    }

    pub fn put_document(&self, uid: &str, doc: UserDocument) {
        self.docs.lock().unwrap().insert(uid.to_string(), doc);
    }

    /// Delay fetches for a uid, to stage out-of-order completions.
    pub fn set_fetch_delay(&self, uid: &str, delay: Duration) {
        self.fetch_delays
            .lock()
            .unwrap()
            .insert(uid.to_string(), delay);
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_sign_out(&self, fail: bool) {
        self.fail_sign_out.store(fail, Ordering::SeqCst);
    }
}

impl Gateway for MockGateway {
    fn subscribe_to_session_changes(&self) -> watch::Receiver<Option<Identity>> {
        self.sessions.subscribe()
    }

    async fn fetch_user_document(&self, uid: &str) -> Result<Option<UserDocument>> {
        let delay = self.fetch_delays.lock().unwrap().get(uid).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection reset".to_string()));
        }
        Ok(self.docs.lock().unwrap().get(uid).cloned())
    }

    async fn update_user_profile(&self, uid: &str, patch: &ProfilePatch) -> Result<()> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(AppError::PermissionDenied(
                "Missing or insufficient permissions".to_string(),
            ));
        }
        // Server-side merge semantics
        if let Some(doc) = self.docs.lock().unwrap().get_mut(uid) {
            patch.apply_to(&mut doc.profile);
        }
        self.updates
            .lock()
            .unwrap()
            .push((uid.to_string(), patch.clone()));
        Ok(())
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Identity> {
        let identity = Identity {
            uid: format!("uid-{}", email),
            email: Some(email.to_string()),
        };
        self.sessions.send_replace(Some(identity.clone()));
        Ok(identity)
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity> {
        self.sign_in(email, password).await
    }

    async fn sign_out(&self) -> Result<()> {
        if self.fail_sign_out.load(Ordering::SeqCst) {
            return Err(AppError::Network("connection reset".to_string()));
        }
        self.sessions.send_replace(None);
        Ok(())
    }
}

#[allow(dead_code)]
pub fn identity(uid: &str) -> Identity {
    Identity {
        uid: uid.to_string(),
        email: Some(format!("{}@example.com", uid)),
    }
}

#[allow(dead_code)]
pub fn document_with_name(name: &str) -> UserDocument {
    UserDocument {
        email: format!("{}@example.com", name),
        group_ids: vec!["raid-group".to_string()],
        last_active_at: "2026-08-24T12:00:00Z".to_string(),
        profile: UserProfile {
            display_name: name.to_string(),
            bio: "looking for a fireteam".to_string(),
            age: 27,
            avatar_url: "https://example.com/avatar.png".to_string(),
            timezone: "EU".to_string(),
            platforms: vec!["PC".to_string()],
            play_times: vec!["Evenings".to_string()],
            preferred_games: vec!["Destiny 2".to_string()],
            tags: vec!["Raid ready".to_string()],
        },
        updated_at: "2026-08-24T12:00:00Z".to_string(),
    }
}

/// Poll the store until the predicate holds or a 2s deadline passes.
#[allow(dead_code)]
pub async fn wait_for(store: &Store, pred: impl Fn(&AppState) -> bool) -> AppState {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        let state = store.snapshot();
        if pred(&state) {
            return state;
        }
        if Instant::now() > deadline {
            panic!("timed out waiting for state, last seen: {:?}", state);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
