// SPDX-License-Identifier: MIT

//! Firebase-backed gateway: Identity Toolkit REST for auth, Firestore for
//! user documents.
//!
//! Sessions are published on a watch channel so the synchronizer sees
//! sign-in/sign-out as it would see the SDK's auth-state callback.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{Identity, ProfilePatch, UserDocument};

use super::Gateway;

/// Firestore collection holding the per-user documents.
const USERS: &str = "users";

/// Gateway implementation over Firebase Auth and Firestore.
pub struct FirebaseGateway {
    http: reqwest::Client,
    api_key: String,
    auth_base_url: String,
    db: Option<firestore::FirestoreDb>,
    sessions: watch::Sender<Option<Identity>>,
}

impl FirebaseGateway {
    /// Connect to Firestore and prepare the auth client.
    ///
    /// For local development with the emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn connect(config: &Config) -> Result<Self> {
        let db = if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            Self::emulator_db(&config.project_id).await?
        } else {
            firestore::FirestoreDb::new(&config.project_id)
                .await
                .map_err(|e| {
                    AppError::Database(format!("Failed to connect to Firestore: {}", e))
                })?
        };

        tracing::info!(project = %config.project_id, "Connected to Firestore");

        Ok(Self {
            http: reqwest::Client::new(),
            api_key: config.firebase_api_key.clone(),
            auth_base_url: config.auth_base_url.clone(),
            db: Some(db),
            sessions: watch::channel(None).0,
        })
    }

    /// Create a gateway without a Firestore connection (offline mode).
    ///
    /// Document operations will return an error if called.
    pub fn new_offline(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.firebase_api_key.clone(),
            auth_base_url: config.auth_base_url.clone(),
            db: None,
            sessions: watch::channel(None).0,
        }
    }

    /// Connect to the Firestore emulator with a dummy token, avoiding local
    /// credential lookups.
    async fn emulator_db(project_id: &str) -> Result<firestore::FirestoreDb> {
        tracing::info!("Using unauthenticated connection for Firestore emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJkZXYifQ.".to_string().into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        firestore::FirestoreDb::with_options_token_source(
            firestore::FirestoreDbOptions::new(project_id.to_string()),
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to connect to Firestore emulator: {}", e)))
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// POST to an Identity Toolkit `accounts:` endpoint and publish the
    /// resulting session.
    async fn auth_request(&self, endpoint: &str, email: &str, password: &str) -> Result<Identity> {
        let url = format!(
            "{}/accounts:{}?key={}",
            self.auth_base_url, endpoint, self.api_key
        );

        let response = self
            .http
            .post(&url)
            .json(&AuthRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body: AuthErrorBody = response.json().await.unwrap_or_default();
            let message = body
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| status.to_string());
            tracing::warn!(endpoint, %message, "Auth request rejected");
            return Err(AppError::Auth(message));
        }

        let body: AuthResponse = response
            .json()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let identity = Identity {
            uid: body.local_id,
            email: body.email,
        };

        tracing::info!(uid = %identity.uid, "Session established");
        self.sessions.send_replace(Some(identity.clone()));

        Ok(identity)
    }
}

impl Gateway for FirebaseGateway {
    fn subscribe_to_session_changes(&self) -> watch::Receiver<Option<Identity>> {
        self.sessions.subscribe()
    }

    async fn fetch_user_document(&self, uid: &str) -> Result<Option<UserDocument>> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(USERS)
            .obj()
            .one(uid)
            .await
            .map_err(|e| AppError::from_gateway_message(e.to_string()))
    }

    async fn update_user_profile(&self, uid: &str, patch: &ProfilePatch) -> Result<()> {
        // Masked write: only the patch's fields and the update timestamp are
        // touched, everything else is left alone server-side.
        let mut paths = patch.field_paths();
        paths.push("updatedAt".to_string());

        let write = ProfileMergeWrite {
            profile: patch.clone(),
            updated_at: chrono::Utc::now().to_rfc3339(),
        };

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(paths)
            .in_col(USERS)
            .document_id(uid)
            .object(&write)
            .execute()
            .await
            .map_err(|e| AppError::from_gateway_message(e.to_string()))?;

        tracing::debug!(uid, "Profile merge-write committed");
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity> {
        self.auth_request("signInWithPassword", email, password)
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity> {
        self.auth_request("signUp", email, password).await
    }

    async fn sign_out(&self) -> Result<()> {
        // Identity Toolkit has no revocation call for this flow; discarding
        // the session client-side is what the SDK does as well.
        self.sessions.send_replace(None);
        Ok(())
    }
}

/// Identity Toolkit request body (shared by sign-in and sign-up).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

/// Successful Identity Toolkit response (extra fields ignored).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize, Default)]
struct AuthErrorBody {
    error: Option<AuthErrorDetail>,
}

#[derive(Deserialize)]
struct AuthErrorDetail {
    message: String,
}

/// Shape of the masked document write: nested profile plus the timestamp.
///
/// Owns its fields and round-trips, as the fluent update builder requires.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileMergeWrite {
    profile: ProfilePatch,
    updated_at: String,
}
