// SPDX-License-Identifier: MIT

//! SquadUp core smoke binary.
//!
//! Connects to the backend, starts the session synchronizer, optionally
//! signs in with credentials from the environment, and logs state
//! transitions. Useful against the Firebase emulators during development.

use std::sync::Arc;

use squadup_core::{config::Config, gateway::FirebaseGateway, AppCore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(project = %config.project_id, "Starting SquadUp core");

    let gateway = Arc::new(
        FirebaseGateway::connect(&config)
            .await
            .expect("Failed to connect to Firestore"),
    );

    let core = AppCore::new(gateway);
    let mut states = core.store.subscribe();

    // Log every state transition in the background
    let watcher = tokio::spawn(async move {
        while states.changed().await.is_ok() {
            let state = states.borrow_and_update().clone();
            tracing::info!(
                authenticated = state.authenticated,
                profile_loading = state.profile_loading,
                has_profile = state.profile.is_some(),
                error = ?state.error,
                "State changed"
            );
        }
    });

    if let (Ok(email), Ok(password)) = (
        std::env::var("SQUADUP_DEMO_EMAIL"),
        std::env::var("SQUADUP_DEMO_PASSWORD"),
    ) {
        match core.auth.sign_in(&email, &password).await {
            Ok(identity) => tracing::info!(uid = %identity.uid, "Signed in"),
            Err(err) => tracing::error!(error = %err, "Sign-in failed"),
        }
        // Give the profile load a moment to land before shutting down
        tokio::time::sleep(std::time::Duration::from_secs(2)).await;
        let snapshot = core.store.snapshot();
        tracing::info!(profile = ?snapshot.profile, "Final snapshot");
    } else {
        tracing::info!("Set SQUADUP_DEMO_EMAIL / SQUADUP_DEMO_PASSWORD to exercise sign-in");
    }

    core.shutdown();
    watcher.abort();
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("squadup_core=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
