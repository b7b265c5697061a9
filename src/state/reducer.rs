use super::{Action, AppState};

/// Advance the application state by one action.
///
/// Pure and total: no side effects, defined for every reachable state, and
/// safe to replay. Each arm returns a complete next state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::IdentityChanged(identity) => {
            let authenticated = identity.is_some();
            let mut next = AppState {
                identity,
                authenticated,
                identity_loading: false,
                ..state
            };
            // Eager invalidation: a profile from a prior session must never
            // leak into a new or absent session. The loading flag goes with
            // it, since any in-flight load for the old session will be
            // discarded instead of landing.
            if !authenticated {
                next.user_document = None;
                next.profile = None;
                next.profile_loading = false;
            }
            next
        }

        Action::ProfileDocumentLoaded(document) => {
            let profile = document.as_ref().map(|doc| doc.profile.clone());
            AppState {
                user_document: document,
                profile,
                profile_loading: false,
                ..state
            }
        }

        Action::ProfileLoading(loading) => AppState {
            profile_loading: loading,
            ..state
        },

        Action::IdentityLoading(loading) => AppState {
            identity_loading: loading,
            ..state
        },

        Action::Error(error) => AppState { error, ..state },

        Action::SignedOut => AppState {
            identity: None,
            authenticated: false,
            user_document: None,
            profile: None,
            error: None,
            ..state
        },

        Action::ProfileMerged(patch) => {
            // Editing requires an existing profile
            if state.profile.is_none() {
                return state;
            }
            let mut state = state;
            if let Some(profile) = state.profile.as_mut() {
                patch.apply_to(profile);
            }
            if let Some(doc) = state.user_document.as_mut() {
                patch.apply_to(&mut doc.profile);
            }
            state
        }
    }
}
