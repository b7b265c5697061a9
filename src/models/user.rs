//! User models matching the persisted Firestore document layout.

use serde::{Deserialize, Serialize};

/// Authenticated session identity supplied by the gateway.
///
/// Replaced wholesale on every session change, never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user ID (also the document ID in the `users` collection)
    pub uid: String,
    /// Email address claim (may be None for some providers)
    pub email: Option<String>,
}

/// The editable subset of a user document.
///
/// Serialized field names match the document layout written by the mobile
/// clients, including the `avatURL` spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub display_name: String,
    pub bio: String,
    pub age: u32,
    #[serde(rename = "avatURL")]
    pub avatar_url: String,
    /// Single timezone bucket; empty string when unset
    pub timezone: String,
    pub platforms: Vec<String>,
    pub play_times: Vec<String>,
    pub preferred_games: Vec<String>,
    pub tags: Vec<String>,
}

/// Full per-user document stored in Firestore.
///
/// The client holds a cached, possibly-stale copy; the gateway owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDocument {
    pub email: String,
    pub group_ids: Vec<String>,
    /// RFC 3339 timestamp of last activity
    pub last_active_at: String,
    pub profile: UserProfile,
    /// RFC 3339 timestamp of last profile write
    pub updated_at: String,
}

/// Partial profile used for merge writes.
///
/// Only `Some` fields are written; everything else is left untouched both
/// server-side (via the update mask) and in the local store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(rename = "avatURL", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_times: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_games: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ProfilePatch {
    /// True if no field would be written.
    pub fn is_empty(&self) -> bool {
        self.field_paths().is_empty()
    }

    /// Firestore update-mask paths for the fields present in this patch.
    pub fn field_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        let mut add = |set: bool, name: &str| {
            if set {
                paths.push(format!("profile.{}", name));
            }
        };
        add(self.display_name.is_some(), "displayName");
        add(self.bio.is_some(), "bio");
        add(self.age.is_some(), "age");
        add(self.avatar_url.is_some(), "avatURL");
        add(self.timezone.is_some(), "timezone");
        add(self.platforms.is_some(), "platforms");
        add(self.play_times.is_some(), "playTimes");
        add(self.preferred_games.is_some(), "preferredGames");
        add(self.tags.is_some(), "tags");
        paths
    }

    /// Shallow-merge this patch into a profile, overwriting only `Some` fields.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(v) = &self.display_name {
            profile.display_name = v.clone();
        }
        if let Some(v) = &self.bio {
            profile.bio = v.clone();
        }
        if let Some(v) = self.age {
            profile.age = v;
        }
        if let Some(v) = &self.avatar_url {
            profile.avatar_url = v.clone();
        }
        if let Some(v) = &self.timezone {
            profile.timezone = v.clone();
        }
        if let Some(v) = &self.platforms {
            profile.platforms = v.clone();
        }
        if let Some(v) = &self.play_times {
            profile.play_times = v.clone();
        }
        if let Some(v) = &self.preferred_games {
            profile.preferred_games = v.clone();
        }
        if let Some(v) = &self.tags {
            profile.tags = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_field_paths_only_set_fields() {
        let patch = ProfilePatch {
            bio: Some("hello".to_string()),
            age: Some(29),
            ..Default::default()
        };
        assert_eq!(patch.field_paths(), vec!["profile.bio", "profile.age"]);
        assert!(!patch.is_empty());
        assert!(ProfilePatch::default().is_empty());
    }

    #[test]
    fn test_profile_deserializes_partial_document() {
        // Older documents may lack newer fields entirely
        let profile: UserProfile =
            serde_json::from_str(r#"{"displayName":"Bob","avatURL":"https://x/y.png"}"#).unwrap();
        assert_eq!(profile.display_name, "Bob");
        assert_eq!(profile.avatar_url, "https://x/y.png");
        assert_eq!(profile.age, 0);
        assert!(profile.platforms.is_empty());
    }
}
