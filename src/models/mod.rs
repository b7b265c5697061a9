//! Data models for session identity and user documents.

pub mod options;
pub mod user;

pub use user::{Identity, ProfilePatch, UserDocument, UserProfile};
