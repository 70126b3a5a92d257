//! Contains the models for profiles

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user's public profile. One row per auth user, created lazily on first
/// profile visit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Profile {
    /// The auth user id this profile belongs to
    pub id: Uuid,
    /// The name shown to other users
    pub display_name: Option<String>,
    /// A one-line headline, e.g. "backend dev, likes infra"
    pub headline: Option<String>,
    /// Comma-separated skill labels
    pub skills: Option<String>,
    /// Free-form bio text
    pub bio: Option<String>,
    /// When the profile row was created
    pub created_at: DateTime<Utc>,
}

/// The profile fields a user may change about themselves.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ProfilePatch {
    /// The name shown to other users
    pub display_name: Option<String>,
    /// A one-line headline
    pub headline: Option<String>,
    /// Comma-separated skill labels
    pub skills: Option<String>,
    /// Free-form bio text
    pub bio: Option<String>,
}

/// Errors for profiles
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The profile does not exist
    #[error("The profile does not exist")]
    ProfileDoesNotExist,
    /// Storage layer error
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Derives the default display name for a freshly created profile from the
/// local part of the user's email.
pub fn default_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}
