//! Contains the domain logic for profiles

use uuid::Uuid;

use crate::domain::model::{Profile, ProfileError, ProfilePatch};

/// The ProfileRepository defines a set of actions to perform on profile data
pub trait ProfileRepository: Clone + Send + Sync + 'static {
    /// Gets a profile by user id
    fn get_profile(
        &self,
        user_id: &Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, ProfileError>> + Send;

    /// Gets the profile for a user, creating it first if it does not exist yet.
    /// A freshly created profile defaults its display name to the local part of
    /// the user's email.
    fn ensure_profile(
        &self,
        user_id: &Uuid,
        email: &str,
    ) -> impl Future<Output = Result<Profile, ProfileError>> + Send;

    /// Gets the profiles for a set of users in one query. Users without a
    /// profile row are simply absent from the result.
    fn get_profiles(
        &self,
        user_ids: &[Uuid],
    ) -> impl Future<Output = Result<Vec<Profile>, ProfileError>> + Send;

    /// Overwrites the user-editable fields of the user's own profile, creating
    /// the row if it does not exist yet.
    fn upsert_profile(
        &self,
        user_id: &Uuid,
        patch: ProfilePatch,
    ) -> impl Future<Output = Result<Profile, ProfileError>> + Send;
}
