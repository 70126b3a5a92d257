//! Implementation for ProfileRepository backed by Postgres.


use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    model::{Profile, ProfileError, ProfilePatch, default_display_name},
    profile_repo::ProfileRepository,
};

/// The ProfileRepositoryImpl struct is a wrapper around a sqlx::PgPool connected
/// to the CrewUp database.
#[derive(Clone)]
pub struct ProfileRepositoryImpl {
    /// The underlying sqlx::PgPool
    pool: PgPool,
}

impl ProfileRepositoryImpl {
    /// Creates a new instance of ProfileRepositoryImpl
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl From<sqlx::Error> for ProfileError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::ProfileDoesNotExist,
            _ => Self::StorageLayerError(e.into()),
        }
    }
}

impl ProfileRepository for ProfileRepositoryImpl {
    async fn get_profile(&self, user_id: &Uuid) -> Result<Option<Profile>, ProfileError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, display_name, headline, skills, bio, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn ensure_profile(&self, user_id: &Uuid, email: &str) -> Result<Profile, ProfileError> {
        // Lazy creation on first visit. The insert loses to any concurrent
        // insert for the same user, which is fine since both write the same
        // defaults.
        sqlx::query(
            r#"
            INSERT INTO profiles (id, display_name)
            VALUES ($1, $2)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(default_display_name(email))
        .execute(&self.pool)
        .await?;

        let profile = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, display_name, headline, skills, bio, created_at
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn get_profiles(&self, user_ids: &[Uuid]) -> Result<Vec<Profile>, ProfileError> {
        let profiles = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, display_name, headline, skills, bio, created_at
            FROM profiles
            WHERE id = ANY($1)
            "#,
        )
        .bind(user_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    async fn upsert_profile(
        &self,
        user_id: &Uuid,
        patch: ProfilePatch,
    ) -> Result<Profile, ProfileError> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, display_name, headline, skills, bio)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET display_name = EXCLUDED.display_name,
                headline = EXCLUDED.headline,
                skills = EXCLUDED.skills,
                bio = EXCLUDED.bio
            RETURNING id, display_name, headline, skills, bio, created_at
            "#,
        )
        .bind(user_id)
        .bind(patch.display_name)
        .bind(patch.headline)
        .bind(patch.skills)
        .bind(patch.bio)
        .fetch_one(&self.pool)
        .await?;

        Ok(profile)
    }
}
