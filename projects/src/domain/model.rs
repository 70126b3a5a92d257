//! Contains the models for projects and memberships

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The lifecycle status of a project.
///
/// All transitions are explicit owner edits; the owner may move between any
/// two states in either direction. Every project starts out `open`.
#[derive(
    Eq,
    PartialEq,
    Debug,
    Clone,
    Copy,
    serde::Serialize,
    serde::Deserialize,
    sqlx::Type,
    utoipa::ToSchema,
)]
#[sqlx(type_name = "project_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// The project is recruiting; non-members may join
    Open,
    /// The team has formed and is building; joining is closed
    InProgress,
    /// The project has wrapped up
    Closed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Open => write!(f, "open"),
            ProjectStatus::InProgress => write!(f, "in_progress"),
            ProjectStatus::Closed => write!(f, "closed"),
        }
    }
}

/// The role a user holds on a project roster.
#[derive(
    Eq,
    PartialEq,
    Debug,
    Clone,
    Copy,
    serde::Serialize,
    serde::Deserialize,
    sqlx::Type,
    utoipa::ToSchema,
)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// The user joined the project
    Member,
    /// The user created the project
    Owner,
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Member => write!(f, "member"),
            MemberRole::Owner => write!(f, "owner"),
        }
    }
}

/// The Project struct
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::FromRow, utoipa::ToSchema,
)]
pub struct Project {
    /// The id of the project
    pub id: Uuid,
    /// The user who created the project; immutable after creation
    pub owner_id: Uuid,
    /// The project title
    pub title: String,
    /// A one-or-two sentence pitch
    pub short_pitch: Option<String>,
    /// A longer free-form description
    pub description: Option<String>,
    /// The lifecycle status
    pub status: ProjectStatus,
    /// When the project was created; immutable
    pub created_at: DateTime<Utc>,
}

/// One row of a project's membership roster.
#[derive(
    Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, sqlx::FromRow, utoipa::ToSchema,
)]
pub struct ProjectMember {
    /// The id of the membership row
    pub id: Uuid,
    /// The project this membership belongs to
    pub project_id: Uuid,
    /// The member's user id
    pub user_id: Uuid,
    /// The member's role on this project
    pub role: MemberRole,
    /// When the user joined
    pub created_at: DateTime<Utc>,
}

/// A project together with its ordered roster (oldest membership first, so the
/// owner always comes first).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ProjectWithRoster {
    /// The project itself
    pub project: Project,
    /// The membership roster
    pub members: Vec<ProjectMember>,
}

/// The fields an owner may change on their project. `None` leaves a field
/// untouched; `id`, `owner_id` and `created_at` are never patchable.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ProjectPatch {
    /// The new title
    pub title: Option<String>,
    /// The new short pitch
    pub short_pitch: Option<String>,
    /// The new description
    pub description: Option<String>,
    /// The new status
    pub status: Option<ProjectStatus>,
}

/// The feed filter applied after fetching, not a separate query mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FeedFilter {
    /// Keep only `open` projects
    Open,
    /// Keep everything
    All,
    /// Keep only projects owned by the current actor
    Mine,
}

/// The projects a user owns and the projects they joined, deduplicated.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct OwnedAndJoined {
    /// Projects where the user is the owner, newest first
    pub owned: Vec<Project>,
    /// Projects reachable through the user's memberships and not already in
    /// `owned`, newest first
    pub joined: Vec<Project>,
}

/// Errors for projects
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// The project does not exist
    #[error("The project does not exist")]
    ProjectDoesNotExist,
    /// Storage layer error
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors for creating a project
#[derive(Debug, thiserror::Error)]
pub enum CreateProjectError {
    /// The project title is invalid
    #[error("The project title is invalid: {0}")]
    InvalidTitle(String),
    /// Storage layer error
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors for updating a project
#[derive(Debug, thiserror::Error)]
pub enum UpdateProjectError {
    /// The actor is not the owner of the project
    #[error("Only the project owner can edit the project")]
    NotProjectOwner,
    /// The new title is invalid
    #[error("The project title is invalid: {0}")]
    InvalidTitle(String),
    /// Underlying project error
    #[error("Underlying project error {0}")]
    ProjectError(#[from] ProjectError),
    /// Storage layer error
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors for deleting a project
#[derive(Debug, thiserror::Error)]
pub enum DeleteProjectError {
    /// The actor is not the owner of the project
    #[error("Only the project owner can delete the project")]
    NotProjectOwner,
    /// Underlying project error
    #[error("Underlying project error {0}")]
    ProjectError(#[from] ProjectError),
    /// Storage layer error
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors for joining a project
#[derive(Debug, thiserror::Error)]
pub enum JoinProjectError {
    /// The project is not accepting new members
    #[error("The project is not open for joining")]
    ProjectNotOpen,
    /// The owner is always on the roster and cannot join again
    #[error("The owner is already a member of their own project")]
    OwnerCannotJoin,
    /// Underlying project error
    #[error("Underlying project error {0}")]
    ProjectError(#[from] ProjectError),
    /// Storage layer error
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Errors for leaving a project
#[derive(Debug, thiserror::Error)]
pub enum LeaveProjectError {
    /// Owners cannot leave; deleting the project is the only way an owner exits
    #[error("The owner cannot leave their own project")]
    OwnerCannotLeave,
    /// The user is not a member of the project
    #[error("The user is not a member of the project")]
    NotAMember,
    /// Underlying project error
    #[error("Underlying project error {0}")]
    ProjectError(#[from] ProjectError),
    /// Storage layer error
    #[error("Storage layer error {0}")]
    StorageLayerError(#[from] anyhow::Error),
}

/// Maximum accepted title length after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// Validates and normalizes a project title: trimmed, non-empty, bounded.
pub fn normalize_title(title: &str) -> Result<String, String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("title must not be empty".to_string());
    }
    if trimmed.len() > MAX_TITLE_LEN {
        return Err(format!("title must be at most {MAX_TITLE_LEN} characters"));
    }
    Ok(trimmed.to_string())
}
