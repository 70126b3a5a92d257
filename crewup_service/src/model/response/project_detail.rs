use profiles::Profile;
use projects::{Project, ProjectMember};

/// The project detail view: the project plus its roster, each membership row
/// joined with the member's profile where one exists.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub members: Vec<RosterMember>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct RosterMember {
    pub membership: ProjectMember,
    /// Absent when the member has never visited their profile page
    pub profile: Option<Profile>,
}
