//! Contains the domain traits for projects

use uuid::Uuid;

use crate::domain::model::{
    CreateProjectError, DeleteProjectError, FeedFilter, JoinProjectError, LeaveProjectError,
    OwnedAndJoined, Project, ProjectError, ProjectMember, ProjectPatch, ProjectWithRoster,
    UpdateProjectError,
};

/// The ProjectRepository defines a set of actions to perform on project data.
///
/// Mutating statements re-check ownership/membership in SQL, so a caller that
/// skipped the access predicates still cannot touch rows it does not own.
pub trait ProjectRepository: Clone + Send + Sync + 'static {
    /// Creates a new project together with its owner membership row in a
    /// single transaction. The returned roster contains exactly the owner.
    fn create_project(
        &self,
        owner_id: &Uuid,
        title: &str,
        short_pitch: Option<&str>,
        description: Option<&str>,
    ) -> impl Future<Output = Result<ProjectWithRoster, CreateProjectError>> + Send;

    /// Gets a project by id
    fn get_project(
        &self,
        project_id: &Uuid,
    ) -> impl Future<Output = Result<Project, ProjectError>> + Send;

    /// Gets a project and its roster, oldest membership first
    fn get_project_with_roster(
        &self,
        project_id: &Uuid,
    ) -> impl Future<Output = Result<ProjectWithRoster, ProjectError>> + Send;

    /// Gets the roster for a project, oldest membership first
    fn get_roster(
        &self,
        project_id: &Uuid,
    ) -> impl Future<Output = Result<Vec<ProjectMember>, ProjectError>> + Send;

    /// Applies a patch to a project owned by `owner_id`. Fields left `None`
    /// keep their value.
    fn update_project(
        &self,
        project_id: &Uuid,
        owner_id: &Uuid,
        patch: ProjectPatch,
    ) -> impl Future<Output = Result<Project, UpdateProjectError>> + Send;

    /// Deletes a project owned by `owner_id`; membership rows go with it.
    fn delete_project(
        &self,
        project_id: &Uuid,
        owner_id: &Uuid,
    ) -> impl Future<Output = Result<(), DeleteProjectError>> + Send;

    /// Inserts a `member` roster row for the user on an open project.
    /// A concurrent duplicate join is downgraded to returning the existing
    /// membership row.
    fn join_project(
        &self,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> impl Future<Output = Result<ProjectMember, JoinProjectError>> + Send;

    /// Deletes the user's own membership row. The owner's row is never
    /// deletable this way.
    fn leave_project(
        &self,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> impl Future<Output = Result<(), LeaveProjectError>> + Send;

    /// Lists all visible projects, newest first
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ProjectError>> + Send;

    /// Lists projects owned by the user, newest first
    fn list_projects_owned_by(
        &self,
        user_id: &Uuid,
    ) -> impl Future<Output = Result<Vec<Project>, ProjectError>> + Send;

    /// Lists projects the user holds a membership row on, newest first
    fn list_projects_joined_by(
        &self,
        user_id: &Uuid,
    ) -> impl Future<Output = Result<Vec<Project>, ProjectError>> + Send;
}

/// The ProjectService defines the operations exposed to the API layer.
///
/// The current actor is always threaded in explicitly; the service holds no
/// ambient session state.
pub trait ProjectService: Clone + Send + Sync + 'static {
    /// Creates a new project owned by the actor, with the actor as the sole
    /// roster entry. The title is validated (trimmed, non-empty, bounded)
    /// before anything is written.
    fn create_project(
        &self,
        actor: &Uuid,
        title: &str,
        short_pitch: Option<&str>,
        description: Option<&str>,
    ) -> impl Future<Output = Result<ProjectWithRoster, CreateProjectError>> + Send;

    /// Applies a patch to a project if the actor owns it
    fn update_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
        patch: ProjectPatch,
    ) -> impl Future<Output = Result<Project, UpdateProjectError>> + Send;

    /// Deletes a project if the actor owns it
    fn delete_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
    ) -> impl Future<Output = Result<(), DeleteProjectError>> + Send;

    /// Joins the actor to an open project. Joining a project the actor is
    /// already a member of succeeds and returns the existing row.
    fn join_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
    ) -> impl Future<Output = Result<ProjectMember, JoinProjectError>> + Send;

    /// Removes the actor from a project's roster
    fn leave_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
    ) -> impl Future<Output = Result<(), LeaveProjectError>> + Send;

    /// Returns the feed: all visible projects newest first, with the filter
    /// applied in memory after the fetch.
    fn list_feed(
        &self,
        actor: Option<&Uuid>,
        filter: FeedFilter,
    ) -> impl Future<Output = Result<Vec<Project>, ProjectError>> + Send;

    /// Returns the actor's owned and joined projects, with joined
    /// deduplicated against owned.
    fn list_owned_and_joined(
        &self,
        actor: &Uuid,
    ) -> impl Future<Output = Result<OwnedAndJoined, ProjectError>> + Send;

    /// Gets a project and its roster for the detail view
    fn get_project_with_roster(
        &self,
        project_id: &Uuid,
    ) -> impl Future<Output = Result<ProjectWithRoster, ProjectError>> + Send;
}
