//! Contains the service logic for projects

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{
    access,
    model::{
        CreateProjectError, DeleteProjectError, FeedFilter, JoinProjectError, LeaveProjectError,
        OwnedAndJoined, Project, ProjectError, ProjectMember, ProjectPatch, ProjectStatus,
        ProjectWithRoster, UpdateProjectError, normalize_title,
    },
    project_repo::{ProjectRepository, ProjectService},
};

/// Implementation of the ProjectService using a ProjectRepository
#[derive(Debug, Clone)]
pub struct ProjectServiceImpl<PR>
where
    PR: ProjectRepository,
{
    /// The underlying project repository
    project_repository: PR,
}

impl<PR> ProjectServiceImpl<PR>
where
    PR: ProjectRepository,
{
    /// Creates a new ProjectService
    pub fn new(project_repository: PR) -> Self {
        Self { project_repository }
    }
}

impl<PR> ProjectService for ProjectServiceImpl<PR>
where
    PR: ProjectRepository,
{
    async fn create_project(
        &self,
        actor: &Uuid,
        title: &str,
        short_pitch: Option<&str>,
        description: Option<&str>,
    ) -> Result<ProjectWithRoster, CreateProjectError> {
        let title = normalize_title(title).map_err(CreateProjectError::InvalidTitle)?;

        self.project_repository
            .create_project(actor, &title, short_pitch, description)
            .await
    }

    async fn update_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
        patch: ProjectPatch,
    ) -> Result<Project, UpdateProjectError> {
        let patch = ProjectPatch {
            title: patch
                .title
                .as_deref()
                .map(normalize_title)
                .transpose()
                .map_err(UpdateProjectError::InvalidTitle)?,
            ..patch
        };

        let project = self.project_repository.get_project(project_id).await?;

        if !access::can_edit(Some(actor), &project) {
            return Err(UpdateProjectError::NotProjectOwner);
        }

        self.project_repository
            .update_project(project_id, actor, patch)
            .await
    }

    async fn delete_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
    ) -> Result<(), DeleteProjectError> {
        let project = self.project_repository.get_project(project_id).await?;

        if !access::can_delete(Some(actor), &project) {
            return Err(DeleteProjectError::NotProjectOwner);
        }

        self.project_repository
            .delete_project(project_id, actor)
            .await
    }

    async fn join_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
    ) -> Result<ProjectMember, JoinProjectError> {
        let ProjectWithRoster { project, members } = self
            .project_repository
            .get_project_with_roster(project_id)
            .await?;

        if access::is_owner(Some(actor), &project) {
            return Err(JoinProjectError::OwnerCannotJoin);
        }

        // Already on the roster: joining again is a no-op success, mirroring
        // the duplicate-insert downgrade in the repository.
        if let Some(existing) = members.iter().find(|m| m.user_id == *actor) {
            return Ok(existing.clone());
        }

        if !access::can_join(Some(actor), &project, &members) {
            return Err(JoinProjectError::ProjectNotOpen);
        }

        self.project_repository
            .join_project(project_id, actor)
            .await
    }

    async fn leave_project(
        &self,
        actor: &Uuid,
        project_id: &Uuid,
    ) -> Result<(), LeaveProjectError> {
        let ProjectWithRoster { project, members } = self
            .project_repository
            .get_project_with_roster(project_id)
            .await?;

        if access::is_owner(Some(actor), &project) {
            return Err(LeaveProjectError::OwnerCannotLeave);
        }

        if !access::can_leave(Some(actor), &project, &members) {
            return Err(LeaveProjectError::NotAMember);
        }

        self.project_repository
            .leave_project(project_id, actor)
            .await
    }

    async fn list_feed(
        &self,
        actor: Option<&Uuid>,
        filter: FeedFilter,
    ) -> Result<Vec<Project>, ProjectError> {
        let projects = self.project_repository.list_projects().await?;

        let projects = match filter {
            FeedFilter::All => projects,
            FeedFilter::Open => projects
                .into_iter()
                .filter(|p| p.status == ProjectStatus::Open)
                .collect(),
            FeedFilter::Mine => match actor {
                Some(actor) => projects
                    .into_iter()
                    .filter(|p| p.owner_id == *actor)
                    .collect(),
                // "mine" means nothing for an anonymous visitor
                None => Vec::new(),
            },
        };

        Ok(projects)
    }

    async fn list_owned_and_joined(&self, actor: &Uuid) -> Result<OwnedAndJoined, ProjectError> {
        let owned = self.project_repository.list_projects_owned_by(actor).await?;
        let joined = self
            .project_repository
            .list_projects_joined_by(actor)
            .await?;

        // The owner's self-membership makes every owned project show up in
        // joined as well; dedup by project id.
        let owned_ids: HashSet<Uuid> = owned.iter().map(|p| p.id).collect();
        let joined = joined
            .into_iter()
            .filter(|p| !owned_ids.contains(&p.id))
            .collect();

        Ok(OwnedAndJoined { owned, joined })
    }

    async fn get_project_with_roster(
        &self,
        project_id: &Uuid,
    ) -> Result<ProjectWithRoster, ProjectError> {
        self.project_repository
            .get_project_with_roster(project_id)
            .await
    }
}
