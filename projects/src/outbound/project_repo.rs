//! Implementation for ProjectRepository backed by Postgres.


use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{
    model::{
        CreateProjectError, DeleteProjectError, JoinProjectError, LeaveProjectError, Project,
        ProjectError, ProjectMember, ProjectPatch, ProjectWithRoster, UpdateProjectError,
    },
    project_repo::ProjectRepository,
};

const SELECT_PROJECT: &str =
    "SELECT id, owner_id, title, short_pitch, description, status, created_at FROM projects";

const SELECT_MEMBER: &str =
    "SELECT id, project_id, user_id, role, created_at FROM project_members";

/// The ProjectRepositoryImpl struct is a wrapper around a sqlx::PgPool connected
/// to the CrewUp database.
#[derive(Clone)]
pub struct ProjectRepositoryImpl {
    /// The underlying sqlx::PgPool
    pool: PgPool,
}

impl ProjectRepositoryImpl {
    /// Creates a new instance of ProjectRepositoryImpl
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProjectRepositoryImpl {
    /// Gets the owner of a project
    async fn get_project_owner(&self, project_id: &Uuid) -> Result<Uuid, ProjectError> {
        let owner_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT owner_id
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(project_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(owner_id)
    }

    async fn create_project_inner(
        &self,
        owner_id: &Uuid,
        title: &str,
        short_pitch: Option<&str>,
        description: Option<&str>,
    ) -> Result<ProjectWithRoster, sqlx::Error> {
        let mut transaction = self.pool.begin().await?;

        let project_id = Uuid::now_v7();

        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (id, owner_id, title, short_pitch, description, status)
            VALUES ($1, $2, $3, $4, $5, 'open')
            RETURNING id, owner_id, title, short_pitch, description, status, created_at
            "#,
        )
        .bind(project_id)
        .bind(owner_id)
        .bind(title)
        .bind(short_pitch)
        .bind(description)
        .fetch_one(&mut *transaction)
        .await?;

        // The owner membership is part of the same transaction, so a project
        // can never exist without its owner on the roster.
        let owner_membership = sqlx::query_as::<_, ProjectMember>(
            r#"
            INSERT INTO project_members (id, project_id, user_id, role)
            VALUES ($1, $2, $3, 'owner')
            RETURNING id, project_id, user_id, role, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(project.id)
        .bind(owner_id)
        .fetch_one(&mut *transaction)
        .await?;

        transaction.commit().await?;

        Ok(ProjectWithRoster {
            project,
            members: vec![owner_membership],
        })
    }
}

impl From<sqlx::Error> for ProjectError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => Self::ProjectDoesNotExist,
            _ => Self::StorageLayerError(e.into()),
        }
    }
}

impl From<sqlx::Error> for CreateProjectError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl From<sqlx::Error> for UpdateProjectError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl From<sqlx::Error> for DeleteProjectError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl From<sqlx::Error> for LeaveProjectError {
    fn from(e: sqlx::Error) -> Self {
        Self::StorageLayerError(e.into())
    }
}

impl ProjectRepository for ProjectRepositoryImpl {
    async fn create_project(
        &self,
        owner_id: &Uuid,
        title: &str,
        short_pitch: Option<&str>,
        description: Option<&str>,
    ) -> Result<ProjectWithRoster, CreateProjectError> {
        self.create_project_inner(owner_id, title, short_pitch, description)
            .await
            .map_err(|e| e.into())
    }

    async fn get_project(&self, project_id: &Uuid) -> Result<Project, ProjectError> {
        let project = sqlx::query_as::<_, Project>(&format!("{SELECT_PROJECT} WHERE id = $1"))
            .bind(project_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(project)
    }

    async fn get_project_with_roster(
        &self,
        project_id: &Uuid,
    ) -> Result<ProjectWithRoster, ProjectError> {
        let project = self.get_project(project_id).await?;
        let members = self.get_roster(project_id).await?;

        Ok(ProjectWithRoster { project, members })
    }

    async fn get_roster(&self, project_id: &Uuid) -> Result<Vec<ProjectMember>, ProjectError> {
        let members = sqlx::query_as::<_, ProjectMember>(&format!(
            "{SELECT_MEMBER} WHERE project_id = $1 ORDER BY created_at ASC"
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn update_project(
        &self,
        project_id: &Uuid,
        owner_id: &Uuid,
        patch: ProjectPatch,
    ) -> Result<Project, UpdateProjectError> {
        // owner_id is part of the WHERE clause so the store itself rejects a
        // non-owner update, independent of the caller's predicate check.
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET title = COALESCE($3, title),
                short_pitch = COALESCE($4, short_pitch),
                description = COALESCE($5, description),
                status = COALESCE($6, status)
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, title, short_pitch, description, status, created_at
            "#,
        )
        .bind(project_id)
        .bind(owner_id)
        .bind(patch.title)
        .bind(patch.short_pitch)
        .bind(patch.description)
        .bind(patch.status)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(project) => Ok(project),
            // Zero rows: either the project is gone or the actor does not own
            // it; look again to tell the two apart.
            None => match self.get_project(project_id).await {
                Ok(_) => Err(UpdateProjectError::NotProjectOwner),
                Err(e) => Err(e.into()),
            },
        }
    }

    async fn delete_project(
        &self,
        project_id: &Uuid,
        owner_id: &Uuid,
    ) -> Result<(), DeleteProjectError> {
        let deleted = sqlx::query(
            r#"
            DELETE FROM projects
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(project_id)
        .bind(owner_id)
        .execute(&self.pool)
        .await?;

        if deleted.rows_affected() == 0 {
            return match self.get_project(project_id).await {
                Ok(_) => Err(DeleteProjectError::NotProjectOwner),
                Err(e) => Err(e.into()),
            };
        }

        Ok(())
    }

    async fn join_project(
        &self,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<ProjectMember, JoinProjectError> {
        // The insert only fires when the target project is still open, so a
        // stale client cannot join a project that closed under it.
        let inserted = sqlx::query_as::<_, ProjectMember>(
            r#"
            INSERT INTO project_members (id, project_id, user_id, role)
            SELECT $1, p.id, $2, 'member'
            FROM projects p
            WHERE p.id = $3 AND p.status = 'open'
            RETURNING id, project_id, user_id, role, created_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(user_id)
        .bind(project_id)
        .fetch_optional(&self.pool)
        .await;

        let inserted = match inserted {
            Ok(row) => row,
            // A concurrent join beat us to the unique (project_id, user_id)
            // slot. The end state is what the caller cares about, so return
            // the row that won.
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                let existing = sqlx::query_as::<_, ProjectMember>(&format!(
                    "{SELECT_MEMBER} WHERE project_id = $1 AND user_id = $2"
                ))
                .bind(project_id)
                .bind(user_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| JoinProjectError::StorageLayerError(e.into()))?;

                return Ok(existing);
            }
            Err(e) => return Err(JoinProjectError::StorageLayerError(e.into())),
        };

        match inserted {
            Some(membership) => Ok(membership),
            None => {
                // Guard clause filtered the insert: missing project or not open
                match self.get_project(project_id).await {
                    Ok(_) => Err(JoinProjectError::ProjectNotOpen),
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    async fn leave_project(
        &self,
        project_id: &Uuid,
        user_id: &Uuid,
    ) -> Result<(), LeaveProjectError> {
        let owner_id = self
            .get_project_owner(project_id)
            .await
            .map_err(LeaveProjectError::ProjectError)?;

        if owner_id == *user_id {
            return Err(LeaveProjectError::OwnerCannotLeave);
        }

        let removed = sqlx::query(
            r#"
            DELETE FROM project_members
            WHERE project_id = $1 AND user_id = $2
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if removed.rows_affected() == 0 {
            return Err(LeaveProjectError::NotAMember);
        }

        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ProjectError> {
        let projects =
            sqlx::query_as::<_, Project>(&format!("{SELECT_PROJECT} ORDER BY created_at DESC"))
                .fetch_all(&self.pool)
                .await?;

        Ok(projects)
    }

    async fn list_projects_owned_by(&self, user_id: &Uuid) -> Result<Vec<Project>, ProjectError> {
        let projects = sqlx::query_as::<_, Project>(&format!(
            "{SELECT_PROJECT} WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn list_projects_joined_by(&self, user_id: &Uuid) -> Result<Vec<Project>, ProjectError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT p.id, p.owner_id, p.title, p.short_pitch, p.description, p.status, p.created_at
            FROM projects p
            JOIN project_members pm ON pm.project_id = p.id
            WHERE pm.user_id = $1
            ORDER BY p.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }
}
