use std::sync::Arc;

use axum::extract::FromRef;
use crewup_auth::middleware::decode_jwt::JwtValidationArgs;
use profiles::ProfileRepositoryImpl;
use projects::{ProjectRepositoryImpl, ProjectServiceImpl};
use sqlx::PgPool;

use crate::config::Config;

/// The concrete project service wired into the API.
pub type ProjectsService = ProjectServiceImpl<ProjectRepositoryImpl>;

#[derive(Clone, FromRef)]
pub struct ApiContext {
    pub project_service: ProjectsService,
    pub profile_repository: ProfileRepositoryImpl,
    pub config: Arc<Config>,
    jwt_args: JwtValidationArgs,
}

impl ApiContext {
    pub fn init(db: PgPool, config: Config, jwt_args: JwtValidationArgs) -> Self {
        ApiContext {
            project_service: ProjectServiceImpl::new(ProjectRepositoryImpl::new(db.clone())),
            profile_repository: ProfileRepositoryImpl::new(db),
            config: Arc::new(config),
            jwt_args,
        }
    }
}
