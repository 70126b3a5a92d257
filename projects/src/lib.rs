#![deny(missing_docs)]
//! This crate contains the domain for discovering projects and managing their
//! membership rosters: who owns a project, who may join or leave it, and the
//! lifecycle of the project itself.

/// The domain module contains the domain logic for projects
pub mod domain;

/// The outbound module contains the outbound logic for projects
pub mod outbound;

pub use domain::access;
pub use domain::model::{
    CreateProjectError, DeleteProjectError, FeedFilter, JoinProjectError, LeaveProjectError,
    MemberRole, OwnedAndJoined, Project, ProjectError, ProjectMember, ProjectPatch, ProjectStatus,
    ProjectWithRoster, UpdateProjectError,
};
pub use domain::project_repo::{ProjectRepository, ProjectService};
pub use domain::project_service::ProjectServiceImpl;
pub use outbound::project_repo::ProjectRepositoryImpl;
