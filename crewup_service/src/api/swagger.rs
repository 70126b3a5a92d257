use profiles::Profile;
use projects::{
    FeedFilter, MemberRole, OwnedAndJoined, Project, ProjectMember, ProjectStatus,
    ProjectWithRoster,
};
use utoipa::OpenApi;

use crate::api::health::HealthResponse;
use crate::model::{
    request::{
        create_project::CreateProjectRequest, update_profile::UpdateProfileRequest,
        update_project::UpdateProjectRequest,
    },
    response::{
        EmptyResponse, ErrorResponse,
        project_detail::{ProjectDetailResponse, RosterMember},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::health::health,
        crate::api::projects::get_feed::get_feed_handler,
        crate::api::projects::create_project::create_project_handler,
        crate::api::projects::my_projects::my_projects_handler,
        crate::api::projects::get_project::get_project_handler,
        crate::api::projects::patch_project::patch_project_handler,
        crate::api::projects::delete_project::delete_project_handler,
        crate::api::projects::join_project::join_project_handler,
        crate::api::projects::leave_project::leave_project_handler,
        crate::api::profile::get_profile::get_profile_handler,
        crate::api::profile::put_profile::put_profile_handler,
    ),
    components(
        schemas(
            HealthResponse,
            Project,
            ProjectMember,
            ProjectWithRoster,
            ProjectStatus,
            MemberRole,
            FeedFilter,
            OwnedAndJoined,
            Profile,
            CreateProjectRequest,
            UpdateProjectRequest,
            UpdateProfileRequest,
            ProjectDetailResponse,
            RosterMember,
            EmptyResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "projects", description = "Project feed, lifecycle and roster endpoints"),
        (name = "profile", description = "The caller's own profile")
    ),
    info(
        title = "CrewUp Service API",
        description = "API for discovering projects and managing their rosters",
        version = "0.1.0"
    )
)]
#[derive(Debug)]
pub struct ApiDoc;
