use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use projects::{JoinProjectError, ProjectError, ProjectMember, ProjectService};
use uuid::Uuid;

use crate::{api::context::ApiContext, model::response::ErrorResponse};

/// Adds the caller to an open project's roster. Joining a project the caller
/// is already on succeeds and returns the existing membership row.
#[utoipa::path(
    post,
    path = "/projects/{project_id}/members",
    params(("project_id" = Uuid, Path, description = "The project id")),
    responses(
        (status = 200, body = ProjectMember),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, session), fields(user_id=%session.user_id, project_id=%project_id))]
pub async fn join_project_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
    Path(project_id): Path<Uuid>,
) -> Result<Response, Response> {
    let membership = ctx
        .project_service
        .join_project(&session.user_id, &project_id)
        .await
        .map_err(|e| match e {
            JoinProjectError::ProjectNotOpen | JoinProjectError::OwnerCannotJoin => (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            JoinProjectError::ProjectError(ProjectError::ProjectDoesNotExist) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            _ => {
                tracing::error!(error=?e, "unable to join project");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "unable to join project".to_string(),
                    }),
                )
                    .into_response()
            }
        })?;

    Ok((StatusCode::OK, Json(membership)).into_response())
}
