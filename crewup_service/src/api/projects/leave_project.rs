use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use projects::{LeaveProjectError, ProjectError, ProjectService};
use uuid::Uuid;

use crate::{
    api::context::ApiContext,
    model::response::{EmptyResponse, ErrorResponse},
};

/// Removes the caller from a project's roster. Owners cannot leave their own
/// project; deleting it is the only way out for them.
#[utoipa::path(
    delete,
    path = "/projects/{project_id}/members/me",
    params(("project_id" = Uuid, Path, description = "The project id")),
    responses(
        (status = 200, body = EmptyResponse),
        (status = 401, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 409, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, session), fields(user_id=%session.user_id, project_id=%project_id))]
pub async fn leave_project_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
    Path(project_id): Path<Uuid>,
) -> Result<Response, Response> {
    ctx.project_service
        .leave_project(&session.user_id, &project_id)
        .await
        .map_err(|e| match e {
            LeaveProjectError::OwnerCannotLeave | LeaveProjectError::NotAMember => (
                StatusCode::CONFLICT,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            LeaveProjectError::ProjectError(ProjectError::ProjectDoesNotExist) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            _ => {
                tracing::error!(error=?e, "unable to leave project");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "unable to leave project".to_string(),
                    }),
                )
                    .into_response()
            }
        })?;

    Ok((StatusCode::OK, Json(EmptyResponse::default())).into_response())
}
