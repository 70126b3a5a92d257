use axum::{
    Json, extract,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use projects::{Project, ProjectError, ProjectService, UpdateProjectError};
use uuid::Uuid;

use crate::{
    api::context::ApiContext,
    model::{request::update_project::UpdateProjectRequest, response::ErrorResponse},
};

/// Applies a partial update to a project the caller owns.
#[utoipa::path(
    patch,
    path = "/projects/{project_id}",
    params(("project_id" = Uuid, Path, description = "The project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, body = Project),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, session, req), fields(user_id=%session.user_id, project_id=%project_id))]
pub async fn patch_project_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
    Path(project_id): Path<Uuid>,
    extract::Json(req): extract::Json<UpdateProjectRequest>,
) -> Result<Response, Response> {
    let updated = ctx
        .project_service
        .update_project(&session.user_id, &project_id, req.into())
        .await
        .map_err(|e| match e {
            UpdateProjectError::NotProjectOwner => (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            UpdateProjectError::InvalidTitle(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            UpdateProjectError::ProjectError(ProjectError::ProjectDoesNotExist) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            _ => {
                tracing::error!(error=?e, "unable to update project");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "unable to update project".to_string(),
                    }),
                )
                    .into_response()
            }
        })?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}
