use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use projects::{DeleteProjectError, ProjectError, ProjectService};
use uuid::Uuid;

use crate::{
    api::context::ApiContext,
    model::response::{EmptyResponse, ErrorResponse},
};

/// Deletes a project the caller owns. Membership rows go with it.
#[utoipa::path(
    delete,
    path = "/projects/{project_id}",
    params(("project_id" = Uuid, Path, description = "The project id")),
    responses(
        (status = 200, body = EmptyResponse),
        (status = 401, body = ErrorResponse),
        (status = 403, body = ErrorResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, session), fields(user_id=%session.user_id, project_id=%project_id))]
pub async fn delete_project_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
    Path(project_id): Path<Uuid>,
) -> Result<Response, Response> {
    ctx.project_service
        .delete_project(&session.user_id, &project_id)
        .await
        .map_err(|e| match e {
            DeleteProjectError::NotProjectOwner => (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            DeleteProjectError::ProjectError(ProjectError::ProjectDoesNotExist) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            _ => {
                tracing::error!(error=?e, "unable to delete project");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "unable to delete project".to_string(),
                    }),
                )
                    .into_response()
            }
        })?;

    Ok((StatusCode::OK, Json(EmptyResponse::default())).into_response())
}
