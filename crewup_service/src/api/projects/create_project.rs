use axum::{
    Json, extract,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use projects::{CreateProjectError, ProjectService, ProjectWithRoster};

use crate::{
    api::context::ApiContext,
    model::{request::create_project::CreateProjectRequest, response::ErrorResponse},
};

/// Creates a project owned by the caller. The caller lands on the roster as
/// `owner` in the same stroke.
#[utoipa::path(
    post,
    path = "/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, body = ProjectWithRoster),
        (status = 400, body = ErrorResponse),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, session, req), fields(user_id=%session.user_id))]
pub async fn create_project_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
    extract::Json(req): extract::Json<CreateProjectRequest>,
) -> Result<Response, Response> {
    let created = ctx
        .project_service
        .create_project(
            &session.user_id,
            &req.title,
            req.short_pitch.as_deref(),
            req.description.as_deref(),
        )
        .await
        .map_err(|e| match e {
            CreateProjectError::InvalidTitle(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            CreateProjectError::StorageLayerError(_) => {
                tracing::error!(error=?e, "unable to create project");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "unable to create project".to_string(),
                    }),
                )
                    .into_response()
            }
        })?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}
