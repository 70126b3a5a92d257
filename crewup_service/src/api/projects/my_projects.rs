use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use projects::{OwnedAndJoined, ProjectService};

use crate::{api::context::ApiContext, model::response::ErrorResponse};

/// Returns the caller's projects: the ones they own and the ones they joined,
/// with joined deduplicated against owned.
#[utoipa::path(
    get,
    path = "/projects/mine",
    responses(
        (status = 200, body = OwnedAndJoined),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, session), fields(user_id=%session.user_id))]
pub async fn my_projects_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
) -> Result<Response, Response> {
    let mine = ctx
        .project_service
        .list_owned_and_joined(&session.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to list the caller's projects");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "unable to list projects".to_string(),
                }),
            )
                .into_response()
        })?;

    Ok((StatusCode::OK, Json(mine)).into_response())
}
