use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use profiles::{Profile, ProfileRepository};

use crate::{api::context::ApiContext, model::response::ErrorResponse};

/// Returns the caller's profile, creating it on first visit with the display
/// name defaulted from the email's local part.
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, body = Profile),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "profile"
)]
#[tracing::instrument(skip(ctx, session), fields(user_id=%session.user_id))]
pub async fn get_profile_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
) -> Result<Response, Response> {
    let profile = ctx
        .profile_repository
        .ensure_profile(&session.user_id, &session.email)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to get profile");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "unable to get profile".to_string(),
                }),
            )
                .into_response()
        })?;

    Ok((StatusCode::OK, Json(profile)).into_response())
}
