use axum::{
    Json, extract,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use profiles::{Profile, ProfileRepository};

use crate::{
    api::context::ApiContext,
    model::{request::update_profile::UpdateProfileRequest, response::ErrorResponse},
};

/// Overwrites the caller's own profile fields. Users can only ever touch
/// their own row; the id comes from the session, never from the request.
#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, body = Profile),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "profile"
)]
#[tracing::instrument(skip(ctx, session, req), fields(user_id=%session.user_id))]
pub async fn put_profile_handler(
    State(ctx): State<ApiContext>,
    session: SessionContext,
    extract::Json(req): extract::Json<UpdateProfileRequest>,
) -> Result<Response, Response> {
    let profile = ctx
        .profile_repository
        .upsert_profile(&session.user_id, req.into())
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to update profile");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "unable to update profile".to_string(),
                }),
            )
                .into_response()
        })?;

    Ok((StatusCode::OK, Json(profile)).into_response())
}
