use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use crewup_auth::{
    error::CrewupAuthError,
    middleware::decode_jwt::{JwtValidationArgs, validate_access_token},
    session::SessionContext,
};

use crate::model::response::ErrorResponse;

/// Validates the bearer token when one is present and attaches the resulting
/// [SessionContext] to the request. Requests without an Authorization header
/// pass through anonymously; a token that is present but invalid is rejected
/// outright rather than silently downgraded to anonymous.
pub async fn handler(
    jwt_validation_args: State<JwtValidationArgs>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let access_token =
        match crewup_auth::headers::extract_access_token_from_request_headers(req.headers()) {
            Ok(access_token) => access_token,
            Err(CrewupAuthError::NoAccessTokenProvided) => {
                tracing::trace!("no access token provided, continuing anonymously");
                return Ok(next.run(req).await);
            }
            Err(e) => {
                tracing::trace!(error=?e, "malformed Authorization header");
                return Err((
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        message: "unauthorized".to_string(),
                    }),
                )
                    .into_response());
            }
        };

    let token =
        validate_access_token(&access_token, &jwt_validation_args).map_err(|e| match e {
            CrewupAuthError::JwtExpired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    message: "jwt expired".to_string(),
                }),
            )
                .into_response(),
            _ => {
                tracing::trace!(error=?e, "unable to validate access token");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse {
                        message: "unauthorized".to_string(),
                    }),
                )
                    .into_response()
            }
        })?;

    req.extensions_mut().insert(SessionContext::from(token));

    Ok(next.run(req).await)
}
