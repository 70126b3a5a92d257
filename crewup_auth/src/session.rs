use axum::{
    Json,
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::error::GenericErrorResponse;

/// The identity of the current actor, decoded from a validated access token.
///
/// This is attached to requests as an axum extension by the service's session
/// middleware and threaded explicitly into the domain layer; nothing below the
/// API boundary reads ambient auth state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// The auth user id of the actor
    pub user_id: Uuid,
    /// The email the actor signed up with
    pub email: String,
}

/// Extracting a [SessionContext] directly rejects unauthenticated requests
/// with a 401, so handlers that require a session just take one as an
/// argument.
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<SessionContext>().cloned().ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(GenericErrorResponse {
                    message: "unauthorized".to_string(),
                }),
            )
                .into_response()
        })
    }
}

/// `Option<SessionContext>` never rejects; handlers open to anonymous
/// visitors use it to branch on whether a session is present.
impl<S> OptionalFromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<SessionContext>().cloned())
    }
}
