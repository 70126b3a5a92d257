use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crewup_auth::session::SessionContext;
use projects::{FeedFilter, Project, ProjectService};
use serde::Deserialize;

use crate::{api::context::ApiContext, model::response::ErrorResponse};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct FeedQueryParams {
    /// Defaults to `open` when absent
    pub filter: Option<FeedFilter>,
}

/// Returns the project feed, newest first. Anonymous visitors see the feed
/// too; the `mine` filter just comes back empty for them.
#[utoipa::path(
    get,
    path = "/projects",
    params(FeedQueryParams),
    responses(
        (status = 200, body = Vec<Project>),
        (status = 401, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx, session), fields(filter=?params.filter))]
pub async fn get_feed_handler(
    State(ctx): State<ApiContext>,
    session: Option<SessionContext>,
    Query(params): Query<FeedQueryParams>,
) -> Result<Response, Response> {
    let actor = session.map(|s| s.user_id);

    let feed = ctx
        .project_service
        .list_feed(actor.as_ref(), params.filter.unwrap_or(FeedFilter::Open))
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to list project feed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "unable to list projects".to_string(),
                }),
            )
                .into_response()
        })?;

    Ok((StatusCode::OK, Json(feed)).into_response())
}
