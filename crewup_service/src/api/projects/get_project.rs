use std::collections::HashMap;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use profiles::ProfileRepository;
use projects::{ProjectError, ProjectService};
use uuid::Uuid;

use crate::{
    api::context::ApiContext,
    model::response::{
        ErrorResponse,
        project_detail::{ProjectDetailResponse, RosterMember},
    },
};

/// Returns a project and its roster, with each member's profile joined in.
/// The detail view is public.
#[utoipa::path(
    get,
    path = "/projects/{project_id}",
    params(("project_id" = Uuid, Path, description = "The project id")),
    responses(
        (status = 200, body = ProjectDetailResponse),
        (status = 404, body = ErrorResponse),
        (status = 500, body = ErrorResponse),
    ),
    tag = "projects"
)]
#[tracing::instrument(skip(ctx), fields(project_id=%project_id))]
pub async fn get_project_handler(
    State(ctx): State<ApiContext>,
    Path(project_id): Path<Uuid>,
) -> Result<Response, Response> {
    let with_roster = ctx
        .project_service
        .get_project_with_roster(&project_id)
        .await
        .map_err(|e| match e {
            ProjectError::ProjectDoesNotExist => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    message: e.to_string(),
                }),
            )
                .into_response(),
            ProjectError::StorageLayerError(_) => {
                tracing::error!(error=?e, "unable to get project");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        message: "unable to get project".to_string(),
                    }),
                )
                    .into_response()
            }
        })?;

    let member_ids: Vec<Uuid> = with_roster.members.iter().map(|m| m.user_id).collect();
    let mut member_profiles: HashMap<Uuid, profiles::Profile> = ctx
        .profile_repository
        .get_profiles(&member_ids)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to get member profiles");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: "unable to get project".to_string(),
                }),
            )
                .into_response()
        })?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    let members = with_roster
        .members
        .into_iter()
        .map(|membership| {
            let profile = member_profiles.remove(&membership.user_id);
            RosterMember {
                membership,
                profile,
            }
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(ProjectDetailResponse {
            project: with_roster.project,
            members,
        }),
    )
        .into_response())
}
