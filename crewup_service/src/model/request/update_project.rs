use projects::{ProjectPatch, ProjectStatus};

/// Fields left out of the request keep their current value.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub short_pitch: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl From<UpdateProjectRequest> for ProjectPatch {
    fn from(req: UpdateProjectRequest) -> Self {
        ProjectPatch {
            title: req.title,
            short_pitch: req.short_pitch,
            description: req.description,
            status: req.status,
        }
    }
}
