#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct CreateProjectRequest {
    pub title: String,
    pub short_pitch: Option<String>,
    pub description: Option<String>,
}
