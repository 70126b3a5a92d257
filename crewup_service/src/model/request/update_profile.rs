use profiles::ProfilePatch;

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub headline: Option<String>,
    pub skills: Option<String>,
    pub bio: Option<String>,
}

impl From<UpdateProfileRequest> for ProfilePatch {
    fn from(req: UpdateProfileRequest) -> Self {
        ProfilePatch {
            display_name: req.display_name,
            headline: req.headline,
            skills: req.skills,
            bio: req.bio,
        }
    }
}
