use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateExperienceRequest {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub location: String,
}

#[derive(Deserialize)]
pub struct UpdateExperienceRequest {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
}
