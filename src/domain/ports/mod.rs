use crate::domain::models::{availability::AvailabilitySeason, experience::Experience};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, experience: &Experience) -> Result<Experience, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Experience>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Experience>, AppError>;
    async fn list(&self) -> Result<Vec<Experience>, AppError>;
    async fn update(&self, experience: &Experience) -> Result<Experience, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn create_season(&self, season: &AvailabilitySeason) -> Result<AvailabilitySeason, AppError>;
    async fn find_season(&self, id: &str) -> Result<Option<AvailabilitySeason>, AppError>;
    async fn list_by_experience(&self, experience_id: &str) -> Result<Vec<AvailabilitySeason>, AppError>;
    async fn delete_season(&self, id: &str) -> Result<(), AppError>;
    async fn delete_by_experience(&self, experience_id: &str) -> Result<(), AppError>;
}
