use std::sync::Arc;
use crate::domain::ports::{AvailabilityRepository, ExperienceRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub experience_repo: Arc<dyn ExperienceRepository>,
    pub availability_repo: Arc<dyn AvailabilityRepository>,
}
