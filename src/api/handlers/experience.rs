use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateExperienceRequest, UpdateExperienceRequest};
use crate::domain::models::experience::Experience;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_experience(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateExperienceRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.slug.trim().is_empty() {
        return Err(AppError::Validation("Slug must not be empty".into()));
    }
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Title must not be empty".into()));
    }

    let experience = Experience::new(
        payload.slug,
        payload.title,
        payload.description,
        payload.location,
    );

    let created = state.experience_repo.create(&experience).await?;
    info!("Created experience: {}", created.slug);
    Ok(Json(created))
}

pub async fn list_experiences(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let experiences = state.experience_repo.list().await?;
    Ok(Json(experiences))
}

pub async fn get_experience(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_slug(&slug).await?
        .ok_or_else(|| AppError::NotFound(format!("Experience '{}' not found", slug)))?;
    Ok(Json(experience))
}

pub async fn update_experience(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateExperienceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut experience = state.experience_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    if let Some(val) = payload.slug {
        if val.trim().is_empty() {
            return Err(AppError::Validation("Slug must not be empty".into()));
        }
        experience.slug = val;
    }
    if let Some(val) = payload.title { experience.title = val; }
    if let Some(val) = payload.description { experience.description = val; }
    if let Some(val) = payload.location { experience.location = val; }

    let updated = state.experience_repo.update(&experience).await?;
    info!("Experience updated: {}", slug);
    Ok(Json(updated))
}

pub async fn delete_experience(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    state.availability_repo.delete_by_experience(&experience.id).await?;
    state.experience_repo.delete(&experience.id).await?;
    info!("Experience deleted: {}", slug);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
