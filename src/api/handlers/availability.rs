use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::{BlockErrors, BulkAvailabilityResponse, SlotsResponse};
use crate::domain::models::availability::AvailabilitySeason;
use crate::domain::services::payload::{BulkAvailabilityPayload, SeasonPayload};
use crate::domain::services::schedule::{available_dates, slots_for_date};
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use chrono::NaiveDate;
use tracing::info;

pub async fn bulk_create_availability(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BulkAvailabilityPayload>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_id(&payload.experience_id).await?
        .ok_or_else(|| AppError::NotFound(format!("Experience '{}' not found", payload.experience_id)))?;

    let blocks_processed = payload.blocks.len();
    let mut total_created = 0;
    let mut total_skipped = 0;
    let mut errors = Vec::new();

    for (index, block) in payload.blocks.iter().enumerate() {
        match validate_block(block) {
            Ok((start_date, end_date)) => {
                let slots_json = serde_json::to_string(&block.slots)
                    .map_err(|_| AppError::Internal)?;

                let season = AvailabilitySeason::new(
                    experience.id.clone(),
                    start_date,
                    end_date,
                    block.capacity,
                    block.price_per_adult_cents,
                    block.price_per_child_cents,
                    block.commission_per_adult_cents,
                    block.commission_per_child_cents,
                    slots_json,
                );

                state.availability_repo.create_season(&season).await?;
                total_created += 1;
            }
            Err(messages) => {
                total_skipped += 1;
                errors.push(BlockErrors { index, messages });
            }
        }
    }

    info!(
        "Bulk availability for {}: {} created, {} skipped",
        experience.slug, total_created, total_skipped
    );

    Ok(Json(BulkAvailabilityResponse {
        blocks_processed,
        total_created,
        total_skipped,
        errors,
    }))
}

pub async fn list_seasons(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let seasons = state.availability_repo.list_by_experience(&experience.id).await?;
    Ok(Json(seasons))
}

pub async fn delete_season(
    State(state): State<Arc<AppState>>,
    Path((slug, season_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let season = state.availability_repo.find_season(&season_id).await?
        .ok_or(AppError::NotFound("Season not found".into()))?;

    if season.experience_id != experience.id {
        return Err(AppError::NotFound("Season not found for this experience".into()));
    }

    state.availability_repo.delete_season(&season_id).await?;
    info!("Deleted season {} of experience {}", season_id, slug);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let date_str = params.get("date").ok_or(AppError::Validation("date required".into()))?;
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let seasons = state.availability_repo.list_by_experience(&experience.id).await?;
    let slots = slots_for_date(&seasons, date);

    Ok(Json(SlotsResponse {
        date: date_str.to_string(),
        slots,
    }))
}

pub async fn get_available_dates(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let experience = state.experience_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Experience not found".into()))?;

    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid end".into()))?;

    if end < start {
        return Err(AppError::Validation("end must not be before start".into()));
    }

    let seasons = state.availability_repo.list_by_experience(&experience.id).await?;
    let dates: Vec<String> = available_dates(&seasons, start, end)
        .into_iter()
        .map(|d| d.to_string())
        .collect();

    Ok(Json(dates))
}

/// Validates one submitted season. All problems are collected so the
/// response can report the full list for the block; any problem skips the
/// block without touching the rest of the batch.
fn validate_block(block: &SeasonPayload) -> Result<(NaiveDate, NaiveDate), Vec<String>> {
    let mut messages = Vec::new();

    let start = NaiveDate::parse_from_str(&block.start_date, "%Y-%m-%d");
    if start.is_err() {
        messages.push(format!("Invalid start_date '{}'", block.start_date));
    }
    let end = NaiveDate::parse_from_str(&block.end_date, "%Y-%m-%d");
    if end.is_err() {
        messages.push(format!("Invalid end_date '{}'", block.end_date));
    }
    if let (Ok(s), Ok(e)) = (&start, &end) {
        if s > e {
            messages.push("start_date must not be after end_date".into());
        }
    }

    if block.capacity < 1 {
        messages.push("Capacity must be at least 1".into());
    }

    for (name, cents) in [
        ("price_per_adult_cents", block.price_per_adult_cents),
        ("price_per_child_cents", block.price_per_child_cents),
        ("commission_per_adult_cents", block.commission_per_adult_cents),
        ("commission_per_child_cents", block.commission_per_child_cents),
    ] {
        if cents < 0 {
            messages.push(format!("{} must not be negative", name));
        }
    }

    if block.slots.is_empty() {
        messages.push("At least one slot is required".into());
    }

    for (i, slot) in block.slots.iter().enumerate() {
        if !(0..=23).contains(&slot.start_hour) || !(0..=23).contains(&slot.end_hour) {
            messages.push(format!("Slot {}: hour out of range 0-23", i));
        }
        if !(0..=59).contains(&slot.start_minute) || !(0..=59).contains(&slot.end_minute) {
            messages.push(format!("Slot {}: minute out of range 0-59", i));
        }
        if slot.start_minutes() >= slot.end_minutes() {
            messages.push(format!("Slot {}: start time must be before end time", i));
        }
        if let Some(capacity) = slot.capacity {
            if capacity < 1 {
                messages.push(format!("Slot {}: capacity must be at least 1", i));
            }
        }
        if let Some(days) = &slot.days_of_week {
            if days.iter().any(|d| !(0..=6).contains(d)) {
                messages.push(format!("Slot {}: weekday out of range 0-6", i));
            }
        }
    }

    match (start, end) {
        (Ok(s), Ok(e)) if messages.is_empty() => Ok((s, e)),
        _ => Err(messages),
    }
}
