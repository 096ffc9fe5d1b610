use serde::Serialize;
use crate::domain::services::schedule::DaySlot;

#[derive(Serialize)]
pub struct BlockErrors {
    pub index: usize,
    pub messages: Vec<String>,
}

#[derive(Serialize)]
pub struct BulkAvailabilityResponse {
    pub blocks_processed: usize,
    pub total_created: usize,
    pub total_skipped: usize,
    pub errors: Vec<BlockErrors>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<DaySlot>,
}
