use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Capacity applied when a season's capacity field is committed while < 1.
pub const DEFAULT_CAPACITY: i32 = 10;

/// A recurring weekly time window inside a season.
///
/// `days_of_week` uses 0 = Sunday .. 6 = Saturday. `None` means the slot is
/// not limited to specific weekdays and recurs every day of the season.
/// `capacity: None` falls back to the owning season's capacity.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_hour: i32,
    pub start_minute: i32,
    pub end_hour: i32,
    pub end_minute: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<i32>>,
}

impl TimeSlot {
    /// The slot a user gets when clicking "add slot": 09:00-17:00, Mon-Fri.
    pub fn weekday_default() -> Self {
        Self {
            start_hour: 9,
            start_minute: 0,
            end_hour: 17,
            end_minute: 0,
            capacity: None,
            days_of_week: Some(vec![1, 2, 3, 4, 5]),
        }
    }

    pub fn start_minutes(&self) -> i32 {
        self.start_hour * 60 + self.start_minute
    }

    pub fn end_minutes(&self) -> i32 {
        self.end_hour * 60 + self.end_minute
    }
}

/// One season ("Temporada") in the operator's availability form: a date
/// range with per-season pricing and a list of recurring slots.
///
/// This is transient form state. Dates stay strings because the form
/// tolerates half-typed input; prices are whole currency units and only
/// become cents when the payload is built. The id is minted locally and
/// never survives submission.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AvailabilityBlock {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
    pub default_capacity: i32,
    pub price_per_adult: i64,
    pub price_per_child: i64,
    pub commission_per_adult: i64,
    pub commission_per_child: i64,
    pub slots: Vec<TimeSlot>,
}

impl AvailabilityBlock {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_date: String::new(),
            end_date: String::new(),
            default_capacity: DEFAULT_CAPACITY,
            price_per_adult: 0,
            price_per_child: 0,
            commission_per_adult: 0,
            commission_per_child: 0,
            slots: Vec::new(),
        }
    }
}

impl Default for AvailabilityBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// A persisted season row. Prices are minor units; the slot list is kept as
/// JSON text in `slots_json`.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct AvailabilitySeason {
    pub id: String,
    pub experience_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub price_per_adult_cents: i64,
    pub price_per_child_cents: i64,
    pub commission_per_adult_cents: i64,
    pub commission_per_child_cents: i64,
    pub slots_json: String,
    pub created_at: DateTime<Utc>,
}

impl AvailabilitySeason {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        experience_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        capacity: i32,
        price_per_adult_cents: i64,
        price_per_child_cents: i64,
        commission_per_adult_cents: i64,
        commission_per_child_cents: i64,
        slots_json: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            experience_id,
            start_date,
            end_date,
            capacity,
            price_per_adult_cents,
            price_per_child_cents,
            commission_per_adult_cents,
            commission_per_child_cents,
            slots_json,
            created_at: Utc::now(),
        }
    }

    pub fn slots(&self) -> Vec<TimeSlot> {
        serde_json::from_str(&self.slots_json).unwrap_or_default()
    }
}
