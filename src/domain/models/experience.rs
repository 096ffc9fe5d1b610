use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Experience {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl Experience {
    pub fn new(slug: String, title: String, description: String, location: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            slug,
            title,
            description,
            location,
            created_at: Utc::now(),
        }
    }
}
