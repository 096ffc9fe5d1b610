use crate::domain::{models::availability::AvailabilitySeason, ports::AvailabilityRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresAvailabilityRepo {
    pool: PgPool,
}

impl PostgresAvailabilityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepo {
    async fn create_season(&self, season: &AvailabilitySeason) -> Result<AvailabilitySeason, AppError> {
        sqlx::query_as::<_, AvailabilitySeason>(
            r#"INSERT INTO availability_seasons (
                id, experience_id, start_date, end_date, capacity,
                price_per_adult_cents, price_per_child_cents,
                commission_per_adult_cents, commission_per_child_cents,
                slots_json, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *"#
        )
            .bind(&season.id)
            .bind(&season.experience_id)
            .bind(season.start_date)
            .bind(season.end_date)
            .bind(season.capacity)
            .bind(season.price_per_adult_cents)
            .bind(season.price_per_child_cents)
            .bind(season.commission_per_adult_cents)
            .bind(season.commission_per_child_cents)
            .bind(&season.slots_json)
            .bind(season.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_season(&self, id: &str) -> Result<Option<AvailabilitySeason>, AppError> {
        sqlx::query_as::<_, AvailabilitySeason>(
            "SELECT * FROM availability_seasons WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_experience(&self, experience_id: &str) -> Result<Vec<AvailabilitySeason>, AppError> {
        sqlx::query_as::<_, AvailabilitySeason>(
            "SELECT * FROM availability_seasons WHERE experience_id = $1 ORDER BY start_date",
        )
            .bind(experience_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete_season(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM availability_seasons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Season not found".into()));
        }
        Ok(())
    }

    async fn delete_by_experience(&self, experience_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM availability_seasons WHERE experience_id = $1")
            .bind(experience_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
