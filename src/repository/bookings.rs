//! Bookings repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List bookings, latest date first
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, type, resource_name, researcher_name, booking_date
            FROM bookings
            ORDER BY booking_date DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a booking and return its id
    pub async fn create(&self, data: &CreateBooking) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO bookings (type, resource_name, researcher_name, booking_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.booking_type)
        .bind(&data.resource_name)
        .bind(&data.researcher_name)
        .bind(data.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
