//! Chemicals repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::chemical::{Chemical, ChemicalSummary, SaveChemical, StoredChemical},
};

#[derive(Clone)]
pub struct ChemicalsRepository {
    pool: Pool<Postgres>,
}

impl ChemicalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all chemicals with their location name, newest first
    pub async fn list(&self) -> AppResult<Vec<Chemical>> {
        let rows = sqlx::query_as::<_, Chemical>(
            r#"
            SELECT c.*, l.name AS location_name
            FROM chemicals c
            LEFT JOIN locations l ON c.location_id = l.id
            ORDER BY c.created_at DESC, c.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get chemical by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Chemical> {
        sqlx::query_as::<_, Chemical>("SELECT * FROM chemicals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Chemical not found".to_string()))
    }

    /// Insert a chemical and return its id
    pub async fn create(&self, data: &SaveChemical) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO chemicals (name, cas_number, quantity, unit, location_id, expiry_date, safety_notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.cas_number)
        .bind(data.quantity)
        .bind(&data.unit)
        .bind(data.location_id)
        .bind(data.expiry_date)
        .bind(&data.safety_notes)
        .fetch_one(&self.pool)
        .await
        .map_err(super::location_write_error)?;
        Ok(id)
    }

    /// Rewrite every editable column of an existing chemical
    pub async fn update(&self, id: i32, data: &SaveChemical) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE chemicals
            SET name = $1, cas_number = $2, quantity = $3, unit = $4,
                location_id = $5, expiry_date = $6, safety_notes = $7
            WHERE id = $8
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.cas_number)
        .bind(data.quantity)
        .bind(&data.unit)
        .bind(data.location_id)
        .bind(data.expiry_date)
        .bind(&data.safety_notes)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(super::location_write_error)?
        .ok_or_else(|| AppError::NotFound("Chemical not found".to_string()))
    }

    /// Delete chemical; a missing row is not an error
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM chemicals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Chemicals that have a storage location, grouped-ready (ordered by location)
    pub async fn list_stored(&self) -> AppResult<Vec<StoredChemical>> {
        let rows = sqlx::query_as::<_, StoredChemical>(
            r#"
            SELECT c.name AS chemical, l.name AS location
            FROM chemicals c
            JOIN locations l ON c.location_id = l.id
            ORDER BY l.name, c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Compact listing used as semantic search context
    pub async fn list_summaries(&self) -> AppResult<Vec<ChemicalSummary>> {
        let rows = sqlx::query_as::<_, ChemicalSummary>(
            "SELECT id, name, cas_number, safety_notes FROM chemicals ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
