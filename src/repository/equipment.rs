//! Equipment repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{Equipment, SaveEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all equipment with location name, newest first
    pub async fn list(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            r#"
            SELECT e.*, l.name AS location_name
            FROM equipments e
            LEFT JOIN locations l ON e.location_id = l.id
            ORDER BY e.created_at DESC, e.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }

    /// Create equipment
    pub async fn create(&self, data: &SaveEquipment) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO equipments (name, model_number, serial_number, manufacturer,
                                    quantity, location_id, purchase_date,
                                    last_maintenance_date, next_maintenance_date,
                                    status, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.model_number)
        .bind(&data.serial_number)
        .bind(&data.manufacturer)
        .bind(data.quantity)
        .bind(data.location_id)
        .bind(data.purchase_date)
        .bind(data.last_maintenance_date)
        .bind(data.next_maintenance_date)
        .bind(&data.status)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(super::location_write_error)?;
        Ok(id)
    }

    /// Update equipment
    pub async fn update(&self, id: i32, data: &SaveEquipment) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE equipments
            SET name = $1, model_number = $2, serial_number = $3, manufacturer = $4,
                quantity = $5, location_id = $6, purchase_date = $7,
                last_maintenance_date = $8, next_maintenance_date = $9,
                status = $10, description = $11
            WHERE id = $12
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.model_number)
        .bind(&data.serial_number)
        .bind(&data.manufacturer)
        .bind(data.quantity)
        .bind(data.location_id)
        .bind(data.purchase_date)
        .bind(data.last_maintenance_date)
        .bind(data.next_maintenance_date)
        .bind(&data.status)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(super::location_write_error)?
        .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }

    /// Delete equipment
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM equipments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
