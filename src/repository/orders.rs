//! Purchase orders repository

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::purchase_order::{PurchaseOrder, UpdatePurchaseOrder},
};

/// Fully resolved values for a new order
#[derive(Debug)]
pub struct NewOrder<'a> {
    pub po_number: &'a str,
    pub supplier: &'a str,
    pub order_date: NaiveDate,
    pub items: &'a str,
    pub total_cost: Decimal,
    pub status: &'a str,
}

/// Columns touched by a partial update, in bind order
pub(crate) fn updated_columns(data: &UpdatePurchaseOrder) -> Vec<&'static str> {
    let mut columns = Vec::new();

    macro_rules! add_field {
        ($field:expr, $name:expr) => {
            if $field.is_some() {
                columns.push($name);
            }
        };
    }

    add_field!(data.po_number, "po_number");
    add_field!(data.supplier, "supplier");
    add_field!(data.order_date, "order_date");
    add_field!(data.items, "items");
    add_field!(data.total_cost, "total_cost");
    add_field!(data.status, "status");

    columns
}

#[derive(Clone)]
pub struct OrdersRepository {
    pool: Pool<Postgres>,
}

impl OrdersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List orders, latest order date first
    pub async fn list(&self) -> AppResult<Vec<PurchaseOrder>> {
        let rows = sqlx::query_as::<_, PurchaseOrder>(
            "SELECT * FROM purchase_orders ORDER BY order_date DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert an order and return its id
    pub async fn create(&self, order: &NewOrder<'_>) -> AppResult<i32> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO purchase_orders (po_number, supplier, order_date, items, total_cost, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(order.po_number)
        .bind(order.supplier)
        .bind(order.order_date)
        .bind(order.items)
        .bind(order.total_cost)
        .bind(order.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Rewrite only the supplied columns of an order
    pub async fn update(&self, id: i32, data: &UpdatePurchaseOrder) -> AppResult<()> {
        let columns = updated_columns(data);
        if columns.is_empty() {
            return Err(AppError::BadRequest("No fields to update".to_string()));
        }

        let sets: Vec<String> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect();

        let query = format!(
            "UPDATE purchase_orders SET {} WHERE id = ${} RETURNING id",
            sets.join(", "),
            columns.len() + 1
        );

        let mut builder = sqlx::query_scalar::<_, i32>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.po_number);
        bind_field!(data.supplier);
        bind_field!(data.order_date);
        bind_field!(data.items);
        bind_field!(data.total_cost);
        bind_field!(data.status);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM purchase_orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
