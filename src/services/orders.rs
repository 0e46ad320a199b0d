//! Purchase orders service

use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::purchase_order::{CreatePurchaseOrder, PurchaseOrder, UpdatePurchaseOrder},
    repository::{orders::NewOrder, Repository},
};

const DEFAULT_STATUS: &str = "Pending";

#[derive(Clone)]
pub struct OrdersService {
    repository: Repository,
}

impl OrdersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<PurchaseOrder>> {
        self.repository.orders.list().await
    }

    /// Create an order, filling in today's date, a zero cost and the
    /// pending status when they are not supplied
    pub async fn create(&self, data: &CreatePurchaseOrder) -> AppResult<i32> {
        data.check()?;

        let order = NewOrder {
            po_number: &data.po_number,
            supplier: &data.supplier,
            order_date: data.order_date.unwrap_or_else(|| Utc::now().date_naive()),
            items: &data.items,
            total_cost: data.total_cost.unwrap_or(Decimal::ZERO),
            status: data
                .status
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_STATUS),
        };

        let id = self.repository.orders.create(&order).await?;
        tracing::info!("Created purchase order {} ({})", id, data.po_number);
        Ok(id)
    }

    /// Apply a partial update; an empty payload is a bad request
    pub async fn update(&self, id: i32, data: &UpdatePurchaseOrder) -> AppResult<()> {
        data.check()?;
        self.repository.orders.update(id, data).await?;
        tracing::info!("Updated purchase order {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.orders.delete(id).await?;
        Ok(())
    }
}
