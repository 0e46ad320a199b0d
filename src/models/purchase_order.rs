//! Purchase order model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Purchase order record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PurchaseOrder {
    pub id: i32,
    pub po_number: String,
    pub supplier: String,
    pub order_date: NaiveDate,
    /// Free-text description of the ordered items
    pub items: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_cost: Decimal,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

fn check_cost(total_cost: Option<Decimal>) -> AppResult<()> {
    match total_cost {
        Some(cost) if cost.is_sign_negative() && !cost.is_zero() => Err(AppError::Validation(
            "Total cost cannot be negative".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Create purchase order request
#[serde_as]
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePurchaseOrder {
    #[validate(length(min = 1, max = 64, message = "PO number is required"))]
    pub po_number: String,
    #[validate(length(min = 1, max = 255, message = "Supplier is required"))]
    pub supplier: String,
    /// Defaults to today
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "Items are required"))]
    pub items: String,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub total_cost: Option<Decimal>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 32, message = "Status must be at most 32 characters"))]
    pub status: Option<String>,
}

/// Partial update: only the supplied fields are rewritten. An empty date
/// or status leaves the stored value alone.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePurchaseOrder {
    #[validate(length(min = 1, max = 64))]
    pub po_number: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub supplier: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    pub items: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub total_cost: Option<Decimal>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(min = 1, max = 32))]
    pub status: Option<String>,
}

impl CreatePurchaseOrder {
    pub fn check(&self) -> AppResult<()> {
        check_cost(self.total_cost)
    }
}

impl UpdatePurchaseOrder {
    pub fn check(&self) -> AppResult<()> {
        check_cost(self.total_cost)
    }

    pub fn is_empty(&self) -> bool {
        self.po_number.is_none()
            && self.supplier.is_none()
            && self.order_date.is_none()
            && self.items.is_none()
            && self.total_cost.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_create_defaults() {
        let payload: CreatePurchaseOrder = serde_json::from_str(
            r#"{"po_number": "PO-1001", "supplier": "Sigma", "items": "Acetone x4"}"#,
        )
        .unwrap();
        assert_eq!(payload.order_date, None);
        assert_eq!(payload.total_cost, None);
        assert_eq!(payload.status, None);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_blank_form_fields_mean_absent() {
        let payload: CreatePurchaseOrder = serde_json::from_str(
            r#"{"po_number": "PO-1", "supplier": "Sigma", "order_date": "", "items": "x",
                "total_cost": null, "status": ""}"#,
        )
        .unwrap();
        assert_eq!(payload.order_date, None);
        assert_eq!(payload.total_cost, None);
        assert_eq!(payload.status, None);

        let payload: UpdatePurchaseOrder =
            serde_json::from_str(r#"{"order_date": "", "status": "Shipped"}"#).unwrap();
        assert_eq!(payload.order_date, None);
        assert_eq!(payload.status.as_deref(), Some("Shipped"));
    }

    #[test]
    fn test_order_date_is_parsed_when_present() {
        let payload: CreatePurchaseOrder = serde_json::from_str(
            r#"{"po_number": "PO-1", "supplier": "Sigma", "order_date": "2024-05-01", "items": "x"}"#,
        )
        .unwrap();
        assert_eq!(payload.order_date, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_overlong_status_is_rejected() {
        let payload: CreatePurchaseOrder = serde_json::from_str(&format!(
            r#"{{"po_number": "PO-1", "supplier": "Sigma", "items": "x", "status": "{}"}}"#,
            "S".repeat(33)
        ))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_create_requires_core_fields() {
        assert!(serde_json::from_str::<CreatePurchaseOrder>(
            r#"{"po_number": "PO-1001", "supplier": "Sigma"}"#
        )
        .is_err());
    }

    #[test]
    fn test_negative_cost_is_rejected() {
        let payload: CreatePurchaseOrder = serde_json::from_str(
            r#"{"po_number": "PO-1", "supplier": "Sigma", "items": "x", "total_cost": -5.5}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.check().is_err());
    }

    #[test]
    fn test_partial_update_only_status() {
        let payload: UpdatePurchaseOrder =
            serde_json::from_str(r#"{"status": "Shipped"}"#).unwrap();
        assert!(!payload.is_empty());
        assert_eq!(payload.status.as_deref(), Some("Shipped"));
        assert!(payload.po_number.is_none());
        assert!(payload.supplier.is_none());
        assert!(payload.items.is_none());
        assert!(payload.total_cost.is_none());
    }

    #[test]
    fn test_empty_update() {
        let payload: UpdatePurchaseOrder = serde_json::from_str(r#"{}"#).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn test_total_cost_is_numeric_in_json() {
        let order = PurchaseOrder {
            id: 1,
            po_number: "PO-1".into(),
            supplier: "Sigma".into(),
            order_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            items: "Acetone".into(),
            total_cost: Decimal::from_str("149.90").unwrap(),
            status: "Pending".into(),
            created_at: None,
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["total_cost"], 149.9);
        assert_eq!(json["order_date"], "2024-05-01");
    }
}
