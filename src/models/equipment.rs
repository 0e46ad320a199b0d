//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    /// Number of units
    pub quantity: i32,
    pub location_id: Option<i32>,
    pub purchase_date: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub next_maintenance_date: Option<NaiveDate>,
    /// Free-form status (Operational, Under Maintenance, Out of Service...)
    pub status: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Location display name (list queries only)
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

fn default_quantity() -> i32 {
    1
}

fn default_status() -> String {
    "Operational".to_string()
}

/// Create-or-update equipment request
#[serde_as]
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveEquipment {
    #[serde(default, deserialize_with = "super::optional_id")]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 255))]
    pub model_number: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 255))]
    pub serial_number: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    #[validate(length(max = 255))]
    pub manufacturer: Option<String>,
    #[serde(default = "default_quantity")]
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
    #[serde(default, deserialize_with = "super::optional_id")]
    pub location_id: Option<i32>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub last_maintenance_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub next_maintenance_date: Option<NaiveDate>,
    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = 64, message = "Status cannot be empty"))]
    pub status: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub description: Option<String>,
}
