//! Chemical model and related types

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

static CAS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2,7})-(\d{2})-(\d)$").expect("valid CAS regex"));

/// Chemical record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Chemical {
    pub id: i32,
    pub name: String,
    /// CAS registry number, e.g. 67-64-1
    pub cas_number: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub location_id: Option<i32>,
    pub expiry_date: Option<NaiveDate>,
    pub safety_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Location display name (list queries only)
    #[sqlx(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

/// Create-or-update chemical request.
///
/// A payload carrying an `id` rewrites that row; otherwise a new row is
/// inserted.
#[serde_as]
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveChemical {
    #[serde(default, deserialize_with = "super::optional_id")]
    pub id: Option<i32>,
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub cas_number: Option<String>,
    #[validate(range(min = 0.0, message = "Quantity cannot be negative"))]
    pub quantity: f64,
    #[validate(length(min = 1, max = 32, message = "Unit is required"))]
    pub unit: String,
    #[serde(default, deserialize_with = "super::optional_id")]
    pub location_id: Option<i32>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub safety_notes: Option<String>,
}

impl SaveChemical {
    /// Check fields the derive cannot express
    pub fn check(&self) -> AppResult<()> {
        if let Some(ref cas) = self.cas_number {
            validate_cas_number(cas)?;
        }
        Ok(())
    }
}

/// Chemical name paired with the name of the location holding it
#[derive(Debug, Clone, FromRow)]
pub struct StoredChemical {
    pub chemical: String,
    pub location: String,
}

/// Compact chemical row sent to the model for semantic search
#[derive(Debug, Clone, FromRow)]
pub struct ChemicalSummary {
    pub id: i32,
    pub name: String,
    pub cas_number: Option<String>,
    pub safety_notes: Option<String>,
}

/// Validate a CAS registry number: format `NNNNNNN-NN-N` and check digit
pub fn validate_cas_number(cas: &str) -> AppResult<()> {
    let invalid = || AppError::Validation(format!("Invalid CAS number: {}", cas));

    let captures = CAS_PATTERN.captures(cas.trim()).ok_or_else(invalid)?;
    let body: Vec<u32> = captures[1]
        .chars()
        .chain(captures[2].chars())
        .filter_map(|c| c.to_digit(10))
        .collect();
    let check = captures[3].chars().next().and_then(|c| c.to_digit(10)).ok_or_else(invalid)?;

    // Weighted sum of the body digits, weights counting up from the right
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, d)| (i as u32 + 1) * d)
        .sum();

    if sum % 10 != check {
        return Err(invalid());
    }
    Ok(())
}
