//! Booking model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Reservation of a shared resource by a researcher
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    /// Kind of resource booked (equipment, fume hood...)
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub booking_type: String,
    pub resource_name: String,
    pub researcher_name: String,
    /// ISO-8601 calendar date
    pub booking_date: NaiveDate,
}

/// Create booking request as posted by the resource management page
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 64, message = "Booking type is required"))]
    pub booking_type: String,
    #[serde(rename = "resourceName")]
    #[validate(length(min = 1, max = 255, message = "Resource name is required"))]
    pub resource_name: String,
    #[serde(rename = "researcherName")]
    #[validate(length(min = 1, max = 255, message = "Researcher name is required"))]
    pub researcher_name: String,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_booking_uses_camel_case_keys() {
        let payload: CreateBooking = serde_json::from_str(
            r#"{"type": "equipment", "resourceName": "Centrifuge",
                "researcherName": "A. Lee", "date": "2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(payload.booking_type, "equipment");
        assert_eq!(payload.resource_name, "Centrifuge");
        assert_eq!(payload.researcher_name, "A. Lee");
        assert_eq!(payload.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_booking_date_serializes_as_iso_string() {
        let booking = Booking {
            id: 3,
            booking_type: "equipment".into(),
            resource_name: "Centrifuge".into(),
            researcher_name: "A. Lee".into(),
            booking_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        };
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["booking_date"], "2024-05-01");
        assert_eq!(json["type"], "equipment");
    }

    #[test]
    fn test_missing_date_is_rejected() {
        assert!(serde_json::from_str::<CreateBooking>(
            r#"{"type": "equipment", "resourceName": "Centrifuge", "researcherName": "A. Lee"}"#
        )
        .is_err());
    }
}
