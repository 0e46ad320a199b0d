//! Data models for Labstock

pub mod ai;
pub mod booking;
pub mod chemical;
pub mod equipment;
pub mod location;
pub mod purchase_order;
pub mod user;

use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// Re-export commonly used types
pub use booking::Booking;
pub use chemical::Chemical;
pub use equipment::Equipment;
pub use location::Location;
pub use purchase_order::PurchaseOrder;
pub use user::{SessionUser, User};

/// Acknowledgement body returned by write endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: i32) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}

/// Deserialize an optional row id sent either as a number or as a string.
///
/// Form selects post ids as strings, and an unselected one arrives as `""`,
/// `null` or `0`; all of those mean "no id".
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    let id = match Option::<RawId>::deserialize(deserializer)? {
        None => None,
        Some(RawId::Int(value)) => Some(i32::try_from(value).map_err(de::Error::custom)?),
        Some(RawId::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(text.parse::<i32>().map_err(de::Error::custom)?)
            }
        }
    };

    Ok(id.filter(|id| *id != 0))
}
