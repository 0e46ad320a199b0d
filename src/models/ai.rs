//! Request and response types for the AI-assisted endpoints

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Free-text query posted to lookup and search endpoints
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AiQuery {
    #[serde(default)]
    pub query: Option<String>,
}

fn default_expiry_months() -> i32 {
    24
}

/// Technical details suggested by the model for a chemical name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChemicalLookup {
    pub cas_number: String,
    /// Short hazard summary
    pub safety_notes: String,
    /// Suggested storage type (Flammables Cabinet, General, Fridge...)
    pub recommended_storage: String,
    /// Estimated shelf life in months
    #[serde(default = "default_expiry_months")]
    pub expiry_months: i32,
}

/// Severity of an incompatible storage pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl TryFrom<String> for Severity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "high" | "critical" => Ok(Severity::High),
            "medium" | "moderate" => Ok(Severity::Medium),
            "low" => Ok(Severity::Low),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// One incompatible group of chemicals sharing a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hazard {
    pub location: String,
    pub chemicals: Vec<String>,
    /// Explanation of the reaction or danger
    pub risk: String,
    pub severity: Severity,
}

/// Result of a storage compatibility scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HazardReport {
    #[serde(default)]
    pub hazards: Vec<Hazard>,
    /// Recomputed from `hazards` after parsing, so the model may omit it
    #[serde(default)]
    pub safe: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl HazardReport {
    pub fn safe_with(analysis: impl Into<String>) -> Self {
        Self {
            hazards: Vec::new(),
            safe: true,
            analysis: Some(analysis.into()),
        }
    }
}

/// Chemicals selected by the model for a free-text query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchMatches {
    pub match_ids: Vec<i32>,
    pub explanation: String,
}
