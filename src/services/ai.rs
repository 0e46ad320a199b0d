//! AI-assisted inventory features: chemical lookup, storage hazard scan and
//! semantic search.
//!
//! Every feature follows the same path: build a prompt around live inventory
//! data, ask the model, pull the first JSON object out of the reply and
//! deserialize it into a typed result. Failures are reported once and never
//! retried.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::{
    error::{AppError, AppResult},
    models::{
        ai::{ChemicalLookup, HazardReport, SearchMatches},
        chemical::{ChemicalSummary, StoredChemical},
    },
    repository::Repository,
    services::llm::{parse_model_json, LanguageModel},
};

const NOT_CONFIGURED: &str = "Gemini API Key not configured. Please set GEMINI_API_KEY env var.";
const NO_SHARED_LOCATIONS: &str =
    "No shared storage locations found with multiple chemicals. Inventory looks safe!";
const EMPTY_INVENTORY: &str = "Inventory is empty.";

#[derive(Clone)]
pub struct AiService {
    repository: Repository,
    model: Option<Arc<dyn LanguageModel>>,
}

impl AiService {
    pub fn new(repository: Repository, model: Option<Arc<dyn LanguageModel>>) -> Self {
        Self { repository, model }
    }

    pub fn is_enabled(&self) -> bool {
        self.model.is_some()
    }

    fn model(&self) -> AppResult<&dyn LanguageModel> {
        self.model
            .as_deref()
            .ok_or_else(|| AppError::ServiceUnavailable(NOT_CONFIGURED.to_string()))
    }

    /// Suggest CAS number, hazards, storage and shelf life for a chemical name
    pub async fn lookup(&self, query: Option<&str>) -> AppResult<ChemicalLookup> {
        let model = self.model()?;
        let name = require_query(query)?;
        lookup_chemical(model, name).await
    }

    /// Flag incompatible chemicals stored in the same location
    pub async fn hazard_scan(&self) -> AppResult<HazardReport> {
        let model = self.model()?;
        let stored = self.repository.chemicals.list_stored().await?;
        scan_hazards(model, stored).await
    }

    /// Select inventory chemicals matching a free-text need
    pub async fn semantic_search(&self, query: Option<&str>) -> AppResult<SearchMatches> {
        let model = self.model()?;
        let query = require_query(query)?;
        let inventory = self.repository.chemicals.list_summaries().await?;
        search_inventory(model, query, &inventory).await
    }
}

fn require_query(query: Option<&str>) -> AppResult<&str> {
    query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("No query provided".to_string()))
}

pub(crate) async fn lookup_chemical(
    model: &dyn LanguageModel,
    name: &str,
) -> AppResult<ChemicalLookup> {
    let prompt = format!(
        r#"You are a lab assistant. Provide technical details for the chemical '{name}'.
Return ONLY valid JSON with no markdown formatting.
Keys:
- cas_number (string)
- safety_notes (short summary of hazards, max 15 words)
- recommended_storage (suggest a storage type like 'Flammables Cabinet', 'General', 'Fridge', etc.)
- expiry_months (integer estimate of shelf life in months, default 24 if unknown)

Example: {{"cas_number": "67-64-1", "safety_notes": "Highly flammable. Causes eye irritation.", "recommended_storage": "Flammables Cabinet", "expiry_months": 60}}"#
    );

    let reply = model.generate(&prompt).await?;
    tracing::debug!("AI lookup reply for {}: {}", name, reply);
    parse_model_json(&reply)
}

/// Group chemical names by location, keeping only locations that hold more
/// than one chemical
pub(crate) fn shared_locations(stored: Vec<StoredChemical>) -> IndexMap<String, Vec<String>> {
    let mut by_location: IndexMap<String, Vec<String>> = IndexMap::new();
    for row in stored {
        by_location.entry(row.location).or_default().push(row.chemical);
    }
    by_location.retain(|_, chemicals| chemicals.len() > 1);
    by_location
}

pub(crate) async fn scan_hazards(
    model: &dyn LanguageModel,
    stored: Vec<StoredChemical>,
) -> AppResult<HazardReport> {
    let locations = shared_locations(stored);
    if locations.is_empty() {
        return Ok(HazardReport::safe_with(NO_SHARED_LOCATIONS));
    }

    let inventory = serde_json::to_string_pretty(&locations)
        .map_err(|e| AppError::Internal(format!("Failed to serialize inventory: {}", e)))?;

    let prompt = format!(
        r#"You are a Chemical Safety Officer. Analyze this inventory for dangerous incompatible storage.
The input is a JSON object where keys are "Location Names" and values are lists of chemicals stored there.

Inventory:
{inventory}

Task:
Identify ANY incompatible pairs stored in the SAME location (e.g., Acids + Bases, Oxidizers + Flammables).

Return ONLY valid JSON:
{{
    "hazards": [
        {{
            "location": "Location Name",
            "chemicals": ["Chemical A", "Chemical B"],
            "risk": "Explanation of the reaction/danger (e.g. Generation of toxic gas)",
            "severity": "High" (or Medium/Low)
        }}
    ],
    "safe": boolean (true if no hazards found)
}}"#
    );

    let reply = model.generate(&prompt).await?;
    tracing::debug!("AI hazard reply: {}", reply);

    let mut report: HazardReport = parse_model_json(&reply)?;
    report.safe = report.hazards.is_empty();
    tracing::info!(
        "Hazard scan over {} shared location(s): {} hazard(s)",
        locations.len(),
        report.hazards.len()
    );
    Ok(report)
}

pub(crate) async fn search_inventory(
    model: &dyn LanguageModel,
    query: &str,
    inventory: &[ChemicalSummary],
) -> AppResult<SearchMatches> {
    if inventory.is_empty() {
        return Ok(SearchMatches {
            match_ids: Vec::new(),
            explanation: EMPTY_INVENTORY.to_string(),
        });
    }

    let context = inventory
        .iter()
        .map(|c| {
            format!(
                "ID: {}, Name: {}, CAS: {}, Notes: {}",
                c.id,
                c.name,
                c.cas_number.as_deref().unwrap_or("None"),
                c.safety_notes.as_deref().unwrap_or("None")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        r#"You are an intelligent lab inventory assistant.
User Query: "{query}"

Below is the current chemical inventory:
---
{context}
---

Task: Select the chemicals that best match the user's intent.
- If the user asks for "flammables", find chemicals with "flammable" in notes/name.
- If they ask "something to clean glass", find solvents like Acetone.
- Be smart about synonyms.

Return ONLY a JSON object:
{{
    "match_ids": [list of integer IDs],
    "explanation": "Brief reason for selection (max 10 words)"
}}"#
    );

    let reply = model.generate(&prompt).await?;
    tracing::debug!("AI search reply for {:?}: {}", query, reply);

    let mut matches: SearchMatches = parse_model_json(&reply)?;

    // Drop ids the model invented
    let known: HashSet<i32> = inventory.iter().map(|c| c.id).collect();
    let mut seen = HashSet::new();
    matches
        .match_ids
        .retain(|id| known.contains(id) && seen.insert(*id));

    Ok(matches)
}
