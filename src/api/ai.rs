//! AI-assisted endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::ai::{AiQuery, ChemicalLookup, HazardReport, SearchMatches},
    AppState,
};

use super::{AuthenticatedUser, ValidatedJson};

/// Suggest CAS number, hazards, storage and shelf life for a chemical name
#[utoipa::path(
    post,
    path = "/ai-lookup",
    tag = "ai",
    security(("session_cookie" = [])),
    request_body = AiQuery,
    responses(
        (status = 200, description = "Suggested chemical details", body = ChemicalLookup),
        (status = 400, description = "No query provided", body = crate::error::ErrorResponse),
        (status = 503, description = "AI key not configured", body = crate::error::ErrorResponse),
        (status = 500, description = "AI processing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn ai_lookup(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<AiQuery>,
) -> AppResult<Json<ChemicalLookup>> {
    let lookup = state.services.ai.lookup(body.query.as_deref()).await?;
    Ok(Json(lookup))
}

/// Flag incompatible chemicals sharing a storage location
#[utoipa::path(
    get,
    path = "/check-hazards",
    tag = "ai",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Hazard report", body = HazardReport),
        (status = 503, description = "AI key not configured", body = crate::error::ErrorResponse),
        (status = 500, description = "AI processing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn check_hazards(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<HazardReport>> {
    Ok(Json(state.services.ai.hazard_scan().await?))
}

/// Find inventory chemicals matching a free-text need
#[utoipa::path(
    post,
    path = "/ai-search",
    tag = "ai",
    security(("session_cookie" = [])),
    request_body = AiQuery,
    responses(
        (status = 200, description = "Matching chemical ids", body = SearchMatches),
        (status = 400, description = "No query provided", body = crate::error::ErrorResponse),
        (status = 503, description = "AI key not configured", body = crate::error::ErrorResponse),
        (status = 500, description = "AI processing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn ai_search(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ValidatedJson(body): ValidatedJson<AiQuery>,
) -> AppResult<Json<SearchMatches>> {
    let matches = state.services.ai.semantic_search(body.query.as_deref()).await?;
    Ok(Json(matches))
}
