//! Chemical inventory API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        chemical::{Chemical, SaveChemical},
        MessageResponse,
    },
    AppState,
};

use super::{ApiPath, AuthenticatedUser, ValidatedJson};

/// List chemicals, newest first
#[utoipa::path(
    get,
    path = "/chemicals",
    tag = "chemicals",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Chemical list", body = Vec<Chemical>),
        (status = 401, description = "Not logged in", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_chemicals(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<Vec<Chemical>>> {
    let chemicals = state.services.chemicals.list().await?;
    Ok(Json(chemicals))
}

/// Get chemical by ID
#[utoipa::path(
    get,
    path = "/chemicals/{id}",
    tag = "chemicals",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Chemical ID")),
    responses(
        (status = 200, description = "Chemical details", body = Chemical),
        (status = 404, description = "Chemical not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_chemical(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Chemical>> {
    let chemical = state.services.chemicals.get_by_id(id).await?;
    Ok(Json(chemical))
}

/// Create a chemical, or update it when the payload carries an id
#[utoipa::path(
    post,
    path = "/chemicals",
    tag = "chemicals",
    security(("session_cookie" = [])),
    request_body = SaveChemical,
    responses(
        (status = 201, description = "Chemical saved", body = MessageResponse),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 404, description = "Chemical to update not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn save_chemical(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<SaveChemical>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = state.services.chemicals.save(&data).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::with_id("Success", id))))
}

/// Delete a chemical (succeeds even when the id does not exist)
#[utoipa::path(
    delete,
    path = "/chemicals/{id}",
    tag = "chemicals",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Chemical ID")),
    responses(
        (status = 200, description = "Chemical deleted", body = MessageResponse)
    )
)]
pub async fn delete_chemical(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.chemicals.delete(id).await?;
    Ok(Json(MessageResponse::new("Deleted successfully")))
}
