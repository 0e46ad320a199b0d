//! Equipment API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, SaveEquipment},
        MessageResponse,
    },
    AppState,
};

use super::{ApiPath, AuthenticatedUser, ValidatedJson};

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipments",
    tag = "equipment",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>)
    )
)]
pub async fn list_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipments/{id}",
    tag = "equipment",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment, or update it when the payload carries an id
#[utoipa::path(
    post,
    path = "/equipments",
    tag = "equipment",
    security(("session_cookie" = [])),
    request_body = SaveEquipment,
    responses(
        (status = 201, description = "Equipment saved", body = MessageResponse),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn save_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<SaveEquipment>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = state.services.equipment.save(&data).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::with_id("Success", id))))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipments/{id}",
    tag = "equipment",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = MessageResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.equipment.delete(id).await?;
    Ok(Json(MessageResponse::new("Deleted successfully")))
}
