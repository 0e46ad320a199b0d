//! Purchase order endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        purchase_order::{CreatePurchaseOrder, PurchaseOrder, UpdatePurchaseOrder},
        MessageResponse,
    },
    AppState,
};

use super::{ApiPath, AuthenticatedUser, ValidatedJson};

/// List purchase orders, latest order date first
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Purchase order list", body = Vec<PurchaseOrder>)
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<Vec<PurchaseOrder>>> {
    let orders = state.services.orders.list().await?;
    Ok(Json(orders))
}

/// Create a purchase order
#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    security(("session_cookie" = [])),
    request_body = CreatePurchaseOrder,
    responses(
        (status = 201, description = "Order created", body = MessageResponse),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreatePurchaseOrder>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let id = state.services.orders.create(&data).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::with_id("Order created", id))))
}

/// Update only the supplied fields of a purchase order
#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "orders",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdatePurchaseOrder,
    responses(
        (status = 200, description = "Order updated", body = MessageResponse),
        (status = 400, description = "No fields to update", body = crate::error::ErrorResponse),
        (status = 404, description = "Order not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(data): ValidatedJson<UpdatePurchaseOrder>,
) -> AppResult<Json<MessageResponse>> {
    state.services.orders.update(id, &data).await?;
    Ok(Json(MessageResponse::new("Order updated successfully")))
}

/// Delete a purchase order
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "orders",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = MessageResponse)
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.orders.delete(id).await?;
    Ok(Json(MessageResponse::new("Deleted successfully")))
}
