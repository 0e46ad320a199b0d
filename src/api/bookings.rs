//! Resource booking endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        booking::{Booking, CreateBooking},
        MessageResponse,
    },
    AppState,
};

use super::{ApiPath, AuthenticatedUser, ValidatedJson};

/// List bookings, latest date first
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Booking list", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list().await?;
    Ok(Json(bookings))
}

/// Book a resource
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("session_cookie" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = MessageResponse),
        (status = 400, description = "Missing or malformed field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateBooking>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    tracing::debug!("Booking requested by {}", user.username);
    let id = state.services.bookings.create(&data).await?;
    Ok((StatusCode::CREATED, Json(MessageResponse::with_id("Success", id))))
}

/// Cancel a booking
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("session_cookie" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = MessageResponse)
    )
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.bookings.delete(id).await?;
    Ok(Json(MessageResponse::new("Deleted successfully")))
}
