//! Storage location endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::location::Location, AppState};

use super::AuthenticatedUser;

/// List storage locations by name
#[utoipa::path(
    get,
    path = "/locations",
    tag = "locations",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Location list", body = Vec<Location>)
    )
)]
pub async fn list_locations(
    State(state): State<AppState>,
    AuthenticatedUser(_user): AuthenticatedUser,
) -> AppResult<Json<Vec<Location>>> {
    Ok(Json(state.services.locations.list().await?))
}
