//! HTTP handlers, request extractors and the application router

pub mod ai;
pub mod auth;
pub mod bookings;
pub mod chemicals;
pub mod equipment;
pub mod health;
pub mod locations;
pub mod openapi;
pub mod orders;
pub mod pages;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::de::DeserializeOwned;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::SessionUser,
    services::pages::{Flash, FlashLevel},
    AppState,
};

/// Cookie carrying a one-shot flash message
pub const FLASH_COOKIE: &str = "flash";

/// Resolve the session cookie, if any, to the logged-in user
async fn session_from_parts(
    parts: &mut Parts,
    state: &AppState,
) -> Result<Option<SessionUser>, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);
    match jar.get(&state.config.sessions.cookie_name) {
        Some(cookie) => state.services.sessions.get(cookie.value()).await,
        None => Ok(None),
    }
}

/// Extractor for API routes: the session user, or 401 JSON
pub struct AuthenticatedUser(pub SessionUser);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        session_from_parts(parts, state)
            .await?
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError::Authentication("Login required".to_string()))
    }
}

/// Extractor for page routes: the session user, or a redirect to the login page
pub struct PageUser(pub SessionUser);

/// Rejection for [`PageUser`]
pub enum PageRejection {
    LoginRequired,
    Failed(AppError),
}

impl IntoResponse for PageRejection {
    fn into_response(self) -> Response {
        match self {
            PageRejection::LoginRequired => flash_redirect(
                CookieJar::new(),
                "/login",
                Flash::new(FlashLevel::Warning, "Please login to access this page."),
            )
            .into_response(),
            PageRejection::Failed(e) => e.into_response(),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for PageUser {
    type Rejection = PageRejection;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        session_from_parts(parts, state)
            .await
            .map_err(PageRejection::Failed)?
            .map(PageUser)
            .ok_or(PageRejection::LoginRequired)
    }
}

/// Extractor for optional sessions (landing and login pages)
pub struct MaybeUser(pub Option<SessionUser>);

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(session_from_parts(parts, state).await?))
    }
}

/// JSON body that has been deserialized into `T` and passed `T`'s validation
/// rules. Shape and rule failures are both reported as 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        value
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(ValidatedJson(value))
    }
}

/// Path parameters for API routes. A segment that fails to parse (such as
/// `/api/chemicals/abc`) is answered with a JSON 400 instead of plain text.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiPath(value))
    }
}

/// `302 Found` redirect, the status browsers follow with a GET
pub fn redirect(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())]).into_response()
}

/// Redirect while queueing a flash message for the next page
pub fn flash_redirect(jar: CookieJar, to: &str, flash: Flash) -> (CookieJar, Response) {
    let cookie = Cookie::build((FLASH_COOKIE, flash.encode()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), redirect(to))
}

/// Pop the pending flash message, if any
pub fn take_flash(jar: CookieJar) -> (CookieJar, Option<Flash>) {
    let flash = jar.get(FLASH_COOKIE).and_then(|c| Flash::decode(c.value()));
    if flash.is_some() {
        (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), flash)
    } else {
        (jar, None)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Chemicals
        .route("/chemicals", get(chemicals::list_chemicals).post(chemicals::save_chemical))
        .route(
            "/chemicals/:id",
            get(chemicals::get_chemical).delete(chemicals::delete_chemical),
        )
        // Equipment
        .route("/equipments", get(equipment::list_equipment).post(equipment::save_equipment))
        .route(
            "/equipments/:id",
            get(equipment::get_equipment).delete(equipment::delete_equipment),
        )
        // Locations
        .route("/locations", get(locations::list_locations))
        // Bookings
        .route("/bookings", get(bookings::list_bookings).post(bookings::create_booking))
        .route("/bookings/:id", delete(bookings::delete_booking))
        // Purchase orders
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route("/orders/:id", put(orders::update_order).delete(orders::delete_order))
        // AI assistance
        .route("/ai-lookup", post(ai::ai_lookup))
        .route("/check-hazards", get(ai::check_hazards))
        .route("/ai-search", post(ai::ai_search));

    let site = Router::new()
        .route("/", get(pages::landing))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(pages::dashboard))
        .route("/chemicals", get(pages::chemicals))
        .route("/equipment", get(pages::equipment))
        .route("/equipment/form", get(pages::equipment_form))
        .route("/form.html", get(pages::chemical_form))
        .route("/orders", get(pages::orders))
        .route("/resource-management", get(pages::resource_management));

    let assets = ServeDir::new(&state.config.pages.static_dir);

    Router::new()
        .merge(site)
        .nest("/api", api)
        .nest_service("/static", assets)
        .with_state(state)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
