//! Signup, login and logout pages

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    config::SessionConfig,
    error::{AppError, AppResult},
    models::user::{LoginForm, SignupForm},
    services::pages::{Flash, FlashLevel, Page, PageContext},
    AppState,
};

use super::{flash_redirect, redirect, take_flash, MaybeUser};

/// Build the session cookie handed out after a successful login
pub fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie)
        .build()
}

async fn render_form_page(state: &AppState, jar: CookieJar, page: Page) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let html = state
        .services
        .pages
        .render(page, &PageContext { username: None, flash })
        .await?;
    Ok((jar, Html(html)).into_response())
}

/// Registration page
pub async fn signup_page(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Response> {
    render_form_page(&state, jar, Page::Signup).await
}

/// Flash shown on the signup page when registration is refused
fn signup_failure(err: AppError) -> AppResult<Flash> {
    match err {
        AppError::Conflict(message) | AppError::Validation(message) => {
            Ok(Flash::new(FlashLevel::Danger, message))
        }
        e => Err(e),
    }
}

/// Register a new account, then send the visitor to the login page
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    let flash = match state.services.auth.register(&form).await {
        Ok(_) => {
            let flash = Flash::new(FlashLevel::Success, "Account created! Please login.");
            return Ok(flash_redirect(jar, "/login", flash).into_response());
        }
        Err(e) => signup_failure(e)?,
    };

    Ok(flash_redirect(jar, "/signup", flash).into_response())
}

/// Login page; visitors who already hold a session go straight to the dashboard
pub async fn login_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
) -> AppResult<Response> {
    if user.is_some() {
        return Ok(redirect("/dashboard"));
    }
    render_form_page(&state, jar, Page::Login).await
}

/// Check credentials and open a session
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let user = match state.services.auth.authenticate(&form).await {
        Ok(user) => user,
        Err(AppError::Authentication(message)) => {
            let flash = Flash::new(FlashLevel::Danger, message);
            return Ok(flash_redirect(jar, "/login", flash).into_response());
        }
        Err(e) => return Err(e),
    };

    let token = state.services.sessions.create(&user).await?;
    tracing::info!("User {} logged in", user.username);

    let jar = jar.add(session_cookie(&state.config.sessions, token));
    let flash = Flash::new(FlashLevel::Success, "Logged in successfully!");
    Ok(flash_redirect(jar, "/dashboard", flash).into_response())
}

/// Close the session and return to the landing page
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    let cookie_name = state.config.sessions.cookie_name.clone();
    if let Some(cookie) = jar.get(&cookie_name) {
        state.services.sessions.destroy(cookie.value()).await?;
    }

    let jar = jar.remove(Cookie::build(cookie_name).path("/"));
    let flash = Flash::new(FlashLevel::Info, "Logged out successfully.");
    Ok(flash_redirect(jar, "/", flash).into_response())
}
