//! Server-rendered pages

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    error::AppResult,
    models::user::SessionUser,
    services::pages::{Page, PageContext},
    AppState,
};

use super::{redirect, take_flash, MaybeUser, PageUser};

async fn render(
    state: &AppState,
    jar: CookieJar,
    page: Page,
    user: Option<SessionUser>,
) -> AppResult<Response> {
    let (jar, flash) = take_flash(jar);
    let context = PageContext {
        username: user.map(|u| u.username),
        flash,
    };
    let html = state.services.pages.render(page, &context).await?;
    Ok((jar, Html(html)).into_response())
}

/// Landing page; logged-in visitors are sent to the dashboard
pub async fn landing(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    jar: CookieJar,
) -> AppResult<Response> {
    if user.is_some() {
        return Ok(redirect("/dashboard"));
    }
    render(&state, jar, Page::Landing, None).await
}

pub async fn dashboard(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    jar: CookieJar,
) -> AppResult<Response> {
    render(&state, jar, Page::Dashboard, Some(user)).await
}

pub async fn chemicals(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    jar: CookieJar,
) -> AppResult<Response> {
    render(&state, jar, Page::Chemicals, Some(user)).await
}

/// Add/edit chemical form
pub async fn chemical_form(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    jar: CookieJar,
) -> AppResult<Response> {
    render(&state, jar, Page::ChemicalForm, Some(user)).await
}

pub async fn equipment(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    jar: CookieJar,
) -> AppResult<Response> {
    render(&state, jar, Page::Equipment, Some(user)).await
}

pub async fn equipment_form(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    jar: CookieJar,
) -> AppResult<Response> {
    render(&state, jar, Page::EquipmentForm, Some(user)).await
}

pub async fn orders(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    jar: CookieJar,
) -> AppResult<Response> {
    render(&state, jar, Page::Orders, Some(user)).await
}

/// Bookings and shared resources
pub async fn resource_management(
    State(state): State<AppState>,
    PageUser(user): PageUser,
    jar: CookieJar,
) -> AppResult<Response> {
    render(&state, jar, Page::ResourceManagement, Some(user)).await
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{
        api::{create_router, tests::test_state},
        models::user::SessionUser,
        services::sessions::SessionStore,
    };

    #[tokio::test]
    async fn test_landing_for_anonymous_visitor() {
        let (state, _) = test_state(None);
        let app = create_router(state);

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_pages_show_username() {
        let (state, sessions) = test_state(None);
        let token = sessions
            .create(&SessionUser {
                user_id: 3,
                username: "mcurie".to_string(),
            })
            .await
            .unwrap();
        let app = create_router(state);

        for path in ["/chemicals", "/equipment", "/equipment/form", "/form.html", "/orders", "/resource-management"] {
            let response = app
                .clone()
                .oneshot(
                    Request::get(path)
                        .header(header::COOKIE, format!("labstock_session={}", token))
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", path);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let html = String::from_utf8(body.to_vec()).unwrap();
            assert!(html.contains("mcurie"), "{} does not greet the user", path);
            assert!(
                html.contains(r#"<script src="/static/js/labstock.js"></script>"#),
                "{} does not load the page script",
                path
            );
        }
    }
}
