//! Server-rendered page handlers.
//!
//! The public pages are pure renders of static structure (plus the category
//! catalog); `/admin` is the one gated route: without a valid session cookie
//! it serves the login page, with one it fetches the latest complaints and
//! renders the dashboard.

use crate::{
    core::complaint,
    errors::Result,
    http::{AppState, api::LIST_LIMIT, auth},
    render,
};
use axum::{extract::State, http::HeaderMap, response::Html};

/// `GET /` and `GET /index.html` - the category picker wizard.
pub async fn intake(State(state): State<AppState>) -> Html<String> {
    Html(render::public::intake_page(&state.config.categories))
}

/// `GET /submit` - contact, images, and content form.
pub async fn submit() -> Html<String> {
    Html(render::public::submit_page())
}

/// `GET /success` - post-submission confirmation.
pub async fn success() -> Html<String> {
    Html(render::public::success_page())
}

/// `GET /admin` - the login page or the dashboard, depending on the session
/// cookie.
pub async fn admin(State(state): State<AppState>, headers: HeaderMap) -> Result<Html<String>> {
    let now = chrono::Utc::now().timestamp();
    if !auth::has_valid_session(&headers, &state.config.session_secret, now) {
        return Ok(Html(render::admin::login_page()));
    }

    let complaints = complaint::list_complaints(&state.db, LIST_LIMIT).await?;
    Ok(Html(render::admin::dashboard_page(&complaints)))
}
