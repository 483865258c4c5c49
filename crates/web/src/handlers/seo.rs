use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

use easi_core::sitemap::{render_robots, render_sitemap};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /sitemap.xml
// ---------------------------------------------------------------------------

pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = render_sitemap(&state.config.site_base_url, state.started_at);
    ([(CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
}

// ---------------------------------------------------------------------------
// GET /robots.txt
// ---------------------------------------------------------------------------

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    let body = render_robots(&state.config.site_base_url);
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}
