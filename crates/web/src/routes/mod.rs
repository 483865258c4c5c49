pub mod chat;
pub mod contact;
pub mod health;
pub mod pages;
pub mod seo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /chat          POST  chat assistant completion
/// /contact       POST  contact form relay
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(chat::router())
        .merge(contact::router())
}
