//! Mounted at `/api` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::chat;
use crate::state::AppState;

/// ```text
/// POST /chat   -> send_chat
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat::send_chat))
}
