//! Server-rendered HTML pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes.
///
/// ```text
/// GET /             -> home
/// GET /about        -> about
/// GET /comparison   -> comparison
/// GET /contact      -> contact (?type= preselects the inquiry)
/// GET /privacy      -> privacy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/comparison", get(pages::comparison))
        .route("/contact", get(pages::contact))
        .route("/privacy", get(pages::privacy))
}
