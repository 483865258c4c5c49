use axum::routing::get;
use axum::Router;

use crate::handlers::seo;
use crate::state::AppState;

/// ```text
/// GET /sitemap.xml   -> sitemap
/// GET /robots.txt    -> robots
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
}
