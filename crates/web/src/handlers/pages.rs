use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use easi_core::contact::InquiryType;

use crate::pages;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home_page(&state.config.site_base_url))
}

// ---------------------------------------------------------------------------
// GET /about
// ---------------------------------------------------------------------------

pub async fn about(State(state): State<AppState>) -> Html<String> {
    Html(pages::about_page(&state.config.site_base_url))
}

// ---------------------------------------------------------------------------
// GET /comparison
// ---------------------------------------------------------------------------

pub async fn comparison(State(state): State<AppState>) -> Html<String> {
    Html(pages::comparison_page(&state.config.site_base_url))
}

// ---------------------------------------------------------------------------
// GET /contact?type=
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    #[serde(rename = "type")]
    pub inquiry: Option<String>,
}

impl ContactQuery {
    /// Unknown or missing slugs fall back to a general inquiry.
    pub fn inquiry_type(&self) -> InquiryType {
        self.inquiry
            .as_deref()
            .and_then(InquiryType::from_slug)
            .unwrap_or_default()
    }
}

pub async fn contact(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Html<String> {
    Html(pages::contact_page(
        &state.config.site_base_url,
        query.inquiry_type(),
    ))
}

// ---------------------------------------------------------------------------
// GET /privacy
// ---------------------------------------------------------------------------

pub async fn privacy(State(state): State<AppState>) -> Html<String> {
    Html(pages::privacy_page(&state.config.site_base_url))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found_page(&state.config.site_base_url)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_inquiry_slug_falls_back_to_general() {
        let query = ContactQuery {
            inquiry: Some("district".into()),
        };
        assert_eq!(query.inquiry_type(), InquiryType::General);
        assert_eq!(ContactQuery::default().inquiry_type(), InquiryType::General);
    }

    #[test]
    fn known_inquiry_slug_is_selected() {
        let query = ContactQuery {
            inquiry: Some("press".into()),
        };
        assert_eq!(query.inquiry_type(), InquiryType::Press);
    }
}
