//! Handler for the contact form.
//!
//! Always answers with `{ "success": bool, "error"?: string }` so the form
//! script can show the message as-is.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use easi_core::contact::{ContactSubmission, UNEXPECTED_ERROR_MESSAGE};
use easi_mail::ContactOutcome;

use crate::state::AppState;

const MALFORMED_SUBMISSION_MESSAGE: &str = "Invalid form submission. Please reload the page and try again.";

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// POST /api/contact
// ---------------------------------------------------------------------------

/// Validate a submission and relay it by email.
///
/// | Outcome                 | Status |
/// |-------------------------|--------|
/// | sent                    | 200    |
/// | malformed body          | 400    |
/// | validation rejection    | 422    |
/// | notification failed     | 502    |
/// | no mail transport       | 503    |
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> (StatusCode, Json<ContactResponse>) {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Malformed contact submission");
            return (
                StatusCode::BAD_REQUEST,
                Json(ContactResponse::failure(MALFORMED_SUBMISSION_MESSAGE)),
            );
        }
    };

    let Some(relay) = state.contact.as_ref() else {
        tracing::error!("Contact submission received but no mail transport is configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ContactResponse::failure(UNEXPECTED_ERROR_MESSAGE)),
        );
    };

    let outcome = relay.submit(&input).await;
    let status = match &outcome {
        ContactOutcome::Sent { .. } => StatusCode::OK,
        ContactOutcome::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContactOutcome::DeliveryFailed => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ContactResponse {
            success: outcome.is_success(),
            error: outcome.error_message(),
        }),
    )
}
