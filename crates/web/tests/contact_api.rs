//! Integration tests for `POST /api/contact`.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, build_app_with_mailer, build_test_app, post_json, post_raw, RecordingMailer};
use serde_json::json;

fn valid_submission() -> serde_json::Value {
    json!({
        "name": "Dana Whitfield",
        "email": "dana@district.k12.ca.us",
        "organization": "Solano County SELPA",
        "subject": "District pricing",
        "message": "We have 40 SLPs. <b>Volume</b> pricing?",
        "inquiryType": "demo"
    })
}

// ---------------------------------------------------------------------------
// Test: a valid submission sends one notification and one auto-reply
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_submission_sends_exactly_two_emails() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let response = post_json(app, "/api/contact", valid_submission()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, json!({ "success": true }));

    let sent = mailer.sent();
    assert_eq!(sent.len(), 2);

    let notification = &sent[0];
    assert_eq!(notification.to, "matthew@itherapyllc.com");
    assert!(!notification.bcc.is_empty());
    assert_eq!(notification.reply_to.as_deref(), Some("dana@district.k12.ca.us"));
    assert_eq!(notification.subject, "[EASI - Request a Demo] District pricing");
    assert!(notification.html.contains("&lt;b&gt;Volume&lt;/b&gt;"));

    let auto_reply = &sent[1];
    assert_eq!(auto_reply.to, "dana@district.k12.ca.us");
    assert!(auto_reply.bcc.is_empty());
    assert_eq!(auto_reply.subject, "Thank you for contacting EASI");
    assert!(auto_reply.html.contains("Dana"));
}

// ---------------------------------------------------------------------------
// Test: rejected submissions send nothing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_fields_are_rejected_without_sending() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let mut body = valid_submission();
    body["subject"] = json!("   ");
    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Please fill in all required fields.");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn malformed_email_is_rejected_without_sending() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let mut body = valid_submission();
    body["email"] = json!("dana@district");
    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Please enter a valid email address.");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn oversized_message_is_rejected_without_sending() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let mut body = valid_submission();
    body["message"] = json!("a".repeat(10_001));
    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Message is too long.");
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn malformed_body_returns_400() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let response = post_raw(app, "/api/contact", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn unknown_inquiry_type_is_a_malformed_body() {
    let mailer = Arc::new(RecordingMailer::default());
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let mut body = valid_submission();
    body["inquiryType"] = json!("district");
    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(mailer.sent().is_empty());
}

// ---------------------------------------------------------------------------
// Test: delivery failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notification_failure_returns_502_and_skips_auto_reply() {
    let mailer = Arc::new(RecordingMailer::failing_on(vec![0]));
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let response = post_json(app, "/api/contact", valid_submission()).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to send message. Please try again.");
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test]
async fn auto_reply_failure_still_succeeds() {
    let mailer = Arc::new(RecordingMailer::failing_on(vec![1]));
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let response = post_json(app, "/api/contact", valid_submission()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
    assert_eq!(mailer.sent().len(), 2);
}

#[tokio::test]
async fn no_mail_transport_returns_503() {
    let response = post_json(build_test_app(), "/api/contact", valid_submission()).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].is_string());
}

#[tokio::test(start_paused = true)]
async fn stalled_notification_returns_502_with_body() {
    let mailer = Arc::new(RecordingMailer::stalling_on(vec![0]));
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let response = post_json(app, "/api/contact", valid_submission()).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Failed to send message. Please try again.");
    assert_eq!(mailer.sent().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn stalled_auto_reply_still_succeeds() {
    let mailer = Arc::new(RecordingMailer::stalling_on(vec![1]));
    let app = build_app_with_mailer(Arc::clone(&mailer));

    let response = post_json(app, "/api/contact", valid_submission()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}
