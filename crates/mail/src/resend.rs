//! Email delivery through the Resend HTTP API.
//!
//! One `POST /emails` per message, authenticated with a bearer API key.
//! Failures are returned to the caller; nothing is retried here.

use serde::Serialize;

use crate::config::ResendConfig;
use crate::{MailError, Mailer, OutgoingEmail};

/// JSON body accepted by `POST /emails`.
#[derive(Debug, Serialize)]
struct SendEmailBody<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "is_empty")]
    bcc: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
}

fn is_empty(list: &&[String]) -> bool {
    list.is_empty()
}

pub struct ResendMailer {
    client: reqwest::Client,
    config: ResendConfig,
}

impl ResendMailer {
    /// Build a mailer with its own HTTP client (request timeout from config).
    pub fn new(config: ResendConfig) -> Result<Self, MailError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let body = SendEmailBody {
            from: &email.from,
            to: [&email.to],
            bcc: &email.bcc,
            reply_to: email.reply_to.as_deref(),
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(MailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(to = %email.to, subject = %email.subject, "Email accepted by Resend");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "EASI <admin@itherapyllc.com>".into(),
            to: "jane@school.org".into(),
            bcc: vec![],
            reply_to: None,
            subject: "Thank you for contacting EASI".into(),
            html: "<p>Hi</p>".into(),
        }
    }

    #[test]
    fn body_omits_empty_bcc_and_reply_to() {
        let email = email();
        let body = SendEmailBody {
            from: &email.from,
            to: [&email.to],
            bcc: &email.bcc,
            reply_to: email.reply_to.as_deref(),
            subject: &email.subject,
            html: &email.html,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["to"], serde_json::json!(["jane@school.org"]));
        assert!(json.get("bcc").is_none());
        assert!(json.get("reply_to").is_none());
    }

    #[test]
    fn body_includes_bcc_and_reply_to_when_set() {
        let mut email = email();
        email.bcc = vec!["tom@northernspeech.com".into()];
        email.reply_to = Some("jane@school.org".into());
        let body = SendEmailBody {
            from: &email.from,
            to: [&email.to],
            bcc: &email.bcc,
            reply_to: email.reply_to.as_deref(),
            subject: &email.subject,
            html: &email.html,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["bcc"], serde_json::json!(["tom@northernspeech.com"]));
        assert_eq!(json["reply_to"], "jane@school.org");
    }

    #[tokio::test]
    async fn unreachable_endpoint_returns_request_error() {
        let mailer = ResendMailer::new(ResendConfig {
            api_key: "re_test".into(),
            api_url: "http://127.0.0.1:1/emails".into(),
            timeout: std::time::Duration::from_secs(2),
        })
        .unwrap();

        let err = mailer.send(&email()).await.unwrap_err();
        assert!(matches!(err, MailError::Request(_)));
    }
}
