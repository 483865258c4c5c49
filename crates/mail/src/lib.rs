//! Outbound email for the contact form.
//!
//! [`Mailer`] is the seam between the contact relay and the transport. Two
//! transports are provided: [`ResendMailer`] talks to the Resend HTTP API
//! and [`SmtpMailer`] relays through an SMTP server with `lettre`.
//! [`ContactRelay`] validates a submission and sends the admin
//! notification followed by the visitor auto-reply.

pub mod config;
pub mod relay;
pub mod resend;
pub mod smtp;
pub mod templates;

use std::sync::Arc;
use std::time::Duration;

pub use config::{ContactMailSettings, TransportConfig, DEFAULT_SEND_TIMEOUT};
pub use relay::{ContactOutcome, ContactRelay};
pub use resend::ResendMailer;
pub use smtp::SmtpMailer;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// A sender or recipient address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),

    /// The HTTP request to the email API failed (network, DNS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The email API returned a non-2xx status code.
    #[error("Email API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The transport did not finish within the relay's send timeout.
    #[error("Email delivery timed out after {0:?}")]
    Timeout(Duration),
}

// ---------------------------------------------------------------------------
// OutgoingEmail / Mailer
// ---------------------------------------------------------------------------

/// A single HTML email ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// RFC 5322 mailbox, e.g. `EASI <admin@itherapyllc.com>`.
    pub from: String,
    pub to: String,
    pub bcc: Vec<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// Sends one email. Implementations must not retry.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;

    /// Short transport name for logs and the health endpoint.
    fn name(&self) -> &'static str;
}

/// Construct the mailer for a transport configuration.
pub fn build_mailer(config: &TransportConfig) -> Result<Arc<dyn Mailer>, MailError> {
    match config {
        TransportConfig::Resend(cfg) => Ok(Arc::new(ResendMailer::new(cfg.clone())?)),
        TransportConfig::Smtp(cfg) => Ok(Arc::new(SmtpMailer::new(cfg.clone())?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mail_error_display_build() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }

    #[test]
    fn mail_error_display_api() {
        let err = MailError::Api {
            status: 422,
            body: "invalid from".to_string(),
        };
        assert_eq!(err.to_string(), "Email API error (422): invalid from");
    }

    #[test]
    fn mail_error_display_address() {
        let addr_err: Result<lettre::Address, _> = "not-an-email".parse();
        let err = MailError::Address(addr_err.unwrap_err());
        assert!(err.to_string().contains("Email address parse error"));
    }
}
