//! Contact form relay: validate, notify the team, auto-reply to the visitor.

use std::sync::Arc;
use std::time::Duration;

use easi_core::contact::{self, ContactRejection, ContactSubmission, ValidSubmission};

use crate::config::{ContactMailSettings, DEFAULT_SEND_TIMEOUT};
use crate::templates::{auto_reply_html, notification_html};
use crate::{MailError, Mailer, OutgoingEmail};

/// Result of relaying one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The notification was delivered. `auto_reply_sent` is false when the
    /// visitor's copy failed; the submission still counts as received.
    Sent { auto_reply_sent: bool },
    /// Validation refused the submission; nothing was sent.
    Rejected(ContactRejection),
    /// The notification could not be delivered.
    DeliveryFailed,
}

impl ContactOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ContactOutcome::Sent { .. })
    }

    /// Message shown to the visitor, if any.
    pub fn error_message(&self) -> Option<String> {
        match self {
            ContactOutcome::Sent { .. } => None,
            ContactOutcome::Rejected(rejection) => Some(rejection.to_string()),
            ContactOutcome::DeliveryFailed => Some(contact::DELIVERY_FAILED_MESSAGE.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct ContactRelay {
    mailer: Arc<dyn Mailer>,
    settings: Arc<ContactMailSettings>,
    send_timeout: Duration,
}

impl ContactRelay {
    pub fn new(mailer: Arc<dyn Mailer>, settings: Arc<ContactMailSettings>) -> Self {
        Self {
            mailer,
            settings,
            send_timeout: DEFAULT_SEND_TIMEOUT,
        }
    }

    /// Bound each individual send. A submission makes at most two sends.
    pub fn with_send_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = timeout;
        self
    }

    pub fn send_timeout(&self) -> Duration {
        self.send_timeout
    }

    pub fn transport_name(&self) -> &'static str {
        self.mailer.name()
    }

    /// Validate and relay a submission.
    ///
    /// Sends exactly one notification and, if that succeeds, exactly one
    /// auto-reply. A rejected submission sends nothing.
    pub async fn submit(&self, input: &ContactSubmission) -> ContactOutcome {
        let submission = match contact::validate(input) {
            Ok(valid) => valid,
            Err(rejection) => {
                tracing::debug!(reason = %rejection, "Contact submission rejected");
                return ContactOutcome::Rejected(rejection);
            }
        };

        let notification = self.notification(&submission);
        if let Err(e) = self.send(&notification).await {
            tracing::error!(
                error = %e,
                transport = self.mailer.name(),
                inquiry_type = %submission.inquiry_type,
                "Failed to deliver contact notification"
            );
            return ContactOutcome::DeliveryFailed;
        }

        let auto_reply = self.auto_reply(&submission);
        let auto_reply_sent = match self.send(&auto_reply).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to deliver contact auto-reply");
                false
            }
        };

        tracing::info!(
            inquiry_type = %submission.inquiry_type,
            recipient = %notification.to,
            auto_reply_sent,
            "Contact submission relayed"
        );

        ContactOutcome::Sent { auto_reply_sent }
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tokio::time::timeout(self.send_timeout, self.mailer.send(email))
            .await
            .map_err(|_| MailError::Timeout(self.send_timeout))?
    }

    fn notification(&self, submission: &ValidSubmission) -> OutgoingEmail {
        OutgoingEmail {
            from: self.settings.notification_from.clone(),
            to: self
                .settings
                .recipient_for(submission.inquiry_type)
                .to_string(),
            bcc: self.settings.bcc.clone(),
            reply_to: Some(submission.email.clone()),
            subject: submission.notification_subject(),
            html: notification_html(submission),
        }
    }

    fn auto_reply(&self, submission: &ValidSubmission) -> OutgoingEmail {
        OutgoingEmail {
            from: self.settings.auto_reply_from.clone(),
            to: submission.email.clone(),
            bcc: Vec::new(),
            reply_to: None,
            subject: contact::AUTO_REPLY_SUBJECT.to_string(),
            html: auto_reply_html(submission, &self.settings),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
