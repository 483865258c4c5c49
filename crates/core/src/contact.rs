//! Contact form submission model, validation and inquiry routing.
//!
//! A submission is validated here before anything is sent. Validation
//! produces a [`ValidSubmission`] with trimmed fields; the mail crate only
//! ever formats and sends that type.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Same shape check the browser form applies: something@something.tld.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

pub const MAX_NAME_LENGTH: u64 = 200;
pub const MAX_EMAIL_LENGTH: u64 = 254;
pub const MAX_ORGANIZATION_LENGTH: u64 = 200;
pub const MAX_SUBJECT_LENGTH: u64 = 200;
pub const MAX_MESSAGE_LENGTH: u64 = 10_000;

/// Subject line of the auto-reply sent to the visitor.
pub const AUTO_REPLY_SUBJECT: &str = "Thank you for contacting EASI";

/// Shown to the visitor when the notification could not be delivered.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Shown to the visitor when no mail transport is configured or an
/// unexpected error occurs.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

// ---------------------------------------------------------------------------
// InquiryType
// ---------------------------------------------------------------------------

/// What the visitor wants to talk about. Decides the subject prefix and
/// which inbox receives the notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    #[default]
    General,
    Demo,
    Support,
    Partnership,
    Press,
    Billing,
    Clinical,
}

impl InquiryType {
    /// Every inquiry type, in the order the contact form lists them.
    pub const ALL: [InquiryType; 7] = [
        InquiryType::General,
        InquiryType::Demo,
        InquiryType::Support,
        InquiryType::Partnership,
        InquiryType::Press,
        InquiryType::Billing,
        InquiryType::Clinical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::Demo => "demo",
            InquiryType::Support => "support",
            InquiryType::Partnership => "partnership",
            InquiryType::Press => "press",
            InquiryType::Billing => "billing",
            InquiryType::Clinical => "clinical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::General => "General Inquiry",
            InquiryType::Demo => "Request a Demo",
            InquiryType::Support => "Technical Support",
            InquiryType::Partnership => "Partnership Opportunity",
            InquiryType::Press => "Press & Media",
            InquiryType::Billing => "Billing & Ordering",
            InquiryType::Clinical => "Clinical Questions",
        }
    }

    /// Inbox that receives notifications for this inquiry type unless
    /// overridden in configuration.
    pub fn default_recipient(self) -> &'static str {
        match self {
            InquiryType::General
            | InquiryType::Demo
            | InquiryType::Partnership
            | InquiryType::Clinical => "matthew@itherapyllc.com",
            InquiryType::Support => "admin@itherapyllc.com",
            InquiryType::Press => "lois@itherapyllc.com",
            InquiryType::Billing => "info@northernspeech.com",
        }
    }

    /// Parse the lowercase slug used on the wire and in `?type=` links.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(slug.trim()))
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// Raw contact form input as posted by the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    #[validate(length(max = MAX_NAME_LENGTH, message = "Name is too long."))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = MAX_EMAIL_LENGTH, message = "Email is too long."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = MAX_ORGANIZATION_LENGTH, message = "Organization is too long."))]
    pub organization: String,
    #[serde(default)]
    #[validate(length(max = MAX_SUBJECT_LENGTH, message = "Subject is too long."))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(max = MAX_MESSAGE_LENGTH, message = "Message is too long."))]
    pub message: String,
    #[serde(default)]
    pub inquiry_type: InquiryType,
}

/// A submission that passed validation. Fields are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    pub name: String,
    pub email: String,
    pub organization: Option<String>,
    pub subject: String,
    pub message: String,
    pub inquiry_type: InquiryType,
}

impl ValidSubmission {
    pub fn first_name(&self) -> &str {
        first_name(&self.name)
    }

    pub fn notification_subject(&self) -> String {
        notification_subject(self.inquiry_type, &self.subject)
    }
}

/// Why a submission was refused. The display text is shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRejection {
    #[error("Please fill in all required fields.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("{0}")]
    TooLong(String),
}

/// Fields checked for length, in the order they appear on the form.
const LENGTH_CHECKED_FIELDS: [&str; 5] = ["name", "email", "organization", "subject", "message"];

/// Validate a raw submission.
///
/// Checks, in order: required fields present, email shape, field lengths.
pub fn validate(input: &ContactSubmission) -> Result<ValidSubmission, ContactRejection> {
    let trimmed = ContactSubmission {
        name: input.name.trim().to_string(),
        email: input.email.trim().to_string(),
        organization: input.organization.trim().to_string(),
        subject: input.subject.trim().to_string(),
        message: input.message.trim().to_string(),
        inquiry_type: input.inquiry_type,
    };

    if trimmed.name.is_empty()
        || trimmed.email.is_empty()
        || trimmed.subject.is_empty()
        || trimmed.message.is_empty()
    {
        return Err(ContactRejection::MissingFields);
    }

    if !is_valid_email(&trimmed.email) {
        return Err(ContactRejection::InvalidEmail);
    }

    if let Err(errors) = trimmed.validate() {
        let field_errors = errors.field_errors();
        let message = LENGTH_CHECKED_FIELDS
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "A field is too long.".to_string());
        return Err(ContactRejection::TooLong(message));
    }

    Ok(ValidSubmission {
        organization: (!trimmed.organization.is_empty()).then_some(trimmed.organization),
        name: trimmed.name,
        email: trimmed.email,
        subject: trimmed.subject,
        message: trimmed.message,
        inquiry_type: trimmed.inquiry_type,
    })
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// First whitespace-separated token of a name, or the whole (empty) input.
pub fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("")
}

/// Subject line for the admin notification, e.g. `[EASI - Request a Demo] Pricing`.
pub fn notification_subject(inquiry: InquiryType, subject: &str) -> String {
    format!("[EASI - {}] {}", inquiry.label(), subject)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
