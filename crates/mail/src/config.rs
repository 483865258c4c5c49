//! Mail transport and contact-routing configuration.
//!
//! Transport selection follows the environment: `RESEND_API_KEY` wins, then
//! `SMTP_HOST`. With neither set [`TransportConfig::from_env`] returns
//! `None` and no mailer should be constructed.

use std::collections::HashMap;
use std::time::Duration;

use easi_core::contact::InquiryType;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default Resend endpoint.
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Upper bound for delivering a single email, on either transport.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_NOTIFICATION_FROM: &str = "EASI Contact Form <admin@itherapyllc.com>";
const DEFAULT_AUTO_REPLY_FROM: &str = "EASI <admin@itherapyllc.com>";
const DEFAULT_BCC: [&str; 2] = ["tom@northernspeech.com", "info@northernspeech.com"];
const DEFAULT_SITE_URL: &str = "https://easi-as.com";
const DEFAULT_SUPPORT_PHONE: &str = "707-651-9915";

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ResendConfig {
    pub api_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Connection and command timeout.
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub enum TransportConfig {
    Resend(ResendConfig),
    Smtp(SmtpConfig),
}

impl TransportConfig {
    /// Load the transport from environment variables.
    ///
    /// | Variable         | Required | Default                          |
    /// |------------------|----------|----------------------------------|
    /// | `RESEND_API_KEY` | one of   | -                                |
    /// | `RESEND_API_URL` | no       | `https://api.resend.com/emails`  |
    /// | `SMTP_HOST`      | one of   | -                                |
    /// | `SMTP_PORT`      | no       | `587`                            |
    /// | `SMTP_USER`      | no       | -                                |
    /// | `SMTP_PASSWORD`  | no       | -                                |
    pub fn from_env() -> Option<Self> {
        if let Some(api_key) = non_empty_var("RESEND_API_KEY") {
            return Some(Self::Resend(ResendConfig {
                api_key,
                api_url: non_empty_var("RESEND_API_URL")
                    .unwrap_or_else(|| DEFAULT_RESEND_API_URL.to_string()),
                timeout: DEFAULT_SEND_TIMEOUT,
            }));
        }

        let smtp_host = non_empty_var("SMTP_HOST")?;
        Some(Self::Smtp(SmtpConfig {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: non_empty_var("SMTP_USER"),
            smtp_password: non_empty_var("SMTP_PASSWORD"),
            timeout: DEFAULT_SEND_TIMEOUT,
        }))
    }
}

// ---------------------------------------------------------------------------
// Contact settings
// ---------------------------------------------------------------------------

/// Who sends, who is copied, and where each inquiry type is routed.
#[derive(Debug, Clone)]
pub struct ContactMailSettings {
    pub notification_from: String,
    pub auto_reply_from: String,
    pub bcc: Vec<String>,
    /// Per-inquiry recipient overrides. Missing entries fall back to
    /// [`InquiryType::default_recipient`].
    pub routes: HashMap<InquiryType, String>,
    pub site_url: String,
    pub support_phone: String,
}

impl Default for ContactMailSettings {
    fn default() -> Self {
        Self {
            notification_from: DEFAULT_NOTIFICATION_FROM.to_string(),
            auto_reply_from: DEFAULT_AUTO_REPLY_FROM.to_string(),
            bcc: DEFAULT_BCC.iter().map(|s| s.to_string()).collect(),
            routes: HashMap::new(),
            site_url: DEFAULT_SITE_URL.to_string(),
            support_phone: DEFAULT_SUPPORT_PHONE.to_string(),
        }
    }
}

impl ContactMailSettings {
    /// Load settings from the environment, keeping defaults for anything
    /// unset.
    ///
    /// | Variable                   | Default                                       |
    /// |----------------------------|-----------------------------------------------|
    /// | `MAIL_FROM_NOTIFICATION`   | `EASI Contact Form <admin@itherapyllc.com>`   |
    /// | `MAIL_FROM_AUTOREPLY`      | `EASI <admin@itherapyllc.com>`                |
    /// | `MAIL_BCC`                 | `tom@northernspeech.com,info@northernspeech.com` |
    /// | `CONTACT_ROUTE_<TYPE>`     | see [`InquiryType::default_recipient`]        |
    /// | `SITE_BASE_URL`            | `https://easi-as.com`                         |
    /// | `SUPPORT_PHONE`            | `707-651-9915`                                |
    pub fn from_env() -> Self {
        let mut settings = Self::default();

        if let Some(from) = non_empty_var("MAIL_FROM_NOTIFICATION") {
            settings.notification_from = from;
        }
        if let Some(from) = non_empty_var("MAIL_FROM_AUTOREPLY") {
            settings.auto_reply_from = from;
        }
        if let Ok(bcc) = std::env::var("MAIL_BCC") {
            settings.bcc = split_list(&bcc);
        }
        for inquiry in InquiryType::ALL {
            let key = format!("CONTACT_ROUTE_{}", inquiry.as_str().to_ascii_uppercase());
            if let Some(recipient) = non_empty_var(&key) {
                settings.routes.insert(inquiry, recipient);
            }
        }
        if let Some(url) = non_empty_var("SITE_BASE_URL") {
            settings.site_url = url.trim_end_matches('/').to_string();
        }
        if let Some(phone) = non_empty_var("SUPPORT_PHONE") {
            settings.support_phone = phone;
        }

        settings
    }

    pub fn recipient_for(&self, inquiry: InquiryType) -> &str {
        self.routes
            .get(&inquiry)
            .map(String::as_str)
            .unwrap_or_else(|| inquiry.default_recipient())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Split a comma-separated list, dropping blanks.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_copy_both_northern_speech_inboxes() {
        let settings = ContactMailSettings::default();
        assert_eq!(
            settings.bcc,
            vec!["tom@northernspeech.com", "info@northernspeech.com"]
        );
    }

    #[test]
    fn recipient_falls_back_to_default_route() {
        let mut settings = ContactMailSettings::default();
        assert_eq!(
            settings.recipient_for(InquiryType::Press),
            "lois@itherapyllc.com"
        );

        settings
            .routes
            .insert(InquiryType::Press, "press@example.com".into());
        assert_eq!(settings.recipient_for(InquiryType::Press), "press@example.com");
        assert_eq!(
            settings.recipient_for(InquiryType::Support),
            "admin@itherapyllc.com"
        );
    }

    #[test]
    fn split_list_drops_blanks() {
        assert_eq!(split_list(" a@x.io, ,b@y.io,"), vec!["a@x.io", "b@y.io"]);
        assert!(split_list("").is_empty());
    }
}
