//! HTML bodies for the contact notification and the visitor auto-reply.
//!
//! Every value that came from the visitor goes through [`escape_html`].

use easi_core::contact::ValidSubmission;
use easi_core::html::{encode_mailto_address, encode_mailto_component, escape_html};

use crate::config::ContactMailSettings;

const BODY_STYLE: &str = "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
padding: 20px; background-color: #f5f5f5;";
const CARD_STYLE: &str = "max-width: 600px; margin: 0 auto; background: white; border-radius: 12px; \
overflow: hidden; box-shadow: 0 4px 6px rgba(0,0,0,0.1);";
const LABEL_CELL: &str = "padding: 12px 0; border-bottom: 1px solid #eee; color: #6b7280; font-size: 14px; width: 120px;";
const VALUE_CELL: &str = "padding: 12px 0; border-bottom: 1px solid #eee; color: #1f2937;";
const BUTTON_STYLE: &str = "display: inline-block; background: #14B8A6; color: white; padding: 12px 24px; \
border-radius: 8px; text-decoration: none; font-weight: 500;";
const FOOTER_STYLE: &str = "background: #f8fafc; padding: 16px 24px; text-align: center; border-top: 1px solid #eee;";

fn document(inner: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n</head>\n\
         <body style=\"{BODY_STYLE}\">\n<div style=\"{CARD_STYLE}\">\n{inner}\n</div>\n</body>\n</html>\n"
    )
}

fn row(label: &str, value_html: &str) -> String {
    format!(
        "<tr><td style=\"{LABEL_CELL}\">{label}</td><td style=\"{VALUE_CELL}\">{value_html}</td></tr>\n"
    )
}

/// Notification sent to the routed admin inbox.
pub fn notification_html(submission: &ValidSubmission) -> String {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let mailto = encode_mailto_address(&submission.email);
    let subject = escape_html(&submission.subject);
    let label = escape_html(submission.inquiry_type.label());

    let mut rows = String::new();
    rows.push_str(&row("Name", &name));
    rows.push_str(&row(
        "Email",
        &format!("<a href=\"mailto:{mailto}\" style=\"color: #14B8A6; text-decoration: none;\">{email}</a>"),
    ));
    if let Some(org) = &submission.organization {
        rows.push_str(&row("Organization", &escape_html(org)));
    }
    rows.push_str(&row("Subject", &subject));

    let reply_href = format!(
        "mailto:{}?subject={}",
        mailto,
        encode_mailto_component(&format!("Re: {}", submission.subject))
    );

    let inner = format!(
        "<div style=\"background: linear-gradient(135deg, #3F4B5B 0%, #2d3748 100%); padding: 24px; text-align: center;\">\n\
         <h1 style=\"color: white; margin: 0; font-size: 24px;\">New Contact Form Submission</h1>\n\
         <p style=\"color: rgba(255,255,255,0.8); margin: 8px 0 0 0; font-size: 14px;\">{label}</p>\n\
         </div>\n\
         <div style=\"padding: 24px;\">\n\
         <table style=\"width: 100%; border-collapse: collapse;\">\n{rows}</table>\n\
         <div style=\"margin-top: 24px;\">\n\
         <h3 style=\"color: #3F4B5B; font-size: 14px; text-transform: uppercase; letter-spacing: 0.5px; margin: 0 0 12px 0;\">Message</h3>\n\
         <div style=\"background: #f8fafc; border-radius: 8px; padding: 16px; color: #374151; line-height: 1.6; white-space: pre-wrap;\">{message}</div>\n\
         </div>\n\
         <div style=\"margin-top: 24px; text-align: center;\">\n\
         <a href=\"{reply_href}\" style=\"{BUTTON_STYLE}\">Reply to {first}</a>\n\
         </div>\n\
         </div>\n\
         <div style=\"{FOOTER_STYLE}\">\n\
         <p style=\"color: #9ca3af; font-size: 12px; margin: 0;\">This email was sent from the EASI website contact form.</p>\n\
         </div>",
        message = escape_html(&submission.message),
        first = escape_html(submission.first_name()),
    );

    document(&inner)
}

/// Auto-reply sent to the visitor.
pub fn auto_reply_html(submission: &ValidSubmission, settings: &ContactMailSettings) -> String {
    let site = escape_html(&settings.site_url);
    let phone = escape_html(&settings.support_phone);
    let site_host = settings
        .site_url
        .trim_start_matches("https://")
        .trim_start_matches("http://");

    let inner = format!(
        "<div style=\"background: linear-gradient(135deg, #14B8A6 0%, #0d9488 100%); padding: 32px; text-align: center;\">\n\
         <h1 style=\"color: white; margin: 0; font-size: 24px;\">Thank You, {first}!</h1>\n\
         </div>\n\
         <div style=\"padding: 32px;\">\n\
         <p style=\"color: #374151; line-height: 1.6; margin: 0 0 16px 0;\">We've received your message and appreciate you reaching out to EASI.</p>\n\
         <p style=\"color: #374151; line-height: 1.6; margin: 0 0 16px 0;\">Our team reviews all inquiries and will get back to you within <strong>1-2 business days</strong>. \
         If you have an urgent matter, please call us at <a href=\"tel:{phone}\" style=\"color: #14B8A6;\">{phone}</a>.</p>\n\
         <div style=\"background: #f0fdfa; border-radius: 8px; padding: 16px; margin: 24px 0;\">\n\
         <p style=\"color: #0d9488; font-weight: 500; margin: 0 0 8px 0;\">Your inquiry:</p>\n\
         <p style=\"color: #374151; margin: 0; font-style: italic;\">\"{subject}\"</p>\n\
         </div>\n\
         <p style=\"color: #374151; line-height: 1.6; margin: 0;\">In the meantime, you can learn more about how EASI transforms speech-language assessment on our website.</p>\n\
         <div style=\"margin-top: 24px; text-align: center;\">\n\
         <a href=\"{site}\" style=\"{BUTTON_STYLE}\">Visit EASI</a>\n\
         </div>\n\
         </div>\n\
         <div style=\"{FOOTER_STYLE}\">\n\
         <p style=\"color: #9ca3af; font-size: 12px; margin: 0;\">iTherapy, LLC | Vallejo, CA | <a href=\"{site}\" style=\"color: #14B8A6;\">{host}</a></p>\n\
         </div>",
        first = escape_html(submission.first_name()),
        subject = escape_html(&submission.subject),
        host = escape_html(site_host),
    );

    document(&inner)
}

#[cfg(test)]
mod tests {
    use easi_core::contact::{validate, ContactSubmission, InquiryType};

    use super::*;

    fn submission(organization: &str) -> ValidSubmission {
        validate(&ContactSubmission {
            name: "Jane <b>Doe</b>".into(),
            email: "jane@school.org".into(),
            organization: organization.into(),
            subject: "Demo & pricing".into(),
            message: "<script>alert(1)</script>".into(),
            inquiry_type: InquiryType::Demo,
        })
        .unwrap()
    }

    #[test]
    fn notification_escapes_visitor_input() {
        let html = notification_html(&submission(""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Jane &lt;b&gt;Doe&lt;/b&gt;"));
        assert!(html.contains("Request a Demo"));
    }

    #[test]
    fn notification_omits_empty_organization_row() {
        assert!(!notification_html(&submission("")).contains("Organization"));
        let html = notification_html(&submission("Vallejo USD"));
        assert!(html.contains("Organization"));
        assert!(html.contains("Vallejo USD"));
    }

    #[test]
    fn notification_reply_button_uses_first_name_and_encoded_subject() {
        let html = notification_html(&submission(""));
        assert!(html.contains("Reply to Jane</a>"));
        assert!(html.contains("mailto:jane@school.org?subject=Re%3A%20Demo%20%26%20pricing"));
    }

    #[test]
    fn notification_mailto_cannot_carry_extra_query_parameters() {
        let valid = validate(&ContactSubmission {
            name: "Jane".into(),
            email: "jane@x.org?body=wire&cc=x".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
            ..Default::default()
        })
        .unwrap();

        let html = notification_html(&valid);
        assert!(html.contains("href=\"mailto:jane@x.org%3Fbody%3Dwire%26cc%3Dx\""));
        assert!(html.contains("mailto:jane@x.org%3Fbody%3Dwire%26cc%3Dx?subject=Re%3A%20Hi"));
        assert!(!html.contains("mailto:jane@x.org?"));
    }

    #[test]
    fn auto_reply_greets_by_first_name_and_quotes_subject() {
        let settings = ContactMailSettings::default();
        let html = auto_reply_html(&submission(""), &settings);
        assert!(html.contains("Thank You, Jane!"));
        assert!(html.contains("\"Demo &amp; pricing\""));
        assert!(html.contains("tel:707-651-9915"));
        assert!(html.contains(">easi-as.com</a>"));
    }
}
