//! Contact form posted by `static/js/contact.js` to `/api/contact`.

use easi_core::contact::{
    InquiryType, MAX_EMAIL_LENGTH, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MAX_ORGANIZATION_LENGTH,
    MAX_SUBJECT_LENGTH,
};
use easi_core::html::escape_html;

fn input(id: &str, label: &str, kind: &str, placeholder: &str, max: u64, required: bool) -> String {
    let marker = if required { " *" } else { "" };
    let required = if required { " required" } else { "" };
    format!(
        "<div class=\"field\"><label for=\"{id}\">{label}{marker}</label>\
         <input id=\"{id}\" name=\"{id}\" type=\"{kind}\" placeholder=\"{placeholder}\" maxlength=\"{max}\"{required}></div>"
    )
}

/// Render the form with `selected` preselected. Each inquiry button and the
/// hidden `inquiryType` input carry the slug the API expects.
pub fn contact_form(selected: InquiryType) -> String {
    let mut options = String::new();
    for inquiry in InquiryType::ALL {
        let active = inquiry == selected;
        options.push_str(&format!(
            "<button type=\"button\" class=\"inquiry-option{}\" data-inquiry=\"{}\" aria-pressed=\"{active}\">{}</button>",
            if active { " active" } else { "" },
            inquiry.as_str(),
            escape_html(inquiry.label()),
        ));
    }

    format!(
        r#"<div class="contact-form-wrap">
<form class="contact-form" data-contact-form novalidate>
<fieldset class="field"><legend>What can we help you with?</legend><div class="inquiry-grid">{options}</div></fieldset>
<input type="hidden" name="inquiryType" value="{selected}">
<div class="field-row">{name}{email}</div>
<div class="field-row">{organization}{subject}</div>
<div class="field"><label for="message">Your Message *</label>
<textarea id="message" name="message" rows="5" maxlength="{max_message}" required placeholder="Tell us how we can help you. Include any relevant details about your practice, caseload, or specific questions..."></textarea></div>
<div class="form-error" role="alert" hidden data-form-error></div>
<button type="submit" class="btn btn-primary btn-block" data-submit>Send Message</button>
<p class="form-note">By submitting this form, you agree to our <a href="/privacy">Privacy Policy</a>. We never share your information with third parties.</p>
</form>
<div class="form-success" hidden data-form-success>
<h3>Message Sent Successfully!</h3>
<p>Thank you for reaching out. Our team will review your message and get back to you within 1-2 business days.</p>
<button type="button" class="btn btn-primary" data-send-another>Send Another Message</button>
</div>
</div>"#,
        selected = selected.as_str(),
        name = input("name", "Full Name", "text", "Dr. Jane Smith", MAX_NAME_LENGTH, true),
        email = input("email", "Email Address", "email", "jane.smith@school.edu", MAX_EMAIL_LENGTH, true),
        organization = input(
            "organization",
            "Organization",
            "text",
            "Springfield School District",
            MAX_ORGANIZATION_LENGTH,
            false
        ),
        subject = input(
            "subject",
            "Subject",
            "text",
            "Question about EASI evaluations",
            MAX_SUBJECT_LENGTH,
            true
        ),
        max_message = MAX_MESSAGE_LENGTH,
    )
}
