use easi_core::contact::InquiryType;

use crate::components::chrome::SUPPORT_PHONE;
use crate::components::{animated_title, contact_form, reveal, HeadingTag, Reveal, TitleStyle};
use crate::layout::PageMeta;

pub const META: PageMeta = PageMeta::new(
    "Contact Us | EASI - Speech-Language Assessment Platform",
    "Get in touch with the EASI team. Questions about our speech-language assessment platform? Request a demo, get technical support, or explore partnership opportunities.",
    "/contact",
)
.with_scripts(&["/static/js/contact.js"]);

pub fn render(selected: InquiryType) -> String {
    format!(
        r#"<section class="page-hero"><div class="container narrow">
<span class="pill">We're here to help</span>
{title}
<p class="lead">Have questions about EASI? Want to see a demo? Our team of SLPs and clinical specialists is ready to help you transform your assessment workflow.</p>
</div></section>
<section class="section"><div class="container contact-grid">
<aside class="contact-aside">
<div class="panel"><h2>Other Ways to Reach Us</h2>
<div class="contact-item"><h3>Phone</h3><a href="tel:{SUPPORT_PHONE}">{SUPPORT_PHONE}</a><p>For urgent technical support</p></div>
<div class="contact-item"><h3>Response Time</h3><p>1-2 business days</p><p>Mon-Fri, 9am-5pm PT</p></div>
<div class="contact-item"><h3>Headquarters</h3><p>Vallejo, California</p><p>iTherapy, LLC</p></div>
</div>
<div class="panel"><h3>Your Privacy Matters</h3>
<p>We take your privacy seriously. Your contact information is never shared with third parties or used for unsolicited marketing.</p>
<div class="badge-row"><span class="badge">HIPAA Compliant</span><span class="badge">FERPA Compliant</span><span class="badge">Secure Form</span></div>
</div>
<div class="panel panel-accent"><h3>School Districts</h3>
<p>Looking for district-wide licensing? EASI is distributed exclusively through Northern Speech Services for educational institutions.</p>
<a href="https://www.northernspeech.com/12648/" target="_blank" rel="noopener noreferrer">Visit Northern Speech Services &rarr;</a>
</div>
</aside>
{form}
</div></section>"#,
        title = animated_title(
            "Let's Start a Conversation",
            HeadingTag::H1,
            "page-title",
            TitleStyle::default()
        ),
        form = reveal(
            Reveal::Right,
            0,
            &format!(
                "<div class=\"panel\"><h2>Send Us a Message</h2>\
                 <p>Fill out the form below and we&#39;ll get back to you as soon as possible.</p>{}</div>",
                contact_form(selected)
            ),
        ),
    )
}
