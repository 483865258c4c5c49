//! Full-page renderers. Each page module owns its [`PageMeta`] and body;
//! the functions here wrap the body in the shared [`layout`].

pub mod about;
pub mod comparison;
pub mod contact;
pub mod home;
pub mod not_found;
pub mod privacy;

use easi_core::contact::InquiryType;

use crate::layout::{layout, PageMeta};

fn page(meta: &PageMeta, base_url: &str, body: String) -> String {
    layout(meta, base_url, &body)
}

pub fn home_page(base_url: &str) -> String {
    page(&home::META, base_url, home::render())
}

pub fn about_page(base_url: &str) -> String {
    page(&about::META, base_url, about::render())
}

pub fn comparison_page(base_url: &str) -> String {
    page(&comparison::META, base_url, comparison::render())
}

pub fn contact_page(base_url: &str, selected: InquiryType) -> String {
    page(&contact::META, base_url, contact::render(selected))
}

pub fn privacy_page(base_url: &str) -> String {
    page(&privacy::META, base_url, privacy::render())
}

pub fn not_found_page(base_url: &str) -> String {
    page(&not_found::META, base_url, not_found::render())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://easi-as.com";

    #[test]
    fn every_page_renders_a_complete_document() {
        for html in [
            home_page(BASE),
            about_page(BASE),
            comparison_page(BASE),
            contact_page(BASE, InquiryType::General),
            privacy_page(BASE),
            not_found_page(BASE),
        ] {
            assert!(html.starts_with("<!DOCTYPE html>"));
            assert!(html.trim_end().ends_with("</html>"));
            assert!(html.contains("class=\"site-header\""));
            assert!(html.contains("class=\"site-footer\""));
        }
    }

    #[test]
    fn only_home_shows_the_beta_banner() {
        assert!(home_page(BASE).contains("data-beta-banner"));
        assert!(!about_page(BASE).contains("data-beta-banner"));
    }

    #[test]
    fn only_contact_loads_the_form_script() {
        assert!(contact_page(BASE, InquiryType::Support).contains("/static/js/contact.js"));
        assert!(!privacy_page(BASE).contains("/static/js/contact.js"));
    }
}
