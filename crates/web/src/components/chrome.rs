//! Site chrome: header, footer and the beta banner.

use easi_core::html::escape_html;

pub const LOGIN_URL: &str = "https://easievaluation.com/login";
pub const STORE_URL: &str = "https://www.northernspeech.com/";
pub const SUPPORT_PHONE: &str = "707-651-9915";

#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const fn link(label: &'static str, href: &'static str) -> NavLink {
    NavLink { label, href }
}

/// Home-page sections. Prefixed with `/` so they resolve from every page.
pub const NAV_LINKS: &[NavLink] = &[
    link("Features", "/#how-it-works"),
    link("ChatSLP", "/#chatslp"),
    link("Why EASI", "/#comparison"),
    link("Team", "/#team"),
    link("FAQ", "/#faq"),
];

pub const FOOTER_GROUPS: &[(&str, &[NavLink])] = &[
    (
        "Product",
        &[
            link("Features", "/#how-it-works"),
            link("How It Works", "/#how-it-works"),
            link("MySLP", "/#myslp"),
            link("FAQ", "/#faq"),
        ],
    ),
    (
        "Company",
        &[
            link("About Us", "/about"),
            link("Team", "/#team"),
            link("Why EASI", "/comparison"),
            link("Contact", "/contact"),
        ],
    ),
    (
        "Legal",
        &[
            link("Privacy & Security Policy", "/privacy"),
            link("HIPAA Compliance", "/privacy#section-1"),
            link("FERPA Compliance", "/privacy#section-3"),
            link("NDPA Documentation", "/privacy#ndpa"),
        ],
    ),
];

pub const FOOTER_BADGES: &[&str] = &[
    "NSF Phase II SBIR Award #2133148",
    "HIPAA & FERPA Compliant",
    "NIST CSF Aligned",
];

fn logo(size: u32) -> String {
    format!(
        "<span class=\"logo-mark\"><img src=\"/static/img/easi-logo.svg\" alt=\"EASI Logo\" width=\"{size}\" height=\"{size}\"></span>"
    )
}

fn external_link(class: &str, href: &str, label: &str) -> String {
    format!(
        "<a class=\"{class}\" href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(label)
    )
}

pub fn header() -> String {
    let mut nav = String::new();
    for item in NAV_LINKS {
        nav.push_str(&format!(
            "<a class=\"nav-link\" href=\"{}\">{}</a>",
            item.href,
            escape_html(item.label)
        ));
    }
    let actions = format!(
        "{}{}",
        external_link("btn btn-ghost", LOGIN_URL, "Log In"),
        external_link("btn btn-light", STORE_URL, "Get EASI at Northern Speech"),
    );

    format!(
        r#"<header class="site-header" data-scroll-header>
<div class="container"><nav class="nav-bar">
<a class="brand" href="/">{logo}<span class="brand-name">EASI</span></a>
<div class="nav-links">{nav}</div>
<div class="nav-actions">{actions}</div>
<button class="nav-toggle" type="button" aria-label="Toggle menu" aria-expanded="false" data-nav-toggle><span></span><span></span><span></span></button>
</nav>
<div class="mobile-menu" data-mobile-menu>{nav}<div class="mobile-actions">{actions}</div></div>
</div></header>"#,
        logo = logo(40),
    )
}

pub fn footer(year: i32) -> String {
    let mut groups = String::new();
    for (title, links) in FOOTER_GROUPS {
        groups.push_str(&format!("<div class=\"footer-group\"><h4>{title}</h4><ul>"));
        for item in *links {
            groups.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>",
                item.href,
                escape_html(item.label)
            ));
        }
        groups.push_str("</ul></div>");
    }

    let badges: String = FOOTER_BADGES
        .iter()
        .map(|badge| format!("<span class=\"badge-shield\">{}</span>", escape_html(badge)))
        .collect();

    format!(
        r#"<footer class="site-footer"><div class="container">
<div class="footer-grid">
<div class="footer-brand">
<a class="brand" href="/">{logo}<span class="brand-name">EASI</span></a>
<p>Evaluative Artificial Speech Intelligence. Transforming speech-language assessment through computational linguistics that preserves clinical judgment.</p>
<p>Distributed exclusively through Northern Speech Services</p>
<a class="footer-contact" href="tel:{SUPPORT_PHONE}">{SUPPORT_PHONE}</a>
<a class="footer-cta" href="/contact">Contact Us &rarr;</a>
<span class="footer-contact">Vallejo, CA</span>
</div>
{groups}
</div>
<div class="footer-bottom"><p>&copy; {year} iTherapy, LLC. All rights reserved.</p><div class="footer-badges">{badges}</div></div>
</div></footer>"#,
        logo = logo(36),
    )
}

/// Dismissible announcement bar. `site.js` hides it for the rest of the
/// session once closed.
pub fn beta_banner() -> String {
    r##"<div class="beta-banner" data-beta-banner><div class="container banner-inner">
<span class="banner-text">Join the Beta Community: be part of the evolution!</span>
<a href="/#faq">Learn more</a>
<button type="button" class="banner-close" aria-label="Dismiss banner" data-dismiss-banner>&times;</button>
</div></div>"##
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_links_every_section_and_store() {
        let html = header();
        for item in NAV_LINKS {
            assert!(html.contains(item.href));
        }
        assert!(html.contains(LOGIN_URL));
        assert!(html.contains("Get EASI at Northern Speech"));
    }

    #[test]
    fn footer_carries_legal_links_and_year() {
        let html = footer(2026);
        assert!(html.contains("&copy; 2026 iTherapy, LLC."));
        assert!(html.contains("/privacy#ndpa"));
        assert!(html.contains("Privacy &amp; Security Policy"));
        assert!(html.contains("tel:707-651-9915"));
    }

    #[test]
    fn banner_is_dismissible() {
        assert!(beta_banner().contains("data-dismiss-banner"));
    }
}
