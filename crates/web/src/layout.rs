//! Document shell shared by every page.

use chrono::{Datelike, Utc};
use easi_core::html::escape_html;
use serde_json::json;

use crate::components::{beta_banner, chat_widget, footer, header};

pub const SITE_NAME: &str = "EASI - Evaluative Artificial Speech Intelligence";
pub const THEME_COLOR: &str = "#3F4B5B";

/// Per-page metadata.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    /// Path relative to the site origin, used for the canonical link.
    pub path: &'static str,
    /// Extra scripts loaded after `site.js` and `chat.js`.
    pub scripts: &'static [&'static str],
    pub show_banner: bool,
    /// Emitted as `<meta name="robots" content="noindex">` when false.
    pub indexable: bool,
}

impl PageMeta {
    pub const fn new(title: &'static str, description: &'static str, path: &'static str) -> Self {
        Self {
            title,
            description,
            path,
            scripts: &[],
            show_banner: false,
            indexable: true,
        }
    }

    pub const fn with_banner(mut self) -> Self {
        self.show_banner = true;
        self
    }

    pub const fn with_scripts(mut self, scripts: &'static [&'static str]) -> Self {
        self.scripts = scripts;
        self
    }

    pub const fn noindex(mut self) -> Self {
        self.indexable = false;
        self
    }
}

/// schema.org description of the product, embedded on every page.
fn structured_data(base_url: &str) -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "@id": format!("{base_url}/#software"),
        "name": SITE_NAME,
        "alternateName": ["EASI", "EASI Assessment", "MySLP"],
        "applicationCategory": "HealthApplication",
        "operatingSystem": "Web-based, Cloud",
        "url": base_url,
        "offers": {
            "@type": "Offer",
            "price": "199.00",
            "priceCurrency": "USD",
            "seller": { "@type": "Organization", "name": "Northern Speech Services", "url": "https://northernspeech.com" }
        },
        "author": { "@type": "Organization", "name": "iTherapy, LLC" },
        "award": ["NSF SBIR Phase II Award #2133148"]
    })
    .to_string()
    // Keep `</script>` out of the inline block.
    .replace("</", "<\\/")
}

/// Wrap `body` in the full document: head metadata, header, optional beta
/// banner, footer, chat widget and scripts.
pub fn layout(meta: &PageMeta, base_url: &str, body: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let canonical = format!("{base_url}{}", meta.path);
    let title = escape_html(meta.title);
    let description = escape_html(meta.description);
    let robots = if meta.indexable {
        "index, follow"
    } else {
        "noindex"
    };
    let banner = if meta.show_banner {
        beta_banner()
    } else {
        String::new()
    };
    let scripts: String = meta
        .scripts
        .iter()
        .map(|src| format!("<script src=\"{}\" defer></script>", escape_html(src)))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="theme-color" content="{THEME_COLOR}">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="robots" content="{robots}">
<link rel="canonical" href="{canonical}">
<link rel="icon" href="/static/img/easi-logo.svg">
<meta property="og:type" content="website">
<meta property="og:site_name" content="{SITE_NAME}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<meta property="og:url" content="{canonical}">
<meta name="twitter:card" content="summary_large_image">
<meta name="twitter:site" content="@iTherapyLLC">
<link rel="stylesheet" href="/static/css/site.css">
<script type="application/ld+json">{ld}</script>
</head>
<body>
{banner}{header}
<main id="main">
{body}
</main>
{footer}
{chat}
<script src="/static/js/site.js" defer></script>
<script src="/static/js/chat.js" defer></script>
{scripts}
</body>
</html>
"#,
        ld = structured_data(base_url),
        header = header(),
        footer = footer(Utc::now().year()),
        chat = chat_widget(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_has_canonical_link_and_escaped_title() {
        let meta = PageMeta::new("A & B", "desc", "/about");
        let html = layout(&meta, "https://easi-as.com/", "<p>body</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("<link rel=\"canonical\" href=\"https://easi-as.com/about\">"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("/static/js/chat.js"));
    }

    #[test]
    fn banner_and_scripts_are_opt_in() {
        let plain = layout(&PageMeta::new("t", "d", "/"), "https://x.test", "");
        assert!(!plain.contains("data-beta-banner"));

        let meta = PageMeta::new("t", "d", "/contact")
            .with_banner()
            .with_scripts(&["/static/js/contact.js"]);
        let html = layout(&meta, "https://x.test", "");
        assert!(html.contains("data-beta-banner"));
        assert!(html.contains("<script src=\"/static/js/contact.js\" defer></script>"));
    }

    #[test]
    fn noindex_pages_say_so() {
        let html = layout(&PageMeta::new("t", "d", "/x").noindex(), "https://x.test", "");
        assert!(html.contains("content=\"noindex\""));
    }

    #[test]
    fn structured_data_is_valid_json() {
        let ld = structured_data("https://easi-as.com");
        let value: serde_json::Value = serde_json::from_str(&ld).unwrap();
        assert_eq!(value["offers"]["price"], "199.00");
    }
}
