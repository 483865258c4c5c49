//! Sitemap entries and XML rendering for `/sitemap.xml` and `/robots.txt`.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::html::escape_html;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SitemapEntry {
    /// Path relative to the site root, including any `#anchor`. Empty for `/`.
    pub path: &'static str,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const fn entry(path: &'static str, change_frequency: ChangeFrequency, priority: f32) -> SitemapEntry {
    SitemapEntry {
        path,
        change_frequency,
        priority,
    }
}

use ChangeFrequency::{Monthly, Weekly};

/// Pages first, then section anchors for deep linking.
pub const ENTRIES: &[SitemapEntry] = &[
    entry("", Weekly, 1.0),
    entry("/comparison", Monthly, 0.95),
    entry("/privacy", Monthly, 0.9),
    entry("/about", Monthly, 0.85),
    entry("/contact", Monthly, 0.8),
    entry("/#features", Weekly, 0.85),
    entry("/#how-it-works", Weekly, 0.85),
    entry("/#myslp", Weekly, 0.85),
    entry("/#pricing", Monthly, 0.85),
    entry("/#why-easi", Weekly, 0.8),
    entry("/#team", Monthly, 0.75),
    entry("/#faq", Weekly, 0.8),
    entry("/#security", Monthly, 0.8),
    entry("/privacy#hipaa", Monthly, 0.8),
    entry("/privacy#ferpa", Monthly, 0.8),
    entry("/privacy#ndpa", Monthly, 0.8),
    entry("/privacy#nist", Monthly, 0.75),
    entry("/comparison#easi-vs-chatgpt", Monthly, 0.85),
    entry("/comparison#easi-vs-salt", Monthly, 0.85),
];

/// Render the sitemap XML document for `base_url` (no trailing slash).
pub fn render_sitemap(base_url: &str, last_modified: DateTime<Utc>) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = last_modified.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for e in ENTRIES {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.2}</priority>\n  </url>\n",
            escape_html(&format!("{base}{}", e.path)),
            lastmod,
            e.change_frequency.as_str(),
            e.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

pub fn render_robots(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        base_url.trim_end_matches('/')
    )
}
