//! Small content blocks shared by the pages.

use easi_core::html::escape_html;

use super::reveal::{reveal_with_class, Reveal};

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

/// Hover card with an accent bar. Staggered by `index`.
pub fn feature_card(feature: &Feature, index: usize) -> String {
    let inner = format!(
        "<div class=\"feature-card\" style=\"--accent: {}\"><h3>{}</h3><p>{}</p></div>",
        escape_html(feature.accent),
        escape_html(feature.title),
        escape_html(feature.description),
    );
    reveal_with_class(Reveal::Up, index as u32 * 100, "card-cell", &inner)
}

/// Grid of feature cards. No features renders an empty grid.
pub fn feature_grid(features: &[Feature]) -> String {
    let cards: String = features
        .iter()
        .enumerate()
        .map(|(index, feature)| feature_card(feature, index))
        .collect();
    format!("<div class=\"card-grid\">{cards}</div>")
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub fn stat_row(stats: &[Stat]) -> String {
    let items: String = stats
        .iter()
        .map(|stat| {
            format!(
                "<div class=\"stat\"><span class=\"stat-value\">{}</span><span class=\"stat-label\">{}</span></div>",
                escape_html(stat.value),
                escape_html(stat.label)
            )
        })
        .collect();
    format!("<div class=\"stat-row\">{items}</div>")
}

/// Two-column comparison table. Each row is (label, ours, theirs).
pub fn comparison_table(ours: &str, theirs: &str, rows: &[(&str, &str, &str)]) -> String {
    let mut body = String::new();
    for (label, a, b) in rows {
        body.push_str(&format!(
            "<tr><th scope=\"row\">{}</th><td class=\"ours\">{}</td><td>{}</td></tr>",
            escape_html(label),
            escape_html(a),
            escape_html(b)
        ));
    }
    format!(
        "<div class=\"table-wrap\"><table class=\"comparison-table\"><thead><tr><th></th><th class=\"ours\">{}</th><th>{}</th></tr></thead><tbody>{body}</tbody></table></div>",
        escape_html(ours),
        escape_html(theirs)
    )
}

pub fn check_list(items: &[&str]) -> String {
    let items: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect();
    format!("<ul class=\"check-list\">{items}</ul>")
}
