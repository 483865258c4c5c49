//! Letter-by-letter headings.
//!
//! Every letter becomes its own inline span tagged with an index (single
//! line) or a `line-word-letter` key (multi-line). `static/js/site.js`
//! pushes letters away from the pointer; without script the heading reads
//! as plain text.

use easi_core::html::escape_html;

/// Element used for the heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeadingTag {
    H1,
    #[default]
    H2,
    H3,
    H4,
    Span,
}

impl HeadingTag {
    pub fn as_str(self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::Span => "span",
        }
    }
}

/// Colour treatment for the letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// Plain letters that take `active_color` while the pointer is near.
    Solid { active_color: &'static str },
    /// Gradient-clipped text.
    Gradient { from: &'static str, to: &'static str },
}

impl Default for TitleStyle {
    fn default() -> Self {
        TitleStyle::Solid {
            active_color: "#14B8A6",
        }
    }
}

impl TitleStyle {
    pub const BRAND_GRADIENT: TitleStyle = TitleStyle::Gradient {
        from: "#8B5CF6",
        to: "#14B8A6",
    };

    fn letter_style(self) -> String {
        match self {
            TitleStyle::Solid { .. } => String::new(),
            TitleStyle::Gradient { from, to } => format!(
                " style=\"background: linear-gradient(135deg, {from}, {to}); \
                 -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;\""
            ),
        }
    }

    fn container_attrs(self) -> String {
        match self {
            TitleStyle::Solid { active_color } => format!(" data-active-color=\"{active_color}\""),
            TitleStyle::Gradient { .. } => " data-gradient=\"true\"".to_string(),
        }
    }
}

/// Render words as non-breaking groups of letter spans. `key` produces the
/// data attribute for the n-th letter of the m-th word.
fn render_words(text: &str, style: TitleStyle, mut key: impl FnMut(usize, usize) -> String) -> String {
    let letter_style = style.letter_style();
    let words: Vec<&str> = text.split(' ').collect();
    let mut out = String::new();

    for (word_index, word) in words.iter().enumerate() {
        out.push_str("<span class=\"title-word\">");
        for (letter_index, letter) in word.chars().enumerate() {
            let mut buf = [0u8; 4];
            out.push_str(&format!(
                "<span class=\"title-letter\" {}{}>{}</span>",
                key(word_index, letter_index),
                letter_style,
                escape_html(letter.encode_utf8(&mut buf)),
            ));
        }
        if word_index + 1 < words.len() {
            out.push_str("<span class=\"title-space\">&nbsp;</span>");
        }
        out.push_str("</span>");
    }
    out
}

/// Single-line animated heading. Blank text renders an empty heading.
pub fn animated_title(text: &str, tag: HeadingTag, class: &str, style: TitleStyle) -> String {
    let tag = tag.as_str();
    let class = escape_html(class);

    if text.trim().is_empty() {
        return format!("<{tag} class=\"{class}\"></{tag}>");
    }

    let mut index = 0usize;
    let letters = render_words(text, style, |_, _| {
        let attr = format!("data-letter-index=\"{index}\"");
        index += 1;
        attr
    });

    format!(
        "<div class=\"animated-title\"{}><{tag} class=\"{class}\" aria-label=\"{}\">{letters}</{tag}></div>",
        style.container_attrs(),
        escape_html(text),
    )
}

/// One line of a multi-line heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleLine<'a> {
    pub text: &'a str,
    pub class: &'a str,
    pub gradient: Option<(&'static str, &'static str)>,
}

impl<'a> TitleLine<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }

    pub fn gradient(text: &'a str, from: &'static str, to: &'static str) -> Self {
        Self {
            text,
            gradient: Some((from, to)),
            ..Default::default()
        }
    }
}

/// Multi-line animated heading. No lines renders an empty heading; a blank
/// line renders an empty block.
pub fn animated_title_lines(lines: &[TitleLine<'_>], tag: HeadingTag, class: &str) -> String {
    let tag = tag.as_str();
    let class = escape_html(class);

    if lines.is_empty() {
        return format!("<{tag} class=\"{class}\"></{tag}>");
    }

    let mut body = String::new();
    let mut label = Vec::with_capacity(lines.len());
    for (line_index, line) in lines.iter().enumerate() {
        let line_class = escape_html(line.class);
        if line.text.trim().is_empty() {
            body.push_str(&format!("<span class=\"title-line {line_class}\"></span>"));
            continue;
        }
        label.push(line.text);

        let style = match line.gradient {
            Some((from, to)) => TitleStyle::Gradient { from, to },
            None => TitleStyle::default(),
        };
        let letters = render_words(line.text, style, |word, letter| {
            format!("data-letter-key=\"{line_index}-{word}-{letter}\"")
        });
        body.push_str(&format!(
            "<span class=\"title-line {line_class}\">{letters}</span>"
        ));
    }

    format!(
        "<div class=\"animated-title\"><{tag} class=\"{class}\" aria-label=\"{}\">{body}</{tag}></div>",
        escape_html(&label.join(" ")),
    )
}
