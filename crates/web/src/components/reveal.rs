//! Scroll-reveal wrappers. The `visible` class is added by `site.js` once
//! the element enters the viewport.

/// Entrance animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Up,
    Left,
    Right,
    Scale,
}

impl Reveal {
    pub fn class(self) -> &'static str {
        match self {
            Reveal::Up => "reveal",
            Reveal::Left => "reveal-left",
            Reveal::Right => "reveal-right",
            Reveal::Scale => "reveal-scale",
        }
    }
}

/// Wrap `inner` in a reveal container. A zero delay emits no attribute.
pub fn reveal(animation: Reveal, delay_ms: u32, inner: &str) -> String {
    reveal_with_class(animation, delay_ms, "", inner)
}

pub fn reveal_with_class(animation: Reveal, delay_ms: u32, class: &str, inner: &str) -> String {
    let class = if class.is_empty() {
        animation.class().to_string()
    } else {
        format!("{} {}", animation.class(), class)
    };
    let delay = if delay_ms > 0 {
        format!(" data-reveal-delay=\"{delay_ms}\"")
    } else {
        String::new()
    };
    format!("<div class=\"{class}\"{delay}>{inner}</div>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reveal_has_no_delay() {
        assert_eq!(reveal(Reveal::Up, 0, "x"), "<div class=\"reveal\">x</div>");
    }

    #[test]
    fn delay_and_extra_class_are_emitted() {
        let html = reveal_with_class(Reveal::Scale, 150, "card", "");
        assert_eq!(
            html,
            "<div class=\"reveal-scale card\" data-reveal-delay=\"150\"></div>"
        );
    }
}
