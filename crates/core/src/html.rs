//! HTML escaping shared by the email templates and the page renderer.

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode a value for use inside a `mailto:` query string.
pub fn encode_mailto_component(input: &str) -> String {
    percent_encode(input, b"")
}

/// Percent-encode an address for the `mailto:` path. `@` is kept; `?`, `&`
/// and `#` are encoded so the address cannot open a query of its own.
pub fn encode_mailto_address(input: &str) -> String {
    percent_encode(input, b"@")
}

fn percent_encode(input: &str, keep: &[u8]) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other if keep.contains(&other) => out.push(other as char),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#39;y&#39;&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_html("Speech-language pathology"), "Speech-language pathology");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn mailto_component_encodes_spaces_and_symbols() {
        assert_eq!(encode_mailto_component("Re: Demo & pricing"), "Re%3A%20Demo%20%26%20pricing");
    }

    #[test]
    fn mailto_address_keeps_at_but_encodes_query_characters() {
        assert_eq!(encode_mailto_address("jane.doe@school.org"), "jane.doe@school.org");
        assert_eq!(
            encode_mailto_address("jane@x.org?cc=a@b.io&bcc=c@d.io"),
            "jane@x.org%3Fcc%3Da@b.io%26bcc%3Dc@d.io"
        );
    }
}
