//! Entity escaping for code block content.

/// Escape the five markup-significant characters: `&`, `<`, `>`, `"`, `'`.
///
/// Applied to fenced code block content before it is wrapped in a
/// preformatted container, so code renders verbatim instead of being
/// interpreted as markup. The ampersand must be handled alongside the
/// rest in a single pass; a naive chain of replacements would double
/// escape it.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_five() {
        assert_eq!(
            escape_html(r#"a & b < c > d " e ' f"#),
            "a &amp; b &lt; c &gt; d &quot; e &#39; f"
        );
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_no_double_escaping_in_single_pass() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }
}
