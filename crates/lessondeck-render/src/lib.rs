//! Lessondeck Render
//!
//! The markdown rendering pipeline: a table extractor followed by a
//! fixed-order inline/block transformer. Lesson and template source
//! text goes in as one string, presentational markup comes out as
//! another; there is no parsing library, no AST, and no I/O anywhere in
//! this crate.
//!
//! # Overview
//!
//! - [`extract_tables`] - isolates contiguous runs of pipe-delimited
//!   lines into table blocks before anything else can touch them
//! - [`transform`] - the ordered substitution stages (code, inline
//!   code, images, links, callouts, quotes, headers, emphasis, lists,
//!   rules, paragraphs, cleanup)
//! - [`render_markdown`] - the two passes composed
//!
//! # Example
//!
//! ```
//! use lessondeck_render::render_markdown;
//!
//! let html = render_markdown("# Getting Started\n\nRead the *guide*.");
//! assert!(html.contains("<h1>Getting Started</h1>"));
//! assert!(html.contains("<em>guide</em>"));
//! ```
//!
//! The pipeline is pure and synchronous: no shared state, no blocking,
//! no suspension points. Calls are safe to issue concurrently with no
//! coordination. Malformed markdown never raises; it degrades to
//! literal text in the output.

pub mod escape;
pub mod stages;
pub mod table;

pub use escape::escape_html;
pub use stages::transform;
pub use table::extract_tables;

/// Render a raw markdown document to presentational markup.
///
/// Tables are extracted first so no later stage can corrupt pipe
/// characters or line breaks inside them; the intermediate text then
/// flows through the transformer's fixed stage order. Never fails: any
/// input produces some output string, and an empty input produces an
/// empty output.
pub fn render_markdown(source: &str) -> String {
    transform(&extract_tables(source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_heading_and_emphasis() {
        let out = render_markdown("# Title\n\nSome *italic* and **bold** text.");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<em>italic</em>"));
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<p>Some"));
    }

    #[test]
    fn test_render_table_document() {
        let out = render_markdown("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(out.contains("<th>A</th><th>B</th>"));
        assert!(out.contains("<td>1</td><td>2</td>"));
        assert_eq!(out.matches("<tr>").count(), 2);
    }

    #[test]
    fn test_render_table_not_paragraph_wrapped() {
        let out = render_markdown("intro\n\n| A |\n|---|\n| 1 |\n\noutro");
        assert!(!out.contains("<p><table>"));
        assert!(out.contains("<p>intro</p>"));
        assert!(out.contains("<p>outro</p>"));
    }

    #[test]
    fn test_render_empty_is_empty() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_render_list_run() {
        let out = render_markdown("- a\n- b\n- c");
        assert_eq!(out.matches("<ul>").count(), 1);
        assert_eq!(out.matches("<li>").count(), 3);
        let a = out.find("<li>a</li>").unwrap();
        let b = out.find("<li>b</li>").unwrap();
        let c = out.find("<li>c</li>").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_render_twice_does_not_crash() {
        // Idempotence is not guaranteed; re-rendering must merely not fail.
        let doc = "# T\n\n| A |\n|---|\n\n- x\n\n> **Note:** n";
        let once = render_markdown(doc);
        let _twice = render_markdown(&once);
    }

    #[test]
    fn test_render_mixed_document() {
        let doc = "\
# Lesson

> **Tip:** skim first

Some `inline` and a [link](https://example.com).

```python
print('hi')
```

1. one
2. two

---
";
        let out = render_markdown(doc);
        assert!(out.contains("<h1>Lesson</h1>"));
        assert!(out.contains("callout tip"));
        assert!(out.contains("<code>inline</code>"));
        assert!(out.contains("rel=\"noopener\""));
        assert!(out.contains("language-python"));
        assert!(out.contains("print(&#39;hi&#39;)"));
        assert!(out.contains("<ol><li>one</li><li>two</li></ol>"));
        assert!(out.contains("<hr>"));
    }
}
