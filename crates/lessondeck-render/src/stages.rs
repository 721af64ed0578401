//! The inline/block transformer.
//!
//! A fixed-order sequence of global pattern substitutions applied after
//! table extraction. The order is load-bearing: code blocks are lifted
//! out before emphasis can touch asterisks inside them, callouts are
//! matched before the generic blockquote rule would flatten them, and
//! longer emphasis markers are consumed before shorter ones. Each
//! stage's output is the next stage's input.
//!
//! None of the stages raise on malformed input; unmatched syntax is left
//! as literal text and the transform always produces some output string.

use crate::escape::escape_html;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Fence-delimited code region, optionally tagged with a language name.
static FENCED_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").unwrap());

/// Single-backtick inline code span.
static INLINE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Image: ![alt](url)
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Link: [text](url)
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Callout blockquotes. Labels match case-insensitively; the rest of the
/// line is the callout body.
static NOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)> \*\*Note:\*\* (.+)").unwrap());
static TIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)> \*\*Tip:\*\* (.+)").unwrap());
static WARNING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)> \*\*Warning:\*\* (.+)").unwrap());

/// Generic blockquote line. Runs after the callout rules, which have
/// already consumed their lines.
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^> (.+)$").unwrap());

/// Headers, longest marker run first so #### is not eaten by the # rule.
static H4_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#### (.*)$").unwrap());
static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

/// Emphasis, longest marker first so *** is not partially consumed by **.
static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap());
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// List items are first tagged with transient single-item markers, then
/// contiguous runs of the same marker are merged into one container.
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s+(.+)$").unwrap());
static ORDERED_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<oli>.*</oli>\n?)+").unwrap());
static UNORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[*-]\s+(.+)$").unwrap());
static UNORDERED_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<uli>.*</uli>\n?)+").unwrap());

/// A line consisting solely of `---`.
static HR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---$").unwrap());

/// A chunk that already begins with a block-level opening tag is not
/// wrapped in a paragraph.
static BLOCK_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*<(h[1-4]|pre|ul|ol|blockquote|table|div|hr|figure)").unwrap()
});

/// Cleanup patterns.
static EMPTY_P_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<p>\s*</p>").unwrap());
static DOUBLE_BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<br>\s*<br>").unwrap());

/// Stage 1: fenced code blocks.
///
/// Content is entity-escaped, wrapped in a preformatted container
/// carrying the language tag (`code` when the fence is untagged), and
/// parked in a side list behind an opaque placeholder. No later stage
/// pattern can match a placeholder, which is what keeps backticks,
/// asterisks, and list-looking lines inside code inert until the blocks
/// are restored ahead of paragraph wrapping.
fn lift_code_blocks(text: &str) -> (String, Vec<String>) {
    let mut blocks = Vec::new();
    let lifted = FENCED_CODE_RE
        .replace_all(text, |caps: &Captures| {
            let lang = caps.get(1).map(|m| m.as_str()).unwrap_or("code");
            let code = escape_html(caps[2].trim());
            blocks.push(format!(
                "<pre data-lang=\"{lang}\"><code class=\"language-{lang}\">{code}</code></pre>"
            ));
            format!("\u{0}CODE{}\u{0}", blocks.len() - 1)
        })
        .into_owned();
    (lifted, blocks)
}

/// Put the parked code blocks back. Runs after the last substitution
/// stage and before paragraph wrapping, so the wrapper sees the `<pre`
/// opening tag and skips the chunk.
fn restore_code_blocks(text: &str, blocks: &[String]) -> String {
    let mut out = text.to_string();
    for (i, block) in blocks.iter().enumerate() {
        out = out.replace(&format!("\u{0}CODE{i}\u{0}"), block);
    }
    out
}

/// Stage 2: inline code spans. Runs after fenced blocks are lifted, so
/// backticks inside them are already out of reach.
fn inline_code(text: &str) -> String {
    INLINE_CODE_RE
        .replace_all(text, "<code>${1}</code>")
        .into_owned()
}

/// Stage 3: images become captioned figures; the caption is omitted when
/// the alt text is empty.
fn images(text: &str) -> String {
    IMAGE_RE
        .replace_all(text, |caps: &Captures| {
            let alt = &caps[1];
            let url = &caps[2];
            if alt.is_empty() {
                format!("<figure class=\"figure\"><img src=\"{url}\" alt=\"\"></figure>")
            } else {
                format!(
                    "<figure class=\"figure\"><img src=\"{url}\" alt=\"{alt}\"><figcaption>{alt}</figcaption></figure>"
                )
            }
        })
        .into_owned()
}

/// Stage 4: links open in a new viewing context.
fn links(text: &str) -> String {
    LINK_RE
        .replace_all(
            text,
            "<a href=\"${2}\" target=\"_blank\" rel=\"noopener\">${1}</a>",
        )
        .into_owned()
}

/// Stage 5: callout blockquotes. Must run before the generic blockquote
/// rule, which would otherwise flatten these lines into plain quotes.
fn callouts(text: &str) -> String {
    let text = NOTE_RE.replace_all(
        text,
        "<div class=\"callout note\"><strong>Note:</strong> ${1}</div>",
    );
    let text = TIP_RE.replace_all(
        &text,
        "<div class=\"callout tip\"><strong>Tip:</strong> ${1}</div>",
    );
    WARNING_RE
        .replace_all(
            &text,
            "<div class=\"callout warning\"><strong>Warning:</strong> ${1}</div>",
        )
        .into_owned()
}

/// Stage 6: remaining `> ` lines become generic quote containers.
fn blockquotes(text: &str) -> String {
    BLOCKQUOTE_RE
        .replace_all(text, "<blockquote>${1}</blockquote>")
        .into_owned()
}

/// Stage 7: headers, levels 4 down to 1.
fn headers(text: &str) -> String {
    let text = H4_RE.replace_all(text, "<h4>${1}</h4>");
    let text = H3_RE.replace_all(&text, "<h3>${1}</h3>");
    let text = H2_RE.replace_all(&text, "<h2>${1}</h2>");
    H1_RE.replace_all(&text, "<h1>${1}</h1>").into_owned()
}

/// Stage 8: emphasis, triple then double then single marker.
fn emphasis(text: &str) -> String {
    let text = BOLD_ITALIC_RE.replace_all(text, "<strong><em>${1}</em></strong>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    ITALIC_RE.replace_all(&text, "<em>${1}</em>").into_owned()
}

/// Merge a run of tagged list items into one container.
fn merge_items(run: &str, open_tag: &str, close_tag: &str, container: &str) -> String {
    let items: String = run
        .replace(open_tag, "")
        .replace(close_tag, "")
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| format!("<li>{l}</li>"))
        .collect();
    format!("<{container}>{items}</{container}>")
}

/// Stage 9: ordered lists. Matching lines are tagged, then contiguous
/// runs of tags merge into a single ordered-list container.
fn ordered_lists(text: &str) -> String {
    let tagged = ORDERED_ITEM_RE.replace_all(text, "<oli>${1}</oli>");
    ORDERED_RUN_RE
        .replace_all(&tagged, |caps: &Captures| {
            merge_items(&caps[0], "<oli>", "</oli>", "ol")
        })
        .into_owned()
}

/// Stage 10: unordered lists, identical mechanism to stage 9.
fn unordered_lists(text: &str) -> String {
    let tagged = UNORDERED_ITEM_RE.replace_all(text, "<uli>${1}</uli>");
    UNORDERED_RUN_RE
        .replace_all(&tagged, |caps: &Captures| {
            merge_items(&caps[0], "<uli>", "</uli>", "ul")
        })
        .into_owned()
}

/// Stage 11: horizontal rules.
fn rules(text: &str) -> String {
    HR_RE.replace_all(text, "<hr>").into_owned()
}

/// Stage 12: paragraph wrapping.
///
/// Blank-line-separated chunks are wrapped in paragraph containers
/// unless they already open with a block-level tag. Single newlines
/// inside a wrapped chunk become explicit line breaks.
fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(|chunk| {
            if BLOCK_OPEN_RE.is_match(chunk) {
                chunk.to_string()
            } else {
                format!("<p>{}</p>", chunk.replace('\n', "<br>"))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stage 13: cleanup. Empty paragraphs are dropped and consecutive line
/// break pairs collapse to one.
fn cleanup(text: &str) -> String {
    let text = EMPTY_P_RE.replace_all(text, "");
    DOUBLE_BR_RE.replace_all(&text, "<br>").into_owned()
}

/// Apply the full fixed-order stage sequence to table-processed text.
pub fn transform(input: &str) -> String {
    let (text, code) = lift_code_blocks(input);
    let text = inline_code(&text);
    let text = images(&text);
    let text = links(&text);
    let text = callouts(&text);
    let text = blockquotes(&text);
    let text = headers(&text);
    let text = emphasis(&text);
    let text = ordered_lists(&text);
    let text = unordered_lists(&text);
    let text = rules(&text);
    let text = restore_code_blocks(&text, &code);
    let text = paragraphs(&text);
    cleanup(&text)
}
