//! Table extraction.
//!
//! Scans a document line by line for contiguous runs of pipe-delimited
//! lines and replaces each run of two or more with a rendered table
//! block. All other lines pass through untouched. Tables must be
//! isolated before any other transformation touches pipe characters or
//! the line breaks inside them, so this pass runs first.

use regex::Regex;
use std::sync::LazyLock;

/// A candidate table line: after trimming, starts and ends with a pipe
/// with at least one character between them.
static TABLE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|(.+)\|$").unwrap());

fn is_table_line(line: &str) -> bool {
    TABLE_LINE_RE.is_match(line.trim())
}

/// Split one table line into trimmed cells.
///
/// Strips exactly one leading and one trailing pipe by position (not by
/// trimming), then splits what remains on pipes. Cell counts are never
/// reconciled across rows; every row keeps whatever cells it splits
/// into.
fn split_cells(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let inner = &trimmed[1..trimmed.len() - 1];
    inner.split('|').map(str::trim).collect()
}

/// Render a run of N >= 2 pipe-delimited lines as a table block.
///
/// Line 0 is the header. Line 1 is dropped by position without being
/// inspected, on the assumption that it is the header/body separator; a
/// run where line 1 is actually a data row silently loses that row.
/// Lines 2.. become the body, one row per line, in original order. The
/// block opens directly with its tag so the paragraph-wrapping stage
/// can recognize and skip it.
fn render_table(run: &[&str]) -> String {
    let mut html = String::from("<table>\n<thead>\n<tr>");
    for cell in split_cells(run[0]) {
        html.push_str("<th>");
        html.push_str(cell);
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n");

    if run.len() > 2 {
        html.push_str("<tbody>\n");
        for line in &run[2..] {
            html.push_str("<tr>");
            for cell in split_cells(line) {
                html.push_str("<td>");
                html.push_str(cell);
                html.push_str("</td>");
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</tbody>\n");
    }

    html.push_str("</table>");
    html
}

/// Replace every maximal contiguous run of two or more pipe-delimited
/// lines with a table block, leaving everything else unchanged.
///
/// A lone pipe-delimited line is not a table and is emitted as literal
/// text. Relative ordering of lines and blocks is preserved.
pub fn extract_tables(input: &str) -> String {
    let lines: Vec<&str> = input.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if is_table_line(lines[i]) {
            let start = i;
            while i < lines.len() && is_table_line(lines[i]) {
                i += 1;
            }
            let run = &lines[start..i];
            if run.len() >= 2 {
                out.push(render_table(run));
            } else {
                out.push(run[0].to_string());
            }
        } else {
            out.push(lines[i].to_string());
            i += 1;
        }
    }

    out.join("\n")
}
