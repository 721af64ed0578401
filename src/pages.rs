//! Static page composition.
//!
//! The shell around rendered fragments: navigation, theme attribute,
//! the index page, and the failure notice shown when a source file
//! cannot be fetched. Plain string building; the renderer itself knows
//! nothing about pages.

use lessondeck_config::Theme;
use lessondeck_core::Catalog;
use std::path::Path;

/// Site title shown in the navigation brand and page titles.
pub const SITE_TITLE: &str = "QA Engineering Playbook";

/// Navigation link set: label and target.
const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "index.html"),
    ("Modules", "index.html#modules"),
    ("Templates", "index.html#templates"),
    ("Labs", "index.html#labs"),
];

/// Stylesheet emitted next to the generated pages.
pub const STYLESHEET: &str = r#":root {
    --bg: #ffffff;
    --fg: #1f2937;
    --accent: #3b82f6;
    --muted: #6b7280;
    --border: #e5e7eb;
    --callout-note: #eff6ff;
    --callout-tip: #ecfdf5;
    --callout-warning: #fffbeb;
}

[data-theme="dark"] {
    --bg: #111827;
    --fg: #e5e7eb;
    --accent: #60a5fa;
    --muted: #9ca3af;
    --border: #374151;
    --callout-note: #1e3a5f;
    --callout-tip: #14532d;
    --callout-warning: #713f12;
}

body {
    margin: 0 auto;
    max-width: 46rem;
    padding: 0 1rem 4rem;
    background: var(--bg);
    color: var(--fg);
    font-family: system-ui, sans-serif;
    line-height: 1.6;
}

nav.site-nav {
    display: flex;
    gap: 1rem;
    align-items: baseline;
    padding: 1rem 0;
    border-bottom: 1px solid var(--border);
}

nav.site-nav .brand { font-weight: 700; margin-right: auto; }
nav.site-nav a { color: var(--accent); text-decoration: none; }

a { color: var(--accent); }

pre {
    background: var(--border);
    padding: 0.75rem;
    overflow-x: auto;
    border-radius: 6px;
}

code { font-family: ui-monospace, monospace; }

table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.4rem 0.7rem; text-align: left; }
th { background: var(--border); }

blockquote {
    margin: 1rem 0;
    padding: 0.25rem 1rem;
    border-left: 4px solid var(--muted);
    color: var(--muted);
}

.callout { padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.callout.note { background: var(--callout-note); }
.callout.tip { background: var(--callout-tip); }
.callout.warning { background: var(--callout-warning); }

figure.figure { text-align: center; margin: 2rem 0; }
figure.figure figcaption { margin-top: 0.5rem; color: var(--muted); font-style: italic; }

hr { margin: 2rem 0; border: none; border-top: 2px solid var(--border); }
"#;

fn nav() -> String {
    let mut html = String::from("<nav class=\"site-nav\"><span class=\"brand\">");
    html.push_str(SITE_TITLE);
    html.push_str("</span>");
    for (label, target) in NAV_LINKS {
        html.push_str(&format!("<a href=\"{target}\">{label}</a>"));
    }
    html.push_str("</nav>");
    html
}

/// Wrap a rendered fragment in the full page shell.
pub fn page(title: &str, theme: Theme, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\" data-theme=\"{attr}\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} - {site}</title>\n\
         <link rel=\"stylesheet\" href=\"styles.css\">\n\
         </head>\n\
         <body>\n\
         {nav}\n\
         <main class=\"content\">\n\
         {body}\n\
         </main>\n\
         </body>\n\
         </html>\n",
        attr = theme.attr(),
        site = SITE_TITLE,
        nav = nav(),
    )
}

/// The fragment shown in place of content whose source could not be
/// fetched. Names the missing resource; the renderer is never invoked
/// on this path.
pub fn failure_fragment(resource: &str) -> String {
    format!(
        "<div class=\"callout warning\"><strong>Warning:</strong> \
         Failed to load content: {resource}</div>"
    )
}

/// File name of a generated lesson page.
pub fn lesson_page_name(module_id: u32, index: usize) -> String {
    format!("lesson-{}-{}.html", module_id, index)
}

/// File name of a generated template page, derived from the source stem.
pub fn template_page_name(file: &Path) -> String {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("template");
    format!("template-{}.html", stem)
}

/// The site index: every module with its lesson links, the template
/// gallery, and the lab list.
pub fn index_page(catalog: &Catalog, theme: Theme) -> String {
    let mut body = String::new();

    body.push_str("<h1 id=\"modules\">Modules</h1>\n");
    for module in &catalog.modules {
        body.push_str(&format!(
            "<h2>{:02} {}</h2>\n<p>{} ({} lessons, {})</p>\n<ol>\n",
            module.id,
            module.title,
            module.description,
            module.lesson_count(),
            module.duration
        ));
        for (index, lesson) in module.lessons.iter().enumerate() {
            match lesson.source() {
                Some(_) => body.push_str(&format!(
                    "<li><a href=\"{}\">{}</a></li>\n",
                    lesson_page_name(module.id, index),
                    lesson.title()
                )),
                None => body.push_str(&format!("<li>{}</li>\n", lesson.title())),
            }
        }
        body.push_str("</ol>\n");
    }

    body.push_str("<h1 id=\"templates\">Templates</h1>\n<ul>\n");
    for template in &catalog.templates {
        body.push_str(&format!(
            "<li>{} <a href=\"{}\">{}</a> - {}</li>\n",
            template.icon,
            template_page_name(&template.file),
            template.title,
            template.description
        ));
    }
    body.push_str("</ul>\n");

    body.push_str("<h1 id=\"labs\">Labs</h1>\n<ul>\n");
    for lab in &catalog.labs {
        body.push_str(&format!(
            "<li><strong>{}</strong> ({}, {}, {}) - {}</li>\n",
            lab.title, lab.difficulty, lab.duration, lab.category, lab.description
        ));
    }
    body.push_str("</ul>\n");

    page(SITE_TITLE, theme, &body)
}
