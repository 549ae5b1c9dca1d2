//! Markdown-level rewriting and conversion using pulldown-cmark
//!
//! Runs before any HTML exists: image references are pointed at their
//! uploaded URLs, broken link tails are repaired, and the result is turned
//! into HTML with soft breaks rendered as line breaks.

use std::path::Path;

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Event, Options, Parser};
use regex::{Captures, Regex};

use crate::util;

/// `[text](url` left open at the end of a line; `\r\n` ends a line too
static OPEN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)\[([^\]]+)\]\(([^)\s]+)$").expect("valid regex"));

/// A complete inline link; the URL part may span lines
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

/// Point every reference to `local_path` at `url`
///
/// References are matched by the final segment of `local_path` appearing
/// anywhere inside the image target, so two images sharing a file name in
/// one note receive the same URL. Targets that merely contain the file name
/// are rewritten too: an entry for `a.png` also replaces `banana.png`.
pub fn substitute_image(markdown: &str, local_path: &Path, url: &str) -> String {
    let file_name = local_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| util::last_segment(&local_path.to_string_lossy()).to_string());
    if file_name.is_empty() {
        return markdown.to_string();
    }
    let fragment = regex::escape(&file_name);

    let standard = Regex::new(&format!(r"!\[([^\]]*)\]\([^)]*{fragment}[^)]*\)"));
    let wiki = Regex::new(&format!(r"!\[\[[^\]]*{fragment}[^\]]*\]\]"));
    let (Ok(standard), Ok(wiki)) = (standard, wiki) else {
        tracing::warn!(file = %file_name, "skipping image substitution, pattern did not compile");
        return markdown.to_string();
    };

    let replaced = standard.replace_all(markdown, |caps: &Captures| format!("![{}]({url})", &caps[1]));
    wiki.replace_all(&replaced, |_: &Captures| format!("![]({url})"))
        .into_owned()
}

/// Close links left open at end of line and strip newlines from link URLs
pub fn repair_links(markdown: &str) -> String {
    let closed = OPEN_LINK_RE.replace_all(markdown, "[$1]($2)");
    LINK_RE
        .replace_all(&closed, |caps: &Captures| {
            let url = caps[2].replace(['\n', '\r'], "");
            format!("[{}]({})", &caps[1], url.trim())
        })
        .into_owned()
}

/// Convert Markdown to HTML (GFM tables, strikethrough, task lists)
///
/// Soft line breaks are emitted as `<br />` rather than folded into the
/// paragraph.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
