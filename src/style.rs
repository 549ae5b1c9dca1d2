//! Inline presentation styles
//!
//! The platform strips `<style>` blocks and class attributes, so every
//! element carries its look inline. Each opening tag listed in [`STYLES`]
//! gets exactly one `style` attribute; a style already on the tag (table
//! cell alignment from the Markdown converter, or raw HTML in the note) is
//! appended to ours inside the same attribute so it still wins.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Fixed style per element
pub const STYLES: &[(&str, &str)] = &[
    ("h1", "font-size: 20px; font-weight: bold; color: #333; margin: 16px 0 12px 0; line-height: 1.5;"),
    ("h2", "font-size: 17px; font-weight: bold; color: #333; margin: 16px 0 10px 0; line-height: 1.5; border-bottom: 1px solid #eee; padding-bottom: 6px;"),
    ("h3", "font-size: 15px; font-weight: bold; color: #333; margin: 14px 0 8px 0; line-height: 1.5;"),
    ("h4", "font-size: 14px; font-weight: bold; color: #333; margin: 12px 0 6px 0; line-height: 1.5;"),
    ("p", "font-size: 14px; color: #333; line-height: 1.75; margin: 10px 0; text-align: left; word-break: break-word;"),
    ("ul", "margin: 10px 0; padding-left: 2em; list-style-type: disc;"),
    ("ol", "margin: 10px 0; padding-left: 2em; list-style-type: decimal;"),
    ("li", "font-size: 14px; color: #333; line-height: 1.75; margin: 6px 0; text-align: left;"),
    ("blockquote", "margin: 12px 0; padding: 10px 15px; background-color: #f7f7f7; border-left: 3px solid #ddd; color: #666; font-size: 14px; line-height: 1.6;"),
    ("pre", "margin: 12px 0; padding: 12px; background-color: #f5f5f5; border-radius: 4px; overflow-x: auto; font-size: 13px;"),
    ("code", "font-family: Consolas, Monaco, monospace; font-size: 13px;"),
    ("img", "max-width: 100%; height: auto; display: block; margin: 12px auto;"),
    ("a", "color: #576b95; text-decoration: none;"),
    ("strong", "font-weight: bold; color: #333;"),
    ("hr", "margin: 20px 0; border: none; border-top: 1px solid #eee;"),
    ("table", "width: 100%; border-collapse: collapse; margin: 12px 0; font-size: 13px;"),
    ("th", "border: 1px solid #ddd; padding: 8px; background-color: #f5f5f5; font-weight: bold; text-align: left;"),
    ("td", "border: 1px solid #ddd; padding: 8px; text-align: left;"),
];

/// Opening tag of a styled element: name, attributes, self-closing slash
static OPEN_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    let names = STYLES.iter().map(|(tag, _)| *tag).collect::<Vec<_>>().join("|");
    Regex::new(&format!(r"(?i)<({names})((?:\s[^>]*?)?)(\s*/)?>")).expect("valid regex")
});

/// A `style` attribute, double-quoted, single-quoted or bare
static STYLE_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\sstyle\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#).expect("valid regex")
});

/// Style for an element name
pub fn style_for(tag: &str) -> Option<&'static str> {
    STYLES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(tag))
        .map(|(_, style)| *style)
}

/// Attach the fixed style to every styled opening tag in `html`
pub fn apply_styles(html: &str) -> String {
    OPEN_TAG_RE
        .replace_all(html, |caps: &Captures| {
            let tag = &caps[1];
            let attrs = caps.get(2).map_or("", |m| m.as_str());
            let slash = caps.get(3).map_or("", |m| m.as_str());
            let Some(style) = style_for(tag) else {
                return caps[0].to_string();
            };

            let (merged, rest) = match STYLE_ATTR_RE.captures(attrs) {
                Some(existing) => {
                    let existing_style = (1..=3)
                        .find_map(|i| existing.get(i))
                        .map_or("", |m| m.as_str().trim());
                    let mut merged = style.to_string();
                    if !existing_style.is_empty() {
                        merged.push(' ');
                        merged.push_str(existing_style);
                    }
                    let rest: Cow<'_, str> = STYLE_ATTR_RE.replace(attrs, "");
                    (merged, rest.into_owned())
                }
                None => (style.to_string(), attrs.to_string()),
            };

            format!("<{tag} style=\"{merged}\"{rest}{slash}>")
        })
        .into_owned()
}
