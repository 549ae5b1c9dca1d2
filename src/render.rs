//! Note → platform HTML
//!
//! Pipeline, in order:
//! 1. point image references at their uploaded URLs
//! 2. repair broken link tails
//! 3. Markdown → HTML
//! 4. drop whitespace around tags
//! 5. inline styles
//! 6. remove outbound links
//! 7. wrap in a content section plus a footer section
//!
//! Nothing here fails. Images missing from the URL map keep their local
//! reference, which the publishing side has to deal with.

use std::collections::BTreeMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::Config;
use crate::constants as C;
use crate::links::LinkScrubber;
use crate::markdown;
use crate::note::NoteRecord;
use crate::style;

/// Local image path → uploaded URL
pub type ImageUrlMap = BTreeMap<PathBuf, String>;

static BETWEEN_TAGS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").expect("valid regex"));
static AFTER_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+").expect("valid regex"));
static BEFORE_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+<").expect("valid regex"));

static DEFAULT_TRANSDUCER: Lazy<Transducer> = Lazy::new(Transducer::default);

/// Renders notes with one fixed set of link phrases and footer lines
#[derive(Debug, Clone)]
pub struct Transducer {
    scrubber: LinkScrubber,
    footer: Vec<String>,
}

impl Default for Transducer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Transducer {
    pub fn new(config: &Config) -> Self {
        Self {
            scrubber: LinkScrubber::new(&config.links),
            footer: config.footer.clone(),
        }
    }

    /// Render a note body into the final fragment
    pub fn render(&self, note: &NoteRecord, image_map: &ImageUrlMap) -> String {
        let content = self.render_body(&note.body, image_map);
        self.wrap(&content)
    }

    /// Steps 1–6 on Markdown text, without the section wrappers
    pub fn render_body(&self, body: &str, image_map: &ImageUrlMap) -> String {
        let mut markdown_text = body.to_string();
        for (local_path, url) in image_map {
            markdown_text = markdown::substitute_image(&markdown_text, local_path, url);
        }

        let markdown_text = markdown::repair_links(&markdown_text);
        let html = markdown::to_html(&markdown_text);
        let html = collapse_tag_whitespace(&html);
        let html = style::apply_styles(&html);
        let html = self.scrubber.scrub(&html);

        tracing::debug!(bytes = html.len(), images = image_map.len(), "rendered note body");
        html
    }

    fn wrap(&self, content: &str) -> String {
        let footer: String = self
            .footer
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let style = if i == 0 {
                    C::FOOTER_FIRST_LINE_STYLE
                } else {
                    C::FOOTER_LINE_STYLE
                };
                format!("<p style=\"{style}\">{}</p>", escape_html(line))
            })
            .collect();

        format!(
            "<section style=\"{}\">{content}</section><section style=\"{}\">{footer}</section>",
            C::CONTENT_SECTION_STYLE,
            C::FOOTER_SECTION_STYLE,
        )
    }
}

/// Render with the built-in configuration
pub fn render(note: &NoteRecord, image_map: &ImageUrlMap) -> String {
    DEFAULT_TRANSDUCER.render(note, image_map)
}

/// Remove whitespace between tags and at tag/text boundaries
pub fn collapse_tag_whitespace(html: &str) -> String {
    let html = BETWEEN_TAGS_RE.replace_all(html, "><");
    let html = AFTER_TAG_RE.replace_all(&html, ">");
    BEFORE_TAG_RE.replace_all(&html, "<").into_owned()
}

/// Wrap a fragment in a minimal page for local preview
pub fn preview_document(title: &str, fragment: &str) -> String {
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n\
         <style>body {{ max-width: 800px; margin: 0 auto; padding: 20px; \
         font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}</style>\n\
         </head>\n<body>\n<h1>{title}</h1>\n{fragment}\n</body>\n</html>\n"
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(body: &str) -> NoteRecord {
        NoteRecord {
            title: "T".to_string(),
            body: body.to_string(),
            images: Vec::new(),
            digest: String::new(),
            raw_content: body.to_string(),
        }
    }

    #[test]
    fn test_collapse_tag_whitespace() {
        assert_eq!(
            collapse_tag_whitespace("<ul>\n  <li> a </li>\n</ul>\n"),
            "<ul><li>a</li></ul>"
        );
    }

    #[test]
    fn test_wraps_with_footer() {
        let html = render(&note("hello"), &ImageUrlMap::new());
        assert!(html.starts_with(&format!("<section style=\"{}\">", C::CONTENT_SECTION_STYLE)));
        assert!(html.ends_with(&format!("{}</p></section>", C::DEFAULT_FOOTER[1])));
        assert!(html.contains("— END —"));
    }

    #[test]
    fn test_custom_footer_is_escaped() {
        let config = Config {
            footer: vec!["<b>bye</b>".to_string()],
            ..Config::default()
        };
        let html = Transducer::new(&config).render(&note("x"), &ImageUrlMap::new());
        assert!(html.ends_with("&lt;b&gt;bye&lt;/b&gt;</p></section>"));
    }

    #[test]
    fn test_image_substituted_and_styled() {
        let mut map = ImageUrlMap::new();
        map.insert(PathBuf::from("/n/attachments/a.png"), "https://cdn/x.jpg".to_string());
        let html = Transducer::default().render_body("![pic](./attachments/a.png)", &map);
        assert_eq!(
            html,
            format!(
                r#"<p style="{}"><img style="{}" src="https://cdn/x.jpg" alt="pic" /></p>"#,
                style::style_for("p").unwrap(),
                style::style_for("img").unwrap()
            )
        );
    }

    #[test]
    fn test_raw_html_style_is_not_duplicated() {
        let html = Transducer::default().render_body("<p style='color:red'>hi</p>", &ImageUrlMap::new());
        assert_eq!(html.matches("style=").count(), 1);
        assert!(html.contains("; color:red\">hi</p>"));

        let html = Transducer::default()
            .render_body(r#"text <img src="a.png" style='width:50%'> more"#, &ImageUrlMap::new());
        assert_eq!(html.matches("<img style=").count(), 1);
        assert!(!html.contains("style='"));
        assert!(html.contains(" width:50%\" src=\"a.png\">"));
    }

    #[test]
    fn test_unmapped_local_image_is_left_alone() {
        let html = Transducer::default().render_body("![pic](./attachments/b.png)", &ImageUrlMap::new());
        assert!(html.contains(r#"src="./attachments/b.png""#));
    }

    #[test]
    fn test_broken_link_is_closed_and_unwrapped() {
        let html = Transducer::default().render_body("intro [text](http://broken\n\nnext", &ImageUrlMap::new());
        assert!(!html.contains("<a"));
        assert!(!html.contains("http://broken"));
        // whitespace next to the former anchor tag is collapsed too
        assert!(html.contains(">introtext</p>"));
    }

    #[test]
    fn test_no_anchor_survives() {
        let body = "- item [了解更多](https://a)\n- [docs](https://b)\n\n[阅读更多](https://c)\n\n[Try it](https://d)";
        let html = Transducer::default().render_body(body, &ImageUrlMap::new());
        assert!(!html.contains("<a"));
        assert!(!html.contains("阅读更多"));
        assert!(!html.contains("Try it"));
        assert!(html.contains(">docs</li>"));
        assert!(html.contains(">item</li>"));
    }

    #[test]
    fn test_rendering_rendered_text_does_not_panic() {
        let first = render(&note("# H\n\n| a |\n|---|\n| 1 |\n\n> q\n\n`c` **b**"), &ImageUrlMap::new());
        let second = render(&note(&first), &ImageUrlMap::new());
        assert!(second.ends_with("</p></section>"));
    }

    #[test]
    fn test_preview_document_escapes_title() {
        let doc = preview_document("a < b", "<p>x</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>a &lt; b</title>"));
        assert!(doc.contains("<p>x</p>"));
    }
}
