//! Outbound link removal
//!
//! The platform does not allow external links in article bodies. Anchors
//! that only exist to send readers elsewhere ("read more", "try it") are
//! dropped together with their paragraph; every other anchor is unwrapped
//! to its text. Leftover trailers such as "— full coverage" are removed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::LinkPhrases;

static ANCHOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<a(?:\s[^>]*)?>(.*?)</a>").expect("valid regex"));

/// Compiled link-removal patterns for one set of phrases
#[derive(Debug, Clone)]
pub struct LinkScrubber {
    read_more_paragraph: Option<Regex>,
    trailer_paragraph: Option<Regex>,
    call_to_action_paragraph: Option<Regex>,
    read_more_anchor: Option<Regex>,
    trailer: Option<Regex>,
}

impl Default for LinkScrubber {
    fn default() -> Self {
        Self::new(&LinkPhrases::default())
    }
}

/// `a|b|c` of escaped phrases, or `None` when there are none
fn alternation(phrases: &[String]) -> Option<String> {
    let escaped: Vec<String> = phrases
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(regex::escape)
        .collect();
    (!escaped.is_empty()).then(|| escaped.join("|"))
}

/// Call-to-action prefixes; ASCII words must end on a word boundary so
/// "try" does not match "trying"
fn cta_alternation(phrases: &[String]) -> Option<String> {
    let parts: Vec<String> = phrases
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(|p| {
            let escaped = regex::escape(p);
            if p.chars().last().is_some_and(|c| c.is_ascii_alphanumeric()) {
                format!(r"{escaped}\b")
            } else {
                escaped
            }
        })
        .collect();
    (!parts.is_empty()).then(|| parts.join("|"))
}

fn compile(pattern: String) -> Option<Regex> {
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring link pattern");
            None
        }
    }
}

const PARA_OPEN: &str = r"<p(?:\s[^>]*)?>\s*";
const PARA_CLOSE: &str = r"\s*</p>";
const ANCHOR_OPEN: &str = r"<a(?:\s[^>]*)?>";

impl LinkScrubber {
    pub fn new(phrases: &LinkPhrases) -> Self {
        let read_more = alternation(&phrases.read_more);
        let trailers = alternation(&phrases.trailers);
        let cta = cta_alternation(&phrases.call_to_action);

        Self {
            read_more_paragraph: read_more.as_ref().and_then(|alt| {
                compile(format!(r"(?i){PARA_OPEN}{ANCHOR_OPEN}\s*(?:{alt})\s*</a>{PARA_CLOSE}"))
            }),
            trailer_paragraph: trailers.as_ref().and_then(|alt| {
                compile(format!(
                    r"(?i){PARA_OPEN}{ANCHOR_OPEN}[^<]+</a>\s*[-—]\s*(?:{alt}){PARA_CLOSE}"
                ))
            }),
            call_to_action_paragraph: cta.as_ref().and_then(|alt| {
                compile(format!(r"(?i){PARA_OPEN}{ANCHOR_OPEN}\s*(?:{alt})[^<]*</a>{PARA_CLOSE}"))
            }),
            read_more_anchor: read_more
                .as_ref()
                .and_then(|alt| compile(format!(r"(?i){ANCHOR_OPEN}\s*(?:{alt})\s*</a>"))),
            trailer: trailers
                .as_ref()
                .and_then(|alt| compile(format!(r"(?i)\s*[-—]\s*(?:{alt})\s*"))),
        }
    }

    /// Remove promotional links and unwrap every remaining anchor
    pub fn scrub(&self, html: &str) -> String {
        let mut result = html.to_string();

        for pattern in [
            &self.read_more_paragraph,
            &self.trailer_paragraph,
            &self.call_to_action_paragraph,
            &self.read_more_anchor,
        ]
        .into_iter()
        .flatten()
        {
            result = pattern.replace_all(&result, "").into_owned();
        }

        result = ANCHOR_RE.replace_all(&result, "$1").into_owned();

        if let Some(trailer) = &self.trailer {
            result = trailer.replace_all(&result, "").into_owned();
        }

        result
    }
}
