//! Title sanitizing for the publishing platform
//!
//! The platform rejects titles containing emoji and most symbols. Only CJK
//! ideographs, ASCII letters and digits, whitespace and a small set of
//! Chinese and ASCII punctuation survive.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::util;

/// Emoji and pictographic symbols
pub(crate) static PICTOGRAPH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]").expect("valid regex")
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Punctuation allowed in titles besides letters, digits and whitespace
const ALLOWED_PUNCTUATION: &str = "，。、；：‘’“”（）【】《》！？·-—,.;:'\"()[]!?";

fn is_allowed(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
        || c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || ALLOWED_PUNCTUATION.contains(c)
}

/// Produce a platform-legal title
///
/// Idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize(title: &str) -> String {
    let without_pictographs = PICTOGRAPH_RE.replace_all(title, "");
    let filtered: String = without_pictographs.chars().filter(|&c| is_allowed(c)).collect();
    WHITESPACE_RE.replace_all(&filtered, " ").trim().to_string()
}

/// Cut a sanitized title down to `max_chars`
pub fn fit(title: &str, max_chars: usize) -> String {
    util::truncate_chars(title, max_chars).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_emoji() {
        assert_eq!(sanitize("🚀 Launch Day 🎉"), "Launch Day");
        assert_eq!(sanitize("今日 AI 资讯 🔥🔥"), "今日 AI 资讯");
    }

    #[test]
    fn test_keeps_allowed_punctuation() {
        let title = "《深度学习》：入门（一）— Part 1, \"intro\"!";
        assert_eq!(sanitize(title), title);
    }

    #[test]
    fn test_removes_symbols_and_collapses_space() {
        assert_eq!(sanitize("  a  &  b  #tag  "), "a b tag");
        assert_eq!(sanitize("x\t\ny"), "x y");
        assert_eq!(sanitize("price $5 @ 50%"), "price 5 50");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "🚀 Launch   Day 🎉",
            "《标题》 ★ with ✨ sparkle",
            "  \u{7}control\u{0} chars ",
            "",
            "正常标题",
        ] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "input: {input:?}");
            assert!(!PICTOGRAPH_RE.is_match(&once));
            assert!(!once.chars().any(char::is_control));
        }
    }

    #[test]
    fn test_fit_truncates_on_char_boundary() {
        assert_eq!(fit("你好 世界", 3), "你好");
        assert_eq!(fit("short", 64), "short");
    }
}
