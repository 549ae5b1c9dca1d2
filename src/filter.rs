//! Key-content filtering
//!
//! Reduces a note body to the sections worth publishing: summary and
//! key-point sections are kept, link/tool/resource sections are dropped,
//! everything else passes through. Sections are delimited by `##` (or
//! deeper) headings.
//!
//! | line    | condition            | next state    | emitted |
//! |---------|----------------------|---------------|---------|
//! | heading | has a keep keyword   | `KeepSection` | yes     |
//! | heading | has a skip keyword   | `SkipSection` | no      |
//! | heading | neither              | `Default`     | yes     |
//! | other   | `SkipSection`        | unchanged     | no      |
//! | other   | any other state      | unchanged     | yes     |

use crate::config::KeywordSets;
use crate::constants as C;

/// Where the scanner currently is relative to section headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    /// Outside any classified section
    #[default]
    Default,
    /// Inside a section matching a keep keyword
    KeepSection,
    /// Inside a section matching a skip keyword
    SkipSection,
}

impl SectionState {
    /// State entered when a heading line is seen; keep wins over skip
    pub fn on_heading(heading: &str, keywords: &KeywordSets) -> Self {
        let lowered = heading.to_lowercase();
        let contains_any = |words: &[String]| {
            words
                .iter()
                .any(|w| !w.is_empty() && lowered.contains(&w.to_lowercase()))
        };

        if contains_any(keywords.keep.as_slice()) {
            SectionState::KeepSection
        } else if contains_any(keywords.skip.as_slice()) {
            SectionState::SkipSection
        } else {
            SectionState::Default
        }
    }

    /// Whether a line in this state (a heading that produced this state,
    /// or a body line under it) is emitted
    pub fn emits(self) -> bool {
        !matches!(self, SectionState::SkipSection)
    }
}

/// Keep only the key sections of `body`
pub fn extract_key_content(body: &str, keywords: &KeywordSets) -> String {
    let mut state = SectionState::default();
    let mut kept = Vec::new();

    for line in body.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with(C::SECTION_MARKER) {
            state = SectionState::on_heading(trimmed, keywords);
        }
        if state.emits() {
            kept.push(line);
        }
    }

    kept.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> KeywordSets {
        KeywordSets::default()
    }

    #[test]
    fn test_keeps_summary_drops_resources() {
        let body = "## Summary\nPoint A\n\n## Resources\n- link1\n- link2";
        let out = extract_key_content(body, &keywords());
        assert_eq!(out, "## Summary\nPoint A");
    }

    #[test]
    fn test_default_sections_pass_through() {
        let body = "intro\n\n## Background\ntext\n\n## 相关链接\n- a\n\n### 核心要点\n- b";
        let out = extract_key_content(body, &keywords());
        assert_eq!(out, "intro\n\n## Background\ntext\n\n### 核心要点\n- b");
    }

    #[test]
    fn test_keep_beats_skip() {
        assert_eq!(
            SectionState::on_heading("## Key Links", &keywords()),
            SectionState::KeepSection
        );
        assert_eq!(
            SectionState::on_heading("## TOOLS", &keywords()),
            SectionState::SkipSection
        );
        assert_eq!(
            SectionState::on_heading("## Notes", &keywords()),
            SectionState::Default
        );
    }

    #[test]
    fn test_level_one_heading_is_not_a_boundary() {
        let body = "## Resources\n# Not a section\nstill skipped";
        assert_eq!(extract_key_content(body, &keywords()), "");
    }

    #[test]
    fn test_custom_keywords() {
        let sets = KeywordSets {
            keep: vec!["Overview".to_string()],
            skip: vec!["appendix".to_string()],
        };
        let body = "## Overview\na\n## Appendix\nb\n## Summary\nc";
        assert_eq!(extract_key_content(body, &sets), "## Overview\na\n## Summary\nc");
    }
}
