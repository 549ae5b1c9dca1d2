//! Configuration loading
//!
//! Everything the pipeline treats as policy (section keywords, promotional
//! link phrases, footer wording) is configurable through a YAML file.
//! Missing keys fall back to the built-in defaults.
//!
//! Lookup order for the file:
//! 1. explicit path (`--config`)
//! 2. `NOTE_PUBLISH_CONFIG`
//! 3. `<config_dir>/note-publish/config.yaml` if it exists
//! 4. built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants as C;
use crate::error::{Error, Result};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the dated notes
    pub notes_root: Option<PathBuf>,
    /// Section keywords for key-content filtering
    pub filter: KeywordSets,
    /// Phrases marking promotional links
    pub links: LinkPhrases,
    /// Title label for merged records
    pub merged_title: String,
    /// Footer sign-off lines
    pub footer: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_root: None,
            filter: KeywordSets::default(),
            links: LinkPhrases::default(),
            merged_title: C::DEFAULT_MERGED_TITLE.to_string(),
            footer: C::DEFAULT_FOOTER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Keyword sets tested against lowercased section headings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordSets {
    /// Sections to keep (summary, key points, core)
    pub keep: Vec<String>,
    /// Sections to drop (links, tools, products, resources)
    pub skip: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            keep: strings(&["摘要", "summary", "要点", "核心", "key"]),
            skip: strings(&[
                "链接", "link", "工具", "tool", "产品", "product", "资源", "resource",
            ]),
        }
    }
}

/// Phrases used to recognize promotional anchors and their leftovers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkPhrases {
    /// Anchor texts such as "read more"
    pub read_more: Vec<String>,
    /// Anchor text prefixes such as "try" or "visit"
    pub call_to_action: Vec<String>,
    /// Dash-introduced trailers such as "full coverage"
    pub trailers: Vec<String>,
}

impl Default for LinkPhrases {
    fn default() -> Self {
        Self {
            read_more: strings(&[
                "阅读更多", "查看更多", "了解更多", "点击查看", "查看详情",
                "read more", "learn more", "see more", "view details",
            ]),
            call_to_action: strings(&["使用", "访问", "体验", "试用", "try", "visit"]),
            trailers: strings(&[
                "详细报道", "更多信息", "完整报道", "深度报道", "阅读原文",
                "full coverage", "more info", "full story", "read the original",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from YAML text; an empty document yields defaults
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve and load the effective configuration
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(C::ENV_CONFIG).filter(|s| !s.is_empty()) {
            return Self::load(Path::new(&path));
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Notes root with precedence: explicit, environment, config file
    pub fn notes_root(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| {
                std::env::var_os(C::ENV_NOTES)
                    .filter(|s| !s.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| self.notes_root.clone())
    }
}

/// `<config_dir>/note-publish/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(C::APP_CONFIG_DIR).join(C::CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let content = r#"
filter:
  keep: [overview]
footer: ["bye"]
"#;
        let config = Config::from_yaml(content).unwrap();
        assert_eq!(config.filter.keep, vec!["overview".to_string()]);
        assert_eq!(config.filter.skip, KeywordSets::default().skip);
        assert_eq!(config.footer, vec!["bye".to_string()]);
        assert_eq!(config.merged_title, C::DEFAULT_MERGED_TITLE);
        assert_eq!(config.links, LinkPhrases::default());
    }

    #[test]
    fn test_load_reports_path_on_bad_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "filter: [not, a, map]").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn test_explicit_notes_root_wins() {
        let config = Config {
            notes_root: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };
        assert_eq!(
            config.notes_root(Some(Path::new("/explicit"))),
            Some(PathBuf::from("/explicit"))
        );
    }
}
