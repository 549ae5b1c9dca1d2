//! Constants for note-publish
//!
//! File layout names, date formats, platform limits and the default
//! wording used by the renderer live here so the rest of the crate does not
//! carry magic values.

// === File and Directory Names ===

/// File extension for notes
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Subdirectory next to a note that holds its local images
pub const ATTACHMENTS_SUBDIR: &str = "attachments";

/// Application directory name under the user's config directory
pub const APP_CONFIG_DIR: &str = "note-publish";

/// Config file name inside [`APP_CONFIG_DIR`]
pub const CONFIG_FILENAME: &str = "config.yaml";

// === Environment Variables ===

/// Overrides the config file location
pub const ENV_CONFIG: &str = "NOTE_PUBLISH_CONFIG";

/// Overrides the notes root directory
pub const ENV_NOTES: &str = "NOTE_PUBLISH_NOTES";

// === Date Format Strings ===

/// Date key embedded in note file names: %Y-%m-%d
pub const DATE_STAMP_FORMAT: &str = "%Y-%m-%d";

// === Markdown Markers ===

/// Level-1 heading marker that introduces the note title
pub const TITLE_MARKER: &str = "# ";

/// Section boundary marker for key-content filtering (level 2 and deeper)
pub const SECTION_MARKER: &str = "##";

/// Separator placed between notes in a merged body
pub const MERGE_SEPARATOR: &str = "\n\n---\n\n";

// === Platform Limits ===

/// Maximum digest length carried on a note record (characters)
pub const DIGEST_MAX_CHARS: usize = 200;

/// Digest length accepted by the publishing platform (characters)
pub const PLATFORM_DIGEST_MAX_CHARS: usize = 120;

/// A block-quote digest shorter than this falls back to body text
pub const DIGEST_MIN_QUOTE_CHARS: usize = 10;

/// Title length accepted by the publishing platform (characters)
pub const TITLE_MAX_CHARS: usize = 64;

// === Default Wording ===

/// Title label for a merged multi-note record, followed by the date
pub const DEFAULT_MERGED_TITLE: &str = "AI 资讯汇总";

/// Footer sign-off lines appended after the rendered content
pub const DEFAULT_FOOTER: &[&str] = &["— END —", "关注「硅基Daily」，获取全球 AI 科技最新动态"];

// === Section Styles ===

/// Inline style of the content section wrapper
pub const CONTENT_SECTION_STYLE: &str = "padding:15px;margin:0;background:#fff;";

/// Inline style of the footer section wrapper
pub const FOOTER_SECTION_STYLE: &str =
    "padding:15px;margin-top:15px;background:#f7f7f7;text-align:center;font-size:12px;color:#999;";

/// Inline style of the footer lines (first line, following lines)
pub const FOOTER_FIRST_LINE_STYLE: &str = "margin:5px 0;";
pub const FOOTER_LINE_STYLE: &str = "margin:8px 0;";
