//! Image asset resolution
//!
//! Maps image references found in a note to files on disk. Resolution
//! order for a reference:
//! 1. `http://` / `https://` → not local, skipped
//! 2. `./` or `../` prefix → relative to the note's directory (existence
//!    checked by the caller)
//! 3. `<note_dir>/attachments/<reference>` if it exists
//! 4. `<note_dir>/<reference>` if it exists

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::constants as C;
use crate::util;

/// Standard Markdown image: `![alt](path)`
pub(crate) static MD_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("valid regex"));

/// Obsidian embed: `![[path]]`
pub(crate) static WIKI_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").expect("valid regex"));

/// An image embedded in a note that exists on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// The markup snippet exactly as found in the note
    pub reference: String,
    /// Absolute path of the image file
    pub resolved_path: PathBuf,
    /// Alt text (empty for wiki embeds)
    pub alt_text: String,
}

/// Resolve an image reference relative to the note's directory
pub fn resolve(reference: &str, note_dir: &Path) -> Option<PathBuf> {
    let reference = reference.trim();

    if reference.starts_with("http://") || reference.starts_with("https://") {
        return None;
    }

    if reference.starts_with("./") || reference.starts_with("../") {
        return Some(util::normalize_join(note_dir, reference));
    }

    let attachment = note_dir.join(C::ATTACHMENTS_SUBDIR).join(reference);
    if attachment.exists() {
        return Some(attachment);
    }

    let direct = note_dir.join(reference);
    if direct.exists() {
        return Some(direct);
    }

    None
}

/// Collect the images of a note that resolve to existing files
///
/// Standard-syntax matches come first, then wiki embeds, each in document
/// order. The first entry is the note's cover image.
pub fn scan_images(content: &str, note_dir: &Path) -> Vec<ImageRef> {
    let mut images = Vec::new();

    for caps in MD_IMAGE_RE.captures_iter(content) {
        if let Some(path) = resolve_existing(&caps[2], note_dir) {
            images.push(ImageRef {
                reference: caps[0].to_string(),
                resolved_path: path,
                alt_text: caps[1].to_string(),
            });
        }
    }

    for caps in WIKI_IMAGE_RE.captures_iter(content) {
        // `![[a.png|300]]` carries a display size after the pipe
        let target = caps[1].split('|').next().unwrap_or_default();
        if let Some(path) = resolve_existing(target, note_dir) {
            images.push(ImageRef {
                reference: caps[0].to_string(),
                resolved_path: path,
                alt_text: String::new(),
            });
        }
    }

    images
}

fn resolve_existing(reference: &str, note_dir: &Path) -> Option<PathBuf> {
    resolve(reference, note_dir).filter(|path| path.exists())
}
