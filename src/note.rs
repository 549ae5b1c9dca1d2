//! Note extraction
//!
//! Parses one Markdown note into a [`NoteRecord`]: title from the first
//! level-1 heading (or the file name), body after it, embedded images that
//! exist on disk, and a short digest. Several notes of the same day can be
//! merged into one synthetic record.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::KeywordSets;
use crate::constants as C;
use crate::error::{Error, Result};
use crate::filter;
use crate::resolve::{self, ImageRef};
use crate::title::PICTOGRAPH_RE;
use crate::util;

/// First block-quote line
static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^>[ \t]*(.+)").expect("valid regex"));

/// Markdown punctuation removed from plain-text digests
static MARKUP_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#*>\[\]()!`]").expect("valid regex"));

static NEWLINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\r?\n)+").expect("valid regex"));

/// A parsed note ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteRecord {
    pub title: String,
    pub body: String,
    pub images: Vec<ImageRef>,
    pub digest: String,
    pub raw_content: String,
}

impl NoteRecord {
    /// The platform thumbnail: the first resolved image
    pub fn cover_image(&self) -> Option<&Path> {
        self.images.first().map(|i| i.resolved_path.as_path())
    }

    /// Digest cut down to the platform's limit
    pub fn platform_digest(&self) -> String {
        util::truncate_chars(&self.digest, C::PLATFORM_DIGEST_MAX_CHARS).to_string()
    }

    /// Image paths in upload order
    pub fn image_paths(&self) -> Vec<PathBuf> {
        self.images.iter().map(|i| i.resolved_path.clone()).collect()
    }
}

/// Parse the note at `path`
///
/// With `keywords` set the body is reduced to its key sections. Images are
/// always scanned from the unfiltered text so the cover image does not
/// depend on filtering.
pub fn extract(path: &Path, keywords: Option<&KeywordSets>) -> Result<NoteRecord> {
    let raw_content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let note_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let record = parse(&raw_content, path, note_dir, keywords);

    tracing::info!(
        path = %util::display_path(path),
        title = %record.title,
        images = record.images.len(),
        "parsed note"
    );
    Ok(record)
}

/// [`extract`] with a boolean switch and the default keyword sets
pub fn extract_note(path: &Path, key_content_only: bool) -> Result<NoteRecord> {
    let defaults = KeywordSets::default();
    extract(path, key_content_only.then_some(&defaults))
}

/// Build a record from note text; `path` supplies the fallback title
pub fn parse(
    raw_content: &str,
    path: &Path,
    note_dir: &Path,
    keywords: Option<&KeywordSets>,
) -> NoteRecord {
    let (title, body) = split_title(raw_content)
        .unwrap_or_else(|| (util::file_stem(path), raw_content.trim().to_string()));

    let body = match keywords {
        Some(sets) => filter::extract_key_content(&body, sets),
        None => body,
    };

    let images = resolve::scan_images(raw_content, note_dir);
    let digest = make_digest(&body);

    NoteRecord {
        title,
        body,
        images,
        digest,
        raw_content: raw_content.to_string(),
    }
}

/// Title and body when the text has a level-1 heading line
fn split_title(content: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = content.split('\n').collect();
    let idx = lines
        .iter()
        .position(|line| line.trim().starts_with(C::TITLE_MARKER))?;

    let title = lines[idx].trim()[1..].trim().to_string();
    let body = lines[idx + 1..].join("\n").trim().to_string();
    Some((title, body))
}

/// Digest from the first block quote, else from the start of the body
pub fn make_digest(body: &str) -> String {
    if let Some(caps) = QUOTE_RE.captures(body) {
        let quote = PICTOGRAPH_RE.replace_all(&caps[1], "");
        let quote = quote.trim();
        if quote.chars().count() >= C::DIGEST_MIN_QUOTE_CHARS {
            return util::truncate_chars(quote, C::DIGEST_MAX_CHARS).trim().to_string();
        }
    }

    let plain = MARKUP_PUNCT_RE.replace_all(body, "");
    let plain = NEWLINES_RE.replace_all(&plain, " ");
    util::truncate_chars(&plain, C::DIGEST_MAX_CHARS).trim().to_string()
}

/// Merge the notes of one day into a single record
///
/// Returns `None` for an empty list; a single path is extracted as is.
pub fn merge(
    paths: &[PathBuf],
    date_stamp: &str,
    keywords: Option<&KeywordSets>,
    label: &str,
) -> Result<Option<NoteRecord>> {
    match paths {
        [] => return Ok(None),
        [single] => return extract(single, keywords).map(Some),
        _ => {}
    }

    tracing::info!(count = paths.len(), date = date_stamp, "merging notes");

    let notes = paths
        .iter()
        .map(|path| extract(path, keywords))
        .collect::<Result<Vec<_>>>()?;

    let body = notes
        .iter()
        .map(|note| format!("## {}\n\n{}", note.title, note.body))
        .collect::<Vec<_>>()
        .join(C::MERGE_SEPARATOR);

    let images = notes.iter().flat_map(|note| note.images.iter().cloned()).collect();

    let digest = notes
        .iter()
        .map(|note| note.digest.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    Ok(Some(NoteRecord {
        title: format!("{label} {date_stamp}"),
        digest: util::truncate_chars(&digest, C::DIGEST_MAX_CHARS).to_string(),
        raw_content: body.clone(),
        body,
        images,
    }))
}
