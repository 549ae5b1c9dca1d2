//! Note location by date
//!
//! Notes live flat in one directory and carry their date in the file name
//! (`2026-01-17-some-title.md`). Lookup is a non-recursive substring match
//! on the date key; results keep the directory's enumeration order.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};

use crate::constants as C;
use crate::util;

/// All notes in `notes_root` whose file name contains `date_stamp`
///
/// A missing root or an unreadable directory yields an empty list and an
/// error event; no match yields an empty list.
pub fn locate(notes_root: &Path, date_stamp: &str) -> Vec<PathBuf> {
    if !notes_root.exists() {
        tracing::error!(root = %util::display_path(notes_root), "notes directory does not exist");
        return Vec::new();
    }

    let entries = match fs::read_dir(notes_root) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!(root = %util::display_path(notes_root), error = %err, "cannot list notes directory");
            return Vec::new();
        }
    };

    let notes: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(C::MARKDOWN_EXTENSION) && name.contains(date_stamp)
        })
        .map(|entry| entry.path())
        .collect();

    if notes.is_empty() {
        tracing::info!(date = date_stamp, "no notes found");
    } else {
        tracing::info!(date = date_stamp, count = notes.len(), "found notes");
    }
    notes
}

/// The first note for `date_stamp`, for flows that expect one note per day
pub fn locate_one(notes_root: &Path, date_stamp: &str) -> Option<PathBuf> {
    locate(notes_root, date_stamp).into_iter().next()
}

/// Date key as embedded in note file names
pub fn date_stamp(date: NaiveDate) -> String {
    date.format(C::DATE_STAMP_FORMAT).to_string()
}

/// Today's date key in local time
pub fn today_stamp() -> String {
    date_stamp(Local::now().date_naive())
}

/// Yesterday's date key in local time
pub fn yesterday_stamp() -> String {
    date_stamp(Local::now().date_naive() - Duration::days(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "# note").unwrap();
    }

    #[test]
    fn test_locate_matches_date_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2026-01-17-a.md");
        touch(dir.path(), "notes 2026-01-17.md");
        touch(dir.path(), "2026-01-17-draft.txt");
        touch(dir.path(), "2026-01-18-b.md");
        fs::create_dir(dir.path().join("2026-01-17-dir")).unwrap();

        let mut found: Vec<String> = locate(dir.path(), "2026-01-17")
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        found.sort();
        assert_eq!(found, vec!["2026-01-17-a.md", "notes 2026-01-17.md"]);
    }

    #[test]
    fn test_locate_is_not_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("archive");
        fs::create_dir(&sub).unwrap();
        touch(&sub, "2026-01-17-old.md");
        assert!(locate(dir.path(), "2026-01-17").is_empty());
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(locate(&missing, "2026-01-17").is_empty());
        assert_eq!(locate_one(&missing, "2026-01-17"), None);
    }

    #[test]
    fn test_root_that_is_a_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("2026-01-17-a.md");
        touch(dir.path(), "2026-01-17-a.md");
        assert!(locate(&file, "2026-01-17").is_empty());
        assert_eq!(locate_one(&file, "2026-01-17"), None);
    }

    #[test]
    fn test_locate_one_picks_a_match() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2026-01-17-a.md");
        let found = locate_one(dir.path(), "2026-01-17").unwrap();
        assert_eq!(found, dir.path().join("2026-01-17-a.md"));
    }

    #[test]
    fn test_date_stamp_format() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
        assert_eq!(date_stamp(date), "2026-01-07");
        assert_eq!(today_stamp().len(), 10);
        assert_ne!(today_stamp(), yesterday_stamp());
    }
}
