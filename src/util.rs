//! Small path and text helpers shared across modules

use std::path::{Component, Path, PathBuf};

/// Join `relative` onto `base` and fold `.` and `..` components lexically
///
/// The result is not required to exist. `..` never climbs above the root
/// of an absolute path.
pub fn normalize_join(base: &Path, relative: &str) -> PathBuf {
    let joined = base.join(relative.replace('\\', "/"));
    let mut result = PathBuf::new();

    for component in joined.components() {
        match component {
            Component::CurDir => continue,
            Component::ParentDir => {
                let can_pop = matches!(
                    result.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    result.pop();
                } else if !result.has_root() {
                    result.push("..");
                }
            }
            other => result.push(other.as_os_str()),
        }
    }

    dunce::simplified(&result).to_path_buf()
}

/// File name without its extension, or "Untitled"
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}

/// Final path segment of a `/` or `\` separated reference
pub fn last_segment(path: &str) -> &str {
    path.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(path)
}

/// First `max` characters of `text`, cut on a char boundary
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_join_relative() {
        let base = PathBuf::from("/home/user/notes");
        assert_eq!(
            normalize_join(&base, "./attachments/a.png"),
            PathBuf::from("/home/user/notes/attachments/a.png")
        );
        assert_eq!(
            normalize_join(&base, "../img/b.png"),
            PathBuf::from("/home/user/img/b.png")
        );
    }

    #[test]
    fn test_normalize_join_stops_at_root() {
        let base = PathBuf::from("/notes");
        assert_eq!(normalize_join(&base, "../../x.png"), PathBuf::from("/x.png"));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("a/b/c.png"), "c.png");
        assert_eq!(last_segment("c.png"), "c.png");
        assert_eq!(last_segment("dir\\c.png"), "c.png");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("你好世界", 2), "你好");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem(Path::new("/x/2026-01-17-note.md")), "2026-01-17-note");
    }
}
