use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use note_publish::{locator, note, Config, NoteRecord, Selection};

/// Shared state for commands that read notes
pub struct Context {
    pub config: Config,
    pub notes_root: PathBuf,
}

/// A record plus the name used for its output file
pub struct Selected {
    pub name: String,
    pub record: NoteRecord,
}

impl Context {
    pub fn load(config_path: Option<&Path>, notes: Option<&Path>) -> Result<Self> {
        let config = Config::discover(config_path).context("failed to load configuration")?;
        let notes_root = config.notes_root(notes).context(
            "no notes directory configured (use --notes, NOTE_PUBLISH_NOTES or notes_root in the config)",
        )?;
        Ok(Self { config, notes_root })
    }

    /// The date key to work on, defaulting to yesterday
    pub fn date(&self, date: Option<&str>) -> String {
        date.map(str::to_string).unwrap_or_else(locator::yesterday_stamp)
    }

    /// Extract the notes picked by `select`
    ///
    /// A merge fails as a whole when any note is unreadable; otherwise
    /// unreadable notes are logged and skipped.
    pub fn select(&self, select: &Selection) -> Result<Vec<Selected>> {
        let date = self.date(select.date.as_deref());
        let paths = locator::locate(&self.notes_root, &date);
        let keywords = select.key_only.then_some(&self.config.filter);

        if select.merge {
            let merged = note::merge(&paths, &date, keywords, &self.config.merged_title)
                .with_context(|| format!("failed to merge notes of {date}"))?;
            return Ok(merged
                .into_iter()
                .map(|record| Selected {
                    name: format!("merged-{date}"),
                    record,
                })
                .collect());
        }

        let mut selected = Vec::with_capacity(paths.len());
        for path in &paths {
            match note::extract(path, keywords) {
                Ok(record) => selected.push(Selected {
                    name: note_publish::util::file_stem(path),
                    record,
                }),
                Err(err) => tracing::warn!(error = %err, "skipping note"),
            }
        }
        Ok(selected)
    }
}
