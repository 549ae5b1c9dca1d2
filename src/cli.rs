use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// note-publish - Turn dated Markdown notes into platform-ready HTML
///
/// # Quick Reference
///
/// ```bash
/// note-publish list                       # Yesterday's notes
/// note-publish list 2026-01-17            # Notes of a given day
/// note-publish show 2026-01-17 --json     # Extracted records as JSON
/// note-publish show --key-only            # Only summary/key sections
/// note-publish render 2026-01-17          # HTML fragment per note
/// note-publish render --merge --preview   # One merged preview page
/// note-publish render -o drafts/          # Write <note>.html files
/// note-publish title "🚀 Launch Day!"     # Platform-legal title
/// ```
///
/// ## Environment Variables
///
/// - `NOTE_PUBLISH_NOTES`: Notes directory (overridden by `--notes`)
/// - `NOTE_PUBLISH_CONFIG`: Config file (overridden by `--config`)
/// - `RUST_LOG`: Log filter, e.g. `note_publish=debug`
///
/// Rendering runs without uploads: local images keep their local paths.
#[derive(Parser, Debug)]
#[command(name = "note-publish")]
#[command(version)]
#[command(about = "Turn dated Markdown notes into platform-ready HTML")]
pub struct Cli {
    /// Config file (default: <config dir>/note-publish/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the dated notes
    #[arg(short, long, global = true, value_name = "PATH")]
    pub notes: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the notes of a day
    List {
        /// Date key (YYYY-MM-DD, default: yesterday)
        date: Option<String>,
    },

    /// Print the extracted note records of a day
    Show {
        #[command(flatten)]
        select: Selection,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Render the notes of a day to HTML
    Render {
        #[command(flatten)]
        select: Selection,

        /// Wrap the fragment in a standalone preview page
        #[arg(short, long)]
        preview: bool,

        /// Write one `<note>.html` per record into this directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Sanitize a title for the platform
    Title {
        /// Raw title text
        text: String,
    },
}

/// Which notes to process and how
#[derive(Args, Debug, Clone)]
pub struct Selection {
    /// Date key (YYYY-MM-DD, default: yesterday)
    pub date: Option<String>,

    /// Keep only summary/key sections, drop link/resource sections
    #[arg(short, long)]
    pub key_only: bool,

    /// Merge all notes of the day into one record
    #[arg(short, long)]
    pub merge: bool,
}
