pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod links;
pub mod locator;
pub mod markdown;
pub mod note;
pub mod render;
pub mod resolve;
pub mod style;
pub mod title;
pub mod util;

pub use cli::{Cli, Command, Selection};
pub use config::{Config, KeywordSets, LinkPhrases};
pub use error::{Error, Result};
pub use locator::{locate, locate_one};
pub use note::{extract, extract_note, merge, NoteRecord};
pub use render::{preview_document, render, ImageUrlMap, Transducer};
pub use resolve::{resolve, scan_images, ImageRef};
pub use title::sanitize;
