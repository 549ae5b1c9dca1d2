use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use note_publish::{constants as C, preview_document, title, util, ImageUrlMap, Selection, Transducer};

use super::context::Context;

pub fn run(ctx: &Context, select: &Selection, preview: bool, output: Option<&Path>) -> Result<()> {
    let selected = ctx.select(select)?;
    if selected.is_empty() {
        tracing::warn!("nothing to render");
        return Ok(());
    }

    let transducer = Transducer::new(&ctx.config);
    // No uploads happen here, so every image keeps its local reference
    let image_map = ImageUrlMap::new();

    if let Some(dir) = output {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    for mut item in selected {
        let cleaned = title::fit(&title::sanitize(&item.record.title), C::TITLE_MAX_CHARS);
        if cleaned != item.record.title {
            tracing::info!(original = %item.record.title, cleaned = %cleaned, "sanitized title");
        }
        item.record.title = cleaned;

        if item.record.cover_image().is_none() {
            tracing::warn!(note = %item.name, "note has no local image to use as cover");
        }

        let fragment = transducer.render(&item.record, &image_map);
        let html = if preview {
            preview_document(&item.record.title, &fragment)
        } else {
            fragment
        };

        match output {
            Some(dir) => {
                let path = dir.join(format!("{}.html", item.name));
                fs::write(&path, html).with_context(|| format!("failed to write {}", path.display()))?;
                println!("{}", util::display_path(&path));
            }
            None => println!("{html}"),
        }
    }
    Ok(())
}
