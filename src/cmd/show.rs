use anyhow::Result;
use note_publish::{util, NoteRecord, Selection};

use super::context::Context;

pub fn run(ctx: &Context, select: &Selection, json: bool) -> Result<()> {
    let selected = ctx.select(select)?;

    if json {
        let records: Vec<&NoteRecord> = selected.iter().map(|s| &s.record).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for (i, item) in selected.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let record = &item.record;
        println!("{}", item.name);
        println!("  title:  {}", record.title);
        println!("  digest: {}", record.digest);
        println!("  body:   {} chars", record.body.chars().count());
        for image in &record.images {
            println!("  image:  {}", util::display_path(&image.resolved_path));
        }
    }
    Ok(())
}
