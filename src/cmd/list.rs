use anyhow::Result;
use note_publish::{locator, util};

use super::context::Context;

pub fn run(ctx: &Context, date: Option<String>) -> Result<()> {
    let date = ctx.date(date.as_deref());
    for path in locator::locate(&ctx.notes_root, &date) {
        println!("{}", util::display_path(&path));
    }
    Ok(())
}
