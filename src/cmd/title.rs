use anyhow::Result;
use note_publish::{constants as C, title};

pub fn run(text: &str) -> Result<()> {
    println!("{}", title::fit(&title::sanitize(text), C::TITLE_MAX_CHARS));
    Ok(())
}
