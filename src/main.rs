use anyhow::Result;
use clap::Parser;
use note_publish::{Cli, Command};

use cmd::context::Context;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Cli { config, notes, command } = Cli::parse();
    let ctx = || Context::load(config.as_deref(), notes.as_deref());

    match command {
        Command::List { date } => cmd::list::run(&ctx()?, date),
        Command::Show { select, json } => cmd::show::run(&ctx()?, &select, json),
        Command::Render { select, preview, output } => {
            cmd::render::run(&ctx()?, &select, preview, output.as_deref())
        }
        Command::Title { text } => cmd::title::run(&text),
    }
}

mod cmd {
    pub mod context;
    pub mod list;
    pub mod render;
    pub mod show;
    pub mod title;
}
