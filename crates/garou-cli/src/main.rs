use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;

use cli::{Args, Command};
use context::AppContext;

fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("garou=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let ctx = AppContext::load(&args);
    debug!("Data directory: {}", ctx.data.root().display());

    match args.command {
        Command::Characters => commands::characters::run(&ctx),
        Command::Frames {
            character,
            opponent,
            format,
        } => commands::frames::run(&ctx, &character, opponent, format),
        Command::Combo { action } => commands::combo::run(&ctx, action),
        Command::Meaty { action } => commands::meaty::run(&ctx, action),
        Command::Adjust {
            character,
            required,
            tolerance,
            policy,
        } => commands::adjust::run(&ctx, &character, required, tolerance, policy),
        Command::Board {
            character,
            slot1,
            slot2,
            format,
        } => commands::board::run(
            &ctx,
            &character,
            slot1.as_deref(),
            slot2.as_deref(),
            format,
        ),
        Command::Import { dir, localize } => commands::import::run(&ctx, &dir, localize),
    }
}
