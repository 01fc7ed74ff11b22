//! Frame table display.

use anyhow::Result;
use garou_core::{ExportFormat, JsonExporter, Move, TsvExporter, format_move_table};

use super::resolve;
use crate::cli::OutputFormat;
use crate::context::AppContext;

pub fn run(ctx: &AppContext, character: &str, opponent: bool, format: OutputFormat) -> Result<()> {
    let character = resolve(character)?;
    let catalog = ctx.catalog.get()?;

    let moves: Vec<&Move> = if opponent {
        catalog.opponent_view(character)?
    } else {
        catalog.moves(character)?.iter().collect()
    };

    let output = match format {
        OutputFormat::Text => format_move_table(&moves),
        OutputFormat::Tsv => TsvExporter.format_rows(&moves),
        OutputFormat::Json => JsonExporter.format_rows(&moves),
    };
    print!("{}", output);
    Ok(())
}
