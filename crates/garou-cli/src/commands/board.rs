//! Okizeme adjustment board.

use anyhow::Result;
use garou_core::{
    AdjustmentBoard, BoardRequest, ComboOrder, format_board_console, free_slot_options,
};

use super::resolve;
use crate::cli::BoardFormat;
use crate::context::AppContext;

pub fn run(
    ctx: &AppContext,
    character: &str,
    slot1: Option<&str>,
    slot2: Option<&str>,
    format: BoardFormat,
) -> Result<()> {
    let character = resolve(character)?;
    let catalog = ctx.catalog.get()?;
    let combos = ctx.combos()?;
    let meaty = ctx.meaty()?;

    let ordered = combos.list(character, ComboOrder::Recent);
    let selections = meaty.list(character);
    let slot_options = free_slot_options(&catalog, &selections, character)?;

    let board = AdjustmentBoard::build(
        &catalog,
        &BoardRequest {
            character,
            combos: &ordered,
            slot_options: &slot_options,
            slot1,
            slot2,
            dodge: ctx.dodge_startup(character)?,
            free_rule: ctx.config.free_slot.rule(),
        },
    )?;

    match format {
        BoardFormat::Text => print!("{}", format_board_console(&board)),
        BoardFormat::Json => println!("{}", serde_json::to_string_pretty(&board)?),
    }
    Ok(())
}
