//! Meaty-move register commands.

use anyhow::Result;
use garou_core::{MeatyRegister, format_meaty_line, format_stale_meaty};
use owo_colors::OwoColorize;
use tracing::debug;

use super::resolve;
use crate::cli::MeatyAction;
use crate::context::AppContext;

pub fn run(ctx: &AppContext, action: MeatyAction) -> Result<()> {
    let mut register = ctx.meaty()?;

    match action {
        MeatyAction::Add {
            character,
            move_name,
        } => {
            let character = resolve(&character)?;
            let catalog = ctx.catalog.get()?;
            let selection = register.register(&catalog, character, &move_name)?;
            println!("Registered {}", format_meaty_line(&selection));
            print_list(ctx, &register, character)?;
        }
        MeatyAction::Delete { character, moves } => {
            let character = resolve(&character)?;
            let removed = register.delete(character, &moves)?;
            println!("Deleted {} meaty moves", removed);
            print_list(ctx, &register, character)?;
        }
        MeatyAction::List { character } => {
            let character = resolve(&character)?;
            print_list(ctx, &register, character)?;
        }
    }
    Ok(())
}

fn print_list(ctx: &AppContext, register: &MeatyRegister, character: &str) -> Result<()> {
    let selections = register.list(character);
    if selections.is_empty() {
        println!("No meaty moves registered for {}", character);
        return Ok(());
    }
    for selection in selections {
        println!("{}", format_meaty_line(selection));
    }

    // Without an imported catalog there is nothing to compare against
    let catalog = match ctx.catalog.get() {
        Ok(catalog) => catalog,
        Err(e) if e.is_not_found() => {
            debug!("No frame catalog yet, skipping stale check");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    for stale in register.stale(&catalog, character)? {
        println!("{}", format!("stale: {}", format_stale_meaty(&stale)).yellow());
    }
    Ok(())
}
