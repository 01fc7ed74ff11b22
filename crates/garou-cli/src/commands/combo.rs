//! Combo register commands.

use anyhow::Result;
use garou_core::{ComboOrder, ComboRegister, format_combo_line};

use super::resolve;
use crate::cli::ComboAction;
use crate::context::AppContext;

pub fn run(ctx: &AppContext, action: ComboAction) -> Result<()> {
    let mut register = ctx.combos()?;

    match action {
        ComboAction::Add {
            character,
            recipe,
            advantage,
        } => {
            let character = resolve(&character)?;
            let record = register.register(character, &recipe, advantage)?;
            println!("Registered combo #{}", record.id);
            print_list(&register, &record.character, ComboOrder::Recent);
        }
        ComboAction::Edit {
            id,
            recipe,
            advantage,
        } => {
            let record = register.update(id, recipe.as_deref(), advantage)?;
            println!("Updated combo #{}", record.id);
            print_list(&register, &record.character, ComboOrder::Recent);
        }
        ComboAction::Delete { id } => {
            let record = register.delete(id)?;
            println!("Deleted combo #{}", record.id);
            print_list(&register, &record.character, ComboOrder::Recent);
        }
        ComboAction::List {
            character,
            by_advantage,
        } => {
            let character = resolve(&character)?;
            let order = if by_advantage {
                ComboOrder::Advantage
            } else {
                ComboOrder::Recent
            };
            print_list(&register, character, order);
        }
    }
    Ok(())
}

fn print_list(register: &ComboRegister, character: &str, order: ComboOrder) {
    let combos = register.list(character, order);
    if combos.is_empty() {
        println!("No combos registered for {}", character);
        return;
    }
    for combo in combos {
        println!("{}", format_combo_line(combo));
    }
}
