//! Roster listing.

use anyhow::Result;
use garou_core::roster;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    let table = ctx.config.dodge_table();
    let width = roster()
        .iter()
        .map(|c| c.english.chars().count())
        .max()
        .unwrap_or(0);

    for entry in roster() {
        let dodge = table
            .get(entry.english)
            .map(|frames| format!("{}F", frames))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<width$}  {:<4}  {}",
            entry.english,
            dodge,
            entry.japanese,
            width = width
        );
    }
    Ok(())
}
