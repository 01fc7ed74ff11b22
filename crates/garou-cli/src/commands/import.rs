//! Frame-sheet import.

use std::path::Path;

use anyhow::Result;
use garou_core::{ImportOptions, import_directory};

use crate::context::AppContext;

pub fn run(ctx: &AppContext, dir: &Path, localize: bool) -> Result<()> {
    let options = ImportOptions {
        localize_names: localize,
    };
    let catalog = import_directory(dir, options)?;
    ctx.catalog.store(&catalog)?;

    println!(
        "Imported {} characters ({} moves) into {}",
        catalog.len(),
        catalog.move_count(),
        ctx.catalog.path().display()
    );
    for character in catalog.characters() {
        let count = catalog.moves(character).map(|m| m.len()).unwrap_or(0);
        println!("  {:<12} {}", character, count);
    }
    Ok(())
}
