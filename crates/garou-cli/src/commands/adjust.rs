//! Single adjustment search.

use anyhow::Result;
use garou_core::{FillPolicy, describe_adjustments};

use super::resolve;
use crate::context::AppContext;

pub fn run(
    ctx: &AppContext,
    character: &str,
    required: i32,
    tolerance: u32,
    policy: FillPolicy,
) -> Result<()> {
    let character = resolve(character)?;
    let catalog = ctx.catalog.get()?;
    let candidates = catalog.candidates(character)?;

    for line in describe_adjustments(&candidates, required, tolerance, policy) {
        println!("{}", line);
    }
    Ok(())
}
