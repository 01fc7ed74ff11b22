//! CLI command implementations.
//!
//! Each command loads what it needs through the [`AppContext`], prints its
//! result to stdout and returns.
//!
//! [`AppContext`]: crate::context::AppContext

pub mod adjust;
pub mod board;
pub mod characters;
pub mod combo;
pub mod frames;
pub mod import;
pub mod meaty;

use anyhow::Result;

/// Catalog key (English name) for a user-supplied English or Japanese name
pub(crate) fn resolve(name: &str) -> Result<&'static str> {
    Ok(garou_core::resolve_character(name)?.english)
}
