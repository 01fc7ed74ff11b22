//! Move catalog for every character.
//!
//! - **Moves**: per-move timing data as imported from the frame sheets
//! - **Roster**: English catalog keys and Japanese display names
//! - **Catalog**: the JSON-backed per-character move lists
//! - **Cache**: a read-through cache over the catalog file

mod cache;
mod catalog;
mod moves;
mod roster;

pub use cache::*;
pub use catalog::*;
pub use moves::*;
pub use roster::*;
