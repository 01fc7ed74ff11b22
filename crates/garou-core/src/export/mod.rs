//! Output formats for frame tables, registers and the adjustment board.

mod console;
mod format;
mod json;
mod tsv;

pub use console::*;
pub use format::ExportFormat;
pub use json::*;
pub use tsv::*;
