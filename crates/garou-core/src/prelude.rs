//! Prelude module for convenient imports
//!
//! ```ignore
//! use garou_core::prelude::*;
//! ```

// Catalog
pub use crate::frame::{CatalogCache, FrameCatalog, Move, resolve_character};

// Error handling
pub use crate::error::{Error, Result};

// Adjustment search
pub use crate::adjust::{Adjustment, FillPolicy, FillRule, find_adjustments};

// Registers and board
pub use crate::board::{AdjustmentBoard, BoardRequest};
pub use crate::combo::{ComboOrder, ComboRecord, ComboRegister};
pub use crate::meaty::{MeatyMove, MeatyRegister};

// Configuration
pub use crate::config::AppConfig;
pub use crate::store::DataDir;
pub use crate::timing::{DodgeAttackTable, MissingEntryPolicy};

// Export format trait
pub use crate::export::ExportFormat;
