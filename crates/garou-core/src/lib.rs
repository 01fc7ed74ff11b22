//! # garou-core
//!
//! Core library for the Garou okizeme planner.
//!
//! This crate provides:
//! - Frame data catalog, roster and sheet import
//! - Frame adjustment search (single moves and pairs filling a window)
//! - Combo and meaty-move registers persisted as JSON
//! - The okizeme adjustment board and its text/TSV/JSON rendering

pub mod adjust;
pub mod board;
pub mod combo;
pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod import;
pub mod meaty;
pub mod prelude;
pub mod store;
pub mod timing;

pub use adjust::{
    Adjustment, Candidate, FillPolicy, FillRule, FillWindow, NO_MATCH, describe_adjustments,
    find_adjustments,
};
pub use board::{
    AdjustmentBoard, BoardCell, BoardColumn, BoardRequest, BoardRow, SlotOption,
    free_slot_options,
};
pub use combo::{ComboOrder, ComboRecord, ComboRegister};
pub use config::{AppConfig, AppConfigBuilder, FreeSlotConfig};
pub use error::{Error, Result};
pub use export::{
    ExportFormat, JsonExporter, TsvExporter, format_board_console, format_combo_line,
    format_frame_tsv_header, format_frame_tsv_row, format_meaty_line, format_move_json,
    format_move_table, format_stale_meaty,
};
pub use frame::{
    CatalogCache, CharacterEntry, CharacterFrames, FrameCatalog, Height, Move,
    resolve_character, roster,
};
pub use import::{ImportOptions, decode_sheet, import_directory, localize_move_name, parse_sheet};
pub use meaty::{MeatyMove, MeatyRegister, StaleMeaty};
pub use store::DataDir;
pub use timing::{
    DEFAULT_FREE_SLOT_TOLERANCE, DodgeAttackTable, DodgeStartup, JUMP_FRAMES, MissingEntryPolicy,
    SHORT_HOP_FRAMES, StartupSource, TimingTarget,
};
