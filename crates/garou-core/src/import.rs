//! Frame-sheet import.
//!
//! Each character's sheet is exported as a tab-separated file named after the
//! character's English catalog key (`Terry.tsv`, `B. Jenet.tsv`, ...). The
//! first column holds the move name; the remaining columns are located by
//! header: `Start`, `Guard`, `Hit`, `Total`, `Cancel`, `Low/Overhead`.
//!
//! Rows starting with `>` are target combos, not moves, and are dropped.
//! Numeric cells that do not parse (`-`, `//`, `15~20`) become absent.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::frame::{CharacterFrames, FrameCatalog, Height, Move, roster};

static CLOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bclose\b").unwrap());
static AIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bair\b").unwrap());
static REV_BLOW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bc\+d\b").unwrap());

const SHEET_EXTENSION: &str = "tsv";

#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Rewrite English move-name prefixes to the Japanese notation
    pub localize_names: bool,
}

/// Decode sheet bytes: UTF-8 (with or without BOM), otherwise Shift-JIS
pub fn decode_sheet(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("Sheet is not UTF-8, decoding as Shift-JIS");
            let (decoded, _, _) = encoding_rs::SHIFT_JIS.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// `close` → `近`, `air` → `空中`, `c+d` → `REVブロウ`, whole words only
pub fn localize_move_name(name: &str) -> String {
    let name = CLOSE.replace_all(name, "近");
    let name = AIR.replace_all(&name, "空中");
    REV_BLOW.replace_all(&name, "REVブロウ").into_owned()
}

struct Columns {
    startup: usize,
    total: usize,
    guard: Option<usize>,
    hit: Option<usize>,
    cancel: Option<usize>,
    low_overhead: Option<usize>,
}

impl Columns {
    fn from_header(sheet: &str, header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split('\t').map(str::trim).collect();
        let find = |wanted: &str| names.iter().position(|n| n.eq_ignore_ascii_case(wanted));
        let require = |wanted: &str| {
            find(wanted).ok_or_else(|| Error::InvalidSheet {
                sheet: sheet.to_string(),
                message: format!("missing column {wanted:?}"),
            })
        };

        Ok(Self {
            startup: require("Start")?,
            total: require("Total")?,
            guard: find("Guard"),
            hit: find("Hit"),
            cancel: find("Cancel"),
            low_overhead: find("Low/Overhead"),
        })
    }
}

/// Parse one character's sheet
pub fn parse_sheet(character: &str, text: &str, options: ImportOptions) -> Result<CharacterFrames> {
    let mut lines = text.lines();
    let header = lines.next().ok_or_else(|| Error::InvalidSheet {
        sheet: character.to_string(),
        message: "sheet is empty".to_string(),
    })?;
    let columns = Columns::from_header(character, header)?;

    let mut moves = Vec::new();
    for line in lines {
        let cells: Vec<&str> = line.split('\t').collect();
        let cell = |index: usize| cells.get(index).map(|c| c.trim()).unwrap_or("");
        let text_cell = |index: Option<usize>| {
            index
                .map(cell)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        };

        let name = cell(0);
        if name.is_empty() || name.starts_with('>') {
            continue;
        }

        let name = if options.localize_names {
            localize_move_name(name)
        } else {
            name.to_string()
        };

        moves.push(Move {
            name,
            startup: parse_frames(cell(columns.startup)),
            guard: text_cell(columns.guard),
            hit: text_cell(columns.hit),
            total: parse_frames(cell(columns.total)),
            cancel: text_cell(columns.cancel),
            low_overhead: columns
                .low_overhead
                .map(|i| Height::from_sheet(cell(i)))
                .unwrap_or_default(),
        });
    }

    debug!("Parsed {} moves for {}", moves.len(), character);
    Ok(CharacterFrames::new(character, moves))
}

/// Integer cell, or `None` for anything else. Spreadsheet exports may write
/// whole numbers as `12.0`.
fn parse_frames(cell: &str) -> Option<u32> {
    cell.parse::<u32>().ok().or_else(|| {
        cell.strip_suffix(".0")
            .and_then(|whole| whole.parse::<u32>().ok())
    })
}

/// Import every roster character's sheet found in `dir`, in roster order
pub fn import_directory<P: AsRef<Path>>(dir: P, options: ImportOptions) -> Result<FrameCatalog> {
    let dir = dir.as_ref();
    let mut characters = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_sheet = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SHEET_EXTENSION));
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if is_sheet && !roster().iter().any(|c| c.english == stem) {
            warn!("Skipping sheet for unknown character: {}", path.display());
        }
    }

    for entry in roster() {
        let path = dir.join(format!("{}.{}", entry.english, SHEET_EXTENSION));
        if !path.is_file() {
            debug!("No sheet for {}", entry.english);
            continue;
        }
        let text = decode_sheet(&fs::read(&path)?);
        characters.push(parse_sheet(entry.english, &text, options)?);
    }

    if characters.is_empty() {
        return Err(Error::InvalidSheet {
            sheet: dir.display().to_string(),
            message: "no character sheets found".to_string(),
        });
    }

    let catalog = FrameCatalog::new(characters);
    info!(
        "Imported {} characters ({} moves) from {}",
        catalog.len(),
        catalog.move_count(),
        dir.display()
    );
    Ok(catalog)
}
