//! JSON file persistence shared by the catalog and the registers.
//!
//! The data directory holds three files:
//! - `frame_data.json`: the move catalog
//! - `combos.json`: registered combo recipes
//! - `meaty_moves.json`: meaty-move selections
//!
//! Every write replaces the whole file, so a mutation is visible to the next
//! read as soon as the writing call returns.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;

pub const FRAME_DATA_FILE: &str = "frame_data.json";
pub const COMBOS_FILE: &str = "combos.json";
pub const MEATY_MOVES_FILE: &str = "meaty_moves.json";

/// Locations of the persisted files
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn frame_data(&self) -> PathBuf {
        self.root.join(FRAME_DATA_FILE)
    }

    pub fn combos(&self) -> PathBuf {
        self.root.join(COMBOS_FILE)
    }

    pub fn meaty_moves(&self) -> PathBuf {
        self.root.join(MEATY_MOVES_FILE)
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read a JSON file, treating a missing file as empty
pub(crate) fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match read_json(path) {
        Ok(value) => Ok(value),
        Err(e) if e.is_not_found() => {
            debug!("{} does not exist yet, starting empty", path.display());
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}

pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    debug!("Wrote {}", path.display());
    Ok(())
}
