//! Application configuration, read from a TOML file.
//!
//! ```toml
//! data_dir = "C:/dev/garou"
//! missing_dodge = "warn"        # fail | warn | default
//!
//! [free_slot]
//! policy = "at-or-after"        # at-or-after | at-or-before
//! tolerance = 2
//!
//! [dodge_attack]
//! "B. Jenet" = 22
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjust::{FillPolicy, FillRule};
use crate::error::Result;
use crate::timing::{DEFAULT_FREE_SLOT_TOLERANCE, DodgeAttackTable, MissingEntryPolicy};

/// How free-slot setups are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeSlotConfig {
    pub policy: FillPolicy,
    pub tolerance: u32,
}

impl Default for FreeSlotConfig {
    fn default() -> Self {
        Self {
            policy: FillPolicy::AtOrAfter,
            tolerance: DEFAULT_FREE_SLOT_TOLERANCE,
        }
    }
}

impl FreeSlotConfig {
    pub fn rule(&self) -> FillRule {
        FillRule::new(self.policy, self.tolerance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the catalog and registers
    pub data_dir: Option<PathBuf>,
    pub missing_dodge: MissingEntryPolicy,
    pub free_slot: FreeSlotConfig,
    /// Per-character dodge-attack startups layered over the built-in table
    pub dodge_attack: BTreeMap<String, u32>,
}

impl AppConfig {
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in dodge-attack table with this config's overrides applied
    pub fn dodge_table(&self) -> DodgeAttackTable {
        DodgeAttackTable::builtin().with_overrides(&self.dodge_attack)
    }
}

/// Builder for AppConfig
#[derive(Debug, Clone, Default)]
pub struct AppConfigBuilder {
    data_dir: Option<PathBuf>,
    missing_dodge: Option<MissingEntryPolicy>,
    free_slot_policy: Option<FillPolicy>,
    free_slot_tolerance: Option<u32>,
    dodge_attack: BTreeMap<String, u32>,
}

impl AppConfigBuilder {
    pub fn data_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    pub fn missing_dodge(mut self, policy: MissingEntryPolicy) -> Self {
        self.missing_dodge = Some(policy);
        self
    }

    pub fn free_slot_policy(mut self, policy: FillPolicy) -> Self {
        self.free_slot_policy = Some(policy);
        self
    }

    pub fn free_slot_tolerance(mut self, tolerance: u32) -> Self {
        self.free_slot_tolerance = Some(tolerance);
        self
    }

    pub fn dodge_attack(mut self, character: impl Into<String>, frames: u32) -> Self {
        self.dodge_attack.insert(character.into(), frames);
        self
    }

    pub fn build(self) -> AppConfig {
        let default = AppConfig::default();
        AppConfig {
            data_dir: self.data_dir.or(default.data_dir),
            missing_dodge: self.missing_dodge.unwrap_or(default.missing_dodge),
            free_slot: FreeSlotConfig {
                policy: self.free_slot_policy.unwrap_or(default.free_slot.policy),
                tolerance: self
                    .free_slot_tolerance
                    .unwrap_or(default.free_slot.tolerance),
            },
            dodge_attack: self.dodge_attack,
        }
    }
}
