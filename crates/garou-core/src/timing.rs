//! Timing targets a combo can be converted into.
//!
//! Short hop and jump land at fixed frame counts for every character. The
//! low-profile dodge attack has a per-character startup, looked up from
//! [`DodgeAttackTable`]. Free slots use the startup of a move the player
//! picked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use tracing::warn;

use crate::error::{Error, Result};

/// Frames until a short hop lands
pub const SHORT_HOP_FRAMES: u32 = 34;
/// Frames until a full jump lands
pub const JUMP_FRAMES: u32 = 41;
/// Late frames allowed for a free-slot setup by default
pub const DEFAULT_FREE_SLOT_TOLERANCE: u32 = 2;

const DODGE_ATTACK_STARTUP: [(&str, u32); 17] = [
    ("B. Jenet", 22),
    ("Billy", 24),
    ("CR7", 24),
    ("Dong Hwan", 24),
    ("Gato", 17),
    ("Hokutomaru", 23),
    ("Hotaru", 23),
    ("Kain", 25),
    ("Kevin", 23),
    ("Mai", 25),
    ("Marco", 25),
    ("Preecha", 24),
    ("Rock", 24),
    ("Salvatore", 21),
    ("Terry", 26),
    ("Tizoc", 26),
    ("Vox", 24),
];

/// What to do when a character has no dodge-attack entry
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MissingEntryPolicy {
    /// Return [`Error::MissingDodgeStartup`]
    Fail,
    /// Log a warning and fall back to 0F
    #[default]
    Warn,
    /// Fall back to 0F without logging
    Default,
}

/// Where a startup value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupSource {
    Table,
    /// Not configured; the value is a placeholder
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DodgeStartup {
    pub frames: u32,
    pub source: StartupSource,
}

impl DodgeStartup {
    pub const FALLBACK: Self = Self {
        frames: 0,
        source: StartupSource::Fallback,
    };

    pub fn is_fallback(&self) -> bool {
        self.source == StartupSource::Fallback
    }
}

/// Character → low-profile dodge-attack startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DodgeAttackTable {
    entries: BTreeMap<String, u32>,
}

impl Default for DodgeAttackTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DodgeAttackTable {
    pub fn builtin() -> Self {
        Self {
            entries: DODGE_ATTACK_STARTUP
                .iter()
                .map(|(name, frames)| ((*name).to_string(), *frames))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace entries
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a u32)>,
    {
        for (name, frames) in overrides {
            self.entries.insert(name.clone(), *frames);
        }
        self
    }

    pub fn get(&self, character: &str) -> Option<u32> {
        self.entries.get(character).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a character's startup, applying `policy` when it is missing
    pub fn lookup(&self, character: &str, policy: MissingEntryPolicy) -> Result<DodgeStartup> {
        if let Some(frames) = self.get(character) {
            return Ok(DodgeStartup {
                frames,
                source: StartupSource::Table,
            });
        }

        match policy {
            MissingEntryPolicy::Fail => Err(Error::MissingDodgeStartup(character.to_string())),
            MissingEntryPolicy::Warn => {
                warn!(
                    "No dodge-attack startup configured for {}, using 0F",
                    character
                );
                Ok(DodgeStartup::FALLBACK)
            }
            MissingEntryPolicy::Default => Ok(DodgeStartup::FALLBACK),
        }
    }
}

/// What a combo is converted into
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimingTarget {
    ShortHop,
    Jump,
    DodgeAttack(DodgeStartup),
    FreeSlot { name: String, startup: u32 },
}

impl TimingTarget {
    pub fn frames(&self) -> u32 {
        match self {
            Self::ShortHop => SHORT_HOP_FRAMES,
            Self::Jump => JUMP_FRAMES,
            Self::DodgeAttack(startup) => startup.frames,
            Self::FreeSlot { startup, .. } => *startup,
        }
    }

    /// Frames left to fill after a combo with the given advantage
    pub fn required(&self, advantage: i32) -> i32 {
        let frames = i32::try_from(self.frames()).unwrap_or(i32::MAX);
        advantage.saturating_sub(frames)
    }

    pub fn label(&self) -> String {
        match self {
            Self::ShortHop => format!("Short hop (+{}F)", SHORT_HOP_FRAMES),
            Self::Jump => format!("Jump (+{}F)", JUMP_FRAMES),
            Self::DodgeAttack(startup) if startup.is_fallback() => {
                format!("Dodge attack ({}F, not configured)", startup.frames)
            }
            Self::DodgeAttack(startup) => format!("Dodge attack ({}F)", startup.frames),
            Self::FreeSlot { name, startup } => format!("{} ({}F)", name, startup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_covers_roster() {
        let table = DodgeAttackTable::builtin();
        assert_eq!(table.len(), 17);
        for entry in crate::frame::roster() {
            assert!(table.get(entry.english).is_some(), "{}", entry.english);
        }
        assert_eq!(table.get("Gato"), Some(17));
        assert_eq!(table.get("Terry"), Some(26));
    }

    #[test]
    fn test_lookup_known_character() {
        let table = DodgeAttackTable::builtin();
        let startup = table.lookup("Salvatore", MissingEntryPolicy::Fail).unwrap();
        assert_eq!(startup.frames, 21);
        assert!(!startup.is_fallback());
    }

    #[test]
    fn test_lookup_missing_fail() {
        let table = DodgeAttackTable::builtin();
        let err = table.lookup("Geese", MissingEntryPolicy::Fail).unwrap_err();
        assert!(matches!(err, Error::MissingDodgeStartup(ref name) if name == "Geese"));
    }

    #[test]
    fn test_fallback_is_distinct_from_table_zero() {
        let overrides = BTreeMap::from([("Geese".to_string(), 0u32)]);
        let table = DodgeAttackTable::empty().with_overrides(&overrides);

        let configured = table.lookup("Geese", MissingEntryPolicy::Warn).unwrap();
        let missing = table.lookup("Krauser", MissingEntryPolicy::Warn).unwrap();
        let silent = table.lookup("Krauser", MissingEntryPolicy::Default).unwrap();

        assert_eq!(configured.frames, 0);
        assert_eq!(missing.frames, 0);
        assert_ne!(configured, missing);
        assert!(!configured.is_fallback());
        assert!(missing.is_fallback());
        assert_eq!(missing, silent);
    }

    #[test]
    fn test_overrides_replace_builtin() {
        let overrides = BTreeMap::from([("Terry".to_string(), 27u32)]);
        let table = DodgeAttackTable::builtin().with_overrides(&overrides);
        assert_eq!(table.get("Terry"), Some(27));
        assert_eq!(table.len(), 17);
    }

    #[test]
    fn test_target_required() {
        assert_eq!(TimingTarget::ShortHop.required(46), 12);
        assert_eq!(TimingTarget::Jump.required(46), 5);
        assert_eq!(TimingTarget::Jump.required(30), -11);
        let slot = TimingTarget::FreeSlot {
            name: "2C".to_string(),
            startup: 9,
        };
        assert_eq!(slot.required(20), 11);
    }

    #[test]
    fn test_target_labels() {
        assert_eq!(TimingTarget::ShortHop.label(), "Short hop (+34F)");
        assert_eq!(
            TimingTarget::DodgeAttack(DodgeStartup::FALLBACK).label(),
            "Dodge attack (0F, not configured)"
        );
        let known = DodgeStartup {
            frames: 22,
            source: StartupSource::Table,
        };
        assert_eq!(TimingTarget::DodgeAttack(known).label(), "Dodge attack (22F)");
    }

    #[test]
    fn test_missing_policy_parsing() {
        assert_eq!("fail".parse::<MissingEntryPolicy>().unwrap(), MissingEntryPolicy::Fail);
        assert_eq!(MissingEntryPolicy::default(), MissingEntryPolicy::Warn);
        assert_eq!(MissingEntryPolicy::Default.to_string(), "default");
    }
}
