//! Meaty-move register.
//!
//! A selection stores the move's startup as it was when the player picked
//! it. The copy is never refreshed from the catalog; [`MeatyRegister::stale`]
//! reports selections whose cached value has drifted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::frame::FrameCatalog;
use crate::store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeatyMove {
    pub character: String,
    pub move_name: String,
    /// Startup at registration time
    pub startup: u32,
}

/// A selection whose cached startup no longer matches the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleMeaty {
    pub selection: MeatyMove,
    /// Current catalog startup; `None` if the move is gone or lost its startup
    pub current: Option<u32>,
}

#[derive(Debug)]
pub struct MeatyRegister {
    path: PathBuf,
    entries: Vec<MeatyMove>,
}

impl MeatyRegister {
    /// Open the register, starting empty if the file does not exist
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = store::read_json_or_default(&path)?;
        Ok(Self { path, entries })
    }

    /// Register a catalog move by name, caching its current startup
    pub fn register(
        &mut self,
        catalog: &FrameCatalog,
        character: &str,
        move_name: &str,
    ) -> Result<MeatyMove> {
        let startup = current_startup(catalog, character, move_name)?
            .ok_or_else(|| Error::MoveHasNoStartup(move_name.to_string()))?;

        let selection = MeatyMove {
            character: character.to_string(),
            move_name: move_name.to_string(),
            startup,
        };
        self.entries.push(selection.clone());
        self.persist()?;

        info!(
            "Registered meaty move for {}: {} ({}F)",
            character, move_name, startup
        );
        Ok(selection)
    }

    /// Remove every selection of the character matching one of `names`.
    /// Returns the number of removed selections.
    pub fn delete<S: AsRef<str>>(&mut self, character: &str, names: &[S]) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|m| {
            m.character != character || !names.iter().any(|n| n.as_ref() == m.move_name)
        });
        let removed = before - self.entries.len();

        if removed > 0 {
            self.persist()?;
            info!("Deleted {} meaty moves for {}", removed, character);
        }
        Ok(removed)
    }

    /// Selections for a character, fastest startup first
    pub fn list(&self, character: &str) -> Vec<&MeatyMove> {
        let mut moves: Vec<&MeatyMove> = self
            .entries
            .iter()
            .filter(|m| m.character == character)
            .collect();
        moves.sort_by_key(|m| m.startup);
        moves
    }

    /// Selections whose cached startup differs from the catalog
    pub fn stale(&self, catalog: &FrameCatalog, character: &str) -> Result<Vec<StaleMeaty>> {
        let mut stale = Vec::new();
        for selection in self.list(character) {
            let current = match current_startup(catalog, character, &selection.move_name) {
                Ok(startup) => startup,
                Err(Error::MoveNotFound { .. } | Error::UnknownCharacter(_)) => None,
                Err(e) => return Err(e),
            };
            if current != Some(selection.startup) {
                warn!(
                    "Meaty move {} cached at {}F, catalog has {:?}",
                    selection.move_name, selection.startup, current
                );
                stale.push(StaleMeaty {
                    selection: selection.clone(),
                    current,
                });
            }
        }
        Ok(stale)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<()> {
        store::write_json(&self.path, &self.entries)
    }
}

/// Fastest startup among the catalog entries with this name
fn current_startup(catalog: &FrameCatalog, character: &str, name: &str) -> Result<Option<u32>> {
    let mut variants = catalog
        .moves(character)?
        .iter()
        .filter(|m| m.name == name)
        .peekable();

    if variants.peek().is_none() {
        return Err(Error::MoveNotFound {
            character: character.to_string(),
            name: name.to_string(),
        });
    }
    Ok(variants.filter_map(|m| m.startup).min())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{CharacterFrames, Move};
    use tempfile::TempDir;

    fn catalog(startup_5c: u32) -> FrameCatalog {
        FrameCatalog::new(vec![CharacterFrames::new(
            "Hotaru",
            vec![
                Move::new("5C").with_startup(startup_5c).with_total(30),
                Move::new("2B").with_startup(5).with_total(18),
                Move::new("Throw"),
                Move::new("Tenshin").with_startup(12).with_total(41),
            ],
        )])
    }

    fn open_temp() -> (TempDir, MeatyRegister) {
        let dir = TempDir::new().unwrap();
        let register = MeatyRegister::open(dir.path().join("meaty_moves.json")).unwrap();
        (dir, register)
    }

    #[test]
    fn test_register_caches_startup() {
        let (_dir, mut register) = open_temp();
        let selection = register.register(&catalog(9), "Hotaru", "5C").unwrap();
        assert_eq!(selection.startup, 9);
    }

    #[test]
    fn test_register_requires_startup_and_known_move() {
        let (_dir, mut register) = open_temp();
        let catalog = catalog(9);
        assert!(matches!(
            register.register(&catalog, "Hotaru", "Throw"),
            Err(Error::MoveHasNoStartup(_))
        ));
        assert!(matches!(
            register.register(&catalog, "Hotaru", "Fake"),
            Err(Error::MoveNotFound { .. })
        ));
        assert!(matches!(
            register.register(&catalog, "Nobody", "5C"),
            Err(Error::UnknownCharacter(_))
        ));
        assert!(register.is_empty());
    }

    #[test]
    fn test_list_sorted_by_startup() {
        let (_dir, mut register) = open_temp();
        let catalog = catalog(9);
        register.register(&catalog, "Hotaru", "Tenshin").unwrap();
        register.register(&catalog, "Hotaru", "5C").unwrap();
        register.register(&catalog, "Hotaru", "2B").unwrap();

        let names: Vec<&str> = register
            .list("Hotaru")
            .iter()
            .map(|m| m.move_name.as_str())
            .collect();
        assert_eq!(names, vec!["2B", "5C", "Tenshin"]);
    }

    #[test]
    fn test_bulk_delete() {
        let (_dir, mut register) = open_temp();
        let catalog = catalog(9);
        register.register(&catalog, "Hotaru", "5C").unwrap();
        register.register(&catalog, "Hotaru", "2B").unwrap();
        register.register(&catalog, "Hotaru", "Tenshin").unwrap();

        let removed = register.delete("Hotaru", &["5C", "Tenshin", "Missing"]).unwrap();
        assert_eq!(removed, 2);
        assert_eq!(register.list("Hotaru").len(), 1);
        assert_eq!(register.delete("Hotaru", &["5C"]).unwrap(), 0);
    }

    #[test]
    fn test_delete_is_scoped_to_character() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("meaty_moves.json");
        std::fs::write(
            &path,
            r#"[{"character": "Hotaru", "move_name": "5C", "startup": 9},
                {"character": "Rock", "move_name": "5C", "startup": 8}]"#,
        )
        .unwrap();

        let mut register = MeatyRegister::open(&path).unwrap();
        assert_eq!(register.delete("Hotaru", &["5C"]).unwrap(), 1);
        assert_eq!(register.list("Rock").len(), 1);
    }

    #[test]
    fn test_cached_startup_is_not_resynchronised() {
        let (_dir, mut register) = open_temp();
        register.register(&catalog(9), "Hotaru", "5C").unwrap();

        // Catalog was re-imported with a new startup for 5C
        let updated = catalog(10);
        assert_eq!(register.list("Hotaru")[0].startup, 9);

        let stale = register.stale(&updated, "Hotaru").unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].selection.startup, 9);
        assert_eq!(stale[0].current, Some(10));

        assert!(register.stale(&catalog(9), "Hotaru").unwrap().is_empty());
    }

    #[test]
    fn test_stale_reports_removed_moves() {
        let (_dir, mut register) = open_temp();
        register.register(&catalog(9), "Hotaru", "5C").unwrap();

        let without_5c = FrameCatalog::new(vec![CharacterFrames::new(
            "Hotaru",
            vec![Move::new("2B").with_startup(5)],
        )]);
        let stale = register.stale(&without_5c, "Hotaru").unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].current, None);
    }

    #[test]
    fn test_stale_reports_dropped_character() {
        let (_dir, mut register) = open_temp();
        register.register(&catalog(9), "Hotaru", "5C").unwrap();
        register.register(&catalog(9), "Hotaru", "2B").unwrap();

        let without_hotaru = FrameCatalog::new(vec![CharacterFrames::new(
            "Mai",
            vec![Move::new("2B").with_startup(5)],
        )]);
        let stale = register.stale(&without_hotaru, "Hotaru").unwrap();
        assert_eq!(stale.len(), 2);
        assert!(stale.iter().all(|s| s.current.is_none()));
    }

    #[test]
    fn test_register_duplicate_name_caches_fastest_variant() {
        let (_dir, mut register) = open_temp();
        let catalog = FrameCatalog::new(vec![CharacterFrames::new(
            "Hotaru",
            vec![
                Move::new("Tenshin"),
                Move::new("Tenshin").with_startup(14).with_total(44),
                Move::new("Tenshin").with_startup(12).with_total(41),
            ],
        )]);
        let selection = register.register(&catalog, "Hotaru", "Tenshin").unwrap();
        assert_eq!(selection.startup, 12);
        assert!(register.stale(&catalog, "Hotaru").unwrap().is_empty());
    }
}
