use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::Move;
use crate::adjust::Candidate;
use crate::error::{Error, Result};
use crate::store;

/// Frame data for a single character, in sheet order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterFrames {
    pub character: String,
    pub moves: Vec<Move>,
}

impl CharacterFrames {
    pub fn new(character: impl Into<String>, moves: Vec<Move>) -> Self {
        Self {
            character: character.into(),
            moves,
        }
    }
}

/// Per-character move lists, persisted as `frame_data.json`.
///
/// The on-disk shape is a JSON array of `{ "character", "moves" }` objects.
/// Move order inside a character is preserved exactly; the adjustment search
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameCatalog {
    characters: Vec<CharacterFrames>,
}

impl FrameCatalog {
    pub fn new(characters: Vec<CharacterFrames>) -> Self {
        Self { characters }
    }

    /// Load catalog from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let catalog: Self = store::read_json(path.as_ref())?;
        info!(
            "Loaded frame catalog: {} characters, {} moves",
            catalog.characters.len(),
            catalog.move_count()
        );
        Ok(catalog)
    }

    /// Save catalog to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        store::write_json(path.as_ref(), self)
    }

    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.characters.iter().map(|c| c.character.as_str())
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn move_count(&self) -> usize {
        self.characters.iter().map(|c| c.moves.len()).sum()
    }

    /// All moves of a character in catalog order
    pub fn moves(&self, character: &str) -> Result<&[Move]> {
        self.characters
            .iter()
            .find(|c| c.character == character)
            .map(|c| c.moves.as_slice())
            .ok_or_else(|| Error::UnknownCharacter(character.to_string()))
    }

    /// First move with the given name
    pub fn find_move(&self, character: &str, name: &str) -> Result<&Move> {
        self.moves(character)?
            .iter()
            .find(|m| m.name == name)
            .ok_or_else(|| Error::MoveNotFound {
                character: character.to_string(),
                name: name.to_string(),
            })
    }

    /// Moves usable as a setup: startup defined, ordered by startup ascending
    pub fn startup_actions(&self, character: &str) -> Result<Vec<&Move>> {
        let mut actions: Vec<&Move> = self
            .moves(character)?
            .iter()
            .filter(|m| m.startup.is_some())
            .collect();
        actions.sort_by_key(|m| m.startup);
        Ok(actions)
    }

    /// Reference table for an opponent: startup of at least 1F, fastest first
    pub fn opponent_view(&self, character: &str) -> Result<Vec<&Move>> {
        let mut moves: Vec<&Move> = self
            .moves(character)?
            .iter()
            .filter(|m| m.has_active_startup())
            .collect();
        moves.sort_by_key(|m| m.startup);
        Ok(moves)
    }

    /// Moves that can fill a window, in catalog order
    pub fn candidates(&self, character: &str) -> Result<Vec<Candidate<'_>>> {
        Ok(self
            .moves(character)?
            .iter()
            .filter_map(Candidate::from_move)
            .collect())
    }
}
