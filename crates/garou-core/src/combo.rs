//! Combo register.
//!
//! Combos are stored per character with a surrogate id. Ids grow
//! monotonically and are never reused, so "newest first" is id descending.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::info;

use crate::error::{Error, Result};
use crate::store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboRecord {
    pub id: u64,
    pub character: String,
    pub recipe: String,
    /// Frame advantage after the combo ends
    pub advantage: i32,
    pub registered_at: DateTime<Utc>,
}

impl fmt::Display for ComboRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({:+}F)", self.id, self.recipe, self.advantage)
    }
}

/// Listing order for a character's combos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ComboOrder {
    /// Most recently registered first
    #[default]
    Recent,
    /// Highest advantage first, newest first among ties
    Advantage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComboFile {
    next_id: u64,
    combos: Vec<ComboRecord>,
}

impl Default for ComboFile {
    fn default() -> Self {
        Self {
            next_id: 1,
            combos: Vec::new(),
        }
    }
}

/// File-backed combo store. Each mutation is written before it returns.
#[derive(Debug)]
pub struct ComboRegister {
    path: PathBuf,
    data: ComboFile,
}

impl ComboRegister {
    /// Open the register, starting empty if the file does not exist
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let data = store::read_json_or_default(&path)?;
        Ok(Self { path, data })
    }

    pub fn register(
        &mut self,
        character: &str,
        recipe: &str,
        advantage: i32,
    ) -> Result<ComboRecord> {
        let recipe = normalize_recipe(recipe)?;

        let record = ComboRecord {
            id: self.data.next_id,
            character: character.to_string(),
            recipe,
            advantage,
            registered_at: Utc::now(),
        };
        self.data.next_id += 1;
        self.data.combos.push(record.clone());
        self.persist()?;

        info!("Registered combo for {}: {}", record.character, record);
        Ok(record)
    }

    /// Change recipe and/or advantage; `None` keeps the current value
    pub fn update(
        &mut self,
        id: u64,
        recipe: Option<&str>,
        advantage: Option<i32>,
    ) -> Result<ComboRecord> {
        let recipe = recipe.map(normalize_recipe).transpose()?;

        let record = self
            .data
            .combos
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(Error::ComboNotFound(id))?;
        if let Some(recipe) = recipe {
            record.recipe = recipe;
        }
        if let Some(advantage) = advantage {
            record.advantage = advantage;
        }
        let updated = record.clone();
        self.persist()?;

        info!("Updated combo #{}", id);
        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> Result<ComboRecord> {
        let index = self
            .data
            .combos
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::ComboNotFound(id))?;
        let removed = self.data.combos.remove(index);
        self.persist()?;

        info!("Deleted combo #{}", id);
        Ok(removed)
    }

    pub fn get(&self, id: u64) -> Option<&ComboRecord> {
        self.data.combos.iter().find(|c| c.id == id)
    }

    pub fn list(&self, character: &str, order: ComboOrder) -> Vec<&ComboRecord> {
        let mut combos: Vec<&ComboRecord> = self
            .data
            .combos
            .iter()
            .filter(|c| c.character == character)
            .collect();

        match order {
            ComboOrder::Recent => combos.sort_by(|a, b| b.id.cmp(&a.id)),
            ComboOrder::Advantage => {
                combos.sort_by(|a, b| b.advantage.cmp(&a.advantage).then(b.id.cmp(&a.id)))
            }
        }
        combos
    }

    pub fn len(&self) -> usize {
        self.data.combos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.combos.is_empty()
    }

    fn persist(&self) -> Result<()> {
        store::write_json(&self.path, &self.data)
    }
}

fn normalize_recipe(recipe: &str) -> Result<String> {
    let recipe = recipe.trim();
    if recipe.is_empty() {
        return Err(Error::EmptyRecipe);
    }
    Ok(recipe.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (TempDir, ComboRegister) {
        let dir = TempDir::new().unwrap();
        let register = ComboRegister::open(dir.path().join("combos.json")).unwrap();
        (dir, register)
    }

    #[test]
    fn test_register_assigns_increasing_ids() {
        let (_dir, mut register) = open_temp();
        let first = register.register("Terry", "2B 2B 2C > Power Wave", 38).unwrap();
        let second = register.register("Terry", "5C > Burn Knuckle", 46).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(register.len(), 2);
    }

    #[test]
    fn test_display_signs_advantage() {
        let (_dir, mut register) = open_temp();
        let plus = register.register("Terry", "5C > Burn Knuckle", 46).unwrap();
        let minus = register.register("Terry", "2B 2B", -3).unwrap();
        assert_eq!(plus.to_string(), "#1 5C > Burn Knuckle (+46F)");
        assert_eq!(minus.to_string(), "#2 2B 2B (-3F)");
    }

    #[test]
    fn test_register_rejects_empty_recipe() {
        let (_dir, mut register) = open_temp();
        assert!(matches!(
            register.register("Terry", "   ", 10),
            Err(Error::EmptyRecipe)
        ));
        assert!(register.is_empty());
    }

    #[test]
    fn test_list_is_newest_first_per_character() {
        let (_dir, mut register) = open_temp();
        register.register("Terry", "A", 30).unwrap();
        register.register("Rock", "B", 40).unwrap();
        register.register("Terry", "C", 20).unwrap();

        let recipes: Vec<&str> = register
            .list("Terry", ComboOrder::Recent)
            .iter()
            .map(|c| c.recipe.as_str())
            .collect();
        assert_eq!(recipes, vec!["C", "A"]);
    }

    #[test]
    fn test_list_by_advantage() {
        let (_dir, mut register) = open_temp();
        register.register("Mai", "low", 20).unwrap();
        register.register("Mai", "high", 45).unwrap();
        register.register("Mai", "tie", 20).unwrap();

        let recipes: Vec<&str> = register
            .list("Mai", ComboOrder::Advantage)
            .iter()
            .map(|c| c.recipe.as_str())
            .collect();
        assert_eq!(recipes, vec!["high", "tie", "low"]);
    }

    #[test]
    fn test_update_and_delete() {
        let (_dir, mut register) = open_temp();
        let record = register.register("Kain", "5D", 12).unwrap();

        let updated = register.update(record.id, None, Some(-3)).unwrap();
        assert_eq!(updated.recipe, "5D");
        assert_eq!(updated.advantage, -3);

        let updated = register.update(record.id, Some(" 2D "), None).unwrap();
        assert_eq!(updated.recipe, "2D");

        let removed = register.delete(record.id).unwrap();
        assert_eq!(removed.id, record.id);
        assert!(register.get(record.id).is_none());
        assert!(matches!(register.delete(record.id), Err(Error::ComboNotFound(1))));
    }

    #[test]
    fn test_update_unknown_id() {
        let (_dir, mut register) = open_temp();
        assert!(matches!(
            register.update(99, Some("x"), None),
            Err(Error::ComboNotFound(99))
        ));
    }

    #[test]
    fn test_mutations_are_visible_after_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("combos.json");

        let mut register = ComboRegister::open(&path).unwrap();
        register.register("Billy", "A", 10).unwrap();
        let deleted = register.register("Billy", "B", 11).unwrap();
        register.delete(deleted.id).unwrap();

        let mut reopened = ComboRegister::open(&path).unwrap();
        assert_eq!(reopened.len(), 1);
        // Ids are not reused after a delete
        let next = reopened.register("Billy", "C", 12).unwrap();
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_combo_order_parsing() {
        assert_eq!("advantage".parse::<ComboOrder>().unwrap(), ComboOrder::Advantage);
        assert_eq!(ComboOrder::default(), ComboOrder::Recent);
    }
}
