//! Okizeme adjustment board.
//!
//! For one character, every registered combo is converted into five
//! targets: short hop, jump, dodge attack and two free slots. Each cell is
//! an independent adjustment search over the character's catalog.

use serde::Serialize;
use tracing::debug;

use crate::adjust::{Adjustment, FillPolicy, FillRule};
use crate::combo::ComboRecord;
use crate::error::{Error, Result};
use crate::frame::FrameCatalog;
use crate::meaty::MeatyMove;
use crate::timing::{DodgeStartup, TimingTarget};

/// A move the player can pick for a free slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotOption {
    pub name: String,
    pub startup: u32,
}

/// Free-slot choices: registered meaty moves, or every move with a startup
/// when none are registered
pub fn free_slot_options(
    catalog: &FrameCatalog,
    meaty: &[&MeatyMove],
    character: &str,
) -> Result<Vec<SlotOption>> {
    if !meaty.is_empty() {
        return Ok(meaty
            .iter()
            .map(|m| SlotOption {
                name: m.move_name.clone(),
                startup: m.startup,
            })
            .collect());
    }

    Ok(catalog
        .startup_actions(character)?
        .into_iter()
        .filter_map(|m| {
            m.startup.map(|startup| SlotOption {
                name: m.name.clone(),
                startup,
            })
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardColumn {
    pub target: TimingTarget,
    pub rule: FillRule,
}

impl BoardColumn {
    pub fn label(&self) -> String {
        let tolerance = match (self.rule.tolerance, self.rule.policy) {
            (0, _) => "±0F".to_string(),
            (t, FillPolicy::AtOrAfter) => format!("0〜+{t}F"),
            (t, FillPolicy::AtOrBefore) => format!("-{t}〜0F"),
        };
        format!("{} ({})", self.target.label(), tolerance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardCell {
    /// Frames left to fill for this column
    pub required: i32,
    pub adjustments: Vec<Adjustment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRow {
    pub combo: ComboRecord,
    pub cells: Vec<BoardCell>,
}

/// Inputs for [`AdjustmentBoard::build`]
#[derive(Debug, Clone)]
pub struct BoardRequest<'a> {
    pub character: &'a str,
    /// Combos in display order
    pub combos: &'a [&'a ComboRecord],
    pub slot_options: &'a [SlotOption],
    pub slot1: Option<&'a str>,
    pub slot2: Option<&'a str>,
    pub dodge: DodgeStartup,
    pub free_rule: FillRule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustmentBoard {
    pub character: String,
    pub columns: Vec<BoardColumn>,
    pub rows: Vec<BoardRow>,
}

impl AdjustmentBoard {
    pub fn build(catalog: &FrameCatalog, request: &BoardRequest<'_>) -> Result<Self> {
        let candidates = catalog.candidates(request.character)?;

        let mut columns = vec![
            BoardColumn {
                target: TimingTarget::ShortHop,
                rule: FillRule::EXACT,
            },
            BoardColumn {
                target: TimingTarget::Jump,
                rule: FillRule::EXACT,
            },
            BoardColumn {
                target: TimingTarget::DodgeAttack(request.dodge),
                rule: FillRule::EXACT,
            },
        ];

        for slot in select_slots(request)? {
            columns.push(BoardColumn {
                target: TimingTarget::FreeSlot {
                    name: slot.name.clone(),
                    startup: slot.startup,
                },
                rule: request.free_rule,
            });
        }

        let rows = request
            .combos
            .iter()
            .map(|combo| BoardRow {
                combo: (*combo).clone(),
                cells: columns
                    .iter()
                    .map(|column| {
                        let required = column.target.required(combo.advantage);
                        BoardCell {
                            required,
                            adjustments: column.rule.search(&candidates, required),
                        }
                    })
                    .collect(),
            })
            .collect();

        debug!(
            "Built board for {}: {} combos x {} columns",
            request.character,
            request.combos.len(),
            columns.len()
        );

        Ok(Self {
            character: request.character.to_string(),
            columns,
            rows,
        })
    }
}

/// Resolve the two free-slot choices. Defaults are the first and second
/// options, or the first twice when only one exists.
fn select_slots<'a>(request: &BoardRequest<'a>) -> Result<Vec<&'a SlotOption>> {
    let options = request.slot_options;
    let Some(first_default) = options.first() else {
        return Ok(Vec::new());
    };
    let second_default = options.get(1).unwrap_or(first_default);

    let pick = |choice: Option<&str>, default: &'a SlotOption| match choice {
        None => Ok(default),
        Some(name) => options
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| Error::MoveNotFound {
                character: request.character.to_string(),
                name: name.to_string(),
            }),
    };

    Ok(vec![
        pick(request.slot1, first_default)?,
        pick(request.slot2, second_default)?,
    ])
}
