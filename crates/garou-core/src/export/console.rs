//! Plain-text rendering for terminals.

use owo_colors::OwoColorize;

use crate::board::AdjustmentBoard;
use crate::combo::ComboRecord;
use crate::frame::Move;
use crate::meaty::{MeatyMove, StaleMeaty};

const MOVE_COLUMNS: [&str; 7] = ["Move", "Start", "Guard", "Hit", "Total", "Cancel", "Height"];

fn move_cells(mv: &Move) -> [String; 7] {
    let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    [
        mv.name.clone(),
        or_dash(mv.startup.map(|v| v.to_string())),
        or_dash(mv.guard.clone()),
        or_dash(mv.hit.clone()),
        or_dash(mv.total.map(|v| v.to_string())),
        or_dash(mv.cancel.clone()),
        mv.low_overhead.short_name().to_string(),
    ]
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{}{}", cell, " ".repeat(width.saturating_sub(len)))
}

/// Aligned frame table with a header line
pub fn format_move_table(moves: &[&Move]) -> String {
    let rows: Vec<[String; 7]> = moves.iter().map(|mv| move_cells(mv)).collect();

    let mut widths = MOVE_COLUMNS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = MOVE_COLUMNS.iter().map(|h| h.to_string()).collect();
    let mut output = render(&header);
    output.push('\n');
    for row in &rows {
        output.push_str(&render(row));
        output.push('\n');
    }
    output
}

pub fn format_combo_line(combo: &ComboRecord) -> String {
    format!(
        "#{:<4} {:+}F  {}  ({})",
        combo.id,
        combo.advantage,
        combo.recipe,
        combo.registered_at.format("%Y-%m-%d %H:%M")
    )
}

pub fn format_meaty_line(meaty: &MeatyMove) -> String {
    format!("{} ({}F)", meaty.move_name, meaty.startup)
}

pub fn format_stale_meaty(stale: &StaleMeaty) -> String {
    match stale.current {
        Some(current) => format!(
            "{} registered at {}F, catalog now says {}F",
            stale.selection.move_name, stale.selection.startup, current
        ),
        None => format!(
            "{} registered at {}F, no longer has a startup in the catalog",
            stale.selection.move_name, stale.selection.startup
        ),
    }
}

/// Board as indented text: one block per combo, one section per column
pub fn format_board_console(board: &AdjustmentBoard) -> String {
    let mut output = String::new();

    if board.rows.is_empty() {
        output.push_str(&format!("No combos registered for {}\n", board.character));
        return output;
    }

    for row in &board.rows {
        let heading = format!("{} ({:+}F)", row.combo.recipe, row.combo.advantage);
        output.push_str(&format!("{}\n", heading.bold()));

        for (column, cell) in board.columns.iter().zip(&row.cells) {
            let label = format!("{} required {}F", column.label(), cell.required);
            output.push_str(&format!("  {}\n", label.cyan()));
            for adjustment in &cell.adjustments {
                if adjustment.is_match() {
                    output.push_str(&format!("    - {}\n", adjustment));
                } else {
                    output.push_str(&format!("    - {}\n", adjustment.dimmed()));
                }
            }
        }
        output.push('\n');
    }

    output
}
