//! ExportFormat trait definition

use crate::frame::Move;

/// Trait for frame-table export formats
pub trait ExportFormat {
    /// Header line, if the format has one
    fn header(&self) -> Option<String>;

    fn format_row(&self, mv: &Move) -> String;

    fn format_rows(&self, moves: &[&Move]) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for mv in moves {
            output.push_str(&self.format_row(mv));
            output.push('\n');
        }
        output
    }
}
