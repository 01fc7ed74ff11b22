//! TSV export format implementation

use crate::frame::Move;

use super::format::ExportFormat;

/// TSV (Tab-Separated Values) exporter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvExporter;

impl ExportFormat for TsvExporter {
    fn header(&self) -> Option<String> {
        Some(format_frame_tsv_header())
    }

    fn format_row(&self, mv: &Move) -> String {
        format_frame_tsv_row(mv)
    }
}

pub fn format_frame_tsv_header() -> String {
    [
        "name",
        "startup",
        "guard",
        "hit",
        "total",
        "cancel",
        "low_overhead",
    ]
    .join("\t")
}

/// Absent values are written as empty cells
pub fn format_frame_tsv_row(mv: &Move) -> String {
    let values: Vec<String> = vec![
        mv.name.clone(),
        mv.startup.map(|v| v.to_string()).unwrap_or_default(),
        mv.guard.clone().unwrap_or_default(),
        mv.hit.clone().unwrap_or_default(),
        mv.total.map(|v| v.to_string()).unwrap_or_default(),
        mv.cancel.clone().unwrap_or_default(),
        mv.low_overhead.short_name().to_string(),
    ];

    values.join("\t")
}
