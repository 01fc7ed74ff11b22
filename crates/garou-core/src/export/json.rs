//! JSON export format implementation

use serde_json::{Value as JsonValue, json};

use crate::frame::Move;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, mv: &Move) -> String {
        format_move_json(mv).to_string()
    }
}

pub fn format_move_json(mv: &Move) -> JsonValue {
    json!({
        "name": mv.name,
        "startup": mv.startup,
        "guard": mv.guard,
        "hit": mv.hit,
        "total": mv.total,
        "cancel": mv.cancel,
        "low_overhead": mv.low_overhead.short_name(),
    })
}
