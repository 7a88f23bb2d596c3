// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{DaySummaryRecord, TimelineRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export per-day summaries as pretty-printed JSON.
pub(crate) fn export_json(days: &[DaySummaryRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting day summaries to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(days)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export the timeline as CSV (header derived from the row struct).
pub(crate) fn export_csv(rows: &[TimelineRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting timeline to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
