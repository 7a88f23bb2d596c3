// src/export/mod.rs

pub mod background;
mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
pub mod pdf;
pub mod pdf_export;
mod pdf_surface;
pub mod svg_export;

pub use logic::{ExportLogic, ExportOptions};
pub use model::ExportDay;
pub use svg_export::chart_file_name;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    /// Paginated daily logs, one page per day
    Pdf,
    /// One interactive chart per day, into a directory
    Svg,
    /// Per-day status totals
    Json,
    /// Flat timeline
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
