// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::model::ExportDay;
use crate::export::pdf::LogDocument;
use crate::ui::messages::info;
use std::path::{Path, PathBuf};

/// Render every day into one document and save it.
///
/// Days are processed in order; the first failure (typically an unreadable
/// background template) aborts the export before anything is written.
pub(crate) fn export_pdf(
    days: &[ExportDay],
    path: &Path,
    background: Option<PathBuf>,
) -> AppResult<usize> {
    info(format!("Exporting daily logs to PDF: {}", path.display()));

    let doc = build_document(days, background)?;
    doc.save(path)?;

    Ok(days.len())
}

/// Build the document in memory: one page per day.
pub fn build_document(days: &[ExportDay], background: Option<PathBuf>) -> AppResult<LogDocument> {
    let mut doc = LogDocument::new(background);

    for (i, day) in days.iter().enumerate() {
        log::info!("rendering page {}/{} ({})", i + 1, days.len(), day.date);
        doc.add_day(day)?;
    }

    Ok(doc)
}

/// Serialized PDF bytes for `days`.
pub fn render_pdf(days: &[ExportDay], background: Option<PathBuf>) -> AppResult<Vec<u8>> {
    Ok(build_document(days, background)?.finish())
}
