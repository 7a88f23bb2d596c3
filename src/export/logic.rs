// src/export/logic.rs

use crate::config::Config;
use crate::core::grouping::{daily_miles, group_by_day};
use crate::core::zone::ViewerZone;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_output_dir, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{DaySummaryRecord, ExportDay, TimelineRow};
use crate::export::pdf_export::export_pdf;
use crate::export::svg_export::export_svg;
use crate::models::trip::Trip;
use crate::render::geometry::GridGeometry;
use crate::ui::messages::{notification, warning};
use std::path::{Path, PathBuf};

/// Settings the exporters need, resolved from config + CLI overrides.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub zone: ViewerZone,
    pub background: Option<PathBuf>,
    pub chart_geometry: GridGeometry,
    pub pdf_file_name: String,
}

impl ExportOptions {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self {
            zone: cfg.viewer_zone()?,
            background: cfg.background_image.as_ref().map(PathBuf::from),
            chart_geometry: cfg.chart_geometry(),
            pdf_file_name: cfg.pdf_file_name.clone(),
        })
    }

    fn default_file(&self, format: &ExportFormat) -> String {
        match format {
            ExportFormat::Pdf => self.pdf_file_name.clone(),
            ExportFormat::Svg => "trip-eld-logs".to_string(),
            ExportFormat::Json => "trip-day-summary.json".to_string(),
            ExportFormat::Csv => "trip-timeline.csv".to_string(),
        }
    }
}

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// One export page per day bucket, in calendar order, with the miles
    /// traveled that day and the day's reference midnight.
    pub fn prepare_days(trip: &Trip, zone: &ViewerZone) -> AppResult<Vec<ExportDay>> {
        let buckets = group_by_day(&trip.entries, zone);
        let miles = daily_miles(&buckets);

        buckets
            .into_iter()
            .zip(miles)
            .map(|(bucket, total_miles)| {
                Ok(ExportDay {
                    date: bucket.export_date(),
                    total_miles,
                    midnight: bucket.reference_midnight(zone)?,
                    entries: bucket.entries,
                })
            })
            .collect()
    }

    /// Export the trip.
    ///
    /// - `format`: pdf | svg | json | csv
    /// - `file`: output path; defaults per format (the PDF name comes from
    ///   the configuration)
    pub fn export(
        trip: &Trip,
        opts: &ExportOptions,
        format: &ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let target = file
            .map(str::to_string)
            .unwrap_or_else(|| opts.default_file(format));
        let path = Path::new(&target);

        if trip.entries.is_empty() {
            warning("No schedule entries to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Svg => ensure_output_dir(path)?,
            _ => ensure_writable(path, force)?,
        }

        let zone = &opts.zone;

        match format {
            ExportFormat::Pdf => {
                let days = Self::prepare_days(trip, zone)?;
                match export_pdf(&days, path, opts.background.clone()) {
                    Ok(pages) => {
                        notification(
                            true,
                            "PDF exported successfully",
                            &format!("Your ELD logs have been saved ({pages} pages)"),
                        );
                        Ok(())
                    }
                    Err(e) => {
                        log::debug!("pdf export aborted: {e}");
                        Err(AppError::ExportFailed(e.to_string()))
                    }
                }
            }
            ExportFormat::Svg => {
                let buckets = group_by_day(&trip.entries, zone);
                export_svg(&buckets, zone, opts.chart_geometry, path)?;
                Ok(())
            }
            ExportFormat::Json => {
                let buckets = group_by_day(&trip.entries, zone);
                let records: Vec<DaySummaryRecord> = buckets
                    .iter()
                    .zip(daily_miles(&buckets))
                    .map(|(b, miles)| DaySummaryRecord::new(b, miles))
                    .collect();
                export_json(&records, path)
            }
            ExportFormat::Csv => {
                let rows: Vec<TimelineRow> = group_by_day(&trip.entries, zone)
                    .iter()
                    .flat_map(|b| {
                        let label = b.label();
                        b.entries
                            .iter()
                            .map(|e| TimelineRow::new(&label, e, zone))
                            .collect::<Vec<_>>()
                    })
                    .collect();
                export_csv(&rows, path)
            }
        }
    }
}
