// src/export/svg_export.rs

use crate::core::zone::ViewerZone;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::day_bucket::DayBucket;
use crate::render::geometry::GridGeometry;
use crate::render::log_view::LogView;
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the chart for the `index`-th (0-based) day.
pub fn chart_file_name(index: usize, bucket: &DayBucket) -> String {
    format!("day-{:02}-{}.svg", index + 1, bucket.date.format("%Y-%m-%d"))
}

/// Write one interactive SVG chart per day into `dir`.
pub fn export_svg(
    buckets: &[DayBucket],
    zone: &ViewerZone,
    geometry: GridGeometry,
    dir: &Path,
) -> AppResult<Vec<PathBuf>> {
    info(format!("Writing daily charts to: {}", dir.display()));
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(buckets.len());
    for (i, bucket) in buckets.iter().enumerate() {
        let view = LogView::new(bucket, zone, geometry)?;
        let path = dir.join(chart_file_name(i, bucket));
        fs::write(&path, view.to_svg())?;
        log::debug!("chart for {} written to {}", view.label(), path.display());
        written.push(path);
    }

    notify_export_success("SVG", dir);
    Ok(written)
}
