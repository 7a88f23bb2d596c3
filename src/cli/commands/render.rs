use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::group_by_day;
use crate::errors::AppResult;
use crate::export::svg_export::export_svg;
use crate::models::trip::Trip;
use crate::ui::messages::{info, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, trip: &Trip) -> AppResult<()> {
    if let Commands::Render { out_dir } = cmd {
        let zone = cfg.viewer_zone()?;
        let buckets = group_by_day(&trip.entries, &zone);

        if buckets.is_empty() {
            warning("No schedule entries to render.");
            return Ok(());
        }

        let written = export_svg(&buckets, &zone, cfg.chart_geometry(), Path::new(out_dir))?;
        for (bucket, path) in buckets.iter().zip(&written) {
            info(format!("{:<14} {}", bucket.label(), path.display()));
        }
    }
    Ok(())
}
