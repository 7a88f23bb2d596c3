use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grouping::{find_day, group_by_day};
use crate::errors::{AppError, AppResult};
use crate::models::trip::Trip;
use crate::render::geometry::Point;
use crate::render::log_view::LogView;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config, trip: &Trip) -> AppResult<()> {
    if let Commands::Hover {
        day,
        x,
        y,
        display_width,
        display_height,
    } = cmd
    {
        let zone = cfg.viewer_zone()?;
        let buckets = group_by_day(&trip.entries, &zone);
        let bucket = find_day(&buckets, day).ok_or_else(|| AppError::DayNotFound(day.clone()))?;

        let view = LogView::new(bucket, &zone, cfg.chart_geometry())?
            .with_hover_radius(cfg.hover_radius);
        let geometry = view.geometry();
        let displayed = (
            display_width.unwrap_or(geometry.width),
            display_height.unwrap_or(geometry.height),
        );

        match view.hover(Point::new(*x, *y), displayed) {
            Some(tip) => println!("{}", tip.note),
            None => info(format!("no note at ({x}, {y}) on {}", view.label())),
        }
    }
    Ok(())
}
