//! eldlog library root.
//! Exposes the CLI parser, the high-level run() function and the rendering,
//! export and map modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod map;
pub mod models;
pub mod render;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::TripSession;
use crate::errors::{AppError, AppResult};
use log::LevelFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.command.needs_trip() {
        return cli::commands::config::handle(&cli.command, cfg);
    }

    let mut session = TripSession::new();
    let input = cli.input.as_deref().ok_or(AppError::NoData)?;
    session.load_from_path(input)?;
    let trip = session.trip()?;
    log::info!("trip loaded: {} schedule entries", trip.entries.len());

    match &cli.command {
        Commands::Summary => cli::commands::summary::handle(&cli.command, cfg, trip),
        Commands::Timeline => cli::commands::timeline::handle(&cli.command, cfg, trip),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg, trip),
        Commands::Hover { .. } => cli::commands::hover::handle(&cli.command, cfg, trip),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, trip),
        Commands::Map { .. } => cli::commands::map::handle(&cli.command, cfg, trip),
        Commands::Config { .. } => Ok(()),
    }
}

/// `-q` keeps errors only, each `-v` opens one more level; without either
/// `RUST_LOG` decides, falling back to warnings.
pub fn setup_logging(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    builder.format_timestamp_secs();

    if quiet {
        builder.filter_level(LevelFilter::Error);
    } else if verbose > 0 {
        builder.filter_level(match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        });
    } else {
        builder.filter_level(LevelFilter::Warn);
        builder.parse_env("RUST_LOG");
    }

    // a logger may already be installed when embedded
    let _ = builder.try_init();
}

/// Command-line overrides win over the configuration file.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) -> AppResult<()> {
    if let Some(tz) = &cli.tz {
        cfg.timezone = tz.clone();
    }
    if let Some(bg) = &cli.background {
        cfg.background_image = Some(bg.clone());
    }
    cfg.validate()
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let mut cfg = Config::load()?;
    apply_overrides(&cli, &mut cfg)?;

    dispatch(&cli, &cfg)
}
