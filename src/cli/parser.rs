use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for eldlog
/// Driver log (HOS duty status) viewer and exporter
#[derive(Parser)]
#[command(
    name = "eldlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render, inspect and export HOS driver logs from a planned trip",
    long_about = None
)]
pub struct Cli {
    /// Trip response JSON produced by the planning service ("-" reads stdin)
    #[arg(global = true, short = 'i', long = "input")]
    pub input: Option<String>,

    /// Viewer timezone: "local", "utc" or a fixed offset like "-05:00"
    #[arg(global = true, long = "tz")]
    pub tz: Option<String>,

    /// Template image drawn behind every exported page (PNG/JPEG)
    #[arg(global = true, long = "background")]
    pub background: Option<String>,

    /// More diagnostic output (-v, -vv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(global = true, short = 'q', long = "quiet")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Trip overview and per-day status totals
    Summary,

    /// Every schedule entry, day by day
    Timeline,

    /// Write one interactive SVG chart per day
    Render {
        #[arg(long = "out-dir", default_value = "eld-charts")]
        out_dir: String,
    },

    /// Show the note under a pointer position on a day's chart
    Hover {
        /// Day number (1-based), label ("Jan 5, 2025") or date (2025-01-05)
        #[arg(long = "day")]
        day: String,

        #[arg(long = "x", allow_negative_numbers = true)]
        x: f64,

        #[arg(long = "y", allow_negative_numbers = true)]
        y: f64,

        /// Width the chart is displayed at (defaults to the logical width)
        #[arg(long = "display-width")]
        display_width: Option<f64>,

        /// Height the chart is displayed at (defaults to the logical height)
        #[arg(long = "display-height")]
        display_height: Option<f64>,
    },

    /// Export the daily logs
    Export {
        #[arg(long = "format", value_enum, default_value_t = ExportFormat::Pdf)]
        format: ExportFormat,

        /// Output file (a directory for svg)
        #[arg(long = "file")]
        file: Option<String>,

        /// Overwrite an existing file without asking
        #[arg(long = "force")]
        force: bool,
    },

    /// Draw the route with its stops as an SVG map
    Map {
        #[arg(long = "file", default_value = "trip-route.svg")]
        file: String,

        #[arg(long = "width", default_value_t = 900.0)]
        width: f64,

        #[arg(long = "height", default_value_t = 600.0)]
        height: f64,
    },

    /// Manage the configuration file (view, create or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(long = "force", help = "With --init, overwrite an existing file")]
        force: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}

impl Commands {
    /// Whether the command works on a loaded trip.
    pub fn needs_trip(&self) -> bool {
        !matches!(self, Commands::Config { .. })
    }
}
