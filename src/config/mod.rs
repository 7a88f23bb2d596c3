use crate::core::zone::ViewerZone;
use crate::errors::{AppError, AppResult};
use crate::render::geometry::GridGeometry;
use crate::render::log_view::DEFAULT_HOVER_RADIUS;
use crate::ui::messages::success;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// "local", "utc" or a fixed offset like "+02:00"
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// PNG/JPEG drawn behind every exported chart
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default = "default_pdf_file_name")]
    pub pdf_file_name: String,
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    #[serde(default = "default_canvas_margin")]
    pub canvas_margin: f64,
    #[serde(default = "default_hover_radius")]
    pub hover_radius: f64,
    #[serde(default = "default_wrap_notes")]
    pub wrap_notes: usize,
}

fn default_timezone() -> String {
    "local".to_string()
}
fn default_pdf_file_name() -> String {
    "trip-eld-logs.pdf".to_string()
}
fn default_canvas_width() -> f64 {
    900.0
}
fn default_canvas_height() -> f64 {
    280.0
}
fn default_canvas_margin() -> f64 {
    50.0
}
fn default_hover_radius() -> f64 {
    DEFAULT_HOVER_RADIUS
}
fn default_wrap_notes() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            background_image: None,
            pdf_file_name: default_pdf_file_name(),
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            canvas_margin: default_canvas_margin(),
            hover_radius: default_hover_radius(),
            wrap_notes: default_wrap_notes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.eldlog`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".eldlog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("eldlog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        log::debug!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.viewer_zone()?;

        for (name, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("canvas_margin", self.canvas_margin),
            ("hover_radius", self.hover_radius),
        ] {
            if !value.is_finite() {
                return Err(AppError::Config(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        if self.canvas_margin < 0.0 {
            return Err(AppError::Config("canvas_margin must not be negative".into()));
        }

        if self.canvas_width <= 2.0 * self.canvas_margin
            || self.canvas_height <= 2.0 * self.canvas_margin
        {
            return Err(AppError::Config(format!(
                "canvas {}x{} leaves no room inside a {} margin",
                self.canvas_width, self.canvas_height, self.canvas_margin
            )));
        }
        if self.hover_radius <= 0.0 {
            return Err(AppError::Config("hover_radius must be positive".into()));
        }
        Ok(())
    }

    pub fn viewer_zone(&self) -> AppResult<ViewerZone> {
        ViewerZone::parse(&self.timezone)
    }

    /// Logical canvas of the on-screen chart.
    pub fn chart_geometry(&self) -> GridGeometry {
        GridGeometry::new(self.canvas_width, self.canvas_height, self.canvas_margin)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file (kept if already there unless
    /// `overwrite`).
    pub fn init(overwrite: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() && !overwrite {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let yaml = Self::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        success(format!("Config file: {}", path.display()));

        Ok(path)
    }
}
