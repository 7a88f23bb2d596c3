// src/export/background.rs

use crate::errors::{AppError, AppResult};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::GenericImageView;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Background template decoded and Flate-compressed, ready to be embedded
/// as an image XObject.
#[derive(Debug, Clone)]
pub struct TemplateImage {
    pub width: u32,
    pub height: u32,
    /// Zlib-compressed 8-bit RGB samples.
    pub rgb: Vec<u8>,
    /// Zlib-compressed 8-bit alpha samples, only for images with alpha.
    pub alpha: Option<Vec<u8>>,
}

/// Decode a PNG/JPEG template.
pub fn load_template(path: &Path) -> AppResult<TemplateImage> {
    log::debug!("decoding background template {}", path.display());

    let img = image::open(path)?;
    let (width, height) = img.dimensions();

    let alpha = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let samples: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
        Some(deflate(&samples)?)
    } else {
        None
    };

    let rgb = deflate(img.to_rgb8().as_raw())?;

    Ok(TemplateImage {
        width,
        height,
        rgb,
        alpha,
    })
}

fn deflate(data: &[u8]) -> AppResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(data)?;
    enc.finish().map_err(AppError::from)
}

/// Loads the template at most once per export; later pages reuse the
/// result. A failed decode is returned to the caller every time.
#[derive(Debug, Default)]
pub struct BackgroundCache<T> {
    source: Option<PathBuf>,
    cached: Option<T>,
}

impl<T: Clone> BackgroundCache<T> {
    pub fn new(source: Option<PathBuf>) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    /// Cached value, or `init(path)` on first use. `None` when no template
    /// is configured.
    pub fn get_or_load<F>(&mut self, init: F) -> AppResult<Option<T>>
    where
        F: FnOnce(&Path) -> AppResult<T>,
    {
        if let Some(v) = &self.cached {
            return Ok(Some(v.clone()));
        }
        let Some(path) = &self.source else {
            return Ok(None);
        };

        let v = init(path)?;
        self.cached = Some(v.clone());
        Ok(Some(v))
    }
}
