// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image-file decoding for the icon pipeline.

use std::fs;
use std::path::Path;

use image::imageops::FilterType;
use lodestar_icons::{DecodeError, ImageDecoder, Pixmap};

/// Decoder backed by the `image` crate.
///
/// Handles every raster format the crate understands (PNG, JPEG, GIF, BMP,
/// ICO and friends) and scales the result to fit within the requested box,
/// preserving aspect ratio. Vector formats are not decoded here; pair the
/// pipeline with an SVG-capable decoder if themes ship vector-only icons.
pub struct FileDecoder;

impl FileDecoder {
    /// Create a new decoder.
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for FileDecoder {
    fn load_file(&self, path: &Path, width: u32, height: u32) -> Result<Pixmap, DecodeError> {
        let bytes = fs::read(path).map_err(|e| DecodeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let img = image::load_from_memory(&bytes).map_err(|e| DecodeError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let img = if img.width() == width && img.height() == height {
            img
        } else {
            img.resize(width, height, FilterType::Triangle)
        };

        let rgba = img.to_rgba8();
        let (w, h) = rgba.dimensions();
        log::debug!(
            "FileDecoder: decoded '{}' at {}x{}",
            path.display(),
            w,
            h
        );
        Ok(Pixmap::from_rgba8(rgba.into_raw(), w, h))
    }
}

impl Default for FileDecoder {
    fn default() -> Self {
        Self::new()
    }
}
