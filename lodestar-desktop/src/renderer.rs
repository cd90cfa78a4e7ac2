// SPDX-License-Identifier: MIT OR Apache-2.0

//! Themed-name rendering composed from a theme lookup and a decoder.

use std::collections::HashMap;
use std::sync::Arc;

use image::imageops::FilterType;
use lodestar_icons::{IconRenderer, ImageDecoder, Pixmap, RenderError, RenderFlags, ThemeLookup};

/// Renderer that resolves themed names to concrete files and decodes them.
///
/// This is the by-name half of what a desktop toolkit's icon loading does:
/// find the file behind a name, decode it at the requested size, and with
/// [`RenderFlags::FORCE_SIZE`] rescale to the exact square. Built-in pixmaps
/// registered at construction satisfy [`RenderFlags::USE_BUILTIN`] lookups
/// without touching the filesystem.
pub struct ThemedRenderer {
    theme: Arc<dyn ThemeLookup>,
    decoder: Arc<dyn ImageDecoder>,
    builtins: HashMap<String, Pixmap>,
}

impl ThemedRenderer {
    /// Compose a renderer from a theme lookup and a decoder.
    pub fn new(theme: Arc<dyn ThemeLookup>, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            theme,
            decoder,
            builtins: HashMap::new(),
        }
    }

    /// Register a built-in pixmap served for `name` when the caller allows
    /// built-ins.
    pub fn register_builtin(&mut self, name: impl Into<String>, pixmap: Pixmap) {
        self.builtins.insert(name.into(), pixmap);
    }

    fn force_size(pixmap: Pixmap, size: u32) -> Pixmap {
        if pixmap.width() == size && pixmap.height() == size {
            return pixmap;
        }
        let img =
            image::RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.data().to_vec())
                .expect("pixmap buffer matches its dimensions");
        let resized = image::imageops::resize(&img, size, size, FilterType::Triangle);
        Pixmap::from_rgba8(resized.into_raw(), size, size)
    }
}

impl IconRenderer for ThemedRenderer {
    fn load_named(
        &self,
        name: &str,
        size: u32,
        flags: RenderFlags,
    ) -> Result<Pixmap, RenderError> {
        let builtin = if flags.contains(RenderFlags::USE_BUILTIN) {
            self.builtins.get(name)
        } else {
            None
        };

        let pixmap = match builtin {
            Some(pixmap) => {
                log::debug!("ThemedRenderer: serving built-in pixmap for '{}'", name);
                pixmap.clone()
            }
            None => {
                let path = self
                    .theme
                    .resolve_to_path(name, size)
                    .ok_or_else(|| RenderError::NotFound(name.to_string()))?;
                self.decoder.load_file(&path, size, size)?
            }
        };

        if flags.contains(RenderFlags::FORCE_SIZE) {
            Ok(Self::force_size(pixmap, size))
        } else {
            Ok(pixmap)
        }
    }
}
