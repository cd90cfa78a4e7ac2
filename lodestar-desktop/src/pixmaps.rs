// SPDX-License-Identifier: MIT OR Apache-2.0

//! Flat pixmap-directory lookup.

use std::path::PathBuf;

use lodestar_icons::ThemeLookup;

/// Extensions probed for each name, in preference order.
const PROBE_EXTENSIONS: [&str; 3] = ["png", "svg", "xpm"];

/// Theme lookup that probes flat directories of loose icon files.
///
/// This is intentionally not an icon-theme implementation: no index parsing,
/// no inheritance, no size matching. It covers the classical locations
/// applications drop loose icons into; anything theme-aware plugs in through
/// the [`ThemeLookup`] trait instead.
pub struct PixmapLookup {
    search_dirs: Vec<PathBuf>,
}

impl PixmapLookup {
    /// Probe the standard loose-icon locations: `~/.icons`,
    /// `$XDG_DATA_HOME/icons` and `/usr/share/pixmaps`.
    pub fn new() -> Self {
        let mut search_dirs = Vec::new();
        if let Some(home) = dirs::home_dir() {
            search_dirs.push(home.join(".icons"));
        }
        if let Some(data) = dirs::data_dir() {
            search_dirs.push(data.join("icons"));
        }
        search_dirs.push(PathBuf::from("/usr/share/pixmaps"));
        Self { search_dirs }
    }

    /// Probe exactly the given directories.
    pub fn with_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self { search_dirs }
    }
}

impl ThemeLookup for PixmapLookup {
    fn resolve_to_path(&self, name: &str, _size: u32) -> Option<PathBuf> {
        for dir in &self.search_dirs {
            for ext in PROBE_EXTENSIONS {
                let candidate = dir.join(format!("{}.{}", name, ext));
                if candidate.is_file() {
                    log::debug!("PixmapLookup: found '{}' at {:?}", name, candidate);
                    return Some(candidate);
                }
            }
        }
        log::debug!("PixmapLookup: no pixmap file for '{}'", name);
        None
    }
}

impl Default for PixmapLookup {
    fn default() -> Self {
        Self::new()
    }
}
