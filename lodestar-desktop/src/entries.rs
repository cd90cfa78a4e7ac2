// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loading of freedesktop `.desktop` records.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use lodestar_icons::{DesktopEntry, DesktopEntryProvider};

/// Loader for `.desktop` records.
///
/// Basename lookups search `applications/` under the XDG data directories,
/// appending the `.desktop` suffix when the caller left it off. Only the
/// `[Desktop Entry]` group is read.
pub struct DesktopEntryStore {
    app_dirs: Vec<PathBuf>,
}

impl DesktopEntryStore {
    /// Search the standard XDG application directories.
    pub fn new() -> Self {
        let app_dirs = match xdg::BaseDirectories::new() {
            Ok(base) => {
                let mut dirs = vec![base.get_data_home()];
                dirs.extend(base.get_data_dirs());
                dirs.into_iter().map(|dir| dir.join("applications")).collect()
            }
            Err(err) => {
                log::warn!("DesktopEntryStore: no XDG base directories: {}", err);
                Vec::new()
            }
        };
        Self { app_dirs }
    }

    /// Search exactly the given application directories.
    pub fn with_dirs(app_dirs: Vec<PathBuf>) -> Self {
        Self { app_dirs }
    }

    fn parse(path: &Path, content: &str) -> Option<DesktopEntry> {
        let mut in_entry_group = false;
        let mut saw_entry_group = false;
        let mut name = None;
        let mut icon = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                in_entry_group = line == "[Desktop Entry]";
                saw_entry_group |= in_entry_group;
                continue;
            }
            if !in_entry_group {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                match key.trim() {
                    "Name" => name = Some(value.trim().to_string()),
                    "Icon" => icon = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }

        if !saw_entry_group {
            log::debug!("DesktopEntryStore: no [Desktop Entry] group in {:?}", path);
            return None;
        }
        Some(DesktopEntry {
            path: path.to_path_buf(),
            name,
            icon,
        })
    }
}

impl DesktopEntryProvider for DesktopEntryStore {
    fn load_from_path(&self, path: &Path) -> Option<DesktopEntry> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                log::debug!("DesktopEntryStore: cannot read {:?}: {}", path, err);
                return None;
            }
        };
        Self::parse(path, &content)
    }

    fn load_from_basename(&self, basename: &str) -> Option<DesktopEntry> {
        let file_name = if basename.ends_with(".desktop") {
            Cow::Borrowed(basename)
        } else {
            Cow::Owned(format!("{}.desktop", basename))
        };
        for dir in &self.app_dirs {
            let candidate = dir.join(file_name.as_ref());
            if candidate.is_file() {
                return self.load_from_path(&candidate);
            }
        }
        log::debug!("DesktopEntryStore: no desktop entry named '{}'", basename);
        None
    }
}

impl Default for DesktopEntryStore {
    fn default() -> Self {
        Self::new()
    }
}
