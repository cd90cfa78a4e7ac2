// SPDX-License-Identifier: MIT OR Apache-2.0

//! URI classification backed by filesystem metadata and MIME guessing.

use std::path::PathBuf;

use lodestar_icons::{FileInfoProvider, IconDescriptor};

/// Metadata provider for `file://` URIs and bare absolute paths.
pub struct FsFileInfo;

impl FsFileInfo {
    /// Create a new provider.
    pub fn new() -> Self {
        Self
    }

    /// Extract a local path from `uri`. `file://` URIs are percent-decoded,
    /// plain absolute paths pass through, other schemes are rejected.
    fn local_path(uri: &str) -> Option<PathBuf> {
        if let Some(rest) = uri.strip_prefix("file://") {
            let decoded = match urlencoding::decode(rest) {
                Ok(decoded) => decoded,
                Err(err) => {
                    log::debug!("FsFileInfo: cannot decode uri '{}': {}", uri, err);
                    return None;
                }
            };
            return Some(PathBuf::from(decoded.as_ref()));
        }
        if uri.starts_with('/') {
            return Some(PathBuf::from(uri));
        }
        None
    }
}

impl FileInfoProvider for FsFileInfo {
    fn exists(&self, uri: &str) -> bool {
        Self::local_path(uri).map(|path| path.exists()).unwrap_or(false)
    }

    fn generic_icon(&self, uri: &str) -> Option<IconDescriptor> {
        let path = Self::local_path(uri)?;
        if path.is_dir() {
            return Some(IconDescriptor::themed("folder"));
        }
        let mime = mime_guess2::from_path(&path).first_or_octet_stream();
        Some(IconDescriptor::Themed(mime_icon_names(mime.essence_str())))
    }
}

impl Default for FsFileInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered themed candidate names for a MIME type: the type's own icon name
/// first, then the per-class generic, the way icon themes spell them
/// (`text-x-rust` falls back to `text-x-generic`).
pub fn mime_icon_names(mime: &str) -> Vec<String> {
    let Some((main, sub)) = mime.split_once('/') else {
        return vec!["unknown".to_string()];
    };
    if main == "inode" {
        return match sub {
            "directory" => vec!["folder".to_string()],
            _ => vec![format!("inode-{}", sub), "unknown".to_string()],
        };
    }
    let specific = format!("{}-{}", main, sub);
    let generic = format!("{}-x-generic", main);
    if specific == generic {
        vec![specific]
    } else {
        vec![specific, generic]
    }
}
