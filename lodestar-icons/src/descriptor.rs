//! Generic icon descriptors.

use std::path::PathBuf;

/// Platform-level classification of where an icon comes from.
///
/// Descriptors arrive from file metadata (the MIME classification of a URI)
/// or directly from callers. The resolver matches on them exhaustively, so
/// every kind the pipeline can meet is spelled out here; anything a platform
/// produces that the pipeline cannot interpret travels as [`Unsupported`]
/// and resolves to nothing.
///
/// [`Unsupported`]: IconDescriptor::Unsupported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconDescriptor {
    /// The icon is literally an image file on disk.
    File(PathBuf),
    /// The icon is a themed name with ordered fallback candidates, most
    /// preferred first. Producers keep the list non-empty.
    Themed(Vec<String>),
    /// A descriptor kind the pipeline cannot interpret. The label names the
    /// kind for diagnostics.
    Unsupported(String),
}

impl IconDescriptor {
    /// Descriptor for a single themed name.
    pub fn themed(name: impl Into<String>) -> Self {
        Self::Themed(vec![name.into()])
    }
}
