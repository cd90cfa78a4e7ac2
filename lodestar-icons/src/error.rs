//! Error types for the icon pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the resolution entry points.
///
/// Collaborator failures never reach this type: the resolver downgrades a
/// failed render or decode to "try the next source" and an exhausted search
/// to `Ok(None)`. The one hard failure is a violated cache contract, which
/// indicates a logic error in the caller rather than a missing icon.
#[derive(Debug, Clone, Error)]
pub enum IconError {
    /// A store was attempted for a key the cache already holds.
    #[error("Icon cache already holds an entry for '{0}'")]
    AlreadyCached(String),
}

/// Failure to render a themed icon by name.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The name does not resolve to any icon source.
    #[error("No icon named '{0}' found")]
    NotFound(String),
    /// An icon source existed but could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure to decode an image file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading the file failed.
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file content was not a decodable image.
    #[error("Failed to decode {}: {}", .path.display(), .reason)]
    Malformed {
        /// Path of the undecodable file.
        path: PathBuf,
        /// Decoder diagnostic.
        reason: String,
    },
}
