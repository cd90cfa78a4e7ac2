//! Collaborator seams consumed by the resolver.
//!
//! Everything the pipeline does not do itself enters through these traits:
//! themed rendering, image decoding, URI classification, theme path lookup
//! and desktop-entry access. The `lodestar-desktop` crate ships
//! freedesktop-flavored implementations; tests plug in counting fakes.

use std::path::{Path, PathBuf};

use bitflags::bitflags;

use crate::descriptor::IconDescriptor;
use crate::error::{DecodeError, RenderError};
use crate::pixmap::Pixmap;

bitflags! {
    /// Rendering modes for themed-name lookups.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct RenderFlags: u8 {
        /// Built-in fallback pixmaps may satisfy the lookup.
        const USE_BUILTIN = 0b01;
        /// The result must measure exactly `size x size`, rescaling the
        /// source if needed.
        const FORCE_SIZE = 0b10;
    }
}

/// Renders themed icons by name.
pub trait IconRenderer: Send + Sync {
    /// Render the icon called `name` at `size` pixels.
    fn load_named(&self, name: &str, size: u32, flags: RenderFlags)
        -> Result<Pixmap, RenderError>;
}

/// Decodes image files into pixmaps.
pub trait ImageDecoder: Send + Sync {
    /// Decode the image at `path`, scaled to fit within `width x height`.
    fn load_file(&self, path: &Path, width: u32, height: u32) -> Result<Pixmap, DecodeError>;
}

/// Filesystem metadata used to classify URIs.
pub trait FileInfoProvider: Send + Sync {
    /// Whether `uri` refers to an existing resource.
    fn exists(&self, uri: &str) -> bool;

    /// The generic, MIME-derived icon descriptor for `uri`, when one can be
    /// determined.
    fn generic_icon(&self, uri: &str) -> Option<IconDescriptor>;
}

/// Resolves themed names to concrete icon files.
///
/// The desktop-entry strategy consults this directly; renderers are
/// typically built on top of one as well.
pub trait ThemeLookup: Send + Sync {
    /// A concrete icon file for `name` at (or near) `size`, if any.
    fn resolve_to_path(&self, name: &str, size: u32) -> Option<PathBuf>;
}

/// A loaded desktop-entry record.
///
/// Only the fields the pipeline reads are modeled. `icon` carries the raw
/// `Icon=` value, which may be a themed name or an absolute file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntry {
    /// Path of the `.desktop` file the record was loaded from.
    pub path: PathBuf,
    /// The `Name=` field, when present.
    pub name: Option<String>,
    /// The raw `Icon=` field, when present.
    pub icon: Option<String>,
}

impl DesktopEntry {
    /// The raw icon field, when present and non-empty.
    pub fn icon_field(&self) -> Option<&str> {
        self.icon.as_deref().filter(|value| !value.is_empty())
    }
}

/// Loads desktop-entry records.
pub trait DesktopEntryProvider: Send + Sync {
    /// Load the entry stored at an absolute path. `None` when the file is
    /// missing or unreadable.
    fn load_from_path(&self, path: &Path) -> Option<DesktopEntry>;

    /// Load an entry by basename (for example `firefox.desktop`), searching
    /// the platform's application directories. `None` when not found.
    fn load_from_basename(&self, basename: &str) -> Option<DesktopEntry>;
}
