//! Icon resolution and caching pipeline.
//!
//! Callers hand the [`IconResolver`] one of five identifier kinds plus a
//! pixel size: a generic [`IconDescriptor`], a URI, an image file path, a
//! desktop-entry reference, or a bare themed name with fallback aliases. The
//! resolver answers with a shared [`Pixmap`] handle, or with nothing when no
//! source yields an image. First resolutions go through the collaborator
//! traits ([`IconRenderer`], [`ImageDecoder`] and friends); every later
//! lookup of the same key is served out of the process-wide [`IconCache`].
//!
//! The crate stays platform-free: image decoding, icon-theme lookup and
//! desktop-entry access all enter through traits. `lodestar-desktop` ships
//! the freedesktop implementations.

mod cache;
mod descriptor;
mod error;
mod flight;
mod nameutil;
mod pixmap;
mod providers;
mod resolver;

pub use cache::IconCache;
pub use descriptor::IconDescriptor;
pub use error::{DecodeError, IconError, RenderError};
pub use nameutil::strip_icon_extension;
pub use pixmap::Pixmap;
pub use providers::{
    DesktopEntry, DesktopEntryProvider, FileInfoProvider, IconRenderer, ImageDecoder, RenderFlags,
    ThemeLookup,
};
pub use resolver::{IconResolver, DEFAULT_APPLICATION_ICON};
