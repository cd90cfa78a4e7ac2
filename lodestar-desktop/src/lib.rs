// SPDX-License-Identifier: MIT OR Apache-2.0

//! Freedesktop platform adapters for the lodestar icon pipeline.
//!
//! Each adapter implements one collaborator trait from `lodestar-icons`:
//! [`FileDecoder`] decodes image files, [`ThemedRenderer`] renders themed
//! names, [`FsFileInfo`] classifies URIs by MIME type, [`PixmapLookup`]
//! probes flat pixmap directories and [`DesktopEntryStore`] loads `.desktop`
//! records. [`standard_resolver`] wires all of them up.

mod decoder;
mod entries;
mod fileinfo;
mod pixmaps;
mod renderer;

pub use decoder::FileDecoder;
pub use entries::DesktopEntryStore;
pub use fileinfo::{mime_icon_names, FsFileInfo};
pub use pixmaps::PixmapLookup;
pub use renderer::ThemedRenderer;

use std::sync::Arc;

use lodestar_icons::{IconCache, IconResolver, ImageDecoder, ThemeLookup};

/// Wire an [`IconResolver`] over the standard adapters and the given cache.
///
/// The renderer shares the same flat-directory lookup and decoder the other
/// strategies use, so one wiring covers every resolution entry point.
pub fn standard_resolver(cache: Arc<IconCache>) -> IconResolver {
    let theme: Arc<dyn ThemeLookup> = Arc::new(PixmapLookup::new());
    let decoder: Arc<dyn ImageDecoder> = Arc::new(FileDecoder::new());
    let renderer = Arc::new(ThemedRenderer::new(
        Arc::clone(&theme),
        Arc::clone(&decoder),
    ));
    IconResolver::new(
        cache,
        renderer,
        decoder,
        Arc::new(FsFileInfo::new()),
        theme,
        Arc::new(DesktopEntryStore::new()),
    )
}
