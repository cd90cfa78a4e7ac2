//! Resolution strategies over the cache and the collaborator seams.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::IconCache;
use crate::descriptor::IconDescriptor;
use crate::error::IconError;
use crate::flight::FlightTable;
use crate::nameutil::strip_icon_extension;
use crate::pixmap::Pixmap;
use crate::providers::{
    DesktopEntry, DesktopEntryProvider, FileInfoProvider, IconRenderer, ImageDecoder, RenderFlags,
    ThemeLookup,
};

/// The themed name rendered by [`IconResolver::default_application_icon`].
pub const DEFAULT_APPLICATION_ICON: &str = "application-x-executable";

/// Orchestrates icon resolution over the collaborator seams, memoizing
/// results in a shared [`IconCache`].
///
/// Every entry point answers `Ok(Some(..))` with a shared pixmap handle on
/// success and `Ok(None)` when no source yields an image. The only `Err` is
/// [`IconError::AlreadyCached`] from a violated cache contract, which means
/// a logic error rather than a missing icon.
///
/// Resolvers are safe to share across threads. Concurrent misses for the
/// same key are de-duplicated: one caller resolves, the rest block and
/// receive the same outcome.
pub struct IconResolver {
    cache: Arc<IconCache>,
    renderer: Arc<dyn IconRenderer>,
    decoder: Arc<dyn ImageDecoder>,
    file_info: Arc<dyn FileInfoProvider>,
    theme: Arc<dyn ThemeLookup>,
    entries: Arc<dyn DesktopEntryProvider>,
    flights: FlightTable,
}

impl IconResolver {
    /// Build a resolver over an explicitly constructed cache and the five
    /// collaborators.
    pub fn new(
        cache: Arc<IconCache>,
        renderer: Arc<dyn IconRenderer>,
        decoder: Arc<dyn ImageDecoder>,
        file_info: Arc<dyn FileInfoProvider>,
        theme: Arc<dyn ThemeLookup>,
        entries: Arc<dyn DesktopEntryProvider>,
    ) -> Self {
        Self {
            cache,
            renderer,
            decoder,
            file_info,
            theme,
            entries,
            flights: FlightTable::new(),
        }
    }

    /// The cache this resolver stores into.
    pub fn cache(&self) -> &IconCache {
        &self.cache
    }

    /// Resolve a generic icon descriptor.
    pub fn for_descriptor(
        &self,
        descriptor: &IconDescriptor,
        size: u32,
    ) -> Result<Option<Pixmap>, IconError> {
        match descriptor {
            IconDescriptor::File(path) => self.for_file(path, size),
            IconDescriptor::Themed(names) => match names.first() {
                Some(preferred) => self.for_name_with_fallbacks(preferred, size, names),
                None => {
                    log::warn!("IconResolver: themed descriptor carries no candidate names");
                    Ok(None)
                }
            },
            IconDescriptor::Unsupported(kind) => {
                log::warn!("IconResolver: unsupported descriptor kind '{}'", kind);
                Ok(None)
            }
        }
    }

    /// Resolve a URI through its MIME-generic icon.
    ///
    /// Nonexistent or unclassifiable URIs resolve to nothing without
    /// touching the renderer or decoder.
    pub fn for_uri(&self, uri: &str, size: u32) -> Result<Option<Pixmap>, IconError> {
        if !self.file_info.exists(uri) {
            log::debug!("IconResolver: uri '{}' does not exist", uri);
            return Ok(None);
        }
        match self.file_info.generic_icon(uri) {
            Some(descriptor) => self.for_descriptor(&descriptor, size),
            None => {
                log::debug!("IconResolver: no generic icon for uri '{}'", uri);
                Ok(None)
            }
        }
    }

    /// Resolve the image file at `path`, cached under the literal path.
    pub fn for_file(&self, path: &Path, size: u32) -> Result<Option<Pixmap>, IconError> {
        let key = path.to_string_lossy();
        self.resolve_cached(&key, || match self.decoder.load_file(path, size, size) {
            Ok(pixmap) => Ok(Some(pixmap)),
            Err(err) => {
                log::warn!("IconResolver: failed to decode '{}': {}", path.display(), err);
                Ok(None)
            }
        })
    }

    /// Resolve a bare themed name.
    pub fn for_name(&self, name: &str, size: u32) -> Result<Option<Pixmap>, IconError> {
        self.for_name_with_fallbacks(name, size, &[] as &[&str])
    }

    /// Resolve a themed name with ordered fallback candidates.
    ///
    /// `fallbacks` is the full candidate list, most preferred first; when it
    /// is empty, `name` alone is tried. Whichever candidate renders, the
    /// result is stored under `name`, so later lookups for the preferred
    /// name hit the cache even when a fallback supplied the bitmap.
    pub fn for_name_with_fallbacks<S: AsRef<str>>(
        &self,
        name: &str,
        size: u32,
        fallbacks: &[S],
    ) -> Result<Option<Pixmap>, IconError> {
        self.resolve_cached(name, || {
            if fallbacks.is_empty() {
                return Ok(self.render_candidate(name, size));
            }
            for candidate in fallbacks {
                if let Some(pixmap) = self.render_candidate(candidate.as_ref(), size) {
                    return Ok(Some(pixmap));
                }
            }
            log::debug!("IconResolver: no candidate rendered for '{}'", name);
            Ok(None)
        })
    }

    /// Try one candidate name against the renderer. Renderer failures are
    /// logged and mean "try the next candidate".
    fn render_candidate(&self, candidate: &str, size: u32) -> Option<Pixmap> {
        let load_name = strip_icon_extension(candidate);
        match self
            .renderer
            .load_named(load_name, size, RenderFlags::USE_BUILTIN | RenderFlags::FORCE_SIZE)
        {
            Ok(pixmap) => Some(pixmap),
            Err(err) => {
                log::debug!("IconResolver: candidate '{}' failed: {}", load_name, err);
                None
            }
        }
    }

    /// Resolve the icon declared by a loaded desktop entry.
    ///
    /// Absolute icon values are taken directly as image paths; themed values
    /// are stripped of any extension and resolved to a concrete file through
    /// the theme lookup. Caching happens under the derived file path.
    pub fn for_desktop_entry(
        &self,
        entry: &DesktopEntry,
        size: u32,
    ) -> Result<Option<Pixmap>, IconError> {
        let Some(icon_value) = entry.icon_field() else {
            log::debug!(
                "IconResolver: desktop entry '{}' declares no icon",
                entry.path.display()
            );
            return Ok(None);
        };

        let icon_path = if Path::new(icon_value).is_absolute() {
            Some(PathBuf::from(icon_value))
        } else {
            let name = strip_icon_extension(icon_value);
            self.theme.resolve_to_path(name, size)
        };

        match icon_path {
            Some(path) => self.for_file(&path, size),
            None => {
                log::debug!("IconResolver: no theme path for desktop icon '{}'", icon_value);
                Ok(None)
            }
        }
    }

    /// Resolve a desktop entry loaded from an explicit `.desktop` path.
    pub fn for_desktop_file(&self, path: &Path, size: u32) -> Result<Option<Pixmap>, IconError> {
        match self.entries.load_from_path(path) {
            Some(entry) => self.for_desktop_entry(&entry, size),
            None => {
                log::debug!(
                    "IconResolver: no desktop entry at '{}'",
                    path.display()
                );
                Ok(None)
            }
        }
    }

    /// Resolve a desktop entry by basename, cached under the basename.
    ///
    /// The basename key is stored once, after the entry's icon actually
    /// resolved; a failed resolution leaves the key absent and
    /// re-attemptable.
    pub fn for_desktop_basename(
        &self,
        basename: &str,
        size: u32,
    ) -> Result<Option<Pixmap>, IconError> {
        self.resolve_cached(basename, || {
            let Some(entry) = self.entries.load_from_basename(basename) else {
                log::debug!("IconResolver: no desktop entry named '{}'", basename);
                return Ok(None);
            };
            self.for_desktop_entry(&entry, size)
        })
    }

    /// The generic executable icon, used by callers as the fallback of last
    /// resort for launchable items.
    pub fn default_application_icon(&self, size: u32) -> Result<Option<Pixmap>, IconError> {
        self.for_name(DEFAULT_APPLICATION_ICON, size)
    }

    /// Cache-through resolution: fast-path lookup, de-duplicate concurrent
    /// misses per key, run `produce`, store a successful result under `key`.
    fn resolve_cached<F>(&self, key: &str, produce: F) -> Result<Option<Pixmap>, IconError>
    where
        F: FnOnce() -> Result<Option<Pixmap>, IconError>,
    {
        if let Some(hit) = self.cache.lookup(key) {
            return Ok(Some(hit));
        }
        let (flight, owner) = self.flights.join(key);
        if !owner {
            return flight.wait();
        }
        // A flight that finished between our miss and the join may already
        // have stored this key.
        let outcome = match self.cache.lookup(key) {
            Some(hit) => Ok(Some(hit)),
            None => produce().and_then(|resolved| {
                if let Some(pixmap) = &resolved {
                    self.cache.store(key, pixmap.clone())?;
                }
                Ok(resolved)
            }),
        };
        self.flights.finish(key, &flight, outcome.clone());
        outcome
    }
}
