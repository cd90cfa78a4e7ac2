//! Shared bitmap handles passed between the resolver, the cache and callers.

use std::fmt;
use std::sync::Arc;

/// A decoded icon bitmap: RGBA8 pixels plus dimensions.
///
/// `Pixmap` is a cheap shared handle. Cloning never copies pixel data, so
/// the cache hands the same underlying allocation to every caller; that
/// sharing is observable through [`Pixmap::ptr_eq`].
#[derive(Clone)]
pub struct Pixmap {
    inner: Arc<PixmapData>,
}

struct PixmapData {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Pixmap {
    /// Wrap raw RGBA8 pixel data, row-major.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not `width * height * 4`.
    pub fn from_rgba8(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "RGBA8 buffer does not match {}x{}",
            width,
            height
        );
        Self {
            inner: Arc::new(PixmapData {
                data,
                width,
                height,
            }),
        }
    }

    /// A single-color bitmap. Handy for built-in fallback icons.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            data.extend_from_slice(&rgba);
        }
        Self::from_rgba8(data, width, height)
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Raw RGBA8 pixel bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Whether two handles share the same underlying bitmap.
    pub fn ptr_eq(a: &Pixmap, b: &Pixmap) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl fmt::Debug for Pixmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pixmap")
            .field("width", &self.inner.width)
            .field("height", &self.inner.height)
            .finish()
    }
}
