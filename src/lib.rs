#![warn(missing_docs)]

//! Icon resolution and caching for desktop launchers.
//!
//! The [`icons`] crate holds the cache and the resolution strategies behind
//! trait seams; [`desktop`] supplies freedesktop-flavored implementations of
//! those seams. Most applications only need [`prelude`].

pub use lodestar_desktop as desktop;
pub use lodestar_icons as icons;

/// A "prelude" for users of the icon pipeline.
///
/// Importing this module brings into scope the types needed to wire up
/// a resolver and ask it for icons.
///
/// ```rust
/// use lodestar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::desktop::standard_resolver;
    pub use crate::icons::{
        IconCache, IconDescriptor, IconError, IconResolver, Pixmap, RenderFlags,
    };
}
