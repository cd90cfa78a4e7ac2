//! Icon-name normalization helpers.

/// Strip a trailing extension-like suffix from an icon name.
///
/// Themed icons are looked up without file extensions, but callers routinely
/// hand the pipeline names like `firefox.png` taken straight from desktop
/// files. Only the last dot-suffix is removed; leading dots never count as
/// a suffix separator, so dotfile-style names pass through unchanged.
pub fn strip_icon_extension(name: &str) -> &str {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => &name[..stem_start + idx],
        None => name,
    }
}
