//! Frame exporters: PNG bytes, an SVG wrapper around them, and a luminance character grid.

pub(crate) mod ascii;
pub(crate) mod png;
pub(crate) mod svg;
