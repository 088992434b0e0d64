//! Raster backend: eight ordered layers rasterized with `vello_cpu`, then one optional pixel pass.

pub(crate) mod compositor;
pub(crate) mod font;
pub(crate) mod layers;
pub(crate) mod painter;
pub(crate) mod postfx;
pub(crate) mod shapes;
pub(crate) mod style;
