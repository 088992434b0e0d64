//! The eight raster layers. Each one reads the [`Scene`] and draws through the [`Painter`].

mod accessories;
mod background;
mod body;
mod effects;
mod head;
mod overlay;
mod rarity;
mod tail;

use crate::foundation::core::Rgba8;
use crate::raster::compositor::{LayerKind, Scene};
use crate::raster::painter::Painter;

pub(crate) fn draw(kind: LayerKind, p: &mut Painter, s: &Scene<'_>) {
    match kind {
        LayerKind::Background => background::draw(p, s),
        LayerKind::RarityBackdrop => rarity::draw(p, s),
        LayerKind::Body => body::draw(p, s),
        LayerKind::TailAndPaws => tail::draw(p, s),
        LayerKind::Head => head::draw(p, s),
        LayerKind::Accessories => accessories::draw(p, s),
        LayerKind::Effects => effects::draw(p, s),
        LayerKind::EntropyOverlay => overlay::draw(p, s),
    }
}

/// Outline colour that reads against `fill`.
fn contrast(fill: Rgba8) -> Rgba8 {
    let luma = 0.299 * f64::from(fill.r) + 0.587 * f64::from(fill.g) + 0.114 * f64::from(fill.b);
    if luma < 96.0 {
        Rgba8::WHITE.fade(0.85)
    } else {
        fill.mix(Rgba8::BLACK, 0.65)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/raster/layers/mod.rs"]
mod tests;
