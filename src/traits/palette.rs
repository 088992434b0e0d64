use crate::foundation::core::Rgba8;
use crate::traits::model::{Category, Palette, Rarity};

const QUANTUM: Palette = Palette::new(
    Rgba8::rgb(0x5b, 0x4b, 0xd6),
    Rgba8::rgb(0x50, 0xc8, 0xf0),
    Rgba8::rgb(0xb4, 0x8c, 0xff),
);
const BLOCKCHAIN: Palette = Palette::new(
    Rgba8::rgb(0xf7, 0x93, 0x1a),
    Rgba8::rgb(0x4d, 0x4d, 0x4d),
    Rgba8::rgb(0xff, 0xd7, 0x00),
);
const CYBER: Palette = Palette::new(
    Rgba8::rgb(0x1e, 0x1e, 0x2e),
    Rgba8::rgb(0x00, 0xff, 0x41),
    Rgba8::rgb(0xff, 0x00, 0x7f),
);
const SCHRODINGER: Palette = Palette::new(
    Rgba8::rgb(0x8a, 0x8a, 0x9a),
    Rgba8::rgb(0xff, 0xc0, 0xcb),
    Rgba8::rgb(0x40, 0xe0, 0xd0),
);
const GENERIC: Palette = Palette::new(
    Rgba8::rgb(0xff, 0xa5, 0x00),
    Rgba8::rgb(0xff, 0xc0, 0xcb),
    Rgba8::rgb(0xff, 0xff, 0xff),
);

/// Palette used for every slot the caller leaves absent or malformed.
pub fn default_palette(category: Category) -> Palette {
    match category {
        Category::Quantum => QUANTUM,
        Category::Blockchain => BLOCKCHAIN,
        Category::Cyber => CYBER,
        Category::Schrodinger => SCHRODINGER,
        Category::Generic => GENERIC,
    }
}

/// Band/aura colour of a rarity tier.
pub fn rarity_colour(rarity: Rarity) -> Rgba8 {
    match rarity {
        Rarity::Common => Rgba8::rgb(0x9e, 0x9e, 0x9e),
        Rarity::Rare => Rgba8::rgb(0x21, 0x96, 0xf3),
        Rarity::Epic => Rgba8::rgb(0x9c, 0x27, 0xb0),
        Rarity::Legendary => Rgba8::rgb(0xff, 0xd7, 0x00),
    }
}

/// Overlay input colours onto the category default, one slot at a time.
///
/// `None` entries are malformed inputs; their slot keeps its default.
pub(crate) fn merge_palette(category: Category, entries: &[Option<Rgba8>]) -> Palette {
    let mut palette = default_palette(category);
    for (idx, entry) in entries.iter().enumerate() {
        let (Some(colour), Some(slot)) = (entry, palette.slot_mut(idx)) else {
            continue;
        };
        *slot = *colour;
    }
    palette
}

#[cfg(test)]
#[path = "../../tests/unit/traits/palette.rs"]
mod tests;
