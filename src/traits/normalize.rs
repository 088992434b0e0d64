use tracing::debug;

use crate::foundation::core::Rgba8;
use crate::traits::model::{
    Accessory, AccessorySet, Category, EarShape, EyeStyle, Expression, FeatureTags, FurLength,
    Markings, MuzzleShape, PawStyle, Pattern, Rarity, TailType, TraitDescriptor,
};
use crate::traits::palette::merge_palette;
use crate::traits::partial::{PartialFeatureTags, PartialTraitDescriptor};

/// Resolve loosely-typed input into a fully-populated descriptor.
///
/// Pure and infallible: absent, unknown or malformed fields take their defaults. The category is
/// resolved first because it selects the default palette.
pub fn normalize(input: &PartialTraitDescriptor) -> TraitDescriptor {
    let category = field("category", input.category.as_deref(), Category::parse);
    let rarity = field("rarity", input.rarity.as_deref(), Rarity::parse);

    let entries: Vec<Option<Rgba8>> = input
        .palette
        .iter()
        .flatten()
        .take(3)
        .enumerate()
        .map(|(idx, raw)| {
            let parsed = raw.as_deref().and_then(|s| Rgba8::from_hex(s).ok());
            if parsed.is_none() {
                debug!(slot = idx, value = ?raw, "palette entry malformed, keeping default");
            }
            parsed
        })
        .collect();
    let palette = merge_palette(category, &entries);

    let mut accessories = AccessorySet::new();
    for tag in input.accessories.iter().flatten() {
        match Accessory::parse(tag) {
            Some(acc) => accessories.insert(acc),
            None => debug!(tag = %tag, "unknown accessory dropped"),
        }
    }

    TraitDescriptor {
        category,
        rarity,
        palette,
        accessories,
        expression: field("expression", input.expression.as_deref(), Expression::parse),
        eye_style: field("eye_style", input.eye_style.as_deref(), EyeStyle::parse),
        pattern: field("pattern", input.pattern.as_deref(), Pattern::parse),
        special: input.special.unwrap_or(false),
        features: input
            .features
            .as_ref()
            .map(normalize_features)
            .unwrap_or_default(),
    }
}

fn normalize_features(f: &PartialFeatureTags) -> FeatureTags {
    FeatureTags {
        fur_length: field("fur_length", f.fur_length.as_deref(), FurLength::parse),
        ear_shape: field("ear_shape", f.ear_shape.as_deref(), EarShape::parse),
        tail_type: field("tail_type", f.tail_type.as_deref(), TailType::parse),
        paw_style: field("paw_style", f.paw_style.as_deref(), PawStyle::parse),
        muzzle_shape: field("muzzle_shape", f.muzzle_shape.as_deref(), MuzzleShape::parse),
        markings: field("markings", f.markings.as_deref(), Markings::parse),
    }
}

fn field<T: Default + std::fmt::Debug>(
    name: &'static str,
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> T {
    match raw {
        None => T::default(),
        Some(s) => parse(s).unwrap_or_else(|| {
            let fallback = T::default();
            debug!(field = name, value = s, default = ?fallback, "unknown tag, using default");
            fallback
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/traits/normalize.rs"]
mod tests;
