use crate::entropy::context::EntropyContext;
use crate::foundation::math::StableHasher;
use crate::traits::model::TraitDescriptor;

/// Root seed of one render.
///
/// Block data drives the seed when present; otherwise the normalized traits do. Either way the
/// same input always yields the same seed.
pub fn render_seed(traits: &TraitDescriptor, entropy: Option<&EntropyContext>) -> u64 {
    let mut h = StableHasher::new();
    match entropy.filter(|e| e.has_chain_data()) {
        Some(e) => {
            h.write_str("chain");
            if let Some(height) = e.block_height {
                h.write_u8(1);
                h.write_u64(height);
            } else {
                h.write_u8(0);
            }
            if let Some(hash) = &e.block_hash {
                h.write_u8(1);
                h.write_str(hash.as_str());
            } else {
                h.write_u8(0);
            }
        }
        None => {
            h.write_str("traits");
            write_traits(&mut h, traits);
        }
    }
    h.finish()
}

fn write_traits(h: &mut StableHasher, t: &TraitDescriptor) {
    h.write_str(t.category.label());
    h.write_str(t.rarity.label());
    for c in [t.palette.primary, t.palette.secondary, t.palette.accent] {
        h.write_bytes(&[c.r, c.g, c.b, c.a]);
    }
    h.write_u64(t.accessories.len() as u64);
    for acc in t.accessories.iter() {
        h.write_str(acc.label());
    }
    h.write_str(t.expression.label());
    h.write_str(t.eye_style.label());
    h.write_str(t.pattern.label());
    h.write_bool(t.special);
    let f = &t.features;
    for label in [
        f.fur_length.label(),
        f.ear_shape.label(),
        f.tail_type.label(),
        f.paw_style.label(),
        f.muzzle_shape.label(),
        f.markings.label(),
    ] {
        h.write_str(label);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/entropy/seed.rs"]
mod tests;
