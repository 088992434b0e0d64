use super::*;
use crate::entropy::context::{EntropyContext, EntropyInput};
use crate::foundation::core::SurfaceSize;
use crate::raster::compositor::{RenderOpts, compose, compose_layers};
use crate::raster::painter::PrimitiveKind;
use crate::traits::model::{Accessory, Category, Rarity, TraitDescriptor};
use crate::traits::palette::default_palette;

fn loaded(category: Category) -> TraitDescriptor {
    TraitDescriptor {
        category,
        rarity: Rarity::Legendary,
        palette: default_palette(category),
        accessories: Accessory::ALL.iter().copied().collect(),
        special: true,
        ..TraitDescriptor::default()
    }
}

fn full_entropy() -> EntropyContext {
    EntropyContext::from_input(
        &EntropyInput::default()
            .with_block_height(777)
            .with_block_hash("0x9f86d081884c7d659a2feaa0c55ad015")
            .with_quantum_state("entangled")
            .with_entropy_scalar(0.8),
    )
}

#[test]
fn contrast_flips_on_dark_fills() {
    let on_dark = contrast(Rgba8::rgb(10, 10, 40));
    assert_eq!((on_dark.r, on_dark.g, on_dark.b), (255, 255, 255));
    let fill = Rgba8::rgb(240, 200, 160);
    let on_light = contrast(fill);
    assert!(on_light.r < fill.r && on_light.g < fill.g && on_light.b < fill.b);
}

#[test]
fn every_layer_draws_for_a_loaded_subject() {
    let entropy = full_entropy();
    for category in Category::ALL {
        let traits = loaded(*category);
        for kind in LayerKind::ORDER {
            let (_, log) = compose_layers(
                &traits,
                Some(&entropy),
                SurfaceSize::new(48, 48),
                &RenderOpts::default(),
                &[kind],
            )
            .unwrap();
            assert!(log.count_in(kind) > 0, "{category} {}", kind.name());
            assert_eq!(log.len(), log.count_in(kind));
        }
    }
}

#[test]
fn tiny_surfaces_still_compose() {
    let entropy = full_entropy();
    for category in Category::ALL {
        for (w, h) in [(1, 1), (3, 1), (1, 5), (7, 4)] {
            let (frame, _) = compose(
                &loaded(*category),
                Some(&entropy),
                SurfaceSize::new(w, h),
                &RenderOpts::default(),
            )
            .unwrap();
            assert_eq!(frame.data.len(), (w * h * 4) as usize);
        }
    }
}

#[test]
fn single_hash_point_is_a_dot() {
    let entropy = EntropyContext::from_input(&EntropyInput::default().with_block_hash("abcd"));
    let (_, log) = compose_layers(
        &loaded(Category::Generic),
        Some(&entropy),
        SurfaceSize::new(64, 64),
        &RenderOpts::default(),
        &[LayerKind::EntropyOverlay],
    )
    .unwrap();
    assert_eq!(
        log.primitives(),
        &[(LayerKind::EntropyOverlay, PrimitiveKind::Fill)]
    );
}
