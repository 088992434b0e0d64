use super::*;
use crate::entropy::context::EntropyInput;
use crate::raster::painter::PrimitiveKind;
use crate::traits::model::{Accessory, AccessorySet, Category, Rarity};

fn traits(category: Category, rarity: Rarity) -> TraitDescriptor {
    TraitDescriptor {
        category,
        rarity,
        palette: crate::traits::palette::default_palette(category),
        ..TraitDescriptor::default()
    }
}

fn small() -> SurfaceSize {
    SurfaceSize::new(96, 96)
}

fn effect_primitives(log: &DrawLog) -> usize {
    log.count_in(LayerKind::RarityBackdrop) + log.count_in(LayerKind::Effects)
}

#[test]
fn background_covers_every_pixel() {
    for category in Category::ALL {
        let (frame, _) = compose_layers(
            &traits(*category, Rarity::Common),
            None,
            small(),
            &RenderOpts::default(),
            &[LayerKind::Background],
        )
        .unwrap();
        assert!(
            frame.data.chunks_exact(4).all(|px| px[3] == 255),
            "{category} background left gaps"
        );
    }
}

#[test]
fn empty_accessory_layer_is_a_no_op() {
    let t = traits(Category::Quantum, Rarity::Epic);
    let without: Vec<LayerKind> = LayerKind::ORDER
        .into_iter()
        .filter(|k| *k != LayerKind::Accessories)
        .collect();
    let (all, log) = compose(&t, None, small(), &RenderOpts::default()).unwrap();
    let (skipped, _) = compose_layers(&t, None, small(), &RenderOpts::default(), &without).unwrap();
    assert_eq!(all, skipped);
    assert_eq!(log.count_in(LayerKind::Accessories), 0);
    assert_eq!(log.named_calls().count(), 0);
}

#[test]
fn accessories_draw_in_fixed_order() {
    let mut t = traits(Category::Blockchain, Rarity::Common);
    t.accessories = [Accessory::Collar, Accessory::Glasses, Accessory::Hat, Accessory::Bowtie]
        .into_iter()
        .collect::<AccessorySet>();
    let (_, log) = compose(&t, None, small(), &RenderOpts::default()).unwrap();
    assert_eq!(
        log.named_calls().collect::<Vec<_>>(),
        vec!["hat", "bowtie", "glasses", "collar"]
    );
}

#[test]
fn legendary_draws_more_effects_than_common() {
    for category in Category::ALL {
        let (_, common) =
            compose(&traits(*category, Rarity::Common), None, small(), &RenderOpts::default())
                .unwrap();
        let (_, legendary) = compose(
            &traits(*category, Rarity::Legendary),
            None,
            small(),
            &RenderOpts::default(),
        )
        .unwrap();
        assert!(
            effect_primitives(&legendary) > effect_primitives(&common),
            "{category}"
        );
    }
}

#[test]
fn rarity_tiers_increase_effect_density() {
    let counts: Vec<usize> = Rarity::ALL
        .iter()
        .map(|r| {
            let (_, log) =
                compose(&traits(Category::Cyber, *r), None, small(), &RenderOpts::default())
                    .unwrap();
            effect_primitives(&log)
        })
        .collect();
    assert!(counts.windows(2).all(|w| w[0] < w[1]), "{counts:?}");
}

#[test]
fn same_input_same_pixels() {
    let t = traits(Category::Schrodinger, Rarity::Legendary);
    let e = EntropyContext::from_input(
        &EntropyInput::default()
            .with_block_height(9_001)
            .with_block_hash("0xdeadbeefcafef00d"),
    );
    let a = compose(&t, Some(&e), small(), &RenderOpts::default()).unwrap();
    let b = compose(&t, Some(&e), small(), &RenderOpts::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn overlay_needs_a_context() {
    let t = traits(Category::Generic, Rarity::Common);
    let (_, log) = compose(&t, None, small(), &RenderOpts::default()).unwrap();
    assert_eq!(log.count_in(LayerKind::EntropyOverlay), 0);

    let e = EntropyContext::from_input(
        &EntropyInput::default()
            .with_block_height(12)
            .with_block_hash("00ff80ff")
            .with_quantum_state("unobserved"),
    );
    let (_, log) = compose(&t, Some(&e), small(), &RenderOpts::default()).unwrap();
    let kinds: Vec<PrimitiveKind> = log
        .primitives()
        .iter()
        .filter(|(l, _)| *l == LayerKind::EntropyOverlay)
        .map(|(_, k)| *k)
        .collect();
    assert_eq!(
        kinds,
        vec![
            PrimitiveKind::Fill,
            PrimitiveKind::Text,
            PrimitiveKind::Stroke,
            PrimitiveKind::PostProcess
        ]
    );
}

#[test]
fn observed_state_darkens_the_corners() {
    let t = traits(Category::Generic, Rarity::Common);
    let plain = EntropyContext::from_input(&EntropyInput::default().with_block_height(5));
    let observed = EntropyContext::from_input(
        &EntropyInput::default()
            .with_block_height(5)
            .with_quantum_state("observed"),
    );
    let (a, _) = compose(&t, Some(&plain), small(), &RenderOpts::default()).unwrap();
    let (b, _) = compose(&t, Some(&observed), small(), &RenderOpts::default()).unwrap();
    let (pa, pb) = (a.pixel(0, 0).unwrap(), b.pixel(0, 0).unwrap());
    assert!(pb.r < pa.r && pb.g < pa.g);
    assert_eq!(a.pixel(48, 48), b.pixel(48, 48));
}

#[test]
fn unavailable_surface_is_an_error() {
    let t = TraitDescriptor::default();
    for size in [SurfaceSize::new(0, 10), SurfaceSize::new(70_000, 10)] {
        assert!(compose(&t, None, size, &RenderOpts::default()).is_err());
    }
}

#[test]
fn frame_pixel_unpremultiplies() {
    let frame = Frame {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(0, 0), Some(Rgba8::new(128, 0, 0, 128)));
    assert_eq!(frame.pixel(1, 0), None);
    assert_eq!(frame.to_straight().data, vec![128, 0, 0, 128]);
}

fn with_state(state: Option<&str>) -> EntropyContext {
    let mut input = EntropyInput::default().with_block_height(77);
    if let Some(state) = state {
        input = input.with_quantum_state(state);
    }
    EntropyContext::from_input(&input)
}

/// Sum of absolute differences between horizontally adjacent red channels.
fn roughness(frame: &Frame) -> u64 {
    let w = frame.width as usize;
    frame
        .data
        .chunks_exact(4 * w)
        .flat_map(|row| {
            row.chunks_exact(4)
                .zip(row.chunks_exact(4).skip(1))
                .map(|(a, b)| u64::from(a[0].abs_diff(b[0])))
        })
        .sum()
}

#[test]
fn full_render_is_opaque_for_every_state() {
    for category in Category::ALL {
        for state in [
            None,
            Some("superposition"),
            Some("entangled"),
            Some("observed"),
            Some("unobserved"),
        ] {
            let e = with_state(state);
            let t = traits(*category, Rarity::Legendary);
            let (frame, _) = compose(&t, Some(&e), small(), &RenderOpts::default()).unwrap();
            let clear = frame.data.chunks_exact(4).filter(|px| px[3] != 255).count();
            assert_eq!(clear, 0, "{category} {state:?}");
        }
    }
}

#[test]
fn uncertain_states_draw_three_pupils_per_eye() {
    let t = traits(Category::Generic, Rarity::Common);
    let head_fills = |state: Option<&str>| {
        let e = with_state(state);
        let opts = RenderOpts::default();
        let (_, log) = compose_layers(&t, Some(&e), small(), &opts, &[LayerKind::Head]).unwrap();
        log.primitives()
            .iter()
            .filter(|p| **p == (LayerKind::Head, PrimitiveKind::Fill))
            .count()
    };
    let certain = head_fills(None);
    // Solid pupils are a pupil plus a glint; uncertain eyes get three translucent pupils.
    assert_eq!(head_fills(Some("unobserved")), certain + 2);
    assert_eq!(head_fills(Some("superposition")), certain + 2);
    assert_eq!(head_fills(Some("observed")), certain);
    assert_eq!(head_fills(Some("entangled")), certain);
}

#[test]
fn superposition_ghost_changes_pixels() {
    let t = traits(Category::Quantum, Rarity::Rare);
    let (base, _) = compose(&t, Some(&with_state(None)), small(), &RenderOpts::default()).unwrap();
    let (ghost, log) =
        compose(&t, Some(&with_state(Some("superposition"))), small(), &RenderOpts::default())
            .unwrap();
    assert_eq!(
        log.primitives().last(),
        Some(&(LayerKind::EntropyOverlay, PrimitiveKind::PostProcess))
    );
    let changed = base
        .data
        .chunks_exact(4)
        .zip(ghost.data.chunks_exact(4))
        .filter(|(a, b)| a != b)
        .count();
    assert!(changed > base.data.len() / 4 / 20, "only {changed} pixels changed");
}

#[test]
fn unobserved_blur_smooths_the_surface() {
    let t = traits(Category::Cyber, Rarity::Epic);
    let opts = RenderOpts {
        blur_radius: 15,
        blur_sigma: 6.0,
        ..RenderOpts::default()
    };
    let (base, _) = compose(&t, Some(&with_state(None)), small(), &opts).unwrap();
    let (blurred, _) = compose(&t, Some(&with_state(Some("unobserved"))), small(), &opts).unwrap();
    assert_ne!(base, blurred);
    assert!(roughness(&blurred) < roughness(&base));
}
