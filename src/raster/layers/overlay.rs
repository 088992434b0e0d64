use std::f64::consts::TAU;

use kurbo::{Circle, Line, Point, Rect};

use crate::entropy::context::{EntropyContext, QuantumState};
use crate::foundation::core::Rgba8;
use crate::foundation::math::Rng64;
use crate::raster::compositor::{LayerKind, Scene};
use crate::raster::font;
use crate::raster::painter::{Paint, Painter};
use crate::raster::postfx::PostFx;
use crate::raster::shapes::polygon;

const MAX_HASH_POINTS: usize = 32;
const CHORDS: usize = 12;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    let Some(entropy) = s.entropy else {
        return;
    };
    if let Some(height) = entropy.block_height {
        height_label(p, s, height);
    }
    hash_polyline(p, s, entropy);
    if let Some(state) = entropy.quantum_state {
        quantum_pass(p, s, state);
    }
}

fn height_label(p: &mut Painter, s: &Scene<'_>, height: u64) {
    let u = s.anatomy.unit;
    let text = format!("#{height}");
    let cell = (u / 180.0).max(1.0);
    let margin = 0.03 * u;
    let w = font::text_width(&text, cell);
    let h = font::text_height(cell);
    let origin = Point::new(s.width - margin - w, s.height - margin - h);
    let pad = cell * 2.0;
    p.draw(
        &Rect::new(origin.x - pad, origin.y - pad, origin.x + w + pad, origin.y + h + pad),
        Paint::fill(Rgba8::BLACK.fade(0.45)),
    );
    p.text(&text, origin, cell, s.style.ink.with_alpha(255));
}

/// Successive byte pairs become `(angle, radius)` points about the centre.
fn hash_points(s: &Scene<'_>, entropy: &EntropyContext) -> Vec<Point> {
    let Some(hash) = &entropy.block_hash else {
        return Vec::new();
    };
    let u = s.anatomy.unit;
    let c = s.anatomy.centre;
    let bytes: Vec<u8> = hash.bytes().collect();
    bytes
        .chunks_exact(2)
        .take(MAX_HASH_POINTS)
        .map(|pair| {
            let angle = f64::from(pair[0]) / 256.0 * TAU;
            let radius = (0.3 + 0.15 * f64::from(pair[1]) / 255.0) * u;
            Point::new(c.x + radius * angle.cos(), c.y + radius * angle.sin())
        })
        .collect()
}

fn hash_polyline(p: &mut Painter, s: &Scene<'_>, entropy: &EntropyContext) {
    let points = hash_points(s, entropy);
    let u = s.anatomy.unit;
    let colour = s.style.ink.with_alpha(150);
    match points.as_slice() {
        [] => {}
        [only] => p.draw(&Circle::new(*only, 0.006 * u), Paint::fill(colour)),
        _ => p.draw(
            &polygon(points.iter().copied()),
            Paint::stroke(colour, 0.003 * u),
        ),
    }
}

fn quantum_pass(p: &mut Painter, s: &Scene<'_>, state: QuantumState) {
    let scale = s.anatomy.unit / 500.0;
    match state {
        QuantumState::Superposition => p.post(PostFx::Ghost {
            dx: (0.03 * s.width).round() as i32,
            dy: -(0.01 * s.height).round() as i32,
            opacity: 0.35,
        }),
        QuantumState::Entangled => {
            let mut rng = s.rng(LayerKind::EntropyOverlay);
            let u = s.anatomy.unit;
            for _ in 0..CHORDS {
                let a = perimeter_point(&mut rng, s);
                let b = perimeter_point(&mut rng, s);
                p.draw(
                    &Line::new(a, b),
                    Paint::stroke(Rgba8::WHITE.fade(0.15), 0.002 * u),
                );
            }
        }
        QuantumState::Observed => p.post(PostFx::Spotlight {
            inner: 0.3 * s.anatomy.unit,
            outer: 0.75 * s.anatomy.unit,
            floor: 0.35,
        }),
        QuantumState::Unobserved => {
            let radius = (f64::from(s.opts.blur_radius) * scale).round().max(1.0) as u32;
            let sigma = (f64::from(s.opts.blur_sigma) * scale).max(0.5) as f32;
            p.post(PostFx::Blur { radius, sigma });
        }
    }
}

fn perimeter_point(rng: &mut Rng64, s: &Scene<'_>) -> Point {
    let t = rng.next_f64_01() * 2.0 * (s.width + s.height);
    if t < s.width {
        Point::new(t, 0.0)
    } else if t < s.width + s.height {
        Point::new(s.width, t - s.width)
    } else if t < 2.0 * s.width + s.height {
        Point::new(2.0 * s.width + s.height - t, s.height)
    } else {
        Point::new(0.0, 2.0 * (s.width + s.height) - t)
    }
}
