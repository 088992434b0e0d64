use std::f64::consts::TAU;

use kurbo::{Circle, Line, Point, Rect};

use crate::foundation::core::Rgba8;
use crate::raster::compositor::{LayerKind, Scene};
use crate::raster::font;
use crate::raster::painter::{Paint, Painter};
use crate::raster::shapes::{wave, wave_packet};
use crate::raster::style::Backdrop;

const RINGS: usize = 12;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    p.draw(&s.bounds(), Paint::fill(s.style.bg_outer));
    match s.style.backdrop {
        Backdrop::RadialWaves => {
            radial_field(p, s, 0.75);
            waves(p, s);
        }
        Backdrop::BinaryGrid => binary_grid(p, s),
        Backdrop::GlyphRain => glyph_rain(p, s),
        Backdrop::SplitBox => {
            radial_field(p, s, 0.6);
            split_box(p, s);
        }
        Backdrop::Soft => radial_field(p, s, 0.7),
    }
}

/// Stepped radial gradient from `bg_outer` to `bg_inner`.
fn radial_field(p: &mut Painter, s: &Scene<'_>, reach: f64) {
    let max_r = s.width.hypot(s.height) / 2.0 * reach;
    for i in 0..RINGS {
        let t = (i + 1) as f64 / RINGS as f64;
        let colour = s.style.bg_outer.mix(s.style.bg_inner, t);
        let r = max_r * (1.0 - t * 0.9);
        p.draw(&Circle::new(s.anatomy.centre, r), Paint::fill(colour));
    }
}

fn waves(p: &mut Painter, s: &Scene<'_>) {
    let mut rng = s.rng(LayerKind::Background);
    let u = s.anatomy.unit;
    let e = s.scalar();
    let amplitude = 0.02 * u * (0.5 + e);
    let cycles = 2.0 + 4.0 * e;
    for k in 0..5 {
        let y = s.height * f64::from(k + 1) / 6.0;
        let phase = rng.range(0.0, TAU);
        let path = wave(0.0, s.width, y, amplitude, cycles, phase, 96);
        p.draw(&path, Paint::stroke(s.style.ink, 0.004 * u));
    }
}

fn binary_grid(p: &mut Painter, s: &Scene<'_>) {
    let u = s.anatomy.unit;
    let step = u / 12.0;
    let grid = s.style.ink.fade(0.6);
    let mut x = step;
    while x < s.width {
        p.draw(
            &Line::new((x, 0.0), (x, s.height)),
            Paint::stroke(grid, 0.002 * u),
        );
        x += step;
    }
    let mut y = step;
    while y < s.height {
        p.draw(
            &Line::new((0.0, y), (s.width, y)),
            Paint::stroke(grid, 0.002 * u),
        );
        y += step;
    }

    // Block height when known; the seed stands in so the texture still varies per subject.
    let value = s
        .entropy
        .and_then(|e| e.block_height)
        .unwrap_or(s.seed() & 0xffff_ffff);
    let bits = format!("{value:b}");
    let cell = (u / 160.0).max(1.0);
    let mut row = 0usize;
    let mut y = step * 0.5 - font::text_height(cell) / 2.0;
    while y < s.height {
        let shift = row % bits.len();
        let line: String = bits[shift..]
            .chars()
            .chain(bits[..shift].chars())
            .cycle()
            .take(64)
            .collect();
        p.text(&line, Point::new(cell * 2.0, y), cell, s.style.ink);
        row += 1;
        y += step * 2.0;
    }
}

fn glyph_rain(p: &mut Painter, s: &Scene<'_>) {
    const COLUMNS: usize = 24;
    const TRAIL: usize = 12;

    radial_field(p, s, 0.6);
    let mut rng = s.rng(LayerKind::Background);
    let col_w = s.width / COLUMNS as f64;
    let cell = (col_w / 7.0).max(1.0);
    let row_h = font::text_height(cell) * 1.4;
    for col in 0..COLUMNS {
        let x = col as f64 * col_w + (col_w - font::text_width("0", cell)) / 2.0;
        let head = rng.range(-0.3, 1.0) * s.height;
        for k in 0..TRAIL {
            let y = head - k as f64 * row_h;
            let c = rng.pick(s.style.glyphs).unwrap_or('0');
            let fade = 1.0 - k as f64 / TRAIL as f64;
            let colour = if k == 0 {
                Rgba8::WHITE.mix(s.style.ink, 0.3)
            } else {
                s.style.ink.fade(0.15 + 0.55 * fade)
            };
            p.text(&c.to_string(), Point::new(x, y), cell, colour);
        }
    }
}

fn split_box(p: &mut Painter, s: &Scene<'_>) {
    let u = s.anatomy.unit;
    let bx = Rect::new(
        s.width * 0.08,
        s.height * 0.12,
        s.width * 0.92,
        s.height * 0.92,
    );
    p.draw(&bx, Paint::stroke(s.style.ink, 0.006 * u));

    // Dashed split down the middle: alive on one side, not on the other.
    let dash = u / 40.0;
    let mut y = bx.y0;
    while y < bx.y1 {
        let y1 = (y + dash).min(bx.y1);
        p.draw(
            &Line::new((s.width / 2.0, y), (s.width / 2.0, y1)),
            Paint::stroke(s.style.ink.fade(0.7), 0.003 * u),
        );
        y += dash * 2.0;
    }

    let mut rng = s.rng(LayerKind::Background);
    let e = s.scalar();
    for _ in 0..3 {
        let c = Point::new(
            rng.range(bx.x0 + 0.1 * u, bx.x1 - 0.1 * u),
            rng.range(bx.y0 + 0.05 * u, bx.y1 - 0.05 * u),
        );
        let packet = wave_packet(c, 0.08 * u, 0.03 * u * (0.5 + e), 4.0 + 4.0 * e);
        p.draw(&packet, Paint::stroke(s.style.ink, 0.004 * u));
    }
}
