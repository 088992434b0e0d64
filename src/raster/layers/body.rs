use std::f64::consts::TAU;

use kurbo::{Circle, Point};

use crate::raster::compositor::{LayerKind, Scene};
use crate::raster::painter::{Paint, Painter};
use crate::raster::shapes::{hexagon, polyline, wave};
use crate::raster::style::BodyDeco;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let palette = &s.traits.palette;
    p.draw(&a.body(), Paint::fill(palette.primary));

    let mut rng = s.rng(LayerKind::Body);
    let u = a.unit;
    match s.style.body {
        BodyDeco::Waves => {
            let e = s.scalar();
            for k in -1..=1 {
                let y = a.body_c.y + f64::from(k) * 0.3 * a.body_ry;
                let path = wave(
                    a.body_c.x - 0.75 * a.body_rx,
                    a.body_c.x + 0.75 * a.body_rx,
                    y,
                    0.05 * a.body_ry * (0.5 + e),
                    2.0 + 2.0 * e,
                    rng.range(0.0, TAU),
                    48,
                );
                p.draw(&path, Paint::stroke(palette.secondary, 0.006 * u));
            }
            for _ in 0..10 {
                let c = a.point_in_body(&mut rng, 0.8);
                p.draw(&Circle::new(c, 0.006 * u), Paint::fill(palette.accent));
            }
        }
        BodyDeco::Circuitry => {
            for _ in 0..6 {
                let start = a.point_in_body(&mut rng, 0.7);
                let run = rng.range(-0.4, 0.4) * a.body_rx;
                let rise = rng.range(-0.3, 0.3) * a.body_ry;
                let corner = Point::new(start.x + run, start.y);
                let end = Point::new(corner.x, corner.y + rise);
                p.draw(
                    &polyline([start, corner, end]),
                    Paint::stroke(palette.secondary, 0.005 * u),
                );
                p.draw(&Circle::new(end, 0.009 * u), Paint::fill(palette.accent));
            }
            let cell = (u / 170.0).max(1.0);
            for _ in 0..3 {
                let at = a.point_in_body(&mut rng, 0.6);
                let c = rng.pick(s.style.glyphs).unwrap_or('$');
                p.text(&c.to_string(), at, cell, palette.accent);
            }
        }
        BodyDeco::Glyphs => {
            let cell = (u / 220.0).max(1.0);
            for _ in 0..16 {
                let at = a.point_in_body(&mut rng, 0.75);
                let c = rng.pick(s.style.glyphs).unwrap_or('0');
                p.text(&c.to_string(), at, cell, palette.secondary.fade(0.8));
            }
            for _ in 0..3 {
                let c = a.point_in_body(&mut rng, 0.6);
                p.draw(
                    &hexagon(c, 0.025 * u),
                    Paint::stroke(palette.accent, 0.004 * u),
                );
            }
        }
        BodyDeco::Spots => {
            for _ in 0..5 {
                let c = a.point_in_body(&mut rng, 0.7);
                let r = rng.range(0.15, 0.3) * a.body_ry;
                p.draw(&Circle::new(c, r), Paint::fill(palette.secondary));
            }
        }
    }
}
