use kurbo::{BezPath, Circle, Ellipse, Line, Point};

use crate::entropy::context::QuantumState;
use crate::foundation::core::Rgba8;
use crate::raster::compositor::{LayerKind, Scene};
use crate::raster::font;
use crate::raster::layers::contrast;
use crate::raster::painter::{Paint, Painter};
use crate::raster::shapes::polygon;
use crate::raster::style::PupilStyle;
use crate::traits::model::Expression;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    p.draw(&Circle::new(a.head_c, a.head_r), Paint::fill(s.traits.palette.primary));

    eyes(p, s);
    ears(p, s);
    whiskers(p, s);
    nose_and_mouth(p, s);
}

fn eyes(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let mut rng = s.rng(LayerKind::Head);
    let uncertain = matches!(
        s.quantum_state(),
        Some(QuantumState::Unobserved | QuantumState::Superposition)
    );

    for eye in [a.eye_l, a.eye_r] {
        p.draw(
            &Ellipse::new(eye, (a.eye_rx, a.eye_ry), 0.0),
            Paint::fill(Rgba8::WHITE),
        );

        if uncertain {
            let jitter = a.eye_rx * 0.35 * (0.5 + s.scalar());
            for _ in 0..3 {
                let c = Point::new(
                    eye.x + rng.range(-jitter, jitter),
                    eye.y + rng.range(-jitter, jitter),
                );
                p.draw(
                    &Circle::new(c, a.eye_rx * 0.45),
                    Paint::fill(Rgba8::BLACK.fade(0.45)),
                );
            }
            continue;
        }

        match s.style.pupil {
            PupilStyle::Glyph => {
                let c = rng.pick(s.style.glyphs).unwrap_or('0');
                let cell = (a.eye_ry * 1.2 / font::GLYPH_H as f64).max(1.0);
                let text = c.to_string();
                let origin = Point::new(
                    eye.x - font::text_width(&text, cell) / 2.0,
                    eye.y - font::text_height(cell) / 2.0,
                );
                p.text(&text, origin, cell, s.traits.palette.secondary);
            }
            PupilStyle::Solid => {
                p.draw(&Circle::new(eye, a.eye_rx * 0.5), Paint::fill(Rgba8::BLACK));
                let glint = Point::new(eye.x + a.eye_rx * 0.2, eye.y - a.eye_ry * 0.25);
                p.draw(&Circle::new(glint, a.eye_rx * 0.15), Paint::fill(Rgba8::WHITE));
            }
        }
    }
}

fn ears(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let u = a.unit;
    for side in [-1.0, 1.0] {
        let outer = [
            Point::new(a.head_c.x + side * 0.13 * u, a.head_c.y - 0.07 * u),
            Point::new(a.head_c.x + side * 0.03 * u, a.head_c.y - 0.14 * u),
            Point::new(a.head_c.x + side * 0.12 * u, a.head_c.y - 0.22 * u),
        ];
        let centroid = Point::new(
            (outer[0].x + outer[1].x + outer[2].x) / 3.0,
            (outer[0].y + outer[1].y + outer[2].y) / 3.0,
        );
        let inner = outer.map(|pt| centroid.lerp(pt, 0.55));
        p.draw(&polygon(outer), Paint::fill(s.traits.palette.primary));
        p.draw(&polygon(inner), Paint::fill(s.traits.palette.secondary));
    }
}

fn whiskers(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let u = a.unit;
    let colour = contrast(s.traits.palette.primary);
    let sets: &[(f64, f64)] = if s.style.whisker_trail {
        &[(0.0, 1.0), (0.008, 0.25)]
    } else {
        &[(0.0, 1.0)]
    };
    for &(dy, opacity) in sets {
        for side in [-1.0, 1.0] {
            for k in -1..=1 {
                let k = f64::from(k);
                let from = Point::new(
                    a.nose.x + side * 0.04 * u,
                    a.nose.y + (k * 0.012 + dy) * u,
                );
                let to = Point::new(
                    a.nose.x + side * 0.17 * u,
                    a.nose.y + (k * 0.025 - 0.01 + dy) * u,
                );
                p.draw(
                    &Line::new(from, to),
                    Paint::stroke(colour.fade(opacity), 0.003 * u),
                );
            }
        }
    }
}

fn nose_and_mouth(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let u = a.unit;
    let n = a.nose;
    let nose = polygon([
        Point::new(n.x - 0.012 * u, n.y - 0.008 * u),
        Point::new(n.x + 0.012 * u, n.y - 0.008 * u),
        Point::new(n.x, n.y + 0.008 * u),
    ]);
    p.draw(&nose, Paint::fill(s.traits.palette.secondary));

    let ink = Paint::stroke(contrast(s.traits.palette.primary), 0.004 * u);
    let left = Point::new(n.x - 0.03 * u, n.y + 0.025 * u);
    let right = Point::new(n.x + 0.03 * u, n.y + 0.025 * u);
    match s.traits.expression {
        Expression::Happy => {
            p.draw(&quad(left, Point::new(n.x, n.y + 0.06 * u), right), ink);
        }
        Expression::Sad => {
            let l = Point::new(left.x, n.y + 0.045 * u);
            let r = Point::new(right.x, n.y + 0.045 * u);
            p.draw(&quad(l, Point::new(n.x, n.y + 0.015 * u), r), ink);
        }
        Expression::Surprised => {
            p.draw(
                &Circle::new(Point::new(n.x, n.y + 0.035 * u), 0.012 * u),
                Paint::fill(Rgba8::BLACK.fade(0.85)),
            );
        }
        Expression::Grumpy => {
            p.draw(&Line::new(left, right), ink);
        }
        Expression::Neutral | Expression::Sleepy | Expression::Curious => {
            let mid = Point::new(n.x, n.y + 0.02 * u);
            let mut path = BezPath::new();
            path.move_to(Point::new(n.x - 0.02 * u, n.y + 0.022 * u));
            path.quad_to(Point::new(n.x - 0.01 * u, n.y + 0.035 * u), mid);
            path.quad_to(
                Point::new(n.x + 0.01 * u, n.y + 0.035 * u),
                Point::new(n.x + 0.02 * u, n.y + 0.022 * u),
            );
            p.draw(&path, ink);
        }
    }
}

fn quad(from: Point, ctrl: Point, to: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(from);
    path.quad_to(ctrl, to);
    path
}
