use kurbo::{BezPath, Circle, Ellipse, Point, Vec2};

use crate::raster::compositor::Scene;
use crate::raster::layers::contrast;
use crate::raster::painter::{Paint, Painter};
use crate::raster::style::TailTip;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let palette = &s.traits.palette;
    let u = a.unit;

    let start = Point::new(a.body_c.x + a.body_rx * 0.9, a.body_c.y + a.body_ry * 0.2);
    let tip = Point::new(start.x + 0.16 * u, start.y - 0.22 * u);
    let tail = tail_curve(start, tip, u, Vec2::ZERO);
    p.draw(&tail, Paint::stroke(palette.primary, 0.035 * u));

    match s.style.tail_tip {
        TailTip::Trail => {
            let trail = tail_curve(start, tip, u, Vec2::new(0.02 * u, 0.012 * u));
            p.draw(&trail, Paint::stroke(palette.accent.fade(0.35), 0.02 * u));
        }
        TailTip::Cap => {
            p.draw(&Circle::new(tip, 0.022 * u), Paint::fill(palette.accent));
        }
    }

    let outline = contrast(palette.primary);
    for side in [-1.0, 1.0] {
        let c = Point::new(a.body_c.x + side * 0.09 * u, a.body_c.y + a.body_ry * 0.92);
        let paw = Ellipse::new(c, (0.05 * u, 0.028 * u), 0.0);
        p.draw(&paw, Paint::fill(palette.primary));
        p.draw(&paw, Paint::stroke(outline.fade(0.6), 0.003 * u));
    }
}

fn tail_curve(start: Point, tip: Point, u: f64, offset: Vec2) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start + offset);
    path.curve_to(
        Point::new(start.x + 0.14 * u, start.y + 0.04 * u) + offset,
        Point::new(tip.x + 0.05 * u, tip.y + 0.1 * u) + offset,
        tip + offset,
    );
    path
}
