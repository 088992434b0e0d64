use std::f64::consts::PI;

use kurbo::{Arc, Circle, Line, Point, Rect, RoundedRect, Vec2};

use crate::foundation::core::Rgba8;
use crate::raster::compositor::Scene;
use crate::raster::font;
use crate::raster::painter::{Paint, Painter};
use crate::raster::shapes::polygon;
use crate::raster::style::HatStyle;
use crate::traits::model::{Accessory, Category};
use crate::traits::palette::rarity_colour;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    for acc in s.traits.accessories.iter() {
        p.named(acc.label());
        match acc {
            Accessory::Hat => hat(p, s),
            Accessory::Bowtie => bowtie(p, s),
            Accessory::Glasses => glasses(p, s),
            Accessory::Collar => collar(p, s),
        }
    }
}

fn hat(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let u = a.unit;
    let top = a.head_c.y - a.head_r;
    match s.style.hat {
        HatStyle::TopHat => {
            let crown = Rect::new(
                a.head_c.x - 0.07 * u,
                top - 0.13 * u,
                a.head_c.x + 0.07 * u,
                top + 0.005 * u,
            );
            let brim = Rect::new(
                a.head_c.x - 0.12 * u,
                top - 0.005 * u,
                a.head_c.x + 0.12 * u,
                top + 0.02 * u,
            );
            let band = Rect::new(crown.x0, crown.y1 - 0.035 * u, crown.x1, crown.y1 - 0.01 * u);
            let felt = Rgba8::rgb(0x1b, 0x1b, 0x1f);
            p.draw(&crown, Paint::fill(felt));
            p.draw(&brim, Paint::fill(felt));
            p.draw(&band, Paint::fill(rarity_colour(s.traits.rarity)));
        }
        HatStyle::MinerLamp => {
            let helmet = Arc::new(
                Point::new(a.head_c.x, top + 0.05 * u),
                Vec2::new(a.head_r * 0.95, a.head_r * 0.6),
                PI,
                PI,
                0.0,
            );
            p.draw(&helmet, Paint::fill(Rgba8::rgb(0xf2, 0xc2, 0x00)));
            let lamp = Point::new(a.head_c.x, top - 0.02 * u);
            let beam = polygon([
                lamp,
                Point::new(lamp.x - 0.1 * u, lamp.y - 0.25 * u),
                Point::new(lamp.x + 0.1 * u, lamp.y - 0.25 * u),
            ]);
            p.draw(&beam, Paint::fill(Rgba8::rgb(0xff, 0xf6, 0xb0).fade(0.25)));
            p.draw(&Circle::new(lamp, 0.022 * u), Paint::fill(Rgba8::rgb(0xff, 0xf6, 0xb0)));
        }
        HatStyle::Hood => {
            let hood = Arc::new(
                a.head_c,
                Vec2::new(a.head_r * 1.12, a.head_r * 1.12),
                PI * 0.95,
                PI * 1.1,
                0.0,
            );
            let cloth = s.traits.palette.primary.mix(Rgba8::BLACK, 0.55);
            p.draw(&hood, Paint::stroke(cloth, 0.05 * u));
        }
    }
}

fn bowtie(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let u = a.unit;
    let c = Point::new(a.head_c.x, a.head_c.y + a.head_r + 0.01 * u);
    let colour = s.traits.palette.accent;
    for side in [-1.0, 1.0] {
        let wing = polygon([
            c,
            Point::new(c.x + side * 0.06 * u, c.y - 0.03 * u),
            Point::new(c.x + side * 0.06 * u, c.y + 0.03 * u),
        ]);
        p.draw(&wing, Paint::fill(colour));
    }
    p.draw(
        &Circle::new(c, 0.012 * u),
        Paint::fill(colour.mix(Rgba8::BLACK, 0.3)),
    );
}

fn glasses(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let u = a.unit;
    let frame = Rgba8::rgb(0x12, 0x12, 0x12);
    if s.traits.category == Category::Cyber {
        let visor = RoundedRect::new(
            a.eye_l.x - a.eye_rx * 1.8,
            a.eye_l.y - a.eye_ry * 1.1,
            a.eye_r.x + a.eye_rx * 1.8,
            a.eye_r.y + a.eye_ry * 1.1,
            0.01 * u,
        );
        p.draw(&visor, Paint::fill(s.traits.palette.accent.fade(0.55)));
        return;
    }

    let r = a.eye_rx * 1.6;
    for eye in [a.eye_l, a.eye_r] {
        p.draw(&Circle::new(eye, r), Paint::fill(Rgba8::rgb(0x9f, 0xd8, 0xff).fade(0.2)));
        p.draw(&Circle::new(eye, r), Paint::stroke(frame, 0.008 * u));
    }
    p.draw(
        &Line::new((a.eye_l.x + r, a.eye_l.y), (a.eye_r.x - r, a.eye_r.y)),
        Paint::stroke(frame, 0.006 * u),
    );
}

fn collar(p: &mut Painter, s: &Scene<'_>) {
    let a = &s.anatomy;
    let u = a.unit;
    let band = Arc::new(
        a.head_c,
        Vec2::new(a.head_r * 0.85, a.head_r * 0.95),
        PI * 0.2,
        PI * 0.6,
        0.0,
    );
    p.draw(&band, Paint::stroke(s.traits.palette.accent.mix(Rgba8::BLACK, 0.2), 0.018 * u));

    let tag = Point::new(a.head_c.x, a.head_c.y + a.head_r * 0.95 + 0.02 * u);
    p.draw(&Circle::new(tag, 0.018 * u), Paint::fill(rarity_colour(s.traits.rarity)));
    if let Some(&c) = s.style.glyphs.first() {
        let cell = (0.022 * u / font::GLYPH_H as f64).max(1.0);
        let text = c.to_string();
        let origin = Point::new(
            tag.x - font::text_width(&text, cell) / 2.0,
            tag.y - font::text_height(cell) / 2.0,
        );
        p.text(&text, origin, cell, Rgba8::BLACK.fade(0.7));
    }
}
