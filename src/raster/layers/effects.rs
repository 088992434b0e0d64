use std::f64::consts::TAU;

use kurbo::{Circle, Ellipse, Point, Rect, RoundedRect};

use crate::foundation::core::Rgba8;
use crate::foundation::math::Rng64;
use crate::raster::compositor::{LayerKind, Scene};
use crate::raster::font;
use crate::raster::painter::{Paint, Painter};
use crate::raster::shapes::{polyline, sparkle};
use crate::raster::style::EffectStyle;
use crate::traits::model::Rarity;
use crate::traits::palette::rarity_colour;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    let mut rng = s.rng(LayerKind::Effects);
    category_effect(p, s, &mut rng);
    aura(p, s, &mut rng);
}

fn random_point(rng: &mut Rng64, s: &Scene<'_>) -> Point {
    Point::new(rng.range(0.0, s.width), rng.range(0.0, s.height))
}

fn centred_text(p: &mut Painter, text: &str, at: Point, cell: f64, colour: Rgba8) {
    let origin = Point::new(
        at.x - font::text_width(text, cell) / 2.0,
        at.y - font::text_height(cell) / 2.0,
    );
    p.text(text, origin, cell, colour);
}

fn category_effect(p: &mut Painter, s: &Scene<'_>, rng: &mut Rng64) {
    let u = s.anatomy.unit;
    let palette = &s.traits.palette;
    match s.style.effect {
        EffectStyle::Particles => {
            for _ in 0..40 {
                let c = random_point(rng, s);
                let r = rng.range(0.002, 0.006) * u;
                let alpha = rng.range(0.3, 0.8);
                p.draw(&Circle::new(c, r), Paint::fill(palette.accent.fade(alpha)));
            }
        }
        EffectStyle::ChainLinks => {
            let cell = (u / 130.0).max(1.0);
            for _ in 0..10 {
                let at = random_point(rng, s);
                let c = rng.pick(s.style.glyphs).unwrap_or('$');
                centred_text(p, &c.to_string(), at, cell, palette.accent.fade(0.6));
            }
            let y = s.height - 0.06 * u;
            let link_w = 0.05 * u;
            let x0 = s.width / 2.0 - link_w * 0.75 * 2.5;
            for i in 0..6 {
                let c = Point::new(x0 + f64::from(i) * link_w * 0.75, y);
                let link = Ellipse::new(c, (link_w / 2.0, link_w / 4.0), 0.0);
                p.draw(&link, Paint::stroke(palette.accent, 0.006 * u));
            }
        }
        EffectStyle::GlyphRain => {
            let cell = (u / 200.0).max(1.0);
            for _ in 0..30 {
                let at = random_point(rng, s);
                let c = rng.pick(s.style.glyphs).unwrap_or('1');
                centred_text(p, &c.to_string(), at, cell, s.style.ink.fade(0.5));
            }
            for _ in 0..3 {
                let at = random_point(rng, s);
                let half = 0.025 * u;
                let sticker = RoundedRect::new(at.x - half, at.y - half, at.x + half, at.y + half, half * 0.3);
                p.draw(&sticker, Paint::fill(palette.accent.fade(0.85)));
                let c = rng.pick(s.style.glyphs).unwrap_or('*');
                centred_text(p, &c.to_string(), at, (half / 5.0).max(1.0), Rgba8::BLACK);
            }
        }
        EffectStyle::BoxTicks => {
            let bx = Rect::new(s.width * 0.08, s.height * 0.12, s.width * 0.92, s.height * 0.92);
            let len = 0.05 * u;
            let corners = [
                (Point::new(bx.x0, bx.y0), 1.0, 1.0),
                (Point::new(bx.x1, bx.y0), -1.0, 1.0),
                (Point::new(bx.x0, bx.y1), 1.0, -1.0),
                (Point::new(bx.x1, bx.y1), -1.0, -1.0),
            ];
            for (c, sx, sy) in corners {
                let tick = polyline([
                    Point::new(c.x + sx * len, c.y),
                    c,
                    Point::new(c.x, c.y + sy * len),
                ]);
                p.draw(&tick, Paint::stroke(palette.accent, 0.01 * u));
            }
        }
        EffectStyle::None => {}
    }
}

fn aura(p: &mut Painter, s: &Scene<'_>, rng: &mut Rng64) {
    let rarity = s.traits.rarity;
    if rarity == Rarity::Common {
        return;
    }

    let u = s.anatomy.unit;
    let centre = s.anatomy.centre;
    let radius = 0.42 * u;
    let tint = rarity_colour(rarity);
    match rarity {
        Rarity::Legendary => {
            p.draw(&Circle::new(centre, radius), Paint::stroke(tint.fade(0.5), 0.004 * u));
            let phase = rng.range(0.0, TAU);
            for i in 0..16 {
                let a = phase + f64::from(i) * TAU / 16.0;
                let c = Point::new(centre.x + radius * a.cos(), centre.y + radius * a.sin());
                let size = rng.range(0.008, 0.016) * u;
                p.draw(&sparkle(c, size), Paint::fill(tint));
            }
        }
        Rarity::Epic => {
            p.draw(&Circle::new(centre, radius), Paint::stroke(tint.fade(0.6), 0.005 * u));
            let cell = (u / 220.0).max(1.0);
            let runes = ['<', '>', '+', '*', '=', '|', '/', '#'];
            for (i, rune) in runes.iter().enumerate() {
                let a = i as f64 * TAU / runes.len() as f64;
                let at = Point::new(centre.x + radius * a.cos(), centre.y + radius * a.sin());
                centred_text(p, &rune.to_string(), at, cell, tint);
            }
        }
        Rarity::Rare => {
            p.draw(&Circle::new(centre, radius), Paint::stroke(tint.fade(0.3), 0.003 * u));
        }
        Rarity::Common => {}
    }
}
