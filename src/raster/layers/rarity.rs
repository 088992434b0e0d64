use kurbo::{Circle, Point};

use crate::raster::compositor::{LayerKind, Scene};
use crate::raster::painter::{Paint, Painter};
use crate::raster::shapes::sparkle;
use crate::traits::model::Rarity;
use crate::traits::palette::rarity_colour;

const SPARKLES: usize = 14;
const SOFT_CIRCLES: usize = 12;

pub(super) fn draw(p: &mut Painter, s: &Scene<'_>) {
    let rarity = s.traits.rarity;
    if rarity < Rarity::Epic {
        return;
    }

    let tint = rarity_colour(rarity);
    p.draw(&s.bounds(), Paint::fill(tint.fade(0.12)));

    let mut rng = s.rng(LayerKind::RarityBackdrop);
    let u = s.anatomy.unit;
    let random_point = |rng: &mut crate::foundation::math::Rng64| {
        Point::new(rng.range(0.0, s.width), rng.range(0.0, s.height))
    };
    if rarity == Rarity::Legendary {
        for _ in 0..SPARKLES {
            let c = random_point(&mut rng);
            let size = rng.range(0.01, 0.025) * u;
            p.draw(&sparkle(c, size), Paint::fill(tint.fade(0.8)));
        }
    } else {
        for _ in 0..SOFT_CIRCLES {
            let c = random_point(&mut rng);
            let r = rng.range(0.02, 0.06) * u;
            p.draw(&Circle::new(c, r), Paint::fill(tint.fade(0.25)));
        }
    }
}
