use kurbo::{Ellipse, Point, Rect};
use serde::Serialize;
use tracing::debug;

use crate::entropy::context::{EntropyContext, QuantumState};
use crate::foundation::core::{Rgba8, SurfaceSize};
use crate::foundation::error::ForgeResult;
use crate::foundation::math::Rng64;
use crate::raster::layers;
use crate::raster::painter::{DrawLog, Paint, Painter};
use crate::raster::postfx;
use crate::raster::style::{CategoryStyle, style_for};
use crate::traits::model::TraitDescriptor;

/// One drawing step of the raster pipeline. Declaration order is draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Full-surface category background.
    Background,
    /// Translucent rarity overlay with sparkles or soft circles.
    RarityBackdrop,
    /// Body ellipse and its decoration.
    Body,
    /// Tail curve, tail tip and front paws.
    TailAndPaws,
    /// Head, eyes, ears, whiskers, nose and mouth.
    Head,
    /// Hat, bowtie, glasses and collar.
    Accessories,
    /// Category effects and rarity aura.
    Effects,
    /// Block label, hash polyline and quantum-state pass.
    EntropyOverlay,
}

impl LayerKind {
    /// Every layer in draw order.
    pub const ORDER: [Self; 8] = [
        Self::Background,
        Self::RarityBackdrop,
        Self::Body,
        Self::TailAndPaws,
        Self::Head,
        Self::Accessories,
        Self::Effects,
        Self::EntropyOverlay,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::RarityBackdrop => "rarity_backdrop",
            Self::Body => "body",
            Self::TailAndPaws => "tail_and_paws",
            Self::Head => "head",
            Self::Accessories => "accessories",
            Self::Effects => "effects",
            Self::EntropyOverlay => "entropy_overlay",
        }
    }

    fn salt(self) -> u64 {
        self as u64 + 1
    }
}

/// A finished raster surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl Frame {
    /// A frame of one straight-alpha colour.
    pub fn filled(width: u32, height: u32, colour: Rgba8) -> Self {
        let px = [colour.r, colour.g, colour.b, colour.a];
        Self {
            width,
            height,
            data: px.repeat(width as usize * height as usize),
            premultiplied: false,
        }
    }

    /// Straight-alpha pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        let mut px = [px[0], px[1], px[2], px[3]];
        if self.premultiplied {
            px = unpremultiply(px);
        }
        Some(Rgba8::new(px[0], px[1], px[2], px[3]))
    }

    /// Same pixels with straight alpha.
    pub fn to_straight(&self) -> Self {
        let mut data = self.data.clone();
        if self.premultiplied {
            for px in data.chunks_exact_mut(4) {
                let out = unpremultiply([px[0], px[1], px[2], px[3]]);
                px.copy_from_slice(&out);
            }
        }
        Self {
            width: self.width,
            height: self.height,
            data,
            premultiplied: false,
        }
    }
}

fn unpremultiply(px: [u8; 4]) -> [u8; 4] {
    let a = u32::from(px[3]);
    match a {
        0 => [0, 0, 0, 0],
        255 => px,
        _ => {
            let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
            [un(px[0]), un(px[1]), un(px[2]), px[3]]
        }
    }
}

/// Options of the raster backend.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOpts {
    /// Painted under the background. The background covers the whole surface, so this only
    /// shows through translucent background styles.
    pub clear: Rgba8,
    /// Blur radius of the unobserved-state pass, in pixels at a 500px surface.
    pub blur_radius: u32,
    /// Blur sigma of the unobserved-state pass, in pixels at a 500px surface.
    pub blur_sigma: f32,
    /// Default column count of character-grid exports.
    pub ascii_columns: usize,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            clear: Rgba8::TRANSPARENT,
            blur_radius: 6,
            blur_sigma: 2.5,
            ascii_columns: 40,
        }
    }
}

/// Anchor geometry of the subject, derived from the surface size.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Anatomy {
    /// Shorter surface side.
    pub unit: f64,
    pub centre: Point,
    pub body_c: Point,
    pub body_rx: f64,
    pub body_ry: f64,
    pub head_c: Point,
    pub head_r: f64,
    pub eye_l: Point,
    pub eye_r: Point,
    pub eye_rx: f64,
    pub eye_ry: f64,
    pub nose: Point,
}

impl Anatomy {
    fn new(width: f64, height: f64) -> Self {
        let unit = width.min(height);
        let centre = Point::new(width / 2.0, height / 2.0);
        let body_c = Point::new(centre.x, centre.y + 0.14 * unit);
        let head_c = Point::new(centre.x, centre.y - 0.1 * unit);
        let eye_y = head_c.y - 0.015 * unit;
        Self {
            unit,
            centre,
            body_c,
            body_rx: 0.2 * unit,
            body_ry: 0.16 * unit,
            head_c,
            head_r: 0.15 * unit,
            eye_l: Point::new(head_c.x - 0.055 * unit, eye_y),
            eye_r: Point::new(head_c.x + 0.055 * unit, eye_y),
            eye_rx: 0.03 * unit,
            eye_ry: 0.035 * unit,
            nose: Point::new(head_c.x, head_c.y + 0.045 * unit),
        }
    }

    pub(crate) fn body(&self) -> Ellipse {
        Ellipse::new(self.body_c, (self.body_rx, self.body_ry), 0.0)
    }

    /// Uniform point inside the body ellipse, scaled by `fill` in `(0, 1]`.
    pub(crate) fn point_in_body(&self, rng: &mut Rng64, fill: f64) -> Point {
        let r = rng.next_f64_01().sqrt() * fill;
        let a = rng.range(0.0, std::f64::consts::TAU);
        Point::new(
            self.body_c.x + self.body_rx * r * a.cos(),
            self.body_c.y + self.body_ry * r * a.sin(),
        )
    }
}

/// Everything a layer may read. Layers never see each other's state.
pub(crate) struct Scene<'a> {
    pub traits: &'a TraitDescriptor,
    pub entropy: Option<&'a EntropyContext>,
    pub width: f64,
    pub height: f64,
    pub style: &'static CategoryStyle,
    pub anatomy: Anatomy,
    pub opts: &'a RenderOpts,
    seed: u64,
}

impl Scene<'_> {
    /// Independent random stream of one layer.
    pub(crate) fn rng(&self, layer: LayerKind) -> Rng64 {
        Rng64::fork(self.seed, layer.salt())
    }

    pub(crate) fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Entropy scalar in `[0, 1]`, 0.5 without a context.
    pub(crate) fn scalar(&self) -> f64 {
        self.entropy
            .map(EntropyContext::scalar)
            .unwrap_or(crate::entropy::context::DEFAULT_ENTROPY_SCALAR)
    }

    pub(crate) fn quantum_state(&self) -> Option<QuantumState> {
        self.entropy.and_then(|e| e.quantum_state)
    }

    pub(crate) fn seed(&self) -> u64 {
        self.seed
    }
}

/// Run every layer in order on a fresh surface.
pub(crate) fn compose(
    traits: &TraitDescriptor,
    entropy: Option<&EntropyContext>,
    size: SurfaceSize,
    opts: &RenderOpts,
) -> ForgeResult<(Frame, DrawLog)> {
    compose_layers(traits, entropy, size, opts, &LayerKind::ORDER)
}

/// Run the listed layers, still in pipeline order.
#[tracing::instrument(
    skip_all,
    fields(category = %traits.category, rarity = %traits.rarity, width = size.width, height = size.height)
)]
pub(crate) fn compose_layers(
    traits: &TraitDescriptor,
    entropy: Option<&EntropyContext>,
    size: SurfaceSize,
    opts: &RenderOpts,
    layers: &[LayerKind],
) -> ForgeResult<(Frame, DrawLog)> {
    let (w, h) = size.to_u16()?;
    let seed = crate::entropy::seed::render_seed(traits, entropy);
    let scene = Scene {
        traits,
        entropy,
        width: f64::from(w),
        height: f64::from(h),
        style: style_for(traits.category),
        anatomy: Anatomy::new(f64::from(w), f64::from(h)),
        opts,
        seed,
    };

    let mut painter = Painter::new(w, h);
    if opts.clear.a > 0 {
        painter.draw(&scene.bounds(), Paint::fill(opts.clear));
    }
    for kind in LayerKind::ORDER {
        if !layers.contains(&kind) {
            continue;
        }
        painter.begin_layer(kind);
        layers::draw(kind, &mut painter, &scene);
    }

    let (pixmap, log, post) = painter.finish();
    let mut data = pixmap.data_as_u8_slice().to_vec();
    if let Some(fx) = post {
        postfx::apply(fx, &mut data, u32::from(w), u32::from(h))?;
    }
    if layers.contains(&LayerKind::Background) {
        postfx::seal_opaque(&mut data);
    }
    debug!(primitives = log.len(), seed, "composed frame");

    Ok((
        Frame {
            width: u32::from(w),
            height: u32::from(h),
            data,
            premultiplied: true,
        },
        log,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/compositor.rs"]
mod tests;
