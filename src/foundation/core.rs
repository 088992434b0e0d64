use crate::foundation::error::{ForgeError, ForgeResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

/// Straight-alpha RGBA8 colour.
///
/// Layers describe paint in straight alpha; the rasterizer and post-processing operate on
/// premultiplied pixels (see [`Rgba8::premul`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (straight).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build a colour from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same colour with a replaced alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Same colour with alpha scaled by `opacity` in `[0, 1]`.
    pub fn fade(self, opacity: f64) -> Self {
        let a = (f64::from(self.a) * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    /// Linear blend toward `other` by `t` in `[0, 1]`, alpha included.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            let af = f64::from(a);
            let bf = f64::from(b);
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
            lerp(self.a, other.a),
        )
    }

    /// Premultiplied `[r, g, b, a]` bytes.
    pub fn premul(self) -> [u8; 4] {
        let af = u16::from(self.a) + 1;
        let premul = |c: u8| -> u8 { ((u16::from(c) * af) >> 8) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), self.a]
    }

    /// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> ForgeResult<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.is_ascii() {
            return Err(ForgeError::validation(format!("invalid hex colour \"{s}\"")));
        }

        fn hex_byte(pair: &str) -> ForgeResult<u8> {
            // `from_str_radix` alone would accept a leading `+`.
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(ForgeError::validation(format!("invalid hex byte \"{pair}\"")));
            }
            u8::from_str_radix(pair, 16)
                .map_err(|_| ForgeError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, slot) in out.iter_mut().enumerate() {
                    let v = hex_byte(&hex[i..i + 1])?;
                    *slot = (v << 4) | v;
                }
                Ok(Self::rgb(out[0], out[1], out[2]))
            }
            6 => Ok(Self::rgb(
                hex_byte(&hex[0..2])?,
                hex_byte(&hex[2..4])?,
                hex_byte(&hex[4..6])?,
            )),
            8 => Ok(Self::new(
                hex_byte(&hex[0..2])?,
                hex_byte(&hex[2..4])?,
                hex_byte(&hex[4..6])?,
                hex_byte(&hex[6..8])?,
            )),
            _ => Err(ForgeError::validation(
                "hex colour must be #RGB, #RRGGBB or #RRGGBBAA",
            )),
        }
    }

    /// `#rrggbb` (opaque) or `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Serialized as its [`Rgba8::to_hex`] form.
impl serde::Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Requested raster surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Build a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check the size against the rasterizer's limits (`1..=u16::MAX` on each axis).
    pub fn to_u16(self) -> ForgeResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| ForgeError::validation("surface width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| ForgeError::validation("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(ForgeError::validation("surface width and height must be > 0"));
        }
        Ok((w, h))
    }

    /// Shorter side, in pixels.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::new(500, 500)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
