use crate::foundation::error::{ForgeError, ForgeResult};
use crate::foundation::math::mul_div255_u8;

/// Whole-surface pass applied after rasterization, selected by the quantum state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PostFx {
    /// Offset copy composited over the original.
    Ghost { dx: i32, dy: i32, opacity: f32 },
    /// Darken toward the edges outside a bright centre disc.
    Spotlight { inner: f64, outer: f64, floor: f32 },
    /// Separable Gaussian blur.
    Blur { radius: u32, sigma: f32 },
}

/// Apply `fx` to a premultiplied RGBA8 buffer.
pub(crate) fn apply(fx: PostFx, data: &mut [u8], width: u32, height: u32) -> ForgeResult<()> {
    check_len(data, width, height)?;
    match fx {
        PostFx::Ghost { dx, dy, opacity } => {
            let shifted = shift(data, width, height, dx, dy);
            over_in_place(data, &shifted, opacity)
        }
        PostFx::Spotlight {
            inner,
            outer,
            floor,
        } => {
            spotlight(data, width, height, inner, outer, floor);
            Ok(())
        }
        PostFx::Blur { radius, sigma } => {
            let out = blur_rgba8_premul(data, width, height, radius, sigma)?;
            data.copy_from_slice(&out);
            Ok(())
        }
    }
}

/// Force every pixel opaque, keeping its straight colour.
///
/// The background paints the whole surface, so any alpha below 255 afterwards is rasterizer
/// rounding under translucent strokes.
pub(crate) fn seal_opaque(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        for c in px.iter_mut().take(3) {
            *c = match a {
                0 => 0,
                _ => ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8,
            };
        }
        px[3] = 255;
    }
}

fn check_len(data: &[u8], width: u32, height: u32) -> ForgeResult<()> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| ForgeError::render("pixel buffer size overflow"))?;
    if data.len() != expected {
        return Err(ForgeError::render(
            "post-process expects a buffer of width*height*4 bytes",
        ));
    }
    Ok(())
}

/// Copy of `src` translated by `(dx, dy)`; uncovered pixels are transparent.
fn shift(src: &[u8], width: u32, height: u32, dx: i32, dy: i32) -> Vec<u8> {
    let (w, h) = (width as i64, height as i64);
    let mut out = vec![0u8; src.len()];
    for y in 0..h {
        let sy = y - i64::from(dy);
        if sy < 0 || sy >= h {
            continue;
        }
        for x in 0..w {
            let sx = x - i64::from(dx);
            if sx < 0 || sx >= w {
                continue;
            }
            let si = ((sy * w + sx) * 4) as usize;
            let di = ((y * w + x) * 4) as usize;
            out[di..di + 4].copy_from_slice(&src[si..si + 4]);
        }
    }
    out
}

fn spotlight(data: &mut [u8], width: u32, height: u32, inner: f64, outer: f64, floor: f32) {
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let span = (outer - inner).max(1e-6);
    let floor = f64::from(floor.clamp(0.0, 1.0));
    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = (i as u32 % width) as f64 + 0.5;
        let y = (i as u32 / width) as f64 + 0.5;
        let d = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
        let t = ((d - inner) / span).clamp(0.0, 1.0);
        let k = 1.0 - (1.0 - floor) * t;
        let k = (k * 255.0).round() as u16;
        // Colour only: darkening keeps premultiplied channels <= alpha.
        for c in px.iter_mut().take(3) {
            *c = mul_div255_u8(u16::from(*c), k);
        }
    }
}

fn over(dst: [u8; 4], src: [u8; 4], opacity: f32) -> [u8; 4] {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));
    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> ForgeResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ForgeError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Fixed-point weights (1.0 = 65536) centred on the middle tap.
struct Kernel {
    taps: Vec<u32>,
}

impl Kernel {
    fn gaussian(radius: u32, sigma: f32) -> ForgeResult<Self> {
        if !(sigma.is_finite() && sigma > 0.0) {
            return Err(ForgeError::validation("blur sigma must be > 0"));
        }
        let two_s2 = 2.0 * f64::from(sigma).powi(2);
        let r = i64::from(radius);
        let raw: Vec<f64> = (-r..=r).map(|i| (-((i * i) as f64) / two_s2).exp()).collect();
        let total: f64 = raw.iter().sum();

        let mut taps: Vec<u32> = raw
            .iter()
            .map(|w| (w / total * 65536.0).round() as u32)
            .collect();
        // Rounding residue goes to the centre so a flat image stays flat.
        let residue = 65536 - taps.iter().map(|&t| i64::from(t)).sum::<i64>();
        let mid = taps.len() / 2;
        taps[mid] = (i64::from(taps[mid]) + residue).max(0) as u32;
        Ok(Self { taps })
    }

    fn radius(&self) -> i64 {
        (self.taps.len() / 2) as i64
    }
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> ForgeResult<Vec<u8>> {
    if radius == 0 {
        return Ok(src.to_vec());
    }
    let kernel = Kernel::gaussian(radius, sigma)?;
    let across = convolve(src, width, height, &kernel, Axis::X);
    Ok(convolve(&across, width, height, &kernel, Axis::Y))
}

/// One separable pass along `axis`; samples past the edge clamp to the border pixel.
fn convolve(src: &[u8], width: u32, height: u32, kernel: &Kernel, axis: Axis) -> Vec<u8> {
    let (w, h) = (i64::from(width), i64::from(height));
    let r = kernel.radius();
    let mut out = vec![0u8; src.len()];
    for (i, dst) in out.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i as i64 % w, i as i64 / w);
        let mut acc = [0u64; 4];
        for (k, &weight) in kernel.taps.iter().enumerate() {
            let off = k as i64 - r;
            let (sx, sy) = match axis {
                Axis::X => ((x + off).clamp(0, w - 1), y),
                Axis::Y => (x, (y + off).clamp(0, h - 1)),
            };
            let at = ((sy * w + sx) * 4) as usize;
            for (a, &c) in acc.iter_mut().zip(&src[at..at + 4]) {
                *a += u64::from(weight) * u64::from(c);
            }
        }
        for (d, a) in dst.iter_mut().zip(acc) {
            *d = ((a + 0x8000) >> 16).min(255) as u8;
        }
    }
    out
}
