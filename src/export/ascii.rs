use crate::raster::compositor::Frame;

/// Darkest first; the last entry is a space.
const RAMP: &[u8; 9] = b"@#8&o:*. ";

/// Column count used when callers have no preference.
pub const DEFAULT_GRID_COLUMNS: usize = 40;

/// Downsample `frame` into a luminance character grid `columns` wide.
///
/// Rows follow the aspect ratio at half height, since terminal cells are about twice as tall as
/// they are wide. Lines are joined with `\n` and there is no trailing newline. An empty frame
/// yields an empty string.
pub fn character_grid(frame: &Frame, columns: usize) -> String {
    let (w, h) = (frame.width as usize, frame.height as usize);
    if w == 0 || h == 0 || frame.data.len() < w * h * 4 {
        return String::new();
    }
    let cols = columns.max(1);
    let rows = ((cols as f64 * h as f64 / w as f64 * 0.5).round() as usize).max(1);
    let straight = frame.to_straight();

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let (y0, y1) = span(row, rows, h);
        let mut line = String::with_capacity(cols);
        for col in 0..cols {
            let (x0, x1) = span(col, cols, w);
            let lum = block_luminance(&straight.data, w, x0..x1, y0..y1);
            let idx = ((lum / 255.0 * 8.0).floor() as usize).min(RAMP.len() - 1);
            line.push(char::from(RAMP[idx]));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Source pixel range of cell `i` out of `n` over `len` pixels; never empty.
fn span(i: usize, n: usize, len: usize) -> (usize, usize) {
    let lo = (i * len / n).min(len - 1);
    let hi = ((i + 1) * len / n).clamp(lo + 1, len);
    (lo, hi)
}

fn block_luminance(
    data: &[u8],
    stride: usize,
    xs: std::ops::Range<usize>,
    ys: std::ops::Range<usize>,
) -> f64 {
    // Weights in thousandths keep solid white at exactly 255.
    let mut sum = 0u64;
    let mut count = 0u64;
    for y in ys {
        for x in xs.clone() {
            let i = (y * stride + x) * 4;
            sum += 299 * u64::from(data[i])
                + 587 * u64::from(data[i + 1])
                + 114 * u64::from(data[i + 2]);
            count += 1;
        }
    }
    if count == 0 {
        0.0
    } else {
        sum as f64 / (1000 * count) as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/ascii.rs"]
mod tests;
