//! Built-in 5x7 bitmap font for labels and glyph decorations.
//!
//! Rows are top to bottom; bit 4 is the leftmost column. Lowercase input maps to uppercase and
//! characters without a bitmap advance without drawing.

use kurbo::{BezPath, Point, Rect, Shape};

/// Glyph columns.
pub(crate) const GLYPH_W: usize = 5;
/// Glyph rows.
pub(crate) const GLYPH_H: usize = 7;
/// Horizontal advance in cells, including one blank column.
pub(crate) const ADVANCE: usize = GLYPH_W + 1;

type Bitmap = [u8; GLYPH_H];

const DIGITS: [Bitmap; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

const LETTERS: [Bitmap; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
];

fn symbol(c: char) -> Option<&'static Bitmap> {
    const HASH: Bitmap = [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A];
    const COLON: Bitmap = [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00];
    const DOT: Bitmap = [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C];
    const DASH: Bitmap = [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00];
    const PLUS: Bitmap = [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00];
    const DOLLAR: Bitmap = [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04];
    const STAR: Bitmap = [0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00];
    const LT: Bitmap = [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02];
    const GT: Bitmap = [0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08];
    const SLASH: Bitmap = [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00];
    const EQ: Bitmap = [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00];
    const BAR: Bitmap = [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04];

    Some(match c {
        '#' => &HASH,
        ':' => &COLON,
        '.' => &DOT,
        '-' => &DASH,
        '+' => &PLUS,
        '$' => &DOLLAR,
        '*' => &STAR,
        '<' => &LT,
        '>' => &GT,
        '/' => &SLASH,
        '=' => &EQ,
        '|' => &BAR,
        _ => return None,
    })
}

/// Bitmap for `c`, if the font has one.
pub(crate) fn glyph(c: char) -> Option<&'static Bitmap> {
    let c = c.to_ascii_uppercase();
    match c {
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        'A'..='Z' => Some(&LETTERS[c as usize - 'A' as usize]),
        _ => symbol(c),
    }
}

/// Width of `text` in pixels at `cell` pixels per font cell.
pub(crate) fn text_width(text: &str, cell: f64) -> f64 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    (n * ADVANCE - 1) as f64 * cell
}

/// Height of one line in pixels.
pub(crate) fn text_height(cell: f64) -> f64 {
    GLYPH_H as f64 * cell
}

/// Outline of `text` with its top-left corner at `origin`, one rect per lit cell.
pub(crate) fn text_path(text: &str, origin: Point, cell: f64) -> BezPath {
    let mut path = BezPath::new();
    for (i, c) in text.chars().enumerate() {
        let Some(bitmap) = glyph(c) else {
            continue;
        };
        let gx = origin.x + (i * ADVANCE) as f64 * cell;
        for (row, bits) in bitmap.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                    continue;
                }
                let x = gx + col as f64 * cell;
                let y = origin.y + row as f64 * cell;
                path.extend(Rect::new(x, y, x + cell, y + cell).path_elements(0.1));
            }
        }
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/raster/font.rs"]
mod tests;
