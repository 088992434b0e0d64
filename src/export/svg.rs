use crate::export::png::encode_png;
use crate::foundation::error::ForgeResult;
use crate::raster::compositor::Frame;

const B64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Minimal SVG document of the frame's size embedding its PNG encoding as a data URI.
pub fn vector_document(frame: &Frame) -> ForgeResult<String> {
    let png = encode_png(frame)?;
    let (w, h) = (frame.width, frame.height);
    Ok(format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" "#,
            r#"width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<image x="0" y="0" width="{w}" height="{h}" href="data:image/png;base64,{data}" "#,
            r#"xlink:href="data:image/png;base64,{data}"/>"#,
            "</svg>"
        ),
        w = w,
        h = h,
        data = base64(&png),
    ))
}

/// Standard padded base64.
pub(crate) fn base64(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let b = [
            chunk[0],
            chunk.get(1).copied().unwrap_or(0),
            chunk.get(2).copied().unwrap_or(0),
        ];
        let n = (u32::from(b[0]) << 16) | (u32::from(b[1]) << 8) | u32::from(b[2]);
        let sextets = [(n >> 18) & 63, (n >> 12) & 63, (n >> 6) & 63, n & 63];
        for (i, s) in sextets.iter().enumerate() {
            if i <= chunk.len() {
                out.push(char::from(B64[*s as usize]));
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
