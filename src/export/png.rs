use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{ForgeError, ForgeResult};
use crate::raster::compositor::Frame;

/// Encode `frame` as a straight-alpha RGBA8 PNG.
pub fn encode_png(frame: &Frame) -> ForgeResult<Vec<u8>> {
    let straight = frame.to_straight();
    let img = image::RgbaImage::from_raw(straight.width, straight.height, straight.data)
        .ok_or_else(|| ForgeError::export("frame byte length does not match its dimensions"))?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Decode PNG bytes into a straight-alpha frame.
pub fn decode_png(bytes: &[u8]) -> ForgeResult<Frame> {
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .context("decode png from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Frame {
        width,
        height,
        data: rgba.into_raw(),
        premultiplied: false,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
