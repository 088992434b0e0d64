use tracing::warn;

use crate::export::ascii::character_grid;
use crate::export::png::encode_png;
use crate::foundation::error::ForgeResult;
use crate::export::svg::vector_document;
use crate::raster::compositor::Frame;
use crate::raster::painter::DrawLog;

/// Byte formats a [`RenderHandle`] can export.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG, straight alpha.
    #[default]
    Raster,
    /// UTF-8 SVG document wrapping the PNG.
    Vector,
}

/// Result of one raster render.
///
/// An empty handle stands for a render that could not produce a surface. Every export on it
/// returns empty bytes or an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderHandle {
    frame: Option<Frame>,
    log: DrawLog,
    ascii_columns: usize,
}

impl RenderHandle {
    pub(crate) fn new(frame: Frame, log: DrawLog, ascii_columns: usize) -> Self {
        Self {
            frame: Some(frame),
            log,
            ascii_columns,
        }
    }

    /// A handle with no surface.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the render produced no surface.
    pub fn is_empty(&self) -> bool {
        self.frame.is_none()
    }

    /// Surface width, 0 when empty.
    pub fn width(&self) -> u32 {
        self.frame.as_ref().map_or(0, |f| f.width)
    }

    /// Surface height, 0 when empty.
    pub fn height(&self) -> u32 {
        self.frame.as_ref().map_or(0, |f| f.height)
    }

    /// The rendered premultiplied surface.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Primitives and named calls issued while compositing.
    pub fn draw_log(&self) -> &DrawLog {
        &self.log
    }

    /// Encoded bytes in `format`; empty when the handle is empty or encoding fails.
    pub fn to_image_bytes(&self, format: ExportFormat) -> Vec<u8> {
        match format {
            ExportFormat::Raster => self.export(encode_png).unwrap_or_default(),
            ExportFormat::Vector => self.to_vector_document().into_bytes(),
        }
    }

    /// SVG document embedding the raster; empty when the handle is empty.
    pub fn to_vector_document(&self) -> String {
        self.export(vector_document).unwrap_or_default()
    }

    /// Character grid `columns` wide; empty when the handle is empty.
    pub fn to_character_grid(&self, columns: usize) -> String {
        self.frame
            .as_ref()
            .map(|f| character_grid(f, columns))
            .unwrap_or_default()
    }

    /// Character grid at the column count the render was configured with.
    pub fn to_default_character_grid(&self) -> String {
        self.to_character_grid(self.ascii_columns)
    }

    fn export<T>(&self, f: impl FnOnce(&Frame) -> ForgeResult<T>) -> Option<T> {
        let frame = self.frame.as_ref()?;
        match f(frame) {
            Ok(out) => Some(out),
            Err(err) => {
                warn!(error = %err, "export failed; returning empty artifact");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/handle.rs"]
mod tests;
