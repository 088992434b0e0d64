use super::*;
use crate::foundation::core::Rgba8;

fn solid(colour: Rgba8) -> RenderHandle {
    RenderHandle::new(Frame::filled(8, 4, colour), DrawLog::default(), 6)
}

#[test]
fn empty_handle_exports_nothing() {
    let h = RenderHandle::empty();
    assert!(h.is_empty());
    assert_eq!((h.width(), h.height()), (0, 0));
    assert!(h.frame().is_none());
    assert!(h.to_image_bytes(ExportFormat::Raster).is_empty());
    assert!(h.to_image_bytes(ExportFormat::Vector).is_empty());
    assert!(h.to_vector_document().is_empty());
    assert!(h.to_character_grid(40).is_empty());
    assert!(h.draw_log().is_empty());
}

#[test]
fn raster_bytes_are_png() {
    let bytes = solid(Rgba8::WHITE).to_image_bytes(ExportFormat::Raster);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn vector_bytes_match_document() {
    let h = solid(Rgba8::BLACK);
    assert_eq!(
        h.to_image_bytes(ExportFormat::Vector),
        h.to_vector_document().into_bytes()
    );
}

#[test]
fn default_grid_uses_configured_columns() {
    let h = solid(Rgba8::BLACK);
    assert_eq!(h.to_default_character_grid(), "@@@@@@\n@@@@@@");
    assert_eq!(h.to_character_grid(2), "@@");
}
