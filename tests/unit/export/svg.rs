use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn base64_known_vectors() {
    assert_eq!(base64(b""), "");
    assert_eq!(base64(b"f"), "Zg==");
    assert_eq!(base64(b"fo"), "Zm8=");
    assert_eq!(base64(b"foo"), "Zm9v");
    assert_eq!(base64(b"foobar"), "Zm9vYmFy");
    assert_eq!(base64(&[0xff, 0xfe]), "//4=");
}

#[test]
fn document_declares_frame_size() {
    let doc = vector_document(&Frame::filled(12, 5, Rgba8::WHITE)).unwrap();
    assert!(doc.starts_with("<svg "));
    assert!(doc.contains(r#"width="12" height="5" viewBox="0 0 12 5""#));
    assert!(doc.contains("data:image/png;base64,iVBORw0KGgo"));
    assert!(doc.ends_with("</svg>"));
}
