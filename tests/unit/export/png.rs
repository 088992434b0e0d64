use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn round_trip_keeps_dimensions_and_pixels() {
    let frame = Frame::filled(7, 3, Rgba8::new(10, 200, 30, 255));
    let bytes = encode_png(&frame).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let back = decode_png(&bytes).unwrap();
    assert_eq!((back.width, back.height), (7, 3));
    assert_eq!(back.data, frame.data);
}

#[test]
fn premultiplied_frames_are_stored_straight() {
    let frame = Frame {
        width: 1,
        height: 1,
        data: vec![50, 0, 0, 100],
        premultiplied: true,
    };
    let back = decode_png(&encode_png(&frame).unwrap()).unwrap();
    assert_eq!(back.pixel(0, 0), Some(Rgba8::new(128, 0, 0, 100)));
}

#[test]
fn mismatched_buffer_is_an_export_error() {
    let frame = Frame {
        width: 4,
        height: 4,
        data: vec![0; 10],
        premultiplied: false,
    };
    assert!(matches!(encode_png(&frame), Err(ForgeError::Export(_))));
}

#[test]
fn garbage_does_not_decode() {
    assert!(decode_png(b"not a png").is_err());
}
