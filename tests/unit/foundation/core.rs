use super::*;

#[test]
fn parses_hex_variants() {
    assert_eq!(Rgba8::from_hex("#ff0000").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(Rgba8::from_hex("50C8F0").unwrap(), Rgba8::rgb(0x50, 0xc8, 0xf0));
    assert_eq!(Rgba8::from_hex("#abc").unwrap(), Rgba8::rgb(0xaa, 0xbb, 0xcc));
    assert_eq!(
        Rgba8::from_hex("#0000ff80").unwrap(),
        Rgba8::new(0, 0, 255, 128)
    );
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgba8::from_hex("").is_err());
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#gggggg").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
}

#[test]
fn hex_display_roundtrips() {
    for s in ["#000033", "#50c8f0", "#ffd70080"] {
        assert_eq!(Rgba8::from_hex(s).unwrap().to_hex(), s);
    }
}

#[test]
fn premul_of_opaque_is_identity() {
    assert_eq!(Rgba8::rgb(10, 20, 30).premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::TRANSPARENT.premul(), [0, 0, 0, 0]);
}

#[test]
fn surface_size_limits() {
    assert_eq!(SurfaceSize::new(500, 400).to_u16().unwrap(), (500, 400));
    assert!(SurfaceSize::new(0, 10).to_u16().is_err());
    assert!(SurfaceSize::new(70_000, 10).to_u16().is_err());
}

#[test]
fn rejects_signed_digits() {
    for s in ["#+f+f+f", "+1+2+3", "#+0ff00", "-1-2-3", "#ff00+f"] {
        assert!(Rgba8::from_hex(s).is_err(), "{s} parsed");
    }
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Rgba8::new(0x50, 0xc8, 0xf0, 0x80)).unwrap();
    assert_eq!(v, serde_json::json!("#50c8f080"));
}
