use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ForgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ForgeError::render("x").to_string().contains("render error:"));
    assert!(ForgeError::export("x").to_string().contains("export error:"));
    assert!(
        ForgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ForgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
