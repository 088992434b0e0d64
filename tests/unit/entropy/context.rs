use super::*;
use serde_json::json;

#[test]
fn hash_accepts_prefix_and_rejects_non_hex() {
    assert_eq!(BlockHash::parse("0xABcd").map(|h| h.0), Some("abcd".to_string()));
    assert!(BlockHash::parse("abc").is_none());
    assert!(BlockHash::parse("0x12g4").is_none());
    assert!(BlockHash::parse("").is_none());
}

#[test]
fn hash_bytes_pairs_digits() {
    let h = BlockHash::parse("0a1bff7").unwrap();
    assert_eq!(h.bytes().collect::<Vec<_>>(), vec![0x0a, 0x1b, 0xff, 0x07]);
}

#[test]
fn collapsed_is_unobserved() {
    assert_eq!(QuantumState::parse("Collapsed"), Some(QuantumState::Unobserved));
    assert_eq!(QuantumState::parse("decohered"), None);
}

#[test]
fn scalar_scales_and_clamps() {
    assert_eq!(normalize_scalar(0.25), Some(0.25));
    assert_eq!(normalize_scalar(75.0), Some(0.75));
    assert_eq!(normalize_scalar(450.0), Some(1.0));
    assert_eq!(normalize_scalar(-3.0), Some(0.0));
    assert_eq!(normalize_scalar(f64::NAN), None);
}

#[test]
fn malformed_fields_drop_independently() {
    let input = EntropyInput::default()
        .with_block_height(840_000)
        .with_block_hash("not-a-hash")
        .with_quantum_state("observed");
    let ctx = EntropyContext::from_input(&input);
    assert_eq!(ctx.block_height, Some(840_000));
    assert_eq!(ctx.block_hash, None);
    assert_eq!(ctx.quantum_state, Some(QuantumState::Observed));
    assert_eq!(ctx.scalar(), DEFAULT_ENTROPY_SCALAR);
    assert!(ctx.has_chain_data());
}

#[test]
fn empty_input_is_empty_context() {
    assert!(EntropyContext::from_input(&EntropyInput::default()).is_empty());
}

#[test]
fn deserializes_camel_case_and_numeric_strings() {
    let input: EntropyInput = serde_json::from_value(json!({
        "blockHeight": "812345",
        "blockHash": "0x00000000000000000002a7c4",
        "quantumState": "entangled",
        "entropyScalar": 42
    }))
    .unwrap();
    assert_eq!(input.block_height, Some(812_345));
    assert_eq!(input.entropy_scalar, Some(42.0));
    let ctx = EntropyContext::from_input(&input);
    assert_eq!(ctx.scalar(), 0.42);
}

#[test]
fn negative_height_is_absent() {
    let input: EntropyInput = serde_json::from_value(json!({"blockHeight": -5})).unwrap();
    assert_eq!(input.block_height, None);
}
