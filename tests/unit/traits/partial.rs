use super::*;
use serde_json::json;

#[test]
fn accepts_camel_case_keys() {
    let p: PartialTraitDescriptor = serde_json::from_value(json!({
        "category": "theme-A",
        "rarityTier": "legendary",
        "accessorySet": ["glasses"],
        "eyeStyle": "wink",
        "featureTags": {"furLength": "long", "facialMarkings": "mask"}
    }))
    .unwrap();
    assert_eq!(p.category.as_deref(), Some("theme-A"));
    assert_eq!(p.rarity.as_deref(), Some("legendary"));
    assert_eq!(p.accessories, Some(vec!["glasses".to_string()]));
    assert_eq!(p.eye_style.as_deref(), Some("wink"));
    let f = p.features.unwrap();
    assert_eq!(f.fur_length.as_deref(), Some("long"));
    assert_eq!(f.markings.as_deref(), Some("mask"));
}

#[test]
fn wrong_types_become_absent() {
    let p: PartialTraitDescriptor = serde_json::from_value(json!({
        "category": 7,
        "rarity": null,
        "expression": ["happy"],
        "features": "fluffy",
        "special": "maybe"
    }))
    .unwrap();
    assert_eq!(p.category, None);
    assert_eq!(p.rarity, None);
    assert_eq!(p.expression, None);
    assert_eq!(p.features, None);
    assert_eq!(p.special, None);
}

#[test]
fn palette_keeps_malformed_positions() {
    let p: PartialTraitDescriptor =
        serde_json::from_value(json!({"palette": [12, "#50c8f0"]})).unwrap();
    assert_eq!(
        p.palette,
        Some(vec![None, Some("#50c8f0".to_string())])
    );
}

#[test]
fn accessory_object_form_keeps_true_flags() {
    let p: PartialTraitDescriptor =
        serde_json::from_value(json!({"accessories": {"hat": true, "collar": false}})).unwrap();
    assert_eq!(p.accessories, Some(vec!["hat".to_string()]));
}

#[test]
fn special_accepts_numbers_and_strings() {
    let p: PartialTraitDescriptor = serde_json::from_value(json!({"special": 1})).unwrap();
    assert_eq!(p.special, Some(true));
    let p: PartialTraitDescriptor = serde_json::from_value(json!({"special": "no"})).unwrap();
    assert_eq!(p.special, Some(false));
}
