use super::*;

#[test]
fn parse_folds_case_and_separators() {
    assert_eq!(Category::parse(" Theme_C "), Some(Category::Cyber));
    assert_eq!(Markings::parse("Tabby M"), Some(Markings::TabbyM));
    assert_eq!(Expression::parse("ecstatic"), None);
}

#[test]
fn rarity_is_ordered() {
    assert!(Rarity::Common < Rarity::Rare);
    assert!(Rarity::Rare < Rarity::Epic);
    assert!(Rarity::Epic < Rarity::Legendary);
}

#[test]
fn labels_round_trip_through_parse() {
    for c in Category::ALL {
        assert_eq!(Category::parse(c.label()), Some(*c));
    }
    for p in Pattern::ALL {
        assert_eq!(Pattern::parse(&p.to_string()), Some(*p));
    }
}

#[test]
fn accessory_set_iterates_in_draw_order() {
    let set: AccessorySet = [Accessory::Collar, Accessory::Hat, Accessory::Collar]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(Accessory::Hat));
    assert!(!set.contains(Accessory::Glasses));
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec![Accessory::Hat, Accessory::Collar]
    );
}

#[test]
fn palette_slots_by_index() {
    let mut p = Palette::new(Rgba8::BLACK, Rgba8::WHITE, Rgba8::TRANSPARENT);
    assert!(p.slot_mut(3).is_none());
    if let Some(slot) = p.slot_mut(1) {
        *slot = Rgba8::BLACK;
    }
    assert_eq!(p.secondary, Rgba8::BLACK);
}

#[test]
fn descriptor_serializes_to_json() {
    let t = TraitDescriptor {
        accessories: [Accessory::Collar, Accessory::Hat].into_iter().collect(),
        ..TraitDescriptor::default()
    };
    let v = serde_json::to_value(&t).unwrap();
    assert_eq!(v["palette"]["primary"], serde_json::json!(t.palette.primary.to_hex()));
    assert!(v["palette"]["accent"].as_str().is_some_and(|s| s.starts_with('#')));
    assert_eq!(v["accessories"], serde_json::json!(["hat", "collar"]));
}
