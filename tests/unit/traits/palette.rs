use super::*;

#[test]
fn malformed_slot_keeps_default_and_later_slots_apply() {
    let red = Rgba8::rgb(255, 0, 0);
    let blue = Rgba8::rgb(0, 0, 255);
    let p = merge_palette(Category::Cyber, &[None, Some(red), Some(blue)]);
    assert_eq!(p.primary, default_palette(Category::Cyber).primary);
    assert_eq!(p.secondary, red);
    assert_eq!(p.accent, blue);
}

#[test]
fn extra_entries_are_ignored() {
    let c = Rgba8::rgb(1, 2, 3);
    let p = merge_palette(Category::Generic, &[Some(c), Some(c), Some(c), Some(c)]);
    assert_eq!(p, Palette::new(c, c, c));
}

#[test]
fn every_category_has_a_distinct_default() {
    let palettes: Vec<Palette> = Category::ALL.iter().map(|&c| default_palette(c)).collect();
    for (i, a) in palettes.iter().enumerate() {
        for b in &palettes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
