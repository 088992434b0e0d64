use super::*;

#[test]
fn lowercase_maps_to_uppercase() {
    assert_eq!(glyph('k'), glyph('K'));
    assert!(glyph('~').is_none());
}

#[test]
fn space_advances_without_drawing() {
    let path = text_path(" ", Point::ZERO, 2.0);
    assert!(path.elements().is_empty());
    assert_eq!(text_width("  ", 2.0), 22.0);
}

#[test]
fn one_rect_per_lit_cell() {
    // '1' lights 1 + 2 + 1 + 1 + 1 + 1 + 3 cells.
    let lit: u32 = glyph('1').unwrap().iter().map(|r| r.count_ones()).sum();
    assert_eq!(lit, 10);
    let path = text_path("1", Point::new(10.0, 10.0), 1.0);
    let moves = path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 10);
}

#[test]
fn label_stays_inside_its_box() {
    let origin = Point::new(5.0, 7.0);
    let bbox = text_path("A1", origin, 3.0).bounding_box();
    assert!(bbox.x0 >= origin.x && bbox.y0 >= origin.y);
    assert!(bbox.x1 <= origin.x + text_width("A1", 3.0) + 1e-9);
    assert!(bbox.y1 <= origin.y + text_height(3.0) + 1e-9);
}
