use super::*;
use kurbo::{PathEl, Shape};

#[test]
fn polygon_closes_and_empty_stays_empty() {
    let tri = polygon([
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(2.0, 3.0),
    ]);
    assert_eq!(tri.elements().last(), Some(&PathEl::ClosePath));
    assert!(polygon(std::iter::empty()).elements().is_empty());
}

#[test]
fn sparkle_fits_its_size() {
    let bbox = sparkle(Point::new(10.0, 10.0), 5.0).bounding_box();
    assert!((bbox.width() - 10.0).abs() < 1e-9);
    assert!((bbox.height() - 10.0).abs() < 1e-9);
}

#[test]
fn wave_spans_its_range() {
    let path = wave(0.0, 100.0, 50.0, 5.0, 2.0, 0.0, 64);
    let bbox = path.bounding_box();
    assert!((bbox.x0 - 0.0).abs() < 1e-9 && (bbox.x1 - 100.0).abs() < 1e-9);
    assert!(bbox.y0 >= 45.0 - 1e-9 && bbox.y1 <= 55.0 + 1e-9);
}

#[test]
fn hexagon_has_six_vertices() {
    let lines = hexagon(Point::ZERO, 1.0)
        .elements()
        .iter()
        .filter(|el| matches!(el, PathEl::LineTo(_)))
        .count();
    assert_eq!(lines, 5);
}
