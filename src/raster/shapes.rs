use std::f64::consts::{PI, TAU};

use kurbo::{BezPath, Point};

/// Open polyline through `points`.
pub(crate) fn polyline(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path
}

/// Closed polygon through `points`.
pub(crate) fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = polyline(points);
    if !path.elements().is_empty() {
        path.close_path();
    }
    path
}

/// Four-point sparkle star.
pub(crate) fn sparkle(centre: Point, size: f64) -> BezPath {
    let pinch = size * 0.28;
    polygon((0..8).map(|i| {
        let a = f64::from(i) * PI / 4.0 - PI / 2.0;
        let r = if i % 2 == 0 { size } else { pinch };
        Point::new(centre.x + r * a.cos(), centre.y + r * a.sin())
    }))
}

/// Regular hexagon, flat top.
pub(crate) fn hexagon(centre: Point, radius: f64) -> BezPath {
    polygon((0..6).map(|i| {
        let a = f64::from(i) * TAU / 6.0;
        Point::new(centre.x + radius * a.cos(), centre.y + radius * a.sin())
    }))
}

/// Sine wave from `x0` to `x1` around `y`, sampled at `steps` segments.
pub(crate) fn wave(
    x0: f64,
    x1: f64,
    y: f64,
    amplitude: f64,
    cycles: f64,
    phase: f64,
    steps: usize,
) -> BezPath {
    let steps = steps.max(1);
    polyline((0..=steps).map(|i| {
        let t = i as f64 / steps as f64;
        let x = x0 + (x1 - x0) * t;
        Point::new(x, y + amplitude * (TAU * cycles * t + phase).sin())
    }))
}

/// Gaussian-enveloped wave packet centred on `centre`.
pub(crate) fn wave_packet(centre: Point, half_width: f64, amplitude: f64, cycles: f64) -> BezPath {
    const STEPS: usize = 48;
    polyline((0..=STEPS).map(|i| {
        let t = i as f64 / STEPS as f64 * 2.0 - 1.0;
        let envelope = (-(t * t) * 4.0).exp();
        Point::new(
            centre.x + t * half_width,
            centre.y + amplitude * envelope * (PI * cycles * t).sin(),
        )
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shapes.rs"]
mod tests;
