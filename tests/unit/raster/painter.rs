use super::*;
use kurbo::{Circle, Line, Rect};

#[test]
fn fill_covers_the_shape() {
    let mut p = Painter::new(4, 4);
    p.draw(&Rect::new(0.0, 0.0, 4.0, 4.0), Paint::fill(Rgba8::rgb(255, 0, 0)));
    let (pixmap, log, post) = p.finish();
    let data = pixmap.data_as_u8_slice();
    assert!(data.chunks_exact(4).all(|px| px == [255, 0, 0, 255]));
    assert_eq!(log.len(), 1);
    assert!(post.is_none());
}

#[test]
fn primitives_are_attributed_to_the_current_layer() {
    let mut p = Painter::new(16, 16);
    p.draw(&Circle::new((8.0, 8.0), 3.0), Paint::fill(Rgba8::WHITE));
    p.begin_layer(LayerKind::Accessories);
    p.draw(
        &Line::new((0.0, 0.0), (16.0, 16.0)),
        Paint::stroke(Rgba8::BLACK, 1.5),
    );
    p.named("hat");
    p.text("42", Point::new(1.0, 1.0), 1.0, Rgba8::WHITE);
    let (_, log, _) = p.finish();

    assert_eq!(log.count_in(LayerKind::Background), 1);
    assert_eq!(log.count_in(LayerKind::Accessories), 2);
    assert_eq!(log.count_named("hat"), 1);
    assert_eq!(log.named_calls().collect::<Vec<_>>(), vec!["hat"]);
    assert_eq!(
        log.primitives()[1],
        (LayerKind::Accessories, PrimitiveKind::Stroke)
    );
}

#[test]
fn transparent_paint_leaves_pixels_untouched() {
    let mut p = Painter::new(2, 2);
    p.draw(&Rect::new(0.0, 0.0, 2.0, 2.0), Paint::fill(Rgba8::TRANSPARENT));
    let (pixmap, log, _) = p.finish();
    assert!(pixmap.data_as_u8_slice().iter().all(|&b| b == 0));
    assert_eq!(log.len(), 1);
}
