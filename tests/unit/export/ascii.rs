use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn solid_black_is_all_dense() {
    let grid = character_grid(&Frame::filled(100, 100, Rgba8::BLACK), 40);
    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines.len(), 20);
    assert!(lines.iter().all(|l| l.len() == 40 && l.chars().all(|c| c == '@')));
}

#[test]
fn solid_white_is_all_blank() {
    let grid = character_grid(&Frame::filled(80, 40, Rgba8::WHITE), 40);
    assert_eq!(grid.lines().count(), 10);
    assert!(grid.chars().all(|c| c == ' ' || c == '\n'));
}

#[test]
fn no_trailing_newline_and_at_least_one_row() {
    let grid = character_grid(&Frame::filled(400, 2, Rgba8::BLACK), 10);
    assert_eq!(grid, "@".repeat(10));
    assert!(!grid.ends_with('\n'));
}

#[test]
fn more_columns_than_pixels_still_samples() {
    let grid = character_grid(&Frame::filled(4, 4, Rgba8::WHITE), 16);
    assert_eq!(grid.lines().count(), 8);
    assert!(grid.lines().all(|l| l == " ".repeat(16)));
}

#[test]
fn mid_grey_lands_mid_ramp() {
    // 128 * 8 / 255 = 4.01 -> 'o'
    let grid = character_grid(&Frame::filled(10, 20, Rgba8::rgb(128, 128, 128)), 2);
    assert_eq!(grid, "oo\noo");
}

#[test]
fn left_half_dark_right_half_light() {
    let mut frame = Frame::filled(20, 10, Rgba8::WHITE);
    for y in 0..10 {
        for x in 0..10 {
            let i = (y * 20 + x) * 4;
            frame.data[i..i + 3].copy_from_slice(&[0, 0, 0]);
        }
    }
    let grid = character_grid(&frame, 4);
    assert_eq!(grid, "@@  ");
}

#[test]
fn empty_frame_is_empty_grid() {
    let frame = Frame {
        width: 0,
        height: 0,
        data: Vec::new(),
        premultiplied: false,
    };
    assert_eq!(character_grid(&frame, 40), "");
}
