//! Integration tests rasterizing realistic stroke paths
//!
//! These tests verify that:
//! - A committed gesture path renders at the expected pixel width
//! - Ink stays on the path and the background stays clean
//! - Eraser strokes paint the background color over earlier ink

use scrawl_paint::{Color, Point, Stroke, StrokeStyle};
use scrawl_raster::rasterize;

fn stroke(points: &[(f32, f32)], style: StrokeStyle) -> Stroke {
    let mut s = Stroke::new(style);
    for &(x, y) in points {
        s.push(Point::new(x, y));
    }
    s
}

fn ink(width_dp: f32, color: Color) -> StrokeStyle {
    StrokeStyle {
        color,
        width_dp,
        is_eraser: false,
    }
}

/// Count pixels in a column darker than mid-gray.
fn dark_pixels_in_column(frame: &scrawl_raster::Framebuffer, x: u32) -> usize {
    (0..frame.height())
        .filter(|&y| frame.get_pixel(x, y).map(|p| p[0] < 128).unwrap_or(false))
        .count()
}

#[test]
fn test_l_shaped_path_at_double_density() {
    // The end-to-end scenario: three samples forming an L, black ink,
    // 4dp at density 2.0 onto a 100x100 white canvas.
    let strokes = vec![stroke(
        &[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0)],
        ink(4.0, Color::BLACK),
    )];
    let frame = rasterize(&strokes, 100, 100, Color::WHITE, 2.0).unwrap();

    // Ink along both legs of the path.
    assert_eq!(frame.get_pixel(15, 10), Some([0, 0, 0, 255]));
    assert_eq!(frame.get_pixel(20, 15), Some([0, 0, 0, 255]));
    // The corner sample is covered too.
    assert_eq!(frame.get_pixel(20, 10), Some([0, 0, 0, 255]));

    // White away from the path.
    assert_eq!(frame.get_pixel(15, 17), Some([255, 255, 255, 255]));
    assert_eq!(frame.get_pixel(50, 50), Some([255, 255, 255, 255]));
    assert_eq!(frame.get_pixel(0, 99), Some([255, 255, 255, 255]));

    // 4dp at density 2.0 is ~8px of ink across the horizontal leg.
    let width = dark_pixels_in_column(&frame, 15);
    assert!((7..=9).contains(&width), "path width was {width}px");
}

#[test]
fn test_duplicate_samples_render_like_a_tap() {
    // Drag events can repeat a position; the result is still one clean dot.
    let repeated = vec![stroke(&[(30.0, 30.0), (30.0, 30.0), (30.0, 30.0)], ink(6.0, Color::BLACK))];
    let single = vec![stroke(&[(30.0, 30.0)], ink(6.0, Color::BLACK))];

    let a = rasterize(&repeated, 60, 60, Color::WHITE, 1.0).unwrap();
    let b = rasterize(&single, 60, 60, Color::WHITE, 1.0).unwrap();
    assert!(a.is_identical_to(&b));
}

#[test]
fn test_eraser_stroke_paints_background_over_ink() {
    let eraser = StrokeStyle {
        color: Color::WHITE,
        width_dp: 10.0,
        is_eraser: true,
    };
    let strokes = vec![
        stroke(&[(10.0, 20.0), (40.0, 20.0)], ink(10.0, Color::BLACK)),
        stroke(&[(25.0, 20.0)], eraser),
    ];
    let frame = rasterize(&strokes, 50, 50, Color::WHITE, 1.0).unwrap();

    // The erased spot matches the background, the rest of the line remains.
    assert_eq!(frame.get_pixel(25, 20), Some([255, 255, 255, 255]));
    assert_eq!(frame.get_pixel(12, 20), Some([0, 0, 0, 255]));
    assert_eq!(frame.get_pixel(38, 20), Some([0, 0, 0, 255]));
}

#[test]
fn test_sharp_turn_leaves_no_gap() {
    // A hairpin turn: the disc at the turn sample keeps the joint solid.
    let strokes = vec![stroke(
        &[(10.0, 30.0), (30.0, 10.0), (50.0, 30.0)],
        ink(6.0, Color::BLACK),
    )];
    let frame = rasterize(&strokes, 64, 64, Color::WHITE, 1.0).unwrap();
    assert_eq!(frame.get_pixel(30, 10), Some([0, 0, 0, 255]));
    assert_eq!(frame.get_pixel(30, 9), Some([0, 0, 0, 255]));
}
