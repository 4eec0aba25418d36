#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Point
// =============================================================

#[test]
fn point_sub_is_componentwise() {
    let p = Point::new(10.0, 4.0).sub(Point::new(3.0, 6.0));
    assert_eq!(p, Point::new(7.0, -2.0));
}

#[test]
fn point_length_is_euclidean() {
    assert_eq!(Point::new(3.0, 4.0).length(), 5.0);
    assert_eq!(Point::new(0.0, 0.0).length(), 0.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::new(0.0, 0.0));
}

// =============================================================
// Size
// =============================================================

#[test]
fn size_square_sets_both_sides() {
    let s = Size::square(42.0);
    assert_eq!(s.width, 42.0);
    assert_eq!(s.height, 42.0);
}

// =============================================================
// BoardRect
// =============================================================

#[test]
fn board_rect_to_local_subtracts_origin() {
    let rect = BoardRect::new(100.0, 50.0, 800.0, 580.0);
    assert_eq!(rect.to_local(Point::new(800.0, 100.0)), Point::new(700.0, 50.0));
}

#[test]
fn board_rect_to_local_can_go_negative() {
    let rect = BoardRect::new(100.0, 50.0, 800.0, 580.0);
    assert_eq!(rect.to_local(Point::new(40.0, 0.0)), Point::new(-60.0, -50.0));
}

// =============================================================
// clamp_to_extent
// =============================================================

#[test]
fn clamp_keeps_values_inside() {
    assert_eq!(clamp_to_extent(30.0, 700.0), 30.0);
}

#[test]
fn clamp_pins_negative_to_zero() {
    assert_eq!(clamp_to_extent(-50.0, 700.0), 0.0);
}

#[test]
fn clamp_pins_overflow_to_upper() {
    assert_eq!(clamp_to_extent(750.0, 700.0), 700.0);
}

#[test]
fn clamp_lower_bound_wins_when_upper_is_negative() {
    assert_eq!(clamp_to_extent(10.0, -20.0), 0.0);
}

// =============================================================
// angle_degrees
// =============================================================

#[test]
fn angle_straight_down_is_ninety() {
    let a = angle_degrees(Point::new(100.0, 100.0), Point::new(100.0, 150.0));
    assert!((a - 90.0).abs() < 1e-9);
}

#[test]
fn angle_right_is_zero() {
    let a = angle_degrees(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!(a.abs() < 1e-9);
}

#[test]
fn angle_left_is_one_eighty() {
    let a = angle_degrees(Point::new(0.0, 0.0), Point::new(-10.0, 0.0));
    assert!((a - 180.0).abs() < 1e-9);
}

#[test]
fn angle_up_is_minus_ninety() {
    let a = angle_degrees(Point::new(50.0, 50.0), Point::new(50.0, 0.0));
    assert!((a + 90.0).abs() < 1e-9);
}
