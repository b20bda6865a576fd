#![allow(clippy::float_cmp)]

use super::*;

const W: f64 = 50.0;
const H: f64 = 50.0;

fn container() -> Rect {
    Rect::new(100.0, 200.0, 300.0, 60.0)
}

// --- Point ---

#[test]
fn point_distance() {
    assert_eq!(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
}

// --- Rect ---

#[test]
fn rect_edges() {
    let r = container();
    assert_eq!(r.left(), 100.0);
    assert_eq!(r.right(), 400.0);
    assert_eq!(r.top(), 200.0);
    assert_eq!(r.bottom(), 260.0);
}

#[test]
fn rect_dilate_grows_every_side() {
    let r = container().dilate(25.0, 10.0);
    assert_eq!(r, Rect::new(75.0, 190.0, 350.0, 80.0));
}

#[test]
fn rect_to_local() {
    assert_eq!(container().to_local(Point::new(130.0, 215.0)), Point::new(30.0, 15.0));
}

// --- is_outside ---

#[test]
fn pointer_in_center_is_inside() {
    assert!(!is_outside(Point::new(250.0, 230.0), container(), W, H));
}

#[test]
fn left_edge_boundary() {
    let r = container();
    assert!(is_outside(Point::new(r.left() - W / 2.0 - 1.0, 230.0), r, W, H));
    assert!(!is_outside(Point::new(r.left() - W / 2.0 + 1.0, 230.0), r, W, H));
}

#[test]
fn right_edge_boundary() {
    let r = container();
    assert!(is_outside(Point::new(r.right() + W / 2.0 + 1.0, 230.0), r, W, H));
    assert!(!is_outside(Point::new(r.right() + W / 2.0 - 1.0, 230.0), r, W, H));
}

#[test]
fn top_edge_boundary() {
    let r = container();
    assert!(is_outside(Point::new(250.0, r.top() - H / 2.0 - 1.0), r, W, H));
    assert!(!is_outside(Point::new(250.0, r.top() - H / 2.0 + 1.0), r, W, H));
}

#[test]
fn bottom_edge_boundary() {
    let r = container();
    assert!(is_outside(Point::new(250.0, r.bottom() + H / 2.0 + 1.0), r, W, H));
    assert!(!is_outside(Point::new(250.0, r.bottom() + H / 2.0 - 1.0), r, W, H));
}

#[test]
fn exactly_on_dilated_edge_is_inside() {
    let r = container();
    assert!(!is_outside(Point::new(r.left() - W / 2.0, r.top() - H / 2.0), r, W, H));
}

#[test]
fn unknown_container_is_never_outside() {
    assert!(!is_outside_opt(Point::new(-10_000.0, -10_000.0), None, W, H));
    assert!(is_outside_opt(Point::new(-10_000.0, -10_000.0), Some(container()), W, H));
}

// --- slots ---

#[test]
fn slot_centers_follow_stride() {
    assert_eq!(slot_center_x(0, 50.0, 8.0), 29.0);
    assert_eq!(slot_center_x(1, 50.0, 8.0), 87.0);
    assert_eq!(slot_center_x(4, 50.0, 8.0), 261.0);
}

#[test]
fn slot_at_maps_positions_to_indices() {
    assert_eq!(slot_at(10.0, 5, 50.0, 8.0), Some(0));
    assert_eq!(slot_at(58.0, 5, 50.0, 8.0), Some(1));
    assert_eq!(slot_at(200.0, 5, 50.0, 8.0), Some(3));
}

#[test]
fn slot_at_clamps_to_row() {
    assert_eq!(slot_at(-40.0, 5, 50.0, 8.0), Some(0));
    assert_eq!(slot_at(10_000.0, 5, 50.0, 8.0), Some(4));
}

#[test]
fn slot_at_empty_row_is_none() {
    assert_eq!(slot_at(10.0, 0, 50.0, 8.0), None);
    assert_eq!(slot_at(f64::NAN, 3, 50.0, 8.0), None);
}

#[test]
fn slot_center_round_trips_through_slot_at() {
    for i in 0..6 {
        assert_eq!(slot_at(slot_center_x(i, 50.0, 8.0), 6, 50.0, 8.0), Some(i));
    }
}
