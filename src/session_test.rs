use super::*;

fn cfg() -> TrayConfig {
    TrayConfig::default()
}

fn tray_box() -> Rect {
    Rect::new(100.0, 100.0, 282.0, 50.0)
}

#[test]
fn phase_defaults_to_idle() {
    assert_eq!(DragPhase::default(), DragPhase::Idle);
}

#[test]
fn start_sets_indices_and_clears_pointer() {
    let s = DragSession::start(2);
    assert_eq!(s.origin_index(), 2);
    assert_eq!(s.dragged_index(), 2);
    assert!(s.pointer().is_none());
    assert!(!s.is_outside());
}

#[test]
fn first_move_is_always_recorded() {
    let mut s = DragSession::start(0);
    let update = s.update_pointer(Point::new(130.0, 120.0), Some(tray_box()), &cfg());
    assert!(update.moved);
    assert!(!update.outside_changed);
    assert_eq!(s.pointer(), Some(Point::new(30.0, 20.0)));
}

#[test]
fn jitter_below_threshold_is_ignored() {
    let mut s = DragSession::start(0);
    s.update_pointer(Point::new(130.0, 120.0), Some(tray_box()), &cfg());
    let update = s.update_pointer(Point::new(133.0, 123.0), Some(tray_box()), &cfg());
    assert_eq!(update, PointerUpdate::default());
    assert_eq!(s.pointer(), Some(Point::new(30.0, 20.0)));
}

#[test]
fn jitter_is_measured_from_last_recorded_position() {
    let mut s = DragSession::start(0);
    s.update_pointer(Point::new(130.0, 120.0), Some(tray_box()), &cfg());
    s.update_pointer(Point::new(133.0, 120.0), Some(tray_box()), &cfg());
    let update = s.update_pointer(Point::new(136.0, 120.0), Some(tray_box()), &cfg());
    assert!(update.moved);
    assert_eq!(s.pointer(), Some(Point::new(36.0, 20.0)));
}

#[test]
fn leaving_the_tray_flips_outside_once() {
    let mut s = DragSession::start(1);
    s.update_pointer(Point::new(130.0, 120.0), Some(tray_box()), &cfg());

    let update = s.update_pointer(Point::new(130.0, 20.0), Some(tray_box()), &cfg());
    assert!(update.outside_changed);
    assert!(s.is_outside());

    let update = s.update_pointer(Point::new(140.0, 10.0), Some(tray_box()), &cfg());
    assert!(update.moved);
    assert!(!update.outside_changed);
    assert!(s.is_outside());

    let update = s.update_pointer(Point::new(140.0, 120.0), Some(tray_box()), &cfg());
    assert!(update.outside_changed);
    assert!(!s.is_outside());
}

#[test]
fn unknown_container_keeps_inside_and_local_pointer() {
    let mut s = DragSession::start(0);
    s.update_pointer(Point::new(130.0, 120.0), Some(tray_box()), &cfg());
    let update = s.update_pointer(Point::new(-500.0, -500.0), None, &cfg());
    assert!(update.moved);
    assert!(!s.is_outside());
    assert_eq!(s.pointer(), Some(Point::new(30.0, 20.0)));
}

#[test]
fn pointer_seen_before_layout_does_not_swallow_later_moves() {
    let mut s = DragSession::start(2);
    s.update_pointer(Point::new(100.0, 20.0), None, &cfg());
    assert!(s.pointer().is_none());

    let rect = Rect::new(0.0, 0.0, 282.0, 50.0);
    let update = s.update_pointer(Point::new(103.0, 20.0), Some(rect), &cfg());
    assert!(update.moved);
    assert_eq!(s.pointer(), Some(Point::new(103.0, 20.0)));
}

#[test]
fn track_move_follows_the_dragged_item() {
    let mut s = DragSession::start(3);
    s.track_move(3, 1);
    assert_eq!(s.dragged_index(), 1);
    assert_eq!(s.origin_index(), 3);
}

#[test]
fn track_move_shifts_when_another_item_crosses() {
    let mut s = DragSession::start(2);
    s.track_move(0, 4);
    assert_eq!(s.dragged_index(), 1);

    s.track_move(4, 0);
    assert_eq!(s.dragged_index(), 2);
}

#[test]
fn track_move_outside_the_span_leaves_index_alone() {
    let mut s = DragSession::start(1);
    s.track_move(2, 4);
    assert_eq!(s.dragged_index(), 1);
    s.track_move(3, 3);
    assert_eq!(s.dragged_index(), 1);
}
