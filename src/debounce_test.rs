use super::*;
use crate::clock::ManualClock;

fn setup() -> (Rc<ManualClock>, SwapDebouncer) {
    let clock = Rc::new(ManualClock::new());
    let debouncer = SwapDebouncer::new(clock.clone(), &TrayConfig::default());
    (clock, debouncer)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn same_index_is_rejected_without_side_effects() {
    let (clock, d) = setup();
    assert_eq!(d.admit(2, 2), Err(SwapRejected::SameIndex));
    assert!(d.last_swap().is_none());
    assert!(!d.is_animating());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn first_swap_is_admitted_and_locks() {
    let (clock, d) = setup();
    assert!(d.admit(2, 0).is_ok());
    assert!(d.is_animating());
    assert_eq!(d.last_swap(), Some(clock.now()));
    assert_eq!(clock.pending(), 1);
}

#[test]
fn second_swap_inside_window_is_debounced() {
    let (clock, d) = setup();
    d.admit(2, 1).unwrap();
    clock.advance(ms(100));
    assert_eq!(d.admit(1, 0), Err(SwapRejected::Debounced { since_last: ms(100), window: ms(150) }));
}

#[test]
fn swap_after_window_but_while_animating_is_rejected() {
    let clock = Rc::new(ManualClock::new());
    let d = SwapDebouncer::new(clock.clone(), &TrayConfig { swap_visual_ms: 400, ..Default::default() });
    d.admit(2, 1).unwrap();
    clock.advance(ms(200));
    assert_eq!(d.admit(1, 0), Err(SwapRejected::Animating));

    clock.advance(ms(200));
    assert!(!d.is_animating());
    assert!(d.admit(1, 0).is_ok());
}

#[test]
fn lock_clears_after_swap_visual_duration() {
    let (clock, d) = setup();
    d.admit(3, 4).unwrap();
    clock.advance(ms(199));
    assert!(d.is_animating());
    clock.advance(ms(1));
    assert!(!d.is_animating());
}

#[test]
fn swaps_admitted_once_window_and_lock_have_passed() {
    let (clock, d) = setup();
    d.admit(0, 1).unwrap();
    clock.advance(ms(150));
    assert_eq!(d.admit(1, 2), Err(SwapRejected::Animating));
    clock.advance(ms(50));
    assert!(d.admit(1, 2).is_ok());
}

#[test]
fn timer_after_drop_is_a_no_op() {
    let (clock, d) = setup();
    d.admit(0, 1).unwrap();
    drop(d);
    clock.advance(ms(500));
    assert_eq!(clock.pending(), 0);
}

#[test]
fn reset_clears_state_and_disarms_old_timer() {
    let (clock, d) = setup();
    d.admit(0, 1).unwrap();
    clock.advance(ms(50));
    d.reset();
    assert!(!d.is_animating());
    assert!(d.last_swap().is_none());

    // A fresh swap right after the reset is admitted and must survive the
    // stale timer armed before the reset.
    d.admit(1, 2).unwrap();
    clock.advance(ms(150));
    assert!(d.is_animating());
    clock.advance(ms(50));
    assert!(!d.is_animating());
}

#[test]
fn rejection_messages_are_readable() {
    assert_eq!(SwapRejected::Animating.to_string(), "previous swap is still animating");
    assert_eq!(SwapRejected::SameIndex.to_string(), "swap source and target are the same slot");
}
