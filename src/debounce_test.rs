use super::*;
use crate::clock::ManualClock;
use crate::consts::RESIZE_DEBOUNCE_MS;

fn resize_debounce() -> Debounce {
    Debounce::new(RESIZE_DEBOUNCE_MS)
}

#[test]
fn new_debounce_is_idle() {
    let mut d = resize_debounce();
    assert!(!d.is_pending());
    assert!(!d.fire(1_000_000.0));
}

#[test]
fn negative_delay_is_treated_as_zero() {
    let mut d = Debounce::new(-50.0);
    d.trigger(10.0);
    assert!(d.fire(10.0));
}

#[test]
fn does_not_fire_before_delay() {
    let mut d = resize_debounce();
    d.trigger(0.0);
    assert!(!d.fire(99.9));
    assert!(d.is_pending());
}

#[test]
fn fires_exactly_at_delay() {
    let mut d = resize_debounce();
    d.trigger(0.0);
    assert!(d.fire(100.0));
}

#[test]
fn fires_only_once_per_burst() {
    let mut d = resize_debounce();
    d.trigger(0.0);
    assert!(d.fire(150.0));
    assert!(!d.fire(200.0));
    assert!(!d.is_pending());
}

#[test]
fn retrigger_pushes_deadline_back() {
    let clock = ManualClock::new(0.0);
    let mut d = resize_debounce();

    // A burst of resize events 40ms apart never lets the timer expire.
    for _ in 0..5 {
        d.trigger_at(&clock);
        clock.advance(40.0);
        assert!(!d.fire_at(&clock));
    }

    // Quiet for the full delay after the last event.
    clock.advance(60.0);
    assert!(d.fire_at(&clock));
}

#[test]
fn manual_clock_set_and_advance() {
    let clock = ManualClock::new(5.0);
    clock.advance(10.0);
    assert!((clock.now_ms() - 15.0).abs() < f64::EPSILON);
    clock.set(1.0);
    assert!((clock.now_ms() - 1.0).abs() < f64::EPSILON);
}
