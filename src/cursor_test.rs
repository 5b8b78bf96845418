#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn starts_at_origin() {
    let c = CursorController::new();
    assert_eq!(c.displayed(), Point::new(0.0, 0.0));
    assert_eq!(c.target(), Point::new(0.0, 0.0));
}

#[test]
fn set_target_does_not_move_dot() {
    let mut c = CursorController::new();
    c.set_target(Point::new(100.0, 50.0));
    assert_eq!(c.displayed(), Point::new(0.0, 0.0));
}

#[test]
fn tick_covers_twenty_percent_of_remaining_distance() {
    let mut c = CursorController::new();
    c.set_target(Point::new(100.0, 50.0));
    let p = c.tick();
    assert!(approx_eq(p.x, 20.0));
    assert!(approx_eq(p.y, 10.0));
    let p = c.tick();
    assert!(approx_eq(p.x, 36.0));
    assert!(approx_eq(p.y, 18.0));
}

#[test]
fn distance_to_stationary_target_strictly_decreases() {
    let mut c = CursorController::new();
    let target = Point::new(640.0, -320.0);
    c.set_target(target);
    let mut prev = c.displayed().distance_to(target);
    for _ in 0..60 {
        c.tick();
        let d = c.displayed().distance_to(target);
        assert!(d < prev, "distance went from {prev} to {d}");
        prev = d;
    }
}

#[test]
fn converges_to_target() {
    let mut c = CursorController::new();
    let target = Point::new(300.0, 200.0);
    c.set_target(target);
    for _ in 0..200 {
        c.tick();
    }
    assert!(c.displayed().distance_to(target) < 1e-6);
}

#[test]
fn follows_a_moving_target() {
    let mut c = CursorController::new();
    c.set_target(Point::new(100.0, 0.0));
    c.tick();
    c.set_target(Point::new(0.0, 100.0));
    let p = c.tick();
    // From (20, 0) toward (0, 100).
    assert!(approx_eq(p.x, 16.0));
    assert!(approx_eq(p.y, 20.0));
}

#[test]
fn at_target_stays_put() {
    let mut c = CursorController::new();
    c.tick();
    assert_eq!(c.displayed(), Point::new(0.0, 0.0));
}

#[test]
fn transform_uses_translate3d() {
    let mut c = CursorController::new();
    c.set_target(Point::new(50.0, 25.0));
    c.tick();
    assert_eq!(c.transform(), "translate3d(10px, 5px, 0)");
}

#[test]
fn glow_position_is_raw_pointer() {
    let (left, top) = glow_position(Point::new(12.5, 300.0));
    assert_eq!(left, "12.5px");
    assert_eq!(top, "300px");
}

#[test]
fn first_glow_write_is_current_target() {
    let mut c = CursorController::new();
    assert_eq!(c.take_glow(), Some(Point::new(0.0, 0.0)));
    c.set_target(Point::new(40.0, 80.0));
    assert_eq!(c.take_glow(), Some(Point::new(40.0, 80.0)));
}

#[test]
fn glow_is_not_rewritten_while_pointer_is_still() {
    let mut c = CursorController::new();
    c.set_target(Point::new(40.0, 80.0));
    assert!(c.take_glow().is_some());
    c.tick();
    c.set_target(Point::new(40.0, 80.0));
    assert_eq!(c.take_glow(), None);
}

#[test]
fn glow_skips_smoothing() {
    let mut c = CursorController::new();
    c.set_target(Point::new(100.0, 50.0));
    c.tick();
    assert_eq!(c.take_glow(), Some(Point::new(100.0, 50.0)));
    assert!(approx_eq(c.displayed().x, 20.0));
}
