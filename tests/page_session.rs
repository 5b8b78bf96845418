//! Drives the controllers the way the browser bridge does, with a manual
//! clock standing in for animation frames.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use celebration::clock::{Clock, ManualClock};
use celebration::config::FxConfig;
use celebration::consts::STAR_COUNT;
use celebration::cursor::CursorController;
use celebration::debounce::Debounce;
use celebration::geom::Point;
use celebration::reveal::RevealTracker;
use celebration::starfield::Starfield;
use celebration::toggle::MessageToggle;
use celebration::transition::{Action, ViewTransition};

const FRAME_MS: f64 = 16.0;

struct Session {
    clock: ManualClock,
    pointer: Point,
    viewport: (f64, f64),
    cursor: CursorController,
    field: Starfield<SmallRng>,
    resize: Debounce,
    reseeds: usize,
}

impl Session {
    fn new(config: &FxConfig) -> Self {
        let viewport = (1280.0, 720.0);
        Self {
            clock: ManualClock::new(0.0),
            pointer: Point::default(),
            viewport,
            cursor: CursorController::new(),
            field: Starfield::new(viewport.0, viewport.1, SmallRng::seed_from_u64(42)),
            resize: Debounce::new(config.timing.resize_debounce_ms),
            reseeds: 0,
        }
    }

    fn resize_window(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
        self.resize.trigger_at(&self.clock);
    }

    fn frame(&mut self) {
        self.clock.advance(FRAME_MS);
        self.cursor.set_target(self.pointer);
        self.cursor.tick();
        if self.resize.fire_at(&self.clock) {
            self.field.resize(self.viewport.0, self.viewport.1);
            self.reseeds += 1;
        }
        self.field.tick(self.pointer.y);
    }
}

#[test]
fn cursor_settles_on_pointer_within_a_second() {
    let mut s = Session::new(&FxConfig::default());
    s.pointer = Point::new(900.0, 400.0);
    for _ in 0..60 {
        s.frame();
    }
    assert!(s.cursor.displayed().distance_to(s.pointer) < 0.1);
}

#[test]
fn drag_resize_reseeds_once_after_quiet_period() {
    let mut s = Session::new(&FxConfig::default());

    // Resize events arrive every frame while the user drags the window edge.
    for step in 0..20_u32 {
        s.resize_window(1280.0 - f64::from(step) * 10.0, 720.0);
        s.frame();
    }
    assert_eq!(s.reseeds, 0);

    // Seven frames (112ms) of quiet lets the debounce fire.
    for _ in 0..7 {
        s.frame();
    }
    assert_eq!(s.reseeds, 1);
    assert_eq!(s.field.stars().len(), STAR_COUNT);
    assert_eq!(s.field.size(), (1090.0, 720.0));

    for _ in 0..30 {
        s.frame();
    }
    assert_eq!(s.reseeds, 1);
    assert!(s.clock.now_ms() > 0.0);
}

#[test]
fn pointer_low_on_screen_speeds_up_stars() {
    let mut s = Session::new(&FxConfig::default());
    s.pointer = Point::new(0.0, 0.0);
    let slow = s.field.tick(s.pointer.y);
    s.pointer = Point::new(0.0, 720.0);
    let fast = s.field.tick(s.pointer.y);
    assert!(fast > slow);
    assert!((slow - 0.5).abs() < 1e-9);
    assert!((fast - 2.5).abs() < 1e-9);
}

#[test]
fn start_button_mashing_lands_in_gallery_and_reveals_cards() {
    let config = FxConfig::default();
    let mut transition = ViewTransition::new(config.confetti.clone(), &config.timing);
    let mut applied = Vec::new();
    let mut pending_swaps = Vec::new();
    let mut confetti_bursts = 0;
    let mut observe_threshold = None;

    for _ in 0..5 {
        for action in transition.trigger() {
            match &action {
                Action::Confetti(_) => confetti_bursts += 1,
                Action::ScheduleSwap { delay_ms } => pending_swaps.push(*delay_ms),
                _ => {}
            }
            applied.push(action);
        }
    }
    assert_eq!(confetti_bursts, 1);
    assert_eq!(pending_swaps, [1000]);

    for _ in pending_swaps {
        for action in transition.finish_swap() {
            if let Action::ObserveCards { threshold } = action {
                observe_threshold = Some(threshold);
            }
            applied.push(action);
        }
    }
    assert!(transition.is_gallery());
    let view_changes: Vec<&Action> = applied
        .iter()
        .filter(|a| matches!(a, Action::FadeOutLanding | Action::HideLanding | Action::ShowGallery))
        .collect();
    assert_eq!(view_changes, [&Action::FadeOutLanding, &Action::HideLanding, &Action::ShowGallery]);
    assert_eq!(observe_threshold, Some(0.1));

    // Scrolling: cards enter, leave and re-enter the viewport.
    let mut cards = RevealTracker::new(3);
    let reveals: Vec<bool> = [(0, true), (1, false), (1, true), (0, true), (2, true), (1, true)]
        .into_iter()
        .map(|(index, visible)| cards.on_intersection(index, visible))
        .collect();
    assert_eq!(reveals, [true, false, true, false, true, false]);
    assert!(cards.is_complete());
}

#[test]
fn message_button_alternates() {
    let mut toggle = MessageToggle::new();
    let labels: Vec<&str> = (0..3).map(|_| toggle.click().label).collect();
    assert_eq!(labels, ["Hide Message 💌", "View My Message 💌", "Hide Message 💌"]);
    assert!(toggle.is_visible());
}
