//! Shared numeric constants for the page effects.

// ── Cursor ──────────────────────────────────────────────────────

/// Fraction of the remaining distance the cursor dot covers per frame.
pub const CURSOR_LERP: f64 = 0.2;

// ── Starfield ───────────────────────────────────────────────────

/// Number of stars in the pool, independent of viewport size.
pub const STAR_COUNT: usize = 400;

/// Depth floor for a canvas with no width, so stars never sit at depth 0.
pub const MIN_FIELD_DEPTH: f64 = 1.0;

/// Base radius of a star at depth equal to the canvas width.
pub const STAR_SIZE: f64 = 1.5;

/// Depth decrement per frame with the pointer at the top of the canvas.
pub const STAR_SPEED_MIN: f64 = 0.5;

/// Depth decrement per frame with the pointer at the bottom of the canvas.
pub const STAR_SPEED_MAX: f64 = 2.5;

/// Quiet period after the last window resize before the pool is reseeded.
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

/// Translucent fill painted over the previous frame to leave motion trails.
pub const TRAIL_FILL: &str = "rgba(15, 12, 41, 0.2)";

// ── Magnetic hover ──────────────────────────────────────────────

/// Fraction of the center-to-pointer vector applied as translation.
pub const MAGNETIC_DAMPING: f64 = 0.3;

/// Scale applied while an element is being pulled.
pub const MAGNETIC_SCALE: f64 = 1.05;

// ── Title reveal ────────────────────────────────────────────────

/// Delay between consecutive title characters.
pub const TITLE_REVEAL_STEP_MS: u32 = 100;

/// Non-breaking space substituted for spaces so empty spans keep their width.
pub const NBSP: char = '\u{00A0}';

// ── View transition ─────────────────────────────────────────────

/// Time between starting the landing fade-out and swapping views.
pub const VIEW_SWAP_DELAY_MS: u32 = 1000;

/// Visible fraction of a photo card that triggers its reveal.
pub const CARD_REVEAL_THRESHOLD: f64 = 0.1;

/// Transition applied to the landing view when it starts fading out.
pub const LANDING_FADE_TRANSITION: &str = "opacity 1s cubic-bezier(0.77, 0, 0.175, 1)";

/// Transition applied to photo cards before they are observed.
pub const CARD_REVEAL_TRANSITION: &str = "all 1s cubic-bezier(0.23, 1, 0.32, 1)";

/// Vertical offset of a photo card before it is revealed.
pub const CARD_HIDDEN_OFFSET_PX: f64 = 50.0;
