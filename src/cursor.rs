//! Custom cursor: a dot that eases toward the pointer and a glow that
//! follows it exactly.
//!
//! The pointer position is the target. Each animation frame moves the
//! displayed dot a fixed fraction of the remaining distance, which gives an
//! exponential ease-out that never overshoots.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use crate::consts::CURSOR_LERP;
use crate::geom::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorController {
    target: Point,
    displayed: Point,
    glow: Option<Point>,
    lerp: f64,
}

impl Default for CursorController {
    fn default() -> Self {
        Self { target: Point::default(), displayed: Point::default(), glow: None, lerp: CURSOR_LERP }
    }
}

impl CursorController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest raw pointer position.
    pub fn set_target(&mut self, pointer: Point) {
        self.target = pointer;
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    #[must_use]
    pub fn displayed(&self) -> Point {
        self.displayed
    }

    /// Advance the dot one frame toward the target.
    pub fn tick(&mut self) -> Point {
        self.displayed.x += (self.target.x - self.displayed.x) * self.lerp;
        self.displayed.y += (self.target.y - self.displayed.y) * self.lerp;
        self.displayed
    }

    /// Pointer position for the glow if it moved since the last call.
    ///
    /// The glow has no smoothing, so it only needs a write when the pointer
    /// changed. The first call always yields the current target.
    pub fn take_glow(&mut self) -> Option<Point> {
        if self.glow == Some(self.target) {
            return None;
        }
        self.glow = Some(self.target);
        self.glow
    }

    /// CSS transform placing the dot at its displayed position.
    #[must_use]
    pub fn transform(&self) -> String {
        translate3d(self.displayed)
    }
}

/// `translate3d` in px, composited on the GPU rather than triggering layout.
#[must_use]
pub fn translate3d(p: Point) -> String {
    format!("translate3d({}px, {}px, 0)", p.x, p.y)
}

/// CSS `left`/`top` values for the glow, which tracks the pointer exactly.
#[must_use]
pub fn glow_position(pointer: Point) -> (String, String) {
    (format!("{}px", pointer.x), format!("{}px", pointer.y))
}
