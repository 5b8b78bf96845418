//! Magnetic hover: elements lean toward the pointer while it is over them.

#[cfg(test)]
#[path = "magnetic_test.rs"]
mod magnetic_test;

use crate::consts::{MAGNETIC_DAMPING, MAGNETIC_SCALE};
use crate::geom::{Point, Rect};

/// Transform state for a magnetic element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MagneticTransform {
    /// Pointer inside: translate by the damped offset and scale up slightly.
    Pull { dx: f64, dy: f64 },
    /// Pointer left: identity transform.
    Rest,
}

impl MagneticTransform {
    /// Transform for a pointer move over an element with the given bounds.
    #[must_use]
    pub fn on_move(bounds: Rect, pointer: Point) -> Self {
        let center = bounds.center();
        Self::Pull {
            dx: (pointer.x - center.x) * MAGNETIC_DAMPING,
            dy: (pointer.y - center.y) * MAGNETIC_DAMPING,
        }
    }

    #[must_use]
    pub fn on_leave() -> Self {
        Self::Rest
    }

    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Pull { dx, dy } => format!("translate3d({dx}px, {dy}px, 0) scale({MAGNETIC_SCALE})"),
            Self::Rest => "translate3d(0, 0, 0) scale(1)".to_owned(),
        }
    }
}
