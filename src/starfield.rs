//! Parallax starfield: a fixed pool of stars flying toward the viewer.
//!
//! Stars live in a box `width x height x width`. Each frame every star's
//! depth shrinks by a speed taken from the pointer's vertical position; a
//! star that reaches the viewer respawns at the back with a new planar
//! position. Drawing projects each star with a perspective divide, so
//! nearer stars spread out from the center, grow, and brighten.
//!
//! The pool size is constant, so density stays roughly the same across
//! viewport sizes. Reseeding happens wholesale on resize.

#[cfg(test)]
#[path = "starfield_test.rs"]
mod starfield_test;

use rand::Rng;

use crate::consts::{MIN_FIELD_DEPTH, STAR_COUNT, STAR_SIZE, STAR_SPEED_MAX, STAR_SPEED_MIN};
use crate::geom::Point;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Distance from the viewer, in `(0, max_depth]` after every update.
    /// `max_depth` is the canvas width, or 1 for a zero-width canvas.
    pub z: f64,
    pub size: f64,
}

/// A star projected onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedStar {
    pub center: Point,
    pub radius: f64,
    pub opacity: f64,
}

impl ProjectedStar {
    /// Fill style for this star.
    #[must_use]
    pub fn fill(&self) -> String {
        format!("rgba(255, 255, 255, {})", self.opacity)
    }
}

pub struct Starfield<R: Rng> {
    stars: Vec<Star>,
    width: f64,
    height: f64,
    rng: R,
}

impl<R: Rng> Starfield<R> {
    /// Create a full pool sized to the given canvas.
    pub fn new(width: f64, height: f64, rng: R) -> Self {
        let mut field = Self { stars: Vec::with_capacity(STAR_COUNT), width, height, rng };
        field.reseed();
        field
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Adopt a new canvas size and rebuild the whole pool for it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.reseed();
    }

    fn reseed(&mut self) {
        self.stars.clear();
        for _ in 0..STAR_COUNT {
            let star = self.spawn();
            self.stars.push(star);
        }
    }

    /// Depth a respawned star starts at.
    #[must_use]
    pub fn max_depth(&self) -> f64 {
        self.width.max(MIN_FIELD_DEPTH)
    }

    fn spawn(&mut self) -> Star {
        // `random::<f64>()` is in [0, 1); flipping it keeps depth off zero.
        let z = self.max_depth() * (1.0 - self.rng.random::<f64>());
        Star {
            x: self.rng.random::<f64>() * self.width,
            y: self.rng.random::<f64>() * self.height,
            z,
            size: STAR_SIZE,
        }
    }

    /// Advance every star one frame. Returns the speed for this frame.
    ///
    /// A zero-width canvas has nothing to fly through; stars hold still
    /// until the next resize gives the field a size.
    pub fn tick(&mut self, pointer_y: f64) -> f64 {
        let speed = speed_for(pointer_y, self.height);
        if self.width <= 0.0 {
            return speed;
        }
        for i in 0..self.stars.len() {
            self.stars[i].z -= speed;
            if self.stars[i].z <= 0.0 {
                let fresh = self.spawn();
                self.stars[i] = Star { z: self.max_depth(), ..fresh };
            }
        }
        speed
    }

    /// Project one star onto the canvas.
    #[must_use]
    pub fn project(&self, star: &Star) -> ProjectedStar {
        project(star, self.width, self.height)
    }

    /// Project every star in pool order.
    pub fn projected(&self) -> impl Iterator<Item = ProjectedStar> + '_ {
        self.stars.iter().map(|s| self.project(s))
    }
}

/// `(pointer_y / height) * 2 + 0.5`, kept inside the speed range.
#[must_use]
pub fn speed_for(pointer_y: f64, height: f64) -> f64 {
    if height <= 0.0 || !pointer_y.is_finite() {
        return STAR_SPEED_MIN;
    }
    let span = STAR_SPEED_MAX - STAR_SPEED_MIN;
    (pointer_y / height * span + STAR_SPEED_MIN).clamp(STAR_SPEED_MIN, STAR_SPEED_MAX)
}

/// Perspective divide with the focal length equal to the canvas width.
#[must_use]
pub fn project(star: &Star, width: f64, height: f64) -> ProjectedStar {
    if width <= 0.0 || star.z <= 0.0 {
        // Zero-sized canvas: nothing visible to draw.
        return ProjectedStar { center: Point { x: star.x, y: star.y }, radius: 0.0, opacity: 0.0 };
    }
    let k = width / star.z;
    let cx = width / 2.0;
    let cy = height / 2.0;
    ProjectedStar {
        center: Point { x: (star.x - cx) * k + cx, y: (star.y - cy) * k + cy },
        radius: k * star.size,
        opacity: 1.0 - star.z / width,
    }
}
