//! Rendering: draws the starfield to a 2D context.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. It reads the star pool and produces
//! pixels; it does not advance the simulation.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The frame loop in [`crate::host`] logs the result and keeps running.

use std::f64::consts::TAU;

use rand::Rng;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::TRAIL_FILL;
use crate::starfield::{ProjectedStar, Starfield};

/// Draw one frame: trail wash, then every star in pool order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw_starfield<R: Rng>(ctx: &CanvasRenderingContext2d, field: &Starfield<R>) -> Result<(), JsValue> {
    let (width, height) = field.size();

    // Translucent wash instead of a clear leaves fading trails behind stars.
    ctx.set_fill_style_str(TRAIL_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);

    for star in field.projected() {
        draw_star(ctx, &star)?;
    }
    Ok(())
}

fn draw_star(ctx: &CanvasRenderingContext2d, star: &ProjectedStar) -> Result<(), JsValue> {
    if star.radius <= 0.0 {
        return Ok(());
    }
    ctx.set_fill_style_str(&star.fill());
    ctx.begin_path();
    ctx.arc(star.center.x, star.center.y, star.radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}
