//! Starfield canvas: frame loop, resize debounce, and drawing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom::{Dom, PerformanceClock, listen_event};
use super::frame::run_every_frame;
use crate::config::FxConfig;
use crate::debounce::Debounce;
use crate::error::FxError;
use crate::geom::Point;
use crate::render;
use crate::starfield::Starfield;

pub fn bind(dom: &Dom, config: &FxConfig, pointer: Rc<Cell<Point>>) -> Result<(), FxError> {
    let id = &config.selectors.canvas;
    let canvas: HtmlCanvasElement = dom.element(id)?;
    let ctx = context_2d(&canvas, id)?;

    let (width, height) = fit_canvas(&canvas, dom.viewport_size());
    let rng = SmallRng::seed_from_u64(js_sys::Math::random().to_bits());
    let mut field = Starfield::new(width, height, rng);

    let resize = Rc::new(RefCell::new(Debounce::new(config.timing.resize_debounce_ms)));
    let clock = PerformanceClock::new(&dom.window);
    {
        let resize = Rc::clone(&resize);
        let clock = clock.clone();
        listen_event(&dom.window, "resize", move |_| resize.borrow_mut().trigger_at(&clock))?;
    }

    let frame_dom = dom.clone();
    run_every_frame(&dom.window, move |_| {
        if resize.borrow_mut().fire_at(&clock) {
            let (width, height) = fit_canvas(&canvas, frame_dom.viewport_size());
            field.resize(width, height);
            log::debug!("starfield reseeded for {width}x{height}");
        }
        field.tick(pointer.get().y);
        if let Err(err) = render::draw_starfield(&ctx, &field) {
            log::warn!("starfield frame failed: {err:?}");
        }
    })
}

fn context_2d(canvas: &HtmlCanvasElement, id: &str) -> Result<CanvasRenderingContext2d, FxError> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| FxError::NoContext { id: id.to_owned() })?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FxError::NoContext { id: id.to_owned() })
}

/// Size the backing store to the viewport; returns the size actually applied.
fn fit_canvas(canvas: &HtmlCanvasElement, (width, height): (f64, f64)) -> (f64, f64) {
    let width = width.max(0.0).round();
    let height = height.max(0.0).round();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}
