//! Cursor dot and glow.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::HtmlElement;

use super::dom::{Dom, set_style};
use super::frame::run_every_frame;
use crate::config::Selectors;
use crate::cursor::{CursorController, glow_position};
use crate::error::FxError;
use crate::geom::Point;

pub fn bind(dom: &Dom, selectors: &Selectors, pointer: Rc<Cell<Point>>) -> Result<(), FxError> {
    let dot: HtmlElement = dom.element(&selectors.cursor)?;
    let glow: HtmlElement = dom.element(&selectors.glow)?;

    let mut controller = CursorController::new();
    run_every_frame(&dom.window, move |_| {
        controller.set_target(pointer.get());
        if let Some(p) = controller.take_glow() {
            let (left, top) = glow_position(p);
            set_style(&glow, "left", &left);
            set_style(&glow, "top", &top);
        }
        controller.tick();
        set_style(&dot, "transform", &controller.transform());
    })
}
