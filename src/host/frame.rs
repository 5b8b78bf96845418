//! Per-frame loop on top of `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::FxError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Call `tick` with the frame timestamp on every animation frame, forever.
///
/// The callback re-requests itself, so the closure holds a handle to its own
/// slot and is never freed. Loops live as long as the page.
pub fn run_every_frame(window: &Window, mut tick: impl FnMut(f64) + 'static) -> Result<(), FxError> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let slot_for_cb = Rc::clone(&slot);
    let window_for_cb = window.clone();

    let cb = Closure::wrap(Box::new(move |ts: f64| {
        tick(ts);
        if let Some(next) = slot_for_cb.borrow().as_ref() {
            if let Err(err) = window_for_cb.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("frame loop stopped: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    *slot.borrow_mut() = Some(cb);
    Ok(())
}
