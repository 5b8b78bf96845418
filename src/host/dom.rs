//! DOM lookup, event and style helpers shared by the binders.
//!
//! Style and class writes are fire-and-forget from the caller's point of
//! view: a failing write is logged at `warn` and the effect carries on.

use js_sys::Date;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, MouseEvent, Performance, Window};

use crate::clock::Clock;
use crate::error::FxError;
use crate::geom::{Point, Rect};

/// Handles to the global window and its document.
#[derive(Clone)]
pub struct Dom {
    pub window: Window,
    pub document: Document,
}

impl Dom {
    pub fn from_global() -> Result<Self, FxError> {
        let window = web_sys::window().ok_or(FxError::NoWindow)?;
        let document = window.document().ok_or(FxError::NoDocument)?;
        Ok(Self { window, document })
    }

    /// Look up `#id` and cast it to `T`.
    pub fn element<T: JsCast>(&self, id: &str) -> Result<T, FxError> {
        self.optional_element(id)?
            .ok_or_else(|| FxError::MissingElement { id: id.to_owned() })
    }

    /// Like [`Dom::element`], but a missing element is `Ok(None)`.
    pub fn optional_element<T: JsCast>(&self, id: &str) -> Result<Option<T>, FxError> {
        let Some(el) = self.document.get_element_by_id(id) else {
            return Ok(None);
        };
        el.dyn_into::<T>()
            .map(Some)
            .map_err(|_| FxError::WrongElementType { id: id.to_owned(), expected: short_type_name::<T>() })
    }

    /// Every HTML element matching a CSS selector, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<HtmlElement>, FxError> {
        let list = self.document.query_selector_all(selector)?;
        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            let Some(node) = list.get(i) else {
                continue;
            };
            if let Ok(el) = node.dyn_into::<HtmlElement>() {
                out.push(el);
            }
        }
        Ok(out)
    }

    pub fn create_html(&self, tag: &str) -> Result<HtmlElement, FxError> {
        self.document
            .create_element(tag)?
            .dyn_into::<HtmlElement>()
            .map_err(|el| FxError::Js(format!("<{tag}> is not an HTML element: {el:?}")))
    }

    /// Window inner size in CSS pixels; zero when unavailable.
    pub fn viewport_size(&self) -> (f64, f64) {
        let read = |value: Result<JsValue, JsValue>| value.map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
        (read(self.window.inner_width()), read(self.window.inner_height()))
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

// =============================================================
// Events
// =============================================================

/// Attach a mouse handler to `target` for the page lifetime.
pub fn listen_mouse(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(MouseEvent) + 'static,
) -> Result<(), FxError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach a plain event handler to `target` for the page lifetime.
pub fn listen_event(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), FxError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn mouse_point(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

pub fn bounds(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

// =============================================================
// Styles and classes
// =============================================================

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("set {property}: {value} failed: {err:?}");
    }
}

pub fn add_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().add_1(class) {
        log::warn!("add class {class} failed: {err:?}");
    }
}

pub fn remove_class(el: &Element, class: &str) {
    if let Err(err) = el.class_list().remove_1(class) {
        log::warn!("remove class {class} failed: {err:?}");
    }
}

/// Add `class` when `on`, remove it otherwise.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if let Err(err) = el.class_list().toggle_with_force(class, on) {
        log::warn!("toggle class {class} failed: {err:?}");
    }
}

// =============================================================
// Time
// =============================================================

/// `performance.now()`, falling back to `Date.now()` without a
/// `Performance` object.
#[derive(Clone)]
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> Self {
        Self { performance: window.performance() }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        self.performance.as_ref().map_or_else(Date::now, Performance::now)
    }
}
