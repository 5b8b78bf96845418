//! Browser bridge: wires page elements to the effect controllers.
//!
//! ARCHITECTURE
//! ============
//! Each binder resolves its elements, constructs its controller, and hands
//! closures to the browser (event listeners, animation frames, timeouts).
//! Closures live for the page lifetime. Binders are independent: a page that
//! lacks one component's elements loses that effect and keeps the others.
//!
//! The pointer position is the only state shared across binders. It is a
//! single `Rc<Cell<Point>>` written by one document-level `mousemove`
//! listener and read by the cursor and starfield frame loops.

mod cursor;
mod dom;
mod frame;
mod gallery;
mod hover;
mod message;
mod starfield;
mod title;

use std::cell::Cell;
use std::rc::Rc;

use log::Level;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::{CONFIG_ELEMENT_ID, FxConfig};
use crate::error::FxError;
use crate::geom::Point;
use dom::{Dom, listen_event, listen_mouse, mouse_point};

/// Module entry point, run when the page instantiates the WASM module.
///
/// # Errors
///
/// Returns `Err` only when there is no window or document to attach to.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&format!("logger init failed: {err}")));
    }

    let dom = Dom::from_global()?;
    if dom.document.ready_state() == "loading" {
        let deferred = dom.clone();
        listen_event(&dom.document, "DOMContentLoaded", move |_| {
            if let Err(err) = mount(&deferred) {
                log::error!("page effects not started: {err}");
            }
        })?;
        return Ok(());
    }
    mount(&dom)?;
    Ok(())
}

fn mount(dom: &Dom) -> Result<(), FxError> {
    let config = load_config(dom);

    let pointer = Rc::new(Cell::new(Point::default()));
    {
        let pointer = Rc::clone(&pointer);
        listen_mouse(&dom.document, "mousemove", move |event| pointer.set(mouse_point(&event)))?;
    }

    report("cursor", cursor::bind(dom, &config.selectors, Rc::clone(&pointer)));
    report("starfield", starfield::bind(dom, &config, Rc::clone(&pointer)));
    report("magnetic hover", hover::bind(dom, &config.selectors));
    report("title reveal", title::bind(dom, &config));
    report("view transition", gallery::bind(dom, &config));
    report("message toggle", message::bind(dom, &config.selectors));

    log::info!("page effects started");
    Ok(())
}

fn report(component: &str, result: Result<(), FxError>) {
    if let Err(err) = result {
        log::error!("{component} disabled: {err}");
    }
}

/// Page config from the optional JSON block, or defaults.
fn load_config(dom: &Dom) -> FxConfig {
    let Some(el) = dom.document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return FxConfig::default();
    };
    match FxConfig::from_json(&el.text_content().unwrap_or_default()) {
        Ok(config) => {
            log::info!("using page config from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            FxConfig::default()
        }
    }
}
