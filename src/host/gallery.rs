//! Landing-to-gallery transition: confetti, music, view swap, scroll reveal.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    HtmlAudioElement, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Node,
};

use super::dom::{Dom, add_class, listen_mouse, remove_class, set_style};
use crate::confetti::ConfettiOptions;
use crate::config::FxConfig;
use crate::consts::LANDING_FADE_TRANSITION;
use crate::error::FxError;
use crate::reveal::{RevealTracker, hidden_card_styles, revealed_card_styles};
use crate::transition::{ACTIVE_CLASS, Action, HIDDEN_CLASS, ViewTransition};

/// Global installed by the page's confetti script.
const CONFETTI_GLOBAL: &str = "confetti";

/// Everything the transition actions touch.
struct Stage {
    dom: Dom,
    landing: HtmlElement,
    gallery: HtmlElement,
    audio: HtmlAudioElement,
    card_selector: String,
    machine: RefCell<ViewTransition>,
}

pub fn bind(dom: &Dom, config: &FxConfig) -> Result<(), FxError> {
    let s = &config.selectors;
    let button: HtmlElement = dom.element(&s.start_button)?;
    let stage = Rc::new(Stage {
        dom: dom.clone(),
        landing: dom.element(&s.landing)?,
        gallery: dom.element(&s.gallery)?,
        audio: dom.element(&s.audio)?,
        card_selector: s.photo_cards.clone(),
        machine: RefCell::new(ViewTransition::new(config.confetti.clone(), &config.timing)),
    });

    listen_mouse(&button, "click", move |_| {
        let actions = stage.machine.borrow_mut().trigger();
        if !actions.is_empty() {
            log::info!("leaving landing view");
        }
        apply(&stage, actions);
    })
}

fn apply(stage: &Rc<Stage>, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::Confetti(options) => {
                if let Err(err) = fire_confetti(&stage.dom, &options) {
                    log::warn!("confetti failed: {err}");
                }
            }
            Action::PlayAudio => play_audio(&stage.audio),
            Action::FadeOutLanding => {
                set_style(&stage.landing, "transition", LANDING_FADE_TRANSITION);
                add_class(&stage.landing, HIDDEN_CLASS);
            }
            Action::ScheduleSwap { delay_ms } => {
                let stage = Rc::clone(stage);
                Timeout::new(delay_ms, move || {
                    let actions = stage.machine.borrow_mut().finish_swap();
                    apply(&stage, actions);
                })
                .forget();
            }
            Action::HideLanding => set_style(&stage.landing, "display", "none"),
            Action::ShowGallery => {
                set_style(&stage.gallery, "display", "block");
                // Flush layout so the class change below animates from the hidden state.
                stage.gallery.offset_width();
                add_class(&stage.gallery, ACTIVE_CLASS);
                remove_class(&stage.gallery, HIDDEN_CLASS);
                log::info!("gallery view shown");
            }
            Action::ObserveCards { threshold } => {
                if let Err(err) = observe_cards(&stage.dom, &stage.card_selector, threshold) {
                    log::error!("scroll reveal disabled: {err}");
                }
            }
        }
    }
}

fn fire_confetti(dom: &Dom, options: &ConfettiOptions) -> Result<(), FxError> {
    let value = Reflect::get(&dom.window, &JsValue::from_str(CONFETTI_GLOBAL))?;
    let Some(confetti) = value.dyn_ref::<Function>() else {
        log::warn!("window.{CONFETTI_GLOBAL} is not loaded; skipping burst");
        return Ok(());
    };
    let json = options.to_json().map_err(|e| FxError::Js(e.to_string()))?;
    confetti.call1(&JsValue::NULL, &JSON::parse(&json)?)?;
    Ok(())
}

/// Start background music. Browsers may refuse until the user interacts;
/// that is expected and only logged.
fn play_audio(audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::info!("audio waiting: {err:?}");
            }
        }),
        Err(err) => log::info!("audio waiting: {err:?}"),
    }
}

fn observe_cards(dom: &Dom, selector: &str, threshold: f64) -> Result<(), FxError> {
    let cards = Rc::new(dom.query_all(selector)?);
    for card in cards.iter() {
        for (property, value) in hidden_card_styles() {
            set_style(card, property, &value);
        }
    }

    let mut tracker = RevealTracker::new(cards.len());
    let cards_for_cb = Rc::clone(&cards);
    let cb = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let target_node: &Node = &target;
            let Some(index) = cards_for_cb.iter().position(|card| card.is_same_node(Some(target_node))) else {
                continue;
            };
            if tracker.on_intersection(index, entry.is_intersecting()) {
                for (property, value) in revealed_card_styles() {
                    set_style(&cards_for_cb[index], property, value);
                }
                observer.unobserve(&target);
            }
        }
        if tracker.is_complete() {
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    for card in cards.iter() {
        observer.observe(card);
    }
    cb.forget();
    log::debug!("observing {} photo cards", cards.len());
    Ok(())
}
