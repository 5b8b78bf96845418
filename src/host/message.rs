//! Message panel toggle.

use web_sys::HtmlElement;

use super::dom::{Dom, listen_mouse, set_class};
use crate::config::Selectors;
use crate::error::FxError;
use crate::toggle::{HIDDEN_CLASS, MessageToggle, VISIBLE_CLASS};

pub fn bind(dom: &Dom, selectors: &Selectors) -> Result<(), FxError> {
    let button: HtmlElement = dom.element(&selectors.message_button)?;
    let panel: HtmlElement = dom.element(&selectors.message_panel)?;

    // Adopt whatever state the markup ships with.
    let mut toggle = MessageToggle::from_visible(!panel.class_list().contains(HIDDEN_CLASS));
    let label_target = button.clone();
    listen_mouse(&button, "click", move |_| {
        let view = toggle.click();
        set_class(&panel, HIDDEN_CLASS, view.hidden);
        set_class(&panel, VISIBLE_CLASS, view.visible);
        label_target.set_inner_text(view.label);
    })
}
