//! Title reveal: rewrites the heading into per-letter spans.

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use super::dom::{Dom, add_class, set_style};
use crate::config::FxConfig;
use crate::error::FxError;
use crate::title::{LETTER_CLASS, REVEAL_CLASS, split_glyphs_with_step};

pub fn bind(dom: &Dom, config: &FxConfig) -> Result<(), FxError> {
    let id = &config.selectors.title;
    let Some(title) = dom.optional_element::<HtmlElement>(id)? else {
        log::debug!("no #{id}; title reveal skipped");
        return Ok(());
    };

    let text = title.inner_text();
    title.set_inner_html("");
    for glyph in split_glyphs_with_step(&text, config.timing.title_step_ms) {
        let span = dom.create_html("span")?;
        add_class(&span, LETTER_CLASS);
        span.set_inner_text(&glyph.text);
        title.append_child(&span)?;

        Timeout::new(glyph.delay_ms, move || {
            add_class(&span, REVEAL_CLASS);
            set_style(&span, "opacity", "1");
            set_style(&span, "transform", "translateY(0)");
        })
        .forget();
    }
    Ok(())
}
