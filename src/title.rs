//! Letter-by-letter title reveal.
//!
//! The heading text is split into one glyph per character. Each glyph is
//! rendered in its own span and revealed after a delay proportional to its
//! index, so the title writes itself left to right.

#[cfg(test)]
#[path = "title_test.rs"]
mod title_test;

use crate::consts::{NBSP, TITLE_REVEAL_STEP_MS};

/// Class every glyph span carries from creation.
pub const LETTER_CLASS: &str = "letter";

/// Class added to a glyph span when its delay elapses.
pub const REVEAL_CLASS: &str = "reveal";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub text: String,
    pub delay_ms: u32,
}

/// Split `text` into glyphs with staggered reveal delays.
///
/// Spaces become non-breaking so their spans keep a width once wrapped.
#[must_use]
pub fn split_glyphs(text: &str) -> Vec<Glyph> {
    split_glyphs_with_step(text, TITLE_REVEAL_STEP_MS)
}

#[must_use]
pub fn split_glyphs_with_step(text: &str, step_ms: u32) -> Vec<Glyph> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            let ch = if ch == ' ' { NBSP } else { ch };
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            Glyph { text: ch.to_string(), delay_ms: step_ms.saturating_mul(index) }
        })
        .collect()
}
