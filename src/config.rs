//! Page configuration: which elements play which role, plus tunables.
//!
//! Every field has a default matching the stock celebration page. A page can
//! override any subset by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="fx-config">
//!   { "selectors": { "title": "headline" }, "timing": { "title_step_ms": 60 } }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::confetti::ConfettiOptions;
use crate::consts::{CARD_REVEAL_THRESHOLD, RESIZE_DEBOUNCE_MS, TITLE_REVEAL_STEP_MS, VIEW_SWAP_DELAY_MS};
use crate::error::FxError;

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FxConfig {
    pub selectors: Selectors,
    pub timing: Timing,
    pub confetti: ConfettiOptions,
}

/// Element ids (without `#`) and CSS selectors for each role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Selectors {
    pub cursor: String,
    pub glow: String,
    pub canvas: String,
    pub title: String,
    pub start_button: String,
    pub landing: String,
    pub gallery: String,
    pub audio: String,
    pub message_button: String,
    pub message_panel: String,
    /// CSS selector for elements with the magnetic hover effect.
    pub magnetic: String,
    /// CSS selector for gallery cards revealed on scroll.
    pub photo_cards: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            cursor: "cursor-follower".into(),
            glow: "cursor-glow".into(),
            canvas: "particle-canvas".into(),
            title: "celebration-title".into(),
            start_button: "start-btn".into(),
            landing: "landing-view".into(),
            gallery: "gallery-view".into(),
            audio: "bg-music".into(),
            message_button: "show-message-btn".into(),
            message_panel: "message-container".into(),
            magnetic: ".glow-on-hover, .photo-card".into(),
            photo_cards: ".photo-card".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Timing {
    pub resize_debounce_ms: f64,
    pub title_step_ms: u32,
    pub view_swap_delay_ms: u32,
    pub reveal_threshold: f64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            title_step_ms: TITLE_REVEAL_STEP_MS,
            view_swap_delay_ms: VIEW_SWAP_DELAY_MS,
            reveal_threshold: CARD_REVEAL_THRESHOLD,
        }
    }
}

impl FxConfig {
    /// Parse a (possibly partial) JSON override. Blank input yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `FxError::ConfigParse` for malformed JSON, unknown keys, or
    /// out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw).map_err(|e| FxError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FxError> {
        let t = &self.timing;
        if !(t.resize_debounce_ms.is_finite() && t.resize_debounce_ms >= 0.0) {
            return Err(FxError::ConfigParse(format!(
                "resize_debounce_ms must be a non-negative number, got {}",
                t.resize_debounce_ms
            )));
        }
        if !(0.0..=1.0).contains(&t.reveal_threshold) {
            return Err(FxError::ConfigParse(format!(
                "reveal_threshold must be within 0..=1, got {}",
                t.reveal_threshold
            )));
        }
        Ok(())
    }
}
