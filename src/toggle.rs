//! Show/hide toggle for the message panel.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

pub const HIDDEN_CLASS: &str = "hidden";
pub const VISIBLE_CLASS: &str = "visible";

pub const SHOW_LABEL: &str = "View My Message 💌";
pub const HIDE_LABEL: &str = "Hide Message 💌";

/// What the host applies to the panel and button after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleView {
    /// Whether the panel carries the `hidden` class.
    pub hidden: bool,
    /// Whether the panel carries the `visible` class.
    pub visible: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageToggle {
    visible: bool,
}

impl MessageToggle {
    /// A toggle whose panel starts hidden.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A toggle that adopts the panel's current state.
    #[must_use]
    pub fn from_visible(visible: bool) -> Self {
        Self { visible }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and return the view for the new state.
    pub fn click(&mut self) -> ToggleView {
        self.visible = !self.visible;
        self.view()
    }

    #[must_use]
    pub fn view(&self) -> ToggleView {
        ToggleView {
            hidden: !self.visible,
            visible: self.visible,
            label: if self.visible { HIDE_LABEL } else { SHOW_LABEL },
        }
    }
}
