//! Scroll reveal bookkeeping for photo cards.
//!
//! Cards start faded and shifted down. The first time a card crosses the
//! visibility threshold it is revealed and no longer needs observing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::collections::HashSet;

use crate::consts::{CARD_HIDDEN_OFFSET_PX, CARD_REVEAL_TRANSITION};

/// Inline styles `(property, value)` a card gets before it is observed.
#[must_use]
pub fn hidden_card_styles() -> [(&'static str, String); 3] {
    [
        ("opacity", "0".to_owned()),
        ("transform", format!("translateY({CARD_HIDDEN_OFFSET_PX}px)")),
        ("transition", CARD_REVEAL_TRANSITION.to_owned()),
    ]
}

/// Inline styles a card gets when it is revealed.
#[must_use]
pub fn revealed_card_styles() -> [(&'static str, &'static str); 2] {
    [("opacity", "1"), ("transform", "translateY(0)")]
}

/// Tracks which cards have been revealed, keyed by their index in the page.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    total: usize,
    revealed: HashSet<usize>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { total, revealed: HashSet::new() }
    }

    /// Record an intersection update. Returns `true` when this update should
    /// reveal the card, which happens at most once per card.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting || index >= self.total {
            return false;
        }
        self.revealed.insert(index)
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    #[cfg(test)]
    pub(crate) fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Every card has been revealed; the observer can be disconnected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.revealed.len() == self.total
    }
}
