//! Landing-to-gallery transition.
//!
//! A one-way state machine. The start button moves the page from `Landing`
//! to `Leaving`: confetti fires, music starts, and the landing view begins
//! to fade. When the swap delay elapses the host calls
//! [`ViewTransition::finish_swap`], which moves to the terminal `Gallery`
//! phase and turns on scroll reveal for the photo cards.
//!
//! Handlers return [`Action`]s for the host to apply in order. Repeat
//! triggers return nothing, so any number of clicks ends in the same state.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::confetti::ConfettiOptions;
use crate::config::Timing;

/// Class that fades a view out.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class that marks the gallery as the active view.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Landing,
    /// Landing is fading out; the swap is scheduled.
    Leaving,
    Gallery,
}

/// Side effects the host performs for a transition step.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Confetti(ConfettiOptions),
    /// Start background music. Failure is logged and ignored.
    PlayAudio,
    /// Set the landing fade transition and add its `hidden` class.
    FadeOutLanding,
    /// Call [`ViewTransition::finish_swap`] after this delay.
    ScheduleSwap { delay_ms: u32 },
    /// `display: none` on the landing view.
    HideLanding,
    /// `display: block`, force a reflow, add `active`, remove `hidden`.
    ShowGallery,
    /// Prepare photo cards and observe them at this visible fraction.
    ObserveCards { threshold: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransition {
    phase: Phase,
    confetti: ConfettiOptions,
    swap_delay_ms: u32,
    reveal_threshold: f64,
}

impl Default for ViewTransition {
    fn default() -> Self {
        Self::new(ConfettiOptions::default(), &Timing::default())
    }
}

impl ViewTransition {
    #[must_use]
    pub fn new(confetti: ConfettiOptions, timing: &Timing) -> Self {
        Self {
            phase: Phase::Landing,
            confetti,
            swap_delay_ms: timing.view_swap_delay_ms,
            reveal_threshold: timing.reveal_threshold,
        }
    }

    #[cfg(test)]
    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_gallery(&self) -> bool {
        self.phase == Phase::Gallery
    }

    /// Start button clicked.
    pub fn trigger(&mut self) -> Vec<Action> {
        if self.phase != Phase::Landing {
            return Vec::new();
        }
        self.phase = Phase::Leaving;
        vec![
            Action::Confetti(self.confetti.clone()),
            Action::PlayAudio,
            Action::FadeOutLanding,
            Action::ScheduleSwap { delay_ms: self.swap_delay_ms },
        ]
    }

    /// Swap delay elapsed.
    pub fn finish_swap(&mut self) -> Vec<Action> {
        if self.phase != Phase::Leaving {
            return Vec::new();
        }
        self.phase = Phase::Gallery;
        vec![Action::HideLanding, Action::ShowGallery, Action::ObserveCards { threshold: self.reveal_threshold }]
    }
}
