//! Options for the page's confetti burst.
//!
//! The burst itself is drawn by a JS confetti library the page loads. These
//! types mirror the option object it accepts and serialize to exactly that
//! JSON shape.

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConfettiOptions {
    pub particle_count: u32,
    /// Cone angle in degrees.
    pub spread: f64,
    pub origin: Origin,
    pub colors: Vec<String>,
}

/// Launch point as a fraction of the viewport. The library defaults the
/// missing axis, so only `y` is sent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Origin {
    pub y: f64,
}

impl Default for Origin {
    fn default() -> Self {
        Self { y: 0.6 }
    }
}

impl Default for ConfettiOptions {
    fn default() -> Self {
        Self {
            particle_count: 200,
            spread: 90.0,
            origin: Origin::default(),
            colors: ["#ff9a9e", "#fad0c4", "#f1c40f", "#fff"].map(str::to_owned).to_vec(),
        }
    }
}

impl ConfettiOptions {
    /// JSON text handed to `JSON.parse` on the JS side.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
