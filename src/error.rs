//! Crate error type.

use thiserror::Error;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Error)]
pub enum FxError {
    /// `window` is not available (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// No element carries the requested id.
    #[error("missing element #{id}")]
    MissingElement { id: String },

    /// An element exists but is not of the expected DOM type.
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    /// The canvas did not hand out a 2D rendering context.
    #[error("2d context unavailable on #{id}")]
    NoContext { id: String },

    /// A JS call threw or rejected.
    #[error("js error: {0}")]
    Js(String),

    /// The embedded page configuration could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

#[cfg(feature = "browser")]
impl From<FxError> for wasm_bindgen::JsValue {
    fn from(err: FxError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
