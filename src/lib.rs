//! Decorative effects for the celebration landing page and photo gallery.
//!
//! This crate is compiled to WebAssembly and attaches to a static HTML page.
//! Every effect is split in two: a pure controller that owns the state and the
//! math (testable natively, no browser required), and a thin bridge in
//! [`host`] that forwards DOM events into the controller and writes the
//! resulting styles, classes and pixels back to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`cursor`] | Lagging cursor dot with exponential smoothing |
//! | [`starfield`] | Star pool, depth update and perspective projection |
//! | [`magnetic`] | Pointer-relative pull transform for hover targets |
//! | [`title`] | Per-character split and staggered reveal schedule |
//! | [`transition`] | One-way landing-to-gallery state machine |
//! | [`reveal`] | First-intersection tracking for photo cards |
//! | [`toggle`] | Message panel show/hide toggle |
//! | [`confetti`] | Options passed to the page's confetti function |
//! | [`debounce`] | Cancel-and-reschedule debounce over a [`clock::Clock`] |
//! | [`clock`] | Injectable millisecond time source |
//! | [`geom`] | Points and rectangles in CSS pixels |
//! | [`config`] | Element selectors and tunables, overridable from JSON |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants |
//! | `host` | DOM/canvas bridge (`browser` feature only) |
//! | `render` | Starfield canvas drawing (`browser` feature only) |

pub mod clock;
pub mod config;
pub mod confetti;
pub mod consts;
pub mod cursor;
pub mod debounce;
pub mod error;
pub mod geom;
pub mod magnetic;
pub mod reveal;
pub mod starfield;
pub mod title;
pub mod toggle;
pub mod transition;

#[cfg(feature = "browser")]
pub mod host;
#[cfg(feature = "browser")]
pub mod render;
