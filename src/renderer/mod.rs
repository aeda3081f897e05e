//! DOM rendering module
//!
//! The background is an HTML table with one cell per tile; actors are
//! absolutely positioned elements layered on top. Layout math is pure and
//! platform-independent; only `dom` touches the browser.

pub mod layout;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use layout::{ActorSprite, BackgroundLayout};

#[cfg(target_arch = "wasm32")]
pub use dom::DomDisplay;
