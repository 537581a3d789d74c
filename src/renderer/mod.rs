//! Rendering module
//!
//! `scene` turns a game state into a flat draw list; `canvas` plays it back
//! on a browser Canvas 2D context.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCmd, Paint, TextAlign};
