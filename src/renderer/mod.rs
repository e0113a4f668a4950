//! Rendering module
//!
//! The simulation never draws. Each frame the session builds a [`Scene`]
//! snapshot, and the wasm host paints it onto a 2D canvas.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use shapes::{Palette, Scene, Shape};
