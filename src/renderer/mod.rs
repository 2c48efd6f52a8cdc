//! Rendering
//!
//! The simulation draws through the `Surface` trait; the browser build backs
//! it with a Canvas 2D context, tests and the native build with a recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recorder;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recorder::{DrawCommand, RecordingSurface};
pub use scene::{draw_scene, render_balloon, render_firework, render_rose};
pub use surface::Surface;
