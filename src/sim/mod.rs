//! Host-independent animation state
//!
//! Everything here is plain data plus arithmetic:
//! - Per-frame motion only (no wall-clock integration)
//! - Seeded RNG only
//! - Ordered collections, oldest entity first
//! - No platform dependencies; drawing goes through `renderer::Surface`

pub mod balloon;
pub mod color;
pub mod drift;
pub mod firework;
pub mod rose;
pub mod spawner;
pub mod state;
pub mod tick;

pub use balloon::Balloon;
pub use color::Color;
pub use drift::Drift;
pub use firework::{Firework, Particle};
pub use rose::Rose;
pub use spawner::{Throttle, push_capped};
pub use state::{Phase, SkyState, Viewport};
pub use tick::{frame, tick};
