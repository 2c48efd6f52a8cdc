//! Skyburst - fireworks, balloons and floating roses on a 2D canvas
//!
//! Core modules:
//! - `sim`: Host-independent animation state (entities, spawning, frame loop)
//! - `renderer`: Drawing seam (`Surface`) and scene rendering
//! - `settings`: Tuning and preferences
//! - `error`: Crate error type

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SkyError;
pub use settings::{QualityPreset, Settings, SpawnMode};

use glam::Vec2;

/// Animation constants
pub mod consts {
    /// Nominal frame duration in milliseconds (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Firework particle size multiplier applied every frame
    pub const PARTICLE_DECAY: f32 = 0.95;
    /// Particle speed range (pixels/frame)
    pub const PARTICLE_SPEED_MIN: f32 = 1.0;
    pub const PARTICLE_SPEED_MAX: f32 = 6.0;
    /// Particle radius range (pixels)
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_MAX: f32 = 5.0;
    /// Particle lifetime range (frames)
    pub const PARTICLE_LIFE_MIN: f32 = 40.0;
    pub const PARTICLE_LIFE_MAX: f32 = 90.0;
    /// Max hue offset of a particle from its burst's base hue
    pub const PARTICLE_HUE_JITTER: f32 = 20.0;

    /// Horizontal wobble amplitude (pixels/frame)
    pub const WOBBLE_AMPLITUDE: f32 = 0.5;
    /// Rise speed range (pixels/frame)
    pub const RISE_SPEED_MIN: f32 = 1.0;
    pub const RISE_SPEED_MAX: f32 = 3.0;
    /// Wobble phase rate range (radians/frame)
    pub const WOBBLE_RATE_MIN: f32 = 0.02;
    pub const WOBBLE_RATE_MAX: f32 = 0.07;

    /// Balloon/rose size ranges (narrow viewport, wide viewport)
    pub const FLOATER_SIZE_NARROW: (f32, f32) = (30.0, 60.0);
    pub const FLOATER_SIZE_WIDE: (f32, f32) = (40.0, 80.0);

    /// Balloon string
    pub const STRING_LENGTH_MIN: f32 = 40.0;
    pub const STRING_LENGTH_MAX: f32 = 90.0;
    pub const STRING_SEGMENTS: usize = 10;
    pub const STRING_WAVE: f32 = 5.0;
    pub const STRING_WIDTH: f32 = 1.5;
}

/// Uniform sample from `[min, max)`; returns `min` for an empty range.
#[inline]
pub fn sample_range<R: rand::Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
