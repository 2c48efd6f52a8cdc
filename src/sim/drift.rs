//! Rising motion with a sideways sine wobble
//!
//! Shared by balloons and roses: each frame the entity rises by `speed`
//! while its wobble phase advances by `wobble_rate` and nudges it sideways.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sample_range;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drift {
    pub pos: Vec2,
    /// Upward speed (pixels/frame)
    pub speed: f32,
    /// Wobble phase (radians)
    pub wobble_angle: f32,
    /// Phase advance per frame (radians)
    pub wobble_rate: f32,
}

impl Drift {
    /// Random drift starting at `pos`
    pub fn random<R: Rng>(rng: &mut R, pos: Vec2) -> Self {
        Self {
            pos,
            speed: sample_range(rng, RISE_SPEED_MIN, RISE_SPEED_MAX),
            wobble_angle: sample_range(rng, 0.0, std::f32::consts::TAU),
            wobble_rate: sample_range(rng, WOBBLE_RATE_MIN, WOBBLE_RATE_MAX),
        }
    }

    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
        self.wobble_angle += self.wobble_rate;
        self.pos.x += self.wobble_angle.sin() * WOBBLE_AMPLITUDE;
    }

    /// True once something of this `size` has fully risen past the top edge
    #[inline]
    pub fn is_above_top(&self, size: f32) -> bool {
        self.pos.y + size < 0.0
    }
}
