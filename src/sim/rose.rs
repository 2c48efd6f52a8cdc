//! Rose sprites floating up like balloons

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::drift::Drift;
use super::state::Viewport;
use crate::sample_range;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rose {
    pub id: u32,
    pub drift: Drift,
    /// Sprite edge length (pixels)
    pub size: f32,
}

impl Rose {
    pub fn random<R: Rng>(id: u32, viewport: &Viewport, rng: &mut R) -> Self {
        let x = sample_range(rng, 0.0, viewport.width);
        let (min, max) = viewport.floater_size_range();
        let size = sample_range(rng, min, max);
        Self {
            id,
            drift: Drift::random(rng, Vec2::new(x, viewport.height)),
            size,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.drift.pos
    }

    pub fn advance(&mut self) {
        self.drift.advance();
    }

    #[inline]
    pub fn is_gone(&self) -> bool {
        self.drift.is_above_top(self.size)
    }
}
