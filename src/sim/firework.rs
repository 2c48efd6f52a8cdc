//! Firework bursts
//!
//! A burst is nothing more than its particles: it is spent once the last
//! particle has burned out.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::consts::*;
use crate::{polar_to_cartesian, sample_range};

/// A single spark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    /// Velocity (pixels/frame)
    pub vel: Vec2,
    /// Radius, shrinks by `PARTICLE_DECAY` every frame
    pub size: f32,
    /// Remaining lifetime (frames)
    pub life: f32,
    pub color: Color,
}

impl Particle {
    pub fn advance(&mut self) {
        self.pos += self.vel;
        self.size *= PARTICLE_DECAY;
        self.life -= 1.0;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

/// A burst of particles around a common origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Firework {
    pub id: u32,
    pub origin: Vec2,
    pub particles: Vec<Particle>,
}

impl Firework {
    /// Explode `count` particles out of `origin` in random directions
    pub fn new<R: Rng>(id: u32, origin: Vec2, count: usize, rng: &mut R) -> Self {
        let base_hue = sample_range(rng, 0.0, 360.0);
        let particles = (0..count)
            .map(|_| {
                let angle = sample_range(rng, 0.0, std::f32::consts::TAU);
                let speed = sample_range(rng, PARTICLE_SPEED_MIN, PARTICLE_SPEED_MAX);
                let hue = base_hue + sample_range(rng, -PARTICLE_HUE_JITTER, PARTICLE_HUE_JITTER);
                Particle {
                    pos: origin,
                    vel: polar_to_cartesian(speed, angle),
                    size: sample_range(rng, PARTICLE_SIZE_MIN, PARTICLE_SIZE_MAX),
                    life: sample_range(rng, PARTICLE_LIFE_MIN, PARTICLE_LIFE_MAX),
                    color: Color::vivid(hue),
                }
            })
            .collect();

        Self {
            id,
            origin,
            particles,
        }
    }

    /// Move every particle one frame and drop the burnt-out ones
    pub fn advance(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.advance();
        }
        self.particles.retain(Particle::is_alive);
    }

    /// No particles left; the owner should drop this burst
    #[inline]
    pub fn is_spent(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Particles per burst for the given preset count and viewport class
pub fn burst_size(per_burst: usize, narrow: bool) -> usize {
    if narrow {
        per_burst.div_ceil(2).max(1)
    } else {
        per_burst
    }
}
