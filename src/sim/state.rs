//! Animation state and entity collections
//!
//! Everything the frame loop mutates lives in `SkyState`: the three live
//! collections, the pause flag, the spawn throttles and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::balloon::Balloon;
use super::firework::{Firework, burst_size};
use super::rose::Rose;
use super::spawner::{Throttle, push_capped};
use crate::consts::*;
use crate::sample_range;
use crate::settings::Settings;

/// Drawing surface dimensions (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Widths below this count as narrow (phones)
    pub narrow_breakpoint: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, narrow_breakpoint: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            narrow_breakpoint,
        }
    }

    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.width < self.narrow_breakpoint
    }

    /// Size range for balloons and roses
    pub fn floater_size_range(&self) -> (f32, f32) {
        if self.is_narrow() {
            FLOATER_SIZE_NARROW
        } else {
            FLOATER_SIZE_WIDE
        }
    }
}

/// Frame loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Surface visible: clear, spawn, advance, draw
    Active,
    /// Surface hidden: frames are scheduled but do nothing
    Paused,
}

#[derive(Debug, Clone)]
pub struct SkyState {
    /// RNG seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub viewport: Viewport,
    pub phase: Phase,
    /// Live bursts, oldest first
    pub fireworks: Vec<Firework>,
    /// Live balloons, oldest first
    pub balloons: Vec<Balloon>,
    /// Live roses, oldest first
    pub roses: Vec<Rose>,
    pub firework_throttle: Throttle,
    pub balloon_throttle: Throttle,
    pub rose_throttle: Throttle,
    /// Active frames processed so far
    pub frame_count: u64,
    rng: Pcg32,
    next_id: u32,
}

impl SkyState {
    pub fn new(settings: Settings, width: f32, height: f32, seed: u64) -> Self {
        let viewport = Viewport::new(width, height, settings.narrow_breakpoint);
        Self {
            seed,
            viewport,
            phase: Phase::Active,
            fireworks: Vec::new(),
            balloons: Vec::new(),
            roses: Vec::new(),
            firework_throttle: Throttle::new(settings.firework_interval_ms),
            balloon_throttle: Throttle::new(settings.balloon_interval_ms),
            rose_throttle: Throttle::new(settings.rose_interval_ms),
            frame_count: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            settings,
        }
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Host visibility signal
    pub fn set_visible(&mut self, visible: bool) {
        let next = if visible { Phase::Active } else { Phase::Paused };
        if next != self.phase {
            self.phase = next;
            match next {
                Phase::Active => log::info!("Resumed (surface visible)"),
                Phase::Paused => log::info!("Paused (surface hidden)"),
            }
        }
    }

    /// Surface resized; live entities keep their positions
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height, self.settings.narrow_breakpoint);
        log::info!(
            "Viewport resized to {}x{} ({})",
            width,
            height,
            if self.viewport.is_narrow() { "narrow" } else { "wide" }
        );
    }

    /// Burst at a pointer position. Ignores throttling and pause.
    pub fn launch_burst(&mut self, pos: Vec2) {
        self.push_firework(pos);
    }

    /// Burst at a random point in the upper half. No-op while paused.
    pub fn spawn_firework(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }
        let w = self.viewport.width;
        let h = self.viewport.height;
        let x = sample_range(&mut self.rng, 0.1 * w, 0.9 * w);
        let y = sample_range(&mut self.rng, 0.1 * h, 0.5 * h);
        self.push_firework(Vec2::new(x, y));
        true
    }

    /// Balloon at the bottom edge. No-op while paused.
    pub fn spawn_balloon(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }
        let id = self.next_entity_id();
        let balloon = Balloon::random(id, &self.viewport, &mut self.rng);
        log::trace!("Balloon {} at x={:.0}", id, balloon.pos().x);
        let evicted = push_capped(&mut self.balloons, balloon, self.settings.max_balloons);
        if evicted > 0 {
            log::debug!("Evicted {} oldest balloon(s)", evicted);
        }
        true
    }

    /// Rose at the bottom edge. No-op while paused.
    pub fn spawn_rose(&mut self) -> bool {
        if self.is_paused() {
            return false;
        }
        let id = self.next_entity_id();
        let rose = Rose::random(id, &self.viewport, &mut self.rng);
        log::trace!("Rose {} at x={:.0}", id, rose.pos().x);
        let evicted = push_capped(&mut self.roses, rose, self.settings.max_roses);
        if evicted > 0 {
            log::debug!("Evicted {} oldest rose(s)", evicted);
        }
        true
    }

    /// In-loop spawning: one attempt per enabled entity type
    pub fn spawn_throttled(&mut self, now_ms: f64) {
        if self.is_paused() {
            return;
        }
        if self.settings.fireworks && self.firework_throttle.try_fire(now_ms) {
            self.spawn_firework();
        }
        if self.settings.balloons && self.balloon_throttle.try_fire(now_ms) {
            self.spawn_balloon();
        }
        if self.settings.roses && self.rose_throttle.try_fire(now_ms) {
            self.spawn_rose();
        }
    }

    fn push_firework(&mut self, origin: Vec2) {
        let id = self.next_entity_id();
        let count = burst_size(
            self.settings.quality.particles_per_burst(),
            self.viewport.is_narrow(),
        );
        let firework = Firework::new(id, origin, count, &mut self.rng);
        log::trace!("Firework {} at ({:.0}, {:.0})", id, origin.x, origin.y);
        let evicted = push_capped(&mut self.fireworks, firework, self.settings.max_fireworks);
        if evicted > 0 {
            log::debug!("Evicted {} oldest firework(s)", evicted);
        }
    }

    /// Total live entities across all collections
    pub fn live_count(&self) -> usize {
        self.fireworks.len() + self.balloons.len() + self.roses.len()
    }
}
