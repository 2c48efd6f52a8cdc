//! Balloons drifting up from the bottom edge

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::drift::Drift;
use super::state::Viewport;
use crate::consts::*;
use crate::sample_range;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balloon {
    pub id: u32,
    pub drift: Drift,
    /// Nominal diameter; the body is `size` wide and `1.2 * size` tall
    pub size: f32,
    pub color: Color,
    pub string_length: f32,
}

impl Balloon {
    /// A balloon just below the bottom edge at a random x
    pub fn random<R: Rng>(id: u32, viewport: &Viewport, rng: &mut R) -> Self {
        let x = sample_range(rng, 0.0, viewport.width);
        let (min, max) = viewport.floater_size_range();
        let size = sample_range(rng, min, max);
        let color = Color::vivid(sample_range(rng, 0.0, 360.0));
        let drift = Drift::random(rng, Vec2::new(x, viewport.height));
        Self {
            id,
            drift,
            size,
            color,
            string_length: sample_range(rng, STRING_LENGTH_MIN, STRING_LENGTH_MAX),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.drift.pos
    }

    pub fn advance(&mut self) {
        self.drift.advance();
    }

    /// Risen fully past the top edge
    #[inline]
    pub fn is_gone(&self) -> bool {
        self.drift.is_above_top(self.size)
    }

    /// Zig-zag string hanging below the body
    pub fn string_points(&self) -> Vec<Vec2> {
        let start = Vec2::new(self.drift.pos.x, self.drift.pos.y + self.size * 0.6);
        let step = self.string_length / STRING_SEGMENTS as f32;

        let mut points = Vec::with_capacity(STRING_SEGMENTS + 1);
        points.push(start);
        for i in 0..STRING_SEGMENTS {
            let dx = if i % 2 == 0 { STRING_WAVE } else { -STRING_WAVE };
            points.push(Vec2::new(start.x + dx, start.y + i as f32 * step));
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_at_bottom_with_sized_range() {
        let mut rng = Pcg32::seed_from_u64(5);
        let wide = Viewport::new(1280.0, 720.0, 1024.0);
        let narrow = Viewport::new(400.0, 800.0, 1024.0);
        for id in 0..100 {
            let b = Balloon::random(id, &wide, &mut rng);
            assert_eq!(b.pos().y, 720.0);
            assert!(b.pos().x >= 0.0 && b.pos().x < 1280.0);
            assert!(b.size >= 40.0 && b.size < 80.0);
            assert!(b.string_length >= STRING_LENGTH_MIN && b.string_length < STRING_LENGTH_MAX);

            let b = Balloon::random(id, &narrow, &mut rng);
            assert!(b.size >= 30.0 && b.size < 60.0);
        }
    }

    #[test]
    fn test_rises_until_gone() {
        let mut rng = Pcg32::seed_from_u64(6);
        let viewport = Viewport::new(800.0, 600.0, 1024.0);
        let mut b = Balloon::random(1, &viewport, &mut rng);
        let mut last_y = b.pos().y;
        let mut frames = 0;
        while !b.is_gone() {
            b.advance();
            assert!(b.pos().y < last_y);
            last_y = b.pos().y;
            frames += 1;
        }
        // Slowest balloon: (600 + size) / RISE_SPEED_MIN frames
        assert!(frames as f32 <= (600.0 + b.size) / RISE_SPEED_MIN + 1.0);
    }

    #[test]
    fn test_string_zigzag() {
        let mut rng = Pcg32::seed_from_u64(7);
        let viewport = Viewport::new(800.0, 600.0, 1024.0);
        let b = Balloon::random(1, &viewport, &mut rng);
        let points = b.string_points();
        assert_eq!(points.len(), STRING_SEGMENTS + 1);
        assert_eq!(points[0].y, b.pos().y + b.size * 0.6);
        assert_eq!(points[1].x, b.pos().x + STRING_WAVE);
        assert_eq!(points[2].x, b.pos().x - STRING_WAVE);
        assert!(points.windows(2).skip(1).all(|w| w[1].y > w[0].y));
    }
}
