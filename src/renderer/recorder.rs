//! In-memory surface that records draw calls

use glam::Vec2;

use super::surface::Surface;
use crate::sim::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    Polyline { points: Vec<Vec2>, color: Color, line_width: f32 },
    Ellipse { center: Vec2, radii: Vec2, color: Color },
    Disc { center: Vec2, radius: f32, color: Color, blur: f32 },
    Sprite { center: Vec2, size: f32 },
}

/// Records every call; used headless (native build, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn count_discs(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Disc { .. }))
            .count()
    }

    pub fn count_sprites(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, line_width: f32) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            color,
            line_width,
        });
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
        self.commands.push(DrawCommand::Ellipse {
            center,
            radii,
            color,
        });
    }

    fn fill_glow_disc(&mut self, center: Vec2, radius: f32, color: Color, blur: f32) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
            blur,
        });
    }

    fn draw_sprite(&mut self, center: Vec2, size: f32) {
        self.commands.push(DrawCommand::Sprite { center, size });
    }
}
