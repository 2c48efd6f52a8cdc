//! Drawing primitives needed by the scene

use glam::Vec2;

use crate::sim::Color;

/// A 2D drawing target.
///
/// Calls never fail: a backend that cannot honour one (e.g. a sprite that
/// has not loaded) simply draws nothing.
pub trait Surface {
    /// Clear the rectangle from the origin to (width, height)
    fn clear(&mut self, width: f32, height: f32);

    /// Stroke an open polyline
    fn stroke_polyline(&mut self, points: &[Vec2], color: Color, line_width: f32);

    /// Fill an axis-aligned ellipse
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);

    /// Fill a disc with a glow of `blur` pixels in the same colour
    fn fill_glow_disc(&mut self, center: Vec2, radius: f32, color: Color, blur: f32);

    /// Composite the rose sprite centred on `center`, `size` pixels square
    fn draw_sprite(&mut self, center: Vec2, size: f32);
}
