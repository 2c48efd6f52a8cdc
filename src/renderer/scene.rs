//! Entity drawing

use glam::Vec2;

use super::surface::Surface;
use crate::consts::STRING_WIDTH;
use crate::sim::{Balloon, Color, Firework, Rose, SkyState};

/// Glowing disc per surviving particle
pub fn render_firework<S: Surface + ?Sized>(firework: &Firework, glow: f32, surface: &mut S) {
    for particle in &firework.particles {
        surface.fill_glow_disc(particle.pos, particle.size, particle.color, glow);
    }
}

/// String first so the body covers its top end, then body and highlight
pub fn render_balloon<S: Surface + ?Sized>(balloon: &Balloon, surface: &mut S) {
    let pos = balloon.pos();
    let size = balloon.size;

    surface.stroke_polyline(&balloon.string_points(), Color::WHITE, STRING_WIDTH);
    surface.fill_ellipse(pos, Vec2::new(size / 2.0, size * 0.6), balloon.color);
    surface.fill_ellipse(
        pos - Vec2::splat(size / 4.0),
        Vec2::splat(size / 6.0),
        Color::GLOSS,
    );
}

pub fn render_rose<S: Surface + ?Sized>(rose: &Rose, surface: &mut S) {
    surface.draw_sprite(rose.pos(), rose.size);
}

/// Draw every live entity: bursts, then balloons, then roses
pub fn draw_scene<S: Surface + ?Sized>(state: &SkyState, surface: &mut S) {
    let glow = state.settings.quality.glow_blur();
    for firework in &state.fireworks {
        render_firework(firework, glow, surface);
    }
    for balloon in &state.balloons {
        render_balloon(balloon, surface);
    }
    for rose in &state.roses {
        render_rose(rose, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;
    use crate::sim::Viewport;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_balloon_draw_order() {
        let mut rng = Pcg32::seed_from_u64(1);
        let viewport = Viewport::new(800.0, 600.0, 1024.0);
        let balloon = Balloon::random(1, &viewport, &mut rng);
        let mut surface = RecordingSurface::default();
        render_balloon(&balloon, &mut surface);

        assert_eq!(surface.commands.len(), 3);
        assert!(matches!(&surface.commands[0], DrawCommand::Polyline { color, .. } if *color == Color::WHITE));
        match &surface.commands[1] {
            DrawCommand::Ellipse { center, radii, color } => {
                assert_eq!(*center, balloon.pos());
                assert_eq!(*radii, Vec2::new(balloon.size / 2.0, balloon.size * 0.6));
                assert_eq!(*color, balloon.color);
            }
            other => panic!("expected body ellipse, got {:?}", other),
        }
        assert!(matches!(&surface.commands[2], DrawCommand::Ellipse { color, .. } if *color == Color::GLOSS));
    }

    #[test]
    fn test_scene_draws_every_entity() {
        let mut state = SkyState::new(Settings::default(), 1280.0, 720.0, 2);
        state.launch_burst(Vec2::new(10.0, 10.0));
        state.spawn_balloon();
        state.spawn_rose();
        state.spawn_rose();

        let mut surface = RecordingSurface::default();
        draw_scene(&state, &mut surface);
        assert_eq!(surface.count_discs(), state.fireworks[0].particles.len());
        assert_eq!(surface.count_sprites(), 2);
    }

    #[test]
    fn test_glow_follows_quality() {
        let settings = Settings::from_preset(crate::QualityPreset::Low);
        let mut state = SkyState::new(settings, 1280.0, 720.0, 3);
        state.launch_burst(Vec2::ZERO);
        let mut surface = RecordingSurface::default();
        draw_scene(&state, &mut surface);
        assert!(surface
            .commands
            .iter()
            .all(|c| matches!(c, DrawCommand::Disc { blur, .. } if *blur == 0.0)));
    }
}
