//! Per-frame update
//!
//! One call per animation frame. While paused nothing is touched, so a
//! resumed animation picks up exactly where it stopped.

use super::state::SkyState;
use crate::renderer::{Surface, draw_scene};
use crate::settings::SpawnMode;

/// Spawn (when throttled), advance every entity and cull the expired ones.
/// Returns false if the frame was skipped because the state is paused.
pub fn tick(state: &mut SkyState, now_ms: f64) -> bool {
    if state.is_paused() {
        return false;
    }

    if state.settings.spawn_mode == SpawnMode::Throttled {
        state.spawn_throttled(now_ms);
    }

    state.fireworks.retain_mut(|fw| {
        fw.advance();
        !fw.is_spent()
    });
    state.balloons.retain_mut(|b| {
        b.advance();
        !b.is_gone()
    });
    state.roses.retain_mut(|r| {
        r.advance();
        !r.is_gone()
    });

    state.frame_count += 1;
    true
}

/// Full frame: clear the surface, tick, draw the survivors.
/// A paused frame leaves the surface untouched.
pub fn frame<S: Surface + ?Sized>(state: &mut SkyState, now_ms: f64, surface: &mut S) -> bool {
    if state.is_paused() {
        return false;
    }
    surface.clear(state.viewport.width, state.viewport.height);
    tick(state, now_ms);
    draw_scene(state, surface);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::renderer::{DrawCommand, RecordingSurface};
    use crate::settings::Settings;
    use glam::Vec2;
    use proptest::prelude::*;

    fn state() -> SkyState {
        SkyState::new(Settings::default(), 1280.0, 720.0, 9)
    }

    /// Snapshot of every entity for equality checks
    fn snapshot(s: &SkyState) -> String {
        serde_json::to_string(&(&s.fireworks, &s.balloons, &s.roses)).unwrap()
    }

    #[test]
    fn test_tick_spawns_then_culls() {
        let mut s = state();
        assert!(tick(&mut s, 0.0));
        assert_eq!(s.fireworks.len(), 1);
        assert_eq!(s.balloons.len(), 1);
        assert_eq!(s.roses.len(), 1);
        assert_eq!(s.frame_count, 1);
    }

    #[test]
    fn test_bursts_removed_when_spent() {
        let settings = Settings {
            balloons: false,
            roses: false,
            fireworks: false,
            ..Settings::default()
        };
        let mut s = SkyState::new(settings, 800.0, 600.0, 3);
        s.launch_burst(Vec2::new(100.0, 100.0));
        for i in 0..200 {
            tick(&mut s, i as f64 * FRAME_MS);
        }
        assert!(s.fireworks.is_empty());
    }

    #[test]
    fn test_floaters_leave_the_top() {
        let settings = Settings {
            fireworks: false,
            ..Settings::default()
        };
        let mut s = SkyState::new(settings, 800.0, 600.0, 4);
        s.spawn_balloon();
        s.spawn_rose();
        // Turn off further spawning
        s.settings.balloons = false;
        s.settings.roses = false;
        for i in 0..1000 {
            tick(&mut s, i as f64 * FRAME_MS);
        }
        assert!(s.balloons.is_empty());
        assert!(s.roses.is_empty());
    }

    #[test]
    fn test_paused_frames_change_nothing() {
        let mut s = state();
        for i in 0..30 {
            tick(&mut s, i as f64 * FRAME_MS);
        }
        s.set_visible(false);
        let before = snapshot(&s);
        let frames_before = s.frame_count;
        let mut surface = RecordingSurface::default();
        for i in 30..500 {
            assert!(!frame(&mut s, i as f64 * FRAME_MS, &mut surface));
        }
        assert_eq!(snapshot(&s), before);
        assert_eq!(s.frame_count, frames_before);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_resume_continues_from_same_state() {
        let settings = Settings {
            fireworks: false,
            roses: false,
            balloons: false,
            ..Settings::default()
        };
        let mut paused = SkyState::new(settings.clone(), 800.0, 600.0, 11);
        paused.spawn_balloon();
        let mut reference = paused.clone();

        paused.set_visible(false);
        for i in 0..100 {
            tick(&mut paused, i as f64 * FRAME_MS);
        }
        paused.set_visible(true);

        // One frame after resuming equals one frame without any pause
        tick(&mut paused, 10_000.0);
        tick(&mut reference, 0.0);
        assert_eq!(paused.balloons, reference.balloons);
    }

    #[test]
    fn test_timer_mode_does_not_spawn_in_loop() {
        let settings = Settings {
            spawn_mode: SpawnMode::Timers,
            ..Settings::default()
        };
        let mut s = SkyState::new(settings, 800.0, 600.0, 5);
        for i in 0..100 {
            tick(&mut s, i as f64 * FRAME_MS);
        }
        assert_eq!(s.live_count(), 0);
    }

    #[test]
    fn test_frame_clears_first() {
        let mut s = state();
        let mut surface = RecordingSurface::default();
        assert!(frame(&mut s, 0.0, &mut surface));
        assert!(matches!(
            surface.commands.first(),
            Some(DrawCommand::Clear { width, height }) if *width == 1280.0 && *height == 720.0
        ));
        assert!(surface.count_sprites() >= 1);
        assert!(surface.count_discs() > 0);
    }

    #[test]
    fn test_throttled_balloon_rate() {
        let settings = Settings {
            fireworks: false,
            roses: false,
            max_balloons: None,
            ..Settings::default()
        };
        let mut s = SkyState::new(settings, 800.0, 600.0, 6);
        // Just under 1s of frames at a 500ms interval: spawns at 0 and 500
        for i in 0..60 {
            tick(&mut s, i as f64 * FRAME_MS);
        }
        assert_eq!(s.balloons.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_cap_is_never_exceeded(seed in any::<u64>(), cap in 0usize..20, frames in 1usize..300) {
            let settings = Settings {
                max_fireworks: Some(cap),
                max_balloons: Some(cap),
                max_roses: Some(cap),
                firework_interval_ms: 0.0,
                balloon_interval_ms: 0.0,
                rose_interval_ms: 0.0,
                ..Settings::default()
            };
            let mut s = SkyState::new(settings, 1024.0, 768.0, seed);
            for i in 0..frames {
                tick(&mut s, i as f64 * FRAME_MS);
                prop_assert!(s.fireworks.len() <= cap);
                prop_assert!(s.balloons.len() <= cap);
                prop_assert!(s.roses.len() <= cap);
            }
        }
    }
}
