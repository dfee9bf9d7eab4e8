//! Site state
//!
//! One `AppState` owns every entity list. The frame driver and the input
//! handlers in `tick` are the only code that mutates it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::cube::Cube;
use super::effects::{Burst, Cooldown, Effects, NeonPulse, Ripple};
use super::emitter::{Beam, Emitter};
use super::layout::Layout;
use super::noise::ValueNoise;
use super::section::{ContactForm, View};
use super::segment::SegmentStore;
use super::swarm::Swarm;
use super::thumbnail::Thumbnail;
use crate::Settings;

/// Frames between ripples in the game overview
pub const RIPPLE_PERIOD: u32 = 15;
/// Frames between neon pulses in the contact overview
pub const PULSE_PERIOD: u32 = 5;
/// Hover target scale for the about panel and photo
pub const HOVER_SCALE: f32 = 1.05;
/// Fraction of the gap to the hover target closed each frame
pub const HOVER_SMOOTHING: f32 = 0.1;
/// Social detail arc orbit advance per frame (radians)
pub const SOCIAL_ORBIT_SPEED: f32 = 0.01;

/// Complete site state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Seed the RNG and noise were built from
    pub seed: u64,
    rng: Pcg32,
    pub settings: Settings,
    /// Canvas size in CSS pixels
    pub viewport: Vec2,
    pub view: View,
    /// Last known pointer position
    pub pointer: Vec2,
    /// Frames since startup
    pub frame: u64,

    pub walls: SegmentStore,
    /// Pointer-following light
    pub emitter: Emitter,
    /// Drifting lights, replaced on every overview scroll
    pub flashes: Vec<Emitter>,

    pub bursts: Effects<Burst>,
    pub ripples: Effects<Ripple>,
    pub pulses: Effects<NeonPulse>,
    pub ripple_cooldown: Cooldown,
    pub pulse_cooldown: Cooldown,
    pub swarm: Swarm,
    pub thumbnails: Vec<Thumbnail>,

    /// Background noise field
    pub noise: ValueNoise,
    pub cube: Cube,
    pub social_orbit: f32,
    /// Eased hover scale of the about text panel
    pub text_scale: f32,
    /// Eased hover scale of the about photo
    pub photo_scale: f32,
    pub contact_form: ContactForm,
}

impl AppState {
    /// Fresh landing state for a canvas of the given size
    pub fn new(viewport: Vec2, settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let step = settings.effective_ray_step();

        let mut walls = SegmentStore::new();
        walls.reset(
            settings.wall_count,
            viewport,
            settings.wall_rotation_speed,
            &mut rng,
        );
        let swarm = Swarm::new(settings.swarm_size, viewport, &mut rng);
        let thumbnails = Thumbnail::defaults(viewport, &mut rng);
        let noise = ValueNoise::new(seed, settings.quality.noise_octaves());

        log::info!(
            "Site state created: {}x{}, seed {}, {} rays per emitter",
            viewport.x,
            viewport.y,
            seed,
            (360.0 / step).ceil()
        );

        Self {
            seed,
            rng,
            viewport,
            view: View::Landing,
            pointer: viewport / 2.0,
            frame: 0,
            walls,
            emitter: Emitter::new(viewport / 2.0, step),
            flashes: Vec::new(),
            bursts: Effects::new(),
            ripples: Effects::new(),
            pulses: Effects::new(),
            ripple_cooldown: Cooldown::new(RIPPLE_PERIOD),
            pulse_cooldown: Cooldown::new(PULSE_PERIOD),
            swarm,
            thumbnails,
            noise,
            cube: Cube::default(),
            social_orbit: 0.0,
            text_scale: 1.0,
            photo_scale: 1.0,
            contact_form: ContactForm::Hidden,
            settings,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.viewport)
    }

    /// Replace the flash emitters with `count` new ones at random positions
    pub fn respawn_flashes(&mut self, count: usize) {
        let step = self.settings.effective_ray_step();
        let (w, h) = (self.viewport.x.max(1.0), self.viewport.y.max(1.0));
        self.flashes.clear();
        for _ in 0..count {
            let pos = Vec2::new(
                self.rng.random_range(0.0..w),
                self.rng.random_range(0.0..h),
            );
            let flash = Emitter::flash(pos, step, &mut self.rng);
            self.flashes.push(flash);
        }
    }

    /// Spray sparks from a point
    pub fn spawn_burst(&mut self, origin: Vec2) {
        let burst = Burst::new(origin, &mut self.rng);
        self.bursts.spawn(burst);
    }

    /// Canvas resized: adopt the new size and rebuild the walls around it
    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.walls.reset(
            self.settings.wall_count,
            viewport,
            self.settings.wall_rotation_speed,
            &mut self.rng,
        );
        let center = viewport / 2.0;
        for thumb in &mut self.thumbnails {
            thumb.center = center;
        }
    }

    /// Beams of the pointer emitter followed by every flash
    pub fn cast_rays(&self) -> Vec<Beam> {
        let walls = self.walls.current_segments();
        let mut beams = self.emitter.look(walls);
        for flash in &self.flashes {
            beams.extend(flash.look(walls));
        }
        beams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Vec2::new(800.0, 600.0), Settings::default(), 3)
    }

    #[test]
    fn test_new_state() {
        let s = state();
        assert_eq!(s.view, View::Landing);
        assert_eq!(s.walls.len(), 9);
        assert_eq!(s.swarm.len(), 10);
        assert_eq!(s.thumbnails.len(), 3);
        assert_eq!(s.emitter.ray_count(), 360);
        assert!(s.flashes.is_empty());
    }

    #[test]
    fn test_respawn_flashes_replaces() {
        let mut s = state();
        s.respawn_flashes(4);
        assert_eq!(s.flashes.len(), 4);
        s.respawn_flashes(2);
        assert_eq!(s.flashes.len(), 2);
        for f in &s.flashes {
            assert!(f.pos.x >= 0.0 && f.pos.x <= 800.0);
            assert!((f.vel.length() - crate::consts::FLASH_SPEED).abs() < 1e-4);
        }
    }

    #[test]
    fn test_every_ray_hits_inside_border() {
        let mut s = state();
        s.emitter.update(Some(Vec2::new(400.0, 300.0)));
        s.respawn_flashes(1);
        // Flash sits strictly inside the canvas, so the border catches every ray
        let beams = s.cast_rays();
        assert_eq!(beams.len(), 720);
    }

    #[test]
    fn test_resize_rebuilds_walls() {
        let mut s = state();
        s.resize(Vec2::new(1200.0, 900.0));
        assert_eq!(s.walls.len(), 9);
        let right = s.walls.current_segments()[6];
        assert_eq!(right.b, Vec2::new(1200.0, 900.0));
        assert_eq!(s.thumbnails[0].center, Vec2::new(600.0, 450.0));
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = state();
        let b = state();
        assert_eq!(a.walls.current_segments(), b.walls.current_segments());
    }
}
