//! Orbiting project thumbnails
//!
//! Thumbnails circle the canvas center. The orbit radius eases toward a
//! fraction of the pointer's distance from the center, so the ring breathes as
//! the pointer moves.

use glam::Vec2;
use rand::Rng;

/// Orbit angle advance per frame (radians)
const ORBIT_SPEED: f32 = 0.1;
/// Fraction of the radius gap closed each frame
const FOLLOW_STRENGTH: f32 = 0.1;
/// Pointer distance is divided by this to get the target orbit radius
const POINTER_RADIUS_DIVISOR: f32 = 10.0;

/// A rotating project card on an orbit around `center`
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub center: Vec2,
    pub orbit_radius: f32,
    pub orbit_angle: f32,
    pub size: Vec2,
    /// Self-rotation (radians)
    pub angle: f32,
    pub spin: f32,
    /// Fill color shown on hover (RGB, 0-1)
    pub color: [f32; 3],
    /// Position for the current frame
    pub pos: Vec2,
}

impl Thumbnail {
    /// Card initially placed at `start`, orbiting `center`
    pub fn new(start: Vec2, size: Vec2, center: Vec2, rng: &mut impl Rng) -> Self {
        use std::f32::consts::TAU;
        let orbit_radius = start.distance(center);
        let orbit_angle = rng.random_range(0.0..TAU);
        Self {
            center,
            orbit_radius,
            orbit_angle,
            size,
            angle: rng.random_range(0.0..TAU),
            spin: rng.random_range(0.005..0.02),
            color: [rng.random(), rng.random(), rng.random()],
            pos: center + Vec2::from_angle(orbit_angle) * orbit_radius,
        }
    }

    /// The three default cards for a canvas of the given size
    pub fn defaults(viewport: Vec2, rng: &mut impl Rng) -> Vec<Self> {
        let center = viewport / 2.0;
        [
            (Vec2::new(0.3, 0.4), Vec2::new(100.0, 70.0)),
            (Vec2::new(0.5, 0.5), Vec2::new(120.0, 80.0)),
            (Vec2::new(0.7, 0.4), Vec2::new(90.0, 90.0)),
        ]
        .into_iter()
        .map(|(at, size)| Self::new(viewport * at, size, center, rng))
        .collect()
    }

    pub fn update(&mut self, pointer: Vec2) {
        self.orbit_angle += ORBIT_SPEED;
        self.angle += self.spin;

        let target = pointer.distance(self.center) / POINTER_RADIUS_DIVISOR;
        self.orbit_radius += (target - self.orbit_radius) * FOLLOW_STRENGTH;

        self.pos = self.center + Vec2::from_angle(self.orbit_angle) * self.orbit_radius;
    }

    /// Hover test used for highlighting
    pub fn hovered(&self, pointer: Vec2) -> bool {
        let d = pointer.distance(self.pos);
        d < self.size.x / 2.0 || d < self.size.y / 2.0
    }

    /// Click test
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.pos) < self.size.max_element() / 2.0
    }
}
