//! Short-lived decorative effects
//!
//! Every effect entity owns a decaying life measure. Collections update all
//! entities, then drop the ones whose life has crossed their threshold, so an
//! expired entity is never updated or drawn again.

use glam::Vec2;
use rand::Rng;

use crate::random_unit;

/// An entity with a finite lifetime
pub trait Transient {
    /// Advance motion and decay life by one frame
    fn update(&mut self);
    /// Whether the entity has expired
    fn finished(&self) -> bool;
}

/// Ordered collection of transient entities
#[derive(Debug, Clone)]
pub struct Effects<T> {
    items: Vec<T>,
}

impl<T> Default for Effects<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Transient> Effects<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn update(&mut self) {
        for item in &mut self.items {
            item.update();
        }
    }

    /// Remove every expired entity, keeping order
    pub fn prune(&mut self) {
        self.items.retain(|item| !item.finished());
    }

    /// Update then prune
    pub fn step(&mut self) {
        self.update();
        self.prune();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Particles per burst
pub const BURST_SIZE: usize = 50;

/// One spark of a burst
#[derive(Debug, Clone)]
pub struct BurstParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 255 at birth, fades 4 per frame
    pub life: f32,
}

impl BurstParticle {
    pub const LIFE: f32 = 255.0;
    pub const DECAY: f32 = 4.0;

    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: random_unit(rng) * rng.random_range(2.0f32..5.0),
            life: Self::LIFE,
        }
    }
}

impl Transient for BurstParticle {
    fn update(&mut self) {
        self.pos += self.vel;
        self.life -= Self::DECAY;
    }

    fn finished(&self) -> bool {
        self.life < 0.0
    }
}

/// A radial spray of sparks; finished once every spark has faded
#[derive(Debug, Clone)]
pub struct Burst {
    pub origin: Vec2,
    pub particles: Effects<BurstParticle>,
}

impl Burst {
    pub fn new(origin: Vec2, rng: &mut impl Rng) -> Self {
        let mut particles = Effects::new();
        for _ in 0..BURST_SIZE {
            particles.spawn(BurstParticle::new(origin, rng));
        }
        Self { origin, particles }
    }
}

impl Transient for Burst {
    fn update(&mut self) {
        self.particles.step();
    }

    fn finished(&self) -> bool {
        self.particles.is_empty()
    }
}

/// Expanding white ring
#[derive(Debug, Clone)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Ripple {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: 0.0,
            alpha: 255.0,
        }
    }
}

impl Transient for Ripple {
    fn update(&mut self) {
        self.radius += 1.0;
        self.alpha -= 2.0;
    }

    fn finished(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Expanding cyan ring, faster and shorter-lived than a ripple
#[derive(Debug, Clone)]
pub struct NeonPulse {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl NeonPulse {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            radius: 5.0,
            alpha: 200.0,
        }
    }
}

impl Transient for NeonPulse {
    fn update(&mut self) {
        self.radius += 2.0;
        self.alpha -= 5.0;
    }

    fn finished(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Frame countdown for periodic spawning
///
/// Fires on the first call, then once every `period` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cooldown {
    period: u32,
    remaining: u32,
}

impl Cooldown {
    pub fn new(period: u32) -> Self {
        Self {
            period: period.max(1),
            remaining: 0,
        }
    }

    /// Count down one frame; true when the effect should spawn
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            self.remaining = self.period - 1;
            true
        } else {
            self.remaining -= 1;
            false
        }
    }

    /// Restart so the next tick fires
    pub fn reset(&mut self) {
        self.remaining = 0;
    }
}
