//! Pointer-shy particle swarm for the social overview
//!
//! Particles drift, bounce off the canvas edges, flee the pointer, and link up
//! with nearby neighbours.

use glam::Vec2;
use rand::Rng;

use crate::{map_range, random_unit};

/// Pointer distance that triggers repulsion (px)
pub const REPEL_RADIUS: f32 = 50.0;
/// Magnitude of the repulsion force
pub const REPEL_FORCE: f32 = 0.5;
/// Pair distance below which particles are linked (px)
pub const LINK_DISTANCE: f32 = 150.0;
/// Acceleration damping per frame
const ACC_DAMPING: f32 = 0.9;

/// One swarm particle
#[derive(Debug, Clone)]
pub struct SwarmParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    pub size: f32,
}

impl SwarmParticle {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: random_unit(rng) * 0.5,
            acc: Vec2::ZERO,
            size: 30.0,
        }
    }

    /// Integrate one frame, reflecting velocity on the axis that left `bounds`
    pub fn update(&mut self, bounds: Vec2) {
        self.vel += self.acc;
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
        self.acc *= ACC_DAMPING;
    }

    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }
}

/// A link drawn between two close particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    /// 0-255, fading linearly to zero at `LINK_DISTANCE`
    pub alpha: f32,
}

/// The whole swarm
#[derive(Debug, Clone, Default)]
pub struct Swarm {
    pub particles: Vec<SwarmParticle>,
}

impl Swarm {
    /// `count` particles at random positions within `bounds`
    pub fn new(count: usize, bounds: Vec2, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(0.0..bounds.x.max(1.0)),
                    rng.random_range(0.0..bounds.y.max(1.0)),
                );
                SwarmParticle::new(pos, rng)
            })
            .collect();
        Self { particles }
    }

    /// Move every particle, then push the ones near the pointer away from it
    pub fn update(&mut self, bounds: Vec2, pointer: Vec2) {
        for p in &mut self.particles {
            p.update(bounds);
            if p.pos.distance(pointer) < REPEL_RADIUS {
                let away = (p.pos - pointer).normalize_or_zero();
                p.apply_force(away * REPEL_FORCE);
            }
        }
    }

    /// Links between every pair closer than `LINK_DISTANCE`
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d = a.pos.distance(b.pos);
                if d < LINK_DISTANCE {
                    links.push(Link {
                        a: a.pos,
                        b: b.pos,
                        alpha: link_alpha(d),
                    });
                }
            }
        }
        links
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// 255 at distance 0, 0 at `LINK_DISTANCE`
#[inline]
pub fn link_alpha(distance: f32) -> f32 {
    map_range(distance, (0.0, LINK_DISTANCE), (255.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn particle(pos: Vec2, vel: Vec2) -> SwarmParticle {
        SwarmParticle {
            pos,
            vel,
            acc: Vec2::ZERO,
            size: 30.0,
        }
    }

    #[test]
    fn test_swarm_spawn() {
        let mut rng = Pcg32::seed_from_u64(5);
        let swarm = Swarm::new(10, Vec2::new(800.0, 600.0), &mut rng);
        assert_eq!(swarm.len(), 10);
        for p in &swarm.particles {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!((p.vel.length() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_bounce_right_edge() {
        let mut p = particle(Vec2::new(799.8, 300.0), Vec2::new(0.5, 0.25));
        p.update(Vec2::new(800.0, 600.0));
        assert_eq!(p.vel, Vec2::new(-0.5, 0.25));
    }

    #[test]
    fn test_bounce_top_edge() {
        let mut p = particle(Vec2::new(400.0, 0.1), Vec2::new(0.3, -0.5));
        p.update(Vec2::new(800.0, 600.0));
        assert_eq!(p.vel, Vec2::new(0.3, 0.5));
    }

    #[test]
    fn test_repulsion_pushes_away() {
        let mut swarm = Swarm {
            particles: vec![particle(Vec2::new(100.0, 100.0), Vec2::ZERO)],
        };
        swarm.update(Vec2::new(800.0, 600.0), Vec2::new(90.0, 100.0));
        let p = &swarm.particles[0];
        assert!((p.acc - Vec2::new(0.5, 0.0)).length() < 1e-5);

        // Force shows up in velocity on the next frame, then decays
        swarm.update(Vec2::new(800.0, 600.0), Vec2::new(-1000.0, -1000.0));
        let p = &swarm.particles[0];
        assert!(p.vel.x > 0.0);
        assert!((p.acc.x - 0.45).abs() < 1e-5);
    }

    #[test]
    fn test_no_repulsion_outside_radius() {
        let mut swarm = Swarm {
            particles: vec![particle(Vec2::new(100.0, 100.0), Vec2::ZERO)],
        };
        swarm.update(Vec2::new(800.0, 600.0), Vec2::new(200.0, 100.0));
        assert_eq!(swarm.particles[0].acc, Vec2::ZERO);
    }

    #[test]
    fn test_links_fade_with_distance() {
        let swarm = Swarm {
            particles: vec![
                particle(Vec2::new(0.0, 0.0), Vec2::ZERO),
                particle(Vec2::new(75.0, 0.0), Vec2::ZERO),
                particle(Vec2::new(400.0, 0.0), Vec2::ZERO),
            ],
        };
        let links = swarm.links();
        assert_eq!(links.len(), 1);
        assert!((links[0].alpha - 127.5).abs() < 1e-3);
        assert_eq!(link_alpha(0.0), 255.0);
        assert_eq!(link_alpha(LINK_DISTANCE), 0.0);
    }

    proptest! {
        #[test]
        fn prop_reflection_only_on_crossed_axis(
            x in -50.0f32..850.0, y in -50.0f32..650.0,
            vx in -3.0f32..3.0, vy in -3.0f32..3.0,
        ) {
            let bounds = Vec2::new(800.0, 600.0);
            let mut p = particle(Vec2::new(x, y), Vec2::new(vx, vy));
            p.update(bounds);
            let out_x = p.pos.x < 0.0 || p.pos.x > bounds.x;
            let out_y = p.pos.y < 0.0 || p.pos.y > bounds.y;
            prop_assert_eq!(p.vel.x, if out_x { -vx } else { vx });
            prop_assert_eq!(p.vel.y, if out_y { -vy } else { vy });
        }
    }
}
