//! Light emitters
//!
//! An emitter is a point with a fixed fan of ray directions. Every frame each
//! ray is cast against the current walls and the nearest hit becomes a beam.

use glam::Vec2;
use rand::Rng;

use super::ray::Ray;
use super::segment::Endpoints;
use crate::consts::FLASH_SPEED;
use crate::random_unit;

/// A visible ray from an emitter to its nearest wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub from: Vec2,
    pub to: Vec2,
}

/// A point light casting a fan of rays
#[derive(Debug, Clone)]
pub struct Emitter {
    pub pos: Vec2,
    /// Drift per frame (zero for the pointer-following emitter)
    pub vel: Vec2,
    /// Ray directions at evenly spaced angles, in angle order
    dirs: Vec<Vec2>,
}

impl Emitter {
    /// Stationary emitter with one ray every `step_degrees`
    pub fn new(pos: Vec2, step_degrees: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            dirs: ray_directions(step_degrees),
        }
    }

    /// Drifting emitter launched in a random direction
    pub fn flash(pos: Vec2, step_degrees: f32, rng: &mut impl Rng) -> Self {
        Self {
            vel: random_unit(rng) * FLASH_SPEED,
            ..Self::new(pos, step_degrees)
        }
    }

    /// Move to an explicit position, or drift by velocity when `None`
    pub fn update(&mut self, target: Option<Vec2>) {
        match target {
            Some(pos) => self.pos = pos,
            None => self.pos += self.vel,
        }
    }

    pub fn ray_count(&self) -> usize {
        self.dirs.len()
    }

    /// Rays for the current frame, originating at the emitter position
    pub fn rays(&self) -> impl Iterator<Item = Ray> + '_ {
        self.dirs.iter().map(move |&dir| Ray::new(self.pos, dir))
    }

    /// Cast every ray against `walls`, yielding a beam per ray that hits
    pub fn look(&self, walls: &[Endpoints]) -> Vec<Beam> {
        self.rays()
            .filter_map(|ray| {
                ray.nearest_hit(walls).map(|to| Beam {
                    from: self.pos,
                    to,
                })
            })
            .collect()
    }
}

/// Unit directions from 0 up to (but excluding) 360 degrees
fn ray_directions(step_degrees: f32) -> Vec<Vec2> {
    let step = if step_degrees > 0.0 { step_degrees } else { 1.0 };
    let count = (360.0 / step).ceil() as usize;
    (0..count)
        .map(|i| Vec2::from_angle((i as f32 * step).to_radians()))
        .collect()
}
