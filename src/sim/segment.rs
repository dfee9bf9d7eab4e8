//! Wall segments used as ray occluders
//!
//! A segment is either fixed in place or spins about its midpoint. Rotating
//! segments keep their length; only the phase changes from frame to frame.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Endpoints of a segment for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Endpoints {
    pub a: Vec2,
    pub b: Vec2,
}

impl Endpoints {
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.a.distance(self.b)
    }
}

/// A wall segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Fixed wall
    Static { a: Vec2, b: Vec2 },
    /// Wall spinning about its midpoint
    Rotating {
        center: Vec2,
        half_length: f32,
        /// Current phase (radians, never wrapped)
        phase: f32,
        /// Phase advance per frame (radians)
        angular_velocity: f32,
    },
}

impl Segment {
    /// Rotating wall spanning `a`-`b`, starting at the given phase
    pub fn rotating(a: Vec2, b: Vec2, phase: f32, angular_velocity: f32) -> Self {
        Segment::Rotating {
            center: a.lerp(b, 0.5),
            half_length: a.distance(b) / 2.0,
            phase,
            angular_velocity,
        }
    }

    /// Advance rotation by one frame (no-op for static walls)
    pub fn tick(&mut self) {
        if let Segment::Rotating {
            phase,
            angular_velocity,
            ..
        } = self
        {
            *phase += *angular_velocity;
        }
    }

    /// Endpoints at the current phase
    pub fn endpoints(&self) -> Endpoints {
        match *self {
            Segment::Static { a, b } => Endpoints::new(a, b),
            Segment::Rotating {
                center,
                half_length,
                phase,
                ..
            } => {
                let offset = Vec2::from_angle(phase) * half_length;
                Endpoints::new(center - offset, center + offset)
            }
        }
    }

    pub fn is_rotating(&self) -> bool {
        matches!(self, Segment::Rotating { .. })
    }
}

/// The set of walls rays are cast against
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentStore {
    segments: Vec<Segment>,
    /// Endpoints cached for the current frame (same order as `segments`)
    #[serde(skip)]
    current: Vec<Endpoints>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all walls with `count` random rotating walls inside `bounds`
    /// plus a rectangle enclosing `bounds` outset by one unit.
    pub fn reset(&mut self, count: usize, bounds: Vec2, angular_velocity: f32, rng: &mut impl Rng) {
        self.segments.clear();

        let (w, h) = (bounds.x.max(1.0), bounds.y.max(1.0));
        for _ in 0..count {
            let a = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
            let b = Vec2::new(rng.random_range(0.0..w), rng.random_range(0.0..h));
            let phase = rng.random_range(0.0..std::f32::consts::TAU);
            self.segments
                .push(Segment::rotating(a, b, phase, angular_velocity));
        }

        let (w, h) = (bounds.x, bounds.y);
        let corners = [
            Vec2::new(-1.0, -1.0),
            Vec2::new(w, -1.0),
            Vec2::new(w, h),
            Vec2::new(-1.0, h),
        ];
        for i in 0..4 {
            self.segments.push(Segment::Static {
                a: corners[i],
                b: corners[(i + 1) % 4],
            });
        }

        self.refresh();
        log::info!(
            "Segment store reset: {} rotating + 4 border walls in {}x{}",
            count,
            w,
            h
        );
    }

    /// Advance every rotating wall by one frame
    pub fn tick(&mut self) {
        for segment in &mut self.segments {
            segment.tick();
        }
        self.refresh();
    }

    /// Endpoints of every wall for the current frame
    pub fn current_segments(&self) -> &[Endpoints] {
        &self.current
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn refresh(&mut self) {
        self.current.clear();
        self.current
            .extend(self.segments.iter().map(Segment::endpoints));
    }
}
