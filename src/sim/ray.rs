//! Ray-segment intersection
//!
//! Rays are tested against finite wall segments using the determinant form of
//! the two parametric lines. `t` parameterizes the segment (A + t(B - A)) and
//! `u` the ray (O + uD); a hit needs `0 < t < 1` and `u > 0`, both strict.

use glam::Vec2;

use super::segment::Endpoints;

/// A half-infinite ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec2,
    /// Unit direction
    pub dir: Vec2,
}

impl Ray {
    pub fn new(origin: Vec2, dir: Vec2) -> Self {
        Self { origin, dir }
    }

    /// Ray leaving `origin` at `angle` radians
    pub fn from_angle(origin: Vec2, angle: f32) -> Self {
        Self::new(origin, Vec2::from_angle(angle))
    }

    /// Intersection with a segment, if the ray crosses it
    #[inline]
    pub fn cast(&self, wall: &Endpoints) -> Option<Vec2> {
        ray_segment_intersection(self.origin, self.dir, wall.a, wall.b)
    }

    /// Nearest intersection among `walls`; ties keep the first wall found
    pub fn nearest_hit(&self, walls: &[Endpoints]) -> Option<Vec2> {
        let mut closest = None;
        let mut record = f32::INFINITY;
        for wall in walls {
            if let Some(pt) = self.cast(wall) {
                let d = self.origin.distance(pt);
                if d < record {
                    record = d;
                    closest = Some(pt);
                }
            }
        }
        closest
    }
}

/// Intersect ray (`origin`, `dir`) with the finite segment `a`-`b`
///
/// Returns `None` for parallel or collinear inputs (zero determinant).
pub fn ray_segment_intersection(origin: Vec2, dir: Vec2, a: Vec2, b: Vec2) -> Option<Vec2> {
    let (x1, y1) = (a.x, a.y);
    let (x2, y2) = (b.x, b.y);
    let (x3, y3) = (origin.x, origin.y);
    let (x4, y4) = (origin.x + dir.x, origin.y + dir.y);

    let den = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if den == 0.0 {
        return None;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / den;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / den;

    if t > 0.0 && t < 1.0 && u > 0.0 {
        Some(Vec2::new(x1 + t * (x2 - x1), y1 + t * (y2 - y1)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wall(ax: f32, ay: f32, bx: f32, by: f32) -> Endpoints {
        Endpoints::new(Vec2::new(ax, ay), Vec2::new(bx, by))
    }

    fn border(w: f32, h: f32) -> Vec<Endpoints> {
        vec![
            wall(-1.0, -1.0, w, -1.0),
            wall(w, -1.0, w, h),
            wall(w, h, -1.0, h),
            wall(-1.0, h, -1.0, -1.0),
        ]
    }

    #[test]
    fn test_cast_hits_vertical_wall() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let hit = ray.cast(&wall(10.0, -10.0, 10.0, 10.0)).unwrap();
        assert!((hit - Vec2::new(10.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_cast_ignores_wall_behind_origin() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(ray.cast(&wall(-10.0, -10.0, -10.0, 10.0)).is_none());
    }

    #[test]
    fn test_cast_is_unbounded_forward() {
        // Far beyond the direction vector's own length
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let hit = ray.cast(&wall(5000.0, -1.0, 5000.0, 1.0)).unwrap();
        assert!((hit.x - 5000.0).abs() < 1e-2);
    }

    #[test]
    fn test_cast_misses_past_segment_end() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(ray.cast(&wall(10.0, 1.0, 10.0, 20.0)).is_none());
    }

    #[test]
    fn test_cast_endpoint_exclusive() {
        // Ray passes exactly through endpoint A (t == 0)
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(ray.cast(&wall(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    #[test]
    fn test_parallel_is_none() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert!(ray.cast(&wall(0.0, 5.0, 100.0, 5.0)).is_none());
        // Collinear
        assert!(ray.cast(&wall(5.0, 0.0, 10.0, 0.0)).is_none());
    }

    #[test]
    fn test_nearest_hit_picks_closest() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        let walls = [wall(30.0, -5.0, 30.0, 5.0), wall(10.0, -5.0, 10.0, 5.0)];
        let hit = ray.nearest_hit(&walls).unwrap();
        assert!((hit.x - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_hit_first_wins_ties() {
        let ray = Ray::new(Vec2::ZERO, Vec2::new(1.0, 0.0));
        // Two walls crossing the ray at the same point
        let walls = [wall(10.0, -5.0, 10.0, 5.0), wall(5.0, -5.0, 15.0, 5.0)];
        let hit = ray.nearest_hit(&walls).unwrap();
        assert!((hit - Vec2::new(10.0, 0.0)).length() < 1e-5);
        assert!(ray.nearest_hit(&[]).is_none());
    }

    #[test]
    fn test_border_hit_from_center() {
        let walls = border(800.0, 600.0);
        let origin = Vec2::new(400.0, 300.0);
        for deg in 0..360 {
            let ray = Ray::from_angle(origin, (deg as f32).to_radians());
            assert!(ray.nearest_hit(&walls).is_some(), "ray at {} deg missed", deg);
        }
    }

    proptest! {
        #[test]
        fn prop_parallel_never_hits(
            ox in -500.0f32..500.0, oy in -500.0f32..500.0,
            offset in -200.0f32..200.0, start in -300.0f32..300.0, len in 1.0f32..300.0,
        ) {
            // Axis-aligned directions keep den exactly zero in floating point
            for dir in [Vec2::X, Vec2::Y, -Vec2::X, -Vec2::Y] {
                let normal = dir.perp();
                let a = Vec2::new(ox, oy) + normal * offset + dir * start;
                let b = a + dir * len;
                prop_assert!(ray_segment_intersection(Vec2::new(ox, oy), dir, a, b).is_none());
            }
        }

        #[test]
        fn prop_interior_point_hits_border(
            x in 1.0f32..799.0, y in 1.0f32..599.0, deg in 0u32..360,
        ) {
            let walls = border(800.0, 600.0);
            let ray = Ray::from_angle(Vec2::new(x, y), (deg as f32).to_radians());
            let hit = ray.nearest_hit(&walls);
            prop_assert!(hit.is_some());
            let hit = hit.unwrap();
            let on_x = (hit.x + 1.0).abs() < 0.05 || (hit.x - 800.0).abs() < 0.05;
            let on_y = (hit.y + 1.0).abs() < 0.05 || (hit.y - 600.0).abs() < 0.05;
            prop_assert!(on_x || on_y);
        }
    }
}
