//! Shape generation for 2D primitives
//!
//! Every generator returns a triangle list in pixel coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

#[inline]
fn push_tri(out: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        push_tri(
            &mut vertices,
            center,
            center + Vec2::from_angle(theta1) * radius,
            center + Vec2::from_angle(theta2) * radius,
            color,
        );
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    arc_band(center, inner_radius, outer_radius, 0.0, 2.0 * PI, color, segments)
}

/// Generate vertices for a thick arc band between two radii
pub fn arc_band(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    theta_start: f32,
    span: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = theta_start + (i as f32 / segments as f32) * span;
        let theta2 = theta_start + ((i + 1) as f32 / segments as f32) * span;

        let (d1, d2) = (Vec2::from_angle(theta1), Vec2::from_angle(theta2));
        let inner1 = center + d1 * inner_radius;
        let outer1 = center + d1 * outer_radius;
        let inner2 = center + d2 * inner_radius;
        let outer2 = center + d2 * outer_radius;

        // Two triangles per segment
        push_tri(&mut vertices, inner1, outer1, inner2, color);
        push_tri(&mut vertices, inner2, outer1, outer2, color);
    }

    vertices
}

/// Stroked circle outline of the given line width
pub fn circle_outline(center: Vec2, radius: f32, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let segments = ((radius * 0.5) as u32).clamp(16, 96);
    let half = width / 2.0;
    ring(center, (radius - half).max(0.0), radius + half, color, segments)
}

/// Line segment as a quad of the given width
pub fn line(a: Vec2, b: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = dir.perp() * (width / 2.0);

    let mut vertices = Vec::with_capacity(6);
    push_tri(&mut vertices, a + perp, a - perp, b + perp, color);
    push_tri(&mut vertices, b + perp, a - perp, b - perp, color);
    vertices
}

/// Filled convex quad from four corners in winding order
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    let mut vertices = Vec::with_capacity(6);
    push_tri(&mut vertices, a, b, c, color);
    push_tri(&mut vertices, a, c, d, color);
    vertices
}

/// Outline of a closed polygon
pub fn polygon_outline(corners: &[Vec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let n = corners.len();
    (0..n)
        .flat_map(|i| line(corners[i], corners[(i + 1) % n], width, color))
        .collect()
}

/// Axis-aligned filled rectangle (top-left origin)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    quad(rect_corners(pos + size / 2.0, size, 0.0), color)
}

/// Filled rectangle rotated about its center
pub fn rotated_rect(center: Vec2, size: Vec2, angle: f32, color: [f32; 4]) -> Vec<Vertex> {
    quad(rect_corners(center, size, angle), color)
}

/// Corners of a rectangle of `size` rotated by `angle` about `center`
pub fn rect_corners(center: Vec2, size: Vec2, angle: f32) -> [Vec2; 4] {
    let rot = Vec2::from_angle(angle);
    let h = size / 2.0;
    [
        Vec2::new(-h.x, -h.y),
        Vec2::new(h.x, -h.y),
        Vec2::new(h.x, h.y),
        Vec2::new(-h.x, h.y),
    ]
    .map(|corner| center + rot.rotate(corner))
}

/// Rectangle filled with a top-to-bottom color gradient
pub fn vertical_gradient(pos: Vec2, size: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    vec![
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y1, bottom),
        Vertex::new(x0, y1, bottom),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 10.0, [1.0; 4], 12).len(), 36);
        assert_eq!(ring(Vec2::ZERO, 5.0, 10.0, [1.0; 4], 12).len(), 72);
    }

    #[test]
    fn test_line_width() {
        let verts = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        for v in &verts {
            assert!((v.position[1].abs() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_rect_corners_rotate() {
        let corners = rect_corners(Vec2::ZERO, Vec2::new(2.0, 2.0), PI / 2.0);
        // (-1,-1) rotated a quarter turn lands on (1,-1)
        assert!((corners[0] - Vec2::new(1.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_rect_covers_bounds() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(100.0, 30.0), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 110.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 50.0);
    }
}
