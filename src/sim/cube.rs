//! Spinning cube for the projects detail view
//!
//! The cube is rotated about X and Y, projected with a simple perspective
//! divide, and returned as back-to-front quads ready to texture. Six faces
//! share three portfolio images, each image showing on opposite-facing pairs.

use glam::{Mat3, Vec2, Vec3};

/// Rotation per frame about each axis (radians)
pub const CUBE_SPIN: f32 = 0.005;
/// Edge length in px
pub const CUBE_SIZE: f32 = 400.0;
/// Camera distance used for the perspective divide
const CAMERA_DISTANCE: f32 = 800.0;

/// Corner indices of each face (front, right, back, left, top, bottom)
const FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [1, 5, 6, 2],
    [5, 4, 7, 6],
    [4, 0, 3, 7],
    [4, 5, 1, 0],
    [3, 2, 6, 7],
];

/// Image slot shown on each face
pub const FACE_TEXTURES: [usize; 6] = [0, 1, 2, 0, 1, 2];
/// Number of distinct face images
pub const TEXTURE_COUNT: usize = 3;
/// Texture coordinates of each face corner, in `FACES` order
pub const FACE_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// A projected cube face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeFace {
    /// Face index into `FACES`
    pub index: usize,
    /// Image slot from `FACE_TEXTURES`
    pub texture: usize,
    pub corners: [Vec2; 4],
    /// Perspective divisor at each corner, for perspective-correct sampling
    pub w: [f32; 4],
    /// Mean view-space depth (larger is farther)
    pub depth: f32,
}

/// Rotation state of the cube
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cube {
    pub angle: f32,
}

impl Cube {
    pub fn tick(&mut self) {
        self.angle += CUBE_SPIN;
    }

    /// Faces projected around `center`, sorted far to near
    pub fn faces(&self, center: Vec2, size: f32) -> Vec<CubeFace> {
        let h = size / 2.0;
        let rotation = Mat3::from_rotation_y(self.angle) * Mat3::from_rotation_x(self.angle);
        let corners: Vec<Vec3> = [
            Vec3::new(-h, -h, h),
            Vec3::new(h, -h, h),
            Vec3::new(h, h, h),
            Vec3::new(-h, h, h),
            Vec3::new(-h, -h, -h),
            Vec3::new(h, -h, -h),
            Vec3::new(h, h, -h),
            Vec3::new(-h, h, -h),
        ]
        .into_iter()
        .map(|v| rotation * v)
        .collect();

        // Front of the cube faces the viewer at +z
        let divisor = |v: Vec3| (CAMERA_DISTANCE - v.z).max(1.0) / CAMERA_DISTANCE;
        let project = |v: Vec3| center + Vec2::new(v.x, v.y) / divisor(v);

        let mut faces: Vec<CubeFace> = FACES
            .iter()
            .enumerate()
            .map(|(index, ids)| CubeFace {
                index,
                texture: FACE_TEXTURES[index],
                corners: ids.map(|i| project(corners[i])),
                w: ids.map(|i| divisor(corners[i])),
                depth: -ids.iter().map(|&i| corners[i].z).sum::<f32>() / 4.0,
            })
            .collect();
        faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrotated_front_face_is_nearest() {
        let cube = Cube::default();
        let faces = cube.faces(Vec2::ZERO, CUBE_SIZE);
        assert_eq!(faces.len(), 6);
        assert_eq!(faces.last().unwrap().index, 0);
        assert_eq!(faces.first().unwrap().index, 2);
    }

    #[test]
    fn test_faces_sorted_far_to_near() {
        let mut cube = Cube::default();
        for _ in 0..137 {
            cube.tick();
        }
        let faces = cube.faces(Vec2::new(400.0, 300.0), CUBE_SIZE);
        for pair in faces.windows(2) {
            assert!(pair[0].depth >= pair[1].depth);
        }
    }

    #[test]
    fn test_faces_carry_their_image_slot() {
        let mut cube = Cube::default();
        for _ in 0..50 {
            cube.tick();
        }
        let faces = cube.faces(Vec2::ZERO, CUBE_SIZE);
        for face in &faces {
            assert_eq!(face.texture, FACE_TEXTURES[face.index]);
            assert!(face.texture < TEXTURE_COUNT);
        }
        // Front and back show different images
        assert_ne!(FACE_TEXTURES[0], FACE_TEXTURES[2]);
    }

    #[test]
    fn test_front_face_divisor() {
        let faces = Cube::default().faces(Vec2::ZERO, CUBE_SIZE);
        let front = faces.last().unwrap();
        // z = 200 on the front face, so every corner sits at (800 - 200) / 800
        for w in front.w {
            assert!((w - 0.75).abs() < 1e-6);
        }
        assert!((front.corners[0] - Vec2::new(-200.0 / 0.75, -200.0 / 0.75)).length() < 1e-3);
    }

    #[test]
    fn test_tick_spins() {
        let mut cube = Cube::default();
        cube.tick();
        cube.tick();
        assert!((cube.angle - 2.0 * CUBE_SPIN).abs() < 1e-7);
    }
}
