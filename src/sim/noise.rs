//! Smooth 3D value noise for animated backgrounds
//!
//! Lattice values come from a seeded permutation table; samples blend the
//! eight surrounding corners with a smoothstep fade. Octaves halve in
//! amplitude and double in frequency. Output is normalized to [0, 1].

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

/// Seeded noise field
#[derive(Debug, Clone)]
pub struct ValueNoise {
    /// 256-entry permutation, doubled to avoid index wrapping
    perm: [u8; 512],
    octaves: u32,
}

impl ValueNoise {
    pub fn new(seed: u64, octaves: u32) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut Pcg32::seed_from_u64(seed));

        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = table[i & 255];
        }
        Self {
            perm,
            octaves: octaves.max(1),
        }
    }

    /// Sample the field at (x, y, z), in [0, 1]
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 0.5;
        let mut max = 0.0;
        let mut freq = 1.0;
        for _ in 0..self.octaves {
            total += self.lattice(x * freq, y * freq, z * freq) * amplitude;
            max += amplitude;
            amplitude *= 0.5;
            freq *= 2.0;
        }
        total / max
    }

    fn lattice(&self, x: f32, y: f32, z: f32) -> f32 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let (xi, yi, zi) = (xf as i32, yf as i32, zf as i32);
        let (u, v, w) = (fade(x - xf), fade(y - yf), fade(z - zf));

        let c = |dx: i32, dy: i32, dz: i32| self.corner(xi + dx, yi + dy, zi + dz);

        let x00 = lerp(c(0, 0, 0), c(1, 0, 0), u);
        let x10 = lerp(c(0, 1, 0), c(1, 1, 0), u);
        let x01 = lerp(c(0, 0, 1), c(1, 0, 1), u);
        let x11 = lerp(c(0, 1, 1), c(1, 1, 1), u);

        lerp(lerp(x00, x10, v), lerp(x01, x11, v), w)
    }

    #[inline]
    fn corner(&self, x: i32, y: i32, z: i32) -> f32 {
        let p = |i: i32| self.perm[(i & 255) as usize] as i32;
        let h = p(p(p(x) + (y & 255)) + (z & 255));
        h as f32 / 255.0
    }
}

#[inline]
fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
