//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position (pixels until mapped to NDC) and RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Vertex of a textured face
///
/// `w` is the perspective divisor of the corner; the vertex shader scales the
/// clip position by it so texture coordinates interpolate in 3D.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TexVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub w: f32,
}

impl TexVertex {
    pub const fn new(x: f32, y: f32, uv: [f32; 2], w: f32) -> Self {
        Self {
            position: [x, y],
            uv,
            w,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TexVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 16,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32,
                },
            ],
        }
    }
}

/// Site palette (RGBA, 0-1)
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const CYAN: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
    /// Rays are faint so overlapping fans read as light
    pub const RAY: [f32; 4] = [1.0, 1.0, 1.0, 100.0 / 255.0];
    pub const MENU_BACKDROP: [f32; 4] = [0.0, 0.0, 0.0, 150.0 / 255.0];
    pub const BACK_BUTTON: [f32; 4] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 200.0 / 255.0];
    pub const ABOUT_PANEL: [f32; 4] = [200.0 / 255.0, 50.0 / 255.0, 250.0 / 255.0, 180.0 / 255.0];
    pub const CONTACT_BASE: [f32; 4] = [10.0 / 255.0, 10.0 / 255.0, 80.0 / 255.0, 1.0];
    pub const SOCIAL_BASE: [f32; 4] = [40.0 / 255.0, 0.0, 60.0 / 255.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
