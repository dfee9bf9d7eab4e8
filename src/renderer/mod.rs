//! WebGPU rendering module
//!
//! The scene is tessellated on the CPU into alpha-blended triangle lists
//! each frame and drawn in a single pass.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Frame, TexturedFace};
pub use vertex::{TexVertex, Vertex};
