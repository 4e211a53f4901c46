//! GPU-compatible data types for the line pipeline
//!
//! These types match the shader layouts exactly.

use bytemuck::{Pod, Zeroable};

/// One line endpoint in 3D
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
}

/// Uniforms for the line shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineUniforms {
    /// Combined projection * view matrix (column-major)
    pub view_proj: [[f32; 4]; 4],
    /// RGBA line color
    pub color: [f32; 4],
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self {
            view_proj: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
            color: [1.0; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_vertex_size() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 12);
    }

    #[test]
    fn test_uniforms_size_is_16_byte_aligned() {
        let size = std::mem::size_of::<LineUniforms>();
        assert_eq!(size, 80);
        assert_eq!(size % 16, 0);
    }

    #[test]
    fn test_points_cast_to_vertices() {
        let points = [[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let vertices: &[LineVertex] = bytemuck::cast_slice(&points[..]);
        assert_eq!(vertices[1].position, [4.0, 5.0, 6.0]);
    }
}
