//! Projected edge endpoint buffer
//!
//! Holds the 3D position of both endpoints of every hypercube edge.
//! The layout is fixed: edge `i` occupies points `2i` and `2i + 1`,
//! which is exactly what a line-list draw call consumes.

use tesseract_math::{Edge, Projector, Vec4, EDGE_COUNT, VERTEX_COUNT};

/// Number of projected points (two per edge)
pub const POINT_COUNT: usize = EDGE_COUNT * 2;
/// Number of floats in the flat view (three per point)
pub const FLOAT_COUNT: usize = POINT_COUNT * 3;

/// Fixed-size buffer of projected edge endpoints
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedPositions {
    points: [[f32; 3]; POINT_COUNT],
}

impl Default for ProjectedPositions {
    fn default() -> Self {
        Self {
            points: [[0.0; 3]; POINT_COUNT],
        }
    }
}

impl ProjectedPositions {
    /// Recompute every endpoint from the current vertices
    pub fn recompute(
        &mut self,
        vertices: &[Vec4; VERTEX_COUNT],
        edges: &[Edge; EDGE_COUNT],
        projector: &Projector,
    ) {
        // Each vertex is shared by 4 edges; project it once
        let mut projected = [[0.0f32; 3]; VERTEX_COUNT];
        for (out, &v) in projected.iter_mut().zip(vertices.iter()) {
            *out = projector.project(v);
        }

        for (i, edge) in edges.iter().enumerate() {
            self.points[2 * i] = projected[edge.a];
            self.points[2 * i + 1] = projected[edge.b];
        }
    }

    /// Endpoints as 3D points, two per edge
    #[inline]
    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    /// Endpoints as a flat `[x0, y0, z0, x1, ...]` slice
    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points[..])
    }

    /// Both endpoints of edge `index`
    pub fn segment(&self, index: usize) -> Option<([f32; 3], [f32; 3])> {
        if index < EDGE_COUNT {
            Some((self.points[2 * index], self.points[2 * index + 1]))
        } else {
            None
        }
    }

    /// Whether every coordinate is finite
    pub fn is_finite(&self) -> bool {
        self.as_floats().iter().all(|c| c.is_finite())
    }
}
