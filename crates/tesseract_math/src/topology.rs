//! Tesseract (4D Hypercube) topology
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w)
//! and 32 edges. Two vertices share an edge when their indices differ
//! in exactly one bit.

use crate::vec4::{Axis, Vec4};

/// Number of hypercube vertices
pub const VERTEX_COUNT: usize = 16;
/// Number of hypercube edges (16 vertices * 4 incident edges / 2)
pub const EDGE_COUNT: usize = 32;

/// An edge between two vertex indices, with `a < b`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

impl Edge {
    /// Create an edge, ordering the endpoints
    #[inline]
    pub fn new(i: usize, j: usize) -> Self {
        if i < j {
            Self { a: i, b: j }
        } else {
            Self { a: j, b: i }
        }
    }

    /// Axis along which the two endpoints differ
    ///
    /// `None` unless the indices differ in exactly one of the four low bits.
    pub fn axis(&self) -> Option<Axis> {
        let diff = self.a ^ self.b;
        if diff.count_ones() != 1 {
            return None;
        }
        Axis::ALL.get(diff.trailing_zeros() as usize).copied()
    }
}

/// The vertices and edges of the unit hypercube
#[derive(Clone, Debug)]
pub struct HypercubeTopology {
    vertices: [Vec4; VERTEX_COUNT],
    edges: [Edge; EDGE_COUNT],
}

impl HypercubeTopology {
    /// Generate the 16 vertices and 32 edges
    pub fn generate() -> Self {
        let mut vertices = [Vec4::ZERO; VERTEX_COUNT];
        for (i, v) in vertices.iter_mut().enumerate() {
            *v = Self::vertex_position(i);
        }

        // Flip each bit in turn and keep the pair once, from its lower end
        let mut edges = [Edge::default(); EDGE_COUNT];
        let mut n = 0;
        for i in 0..VERTEX_COUNT {
            for k in 0..4 {
                let j = i ^ (1 << k);
                if i < j {
                    edges[n] = Edge { a: i, b: j };
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, EDGE_COUNT);

        Self { vertices, edges }
    }

    /// Position of vertex `index`: coordinate k is +1 if bit k is set, else -1
    pub fn vertex_position(index: usize) -> Vec4 {
        let mut v = Vec4::ZERO;
        for axis in Axis::ALL {
            v[axis] = if index & (1 << axis.index()) != 0 { 1.0 } else { -1.0 };
        }
        v
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        &self.edges
    }
}

impl Default for HypercubeTopology {
    fn default() -> Self {
        Self::generate()
    }
}
