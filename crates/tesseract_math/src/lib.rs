//! 4D Mathematics Library
//!
//! This crate provides the geometric building blocks of the tesseract viewer.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components
//! - [`RotationPlane`] - One of the 6 coordinate planes of 4D space
//! - [`HypercubeTopology`] - The 16 vertices and 32 edges of a tesseract
//! - [`Projector`] - Perspective projection from 4D to 3D

mod vec4;
pub mod rotation;
pub mod topology;
pub mod projection;

pub use vec4::{Axis, Vec4};
pub use rotation::{rotate_in_plane, PlaneParseError, RotationPlane};
pub use topology::{Edge, HypercubeTopology, EDGE_COUNT, VERTEX_COUNT};
pub use projection::Projector;
