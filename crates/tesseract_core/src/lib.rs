//! Core state for the tesseract viewer
//!
//! - [`HypercubeState`] - live vertices, idle/interactive modes, reset, projection
//! - [`InteractionState`] - pointer drag tracking and the interaction latch
//! - [`ProjectedPositions`] - per-frame 3D endpoints of every edge
//! - [`RenderAdapter`] - boundary to whatever draws those endpoints

mod hypercube;
mod interaction;
mod positions;
mod render_adapter;

pub use hypercube::{
    HypercubeState, DEFAULT_DRAG_SENSITIVITY, DEFAULT_IDLE_SPEED, IDLE_PRIMARY_PLANE,
    IDLE_SECONDARY_PLANE, IDLE_SECONDARY_RATIO,
};
pub use interaction::InteractionState;
pub use positions::{ProjectedPositions, FLOAT_COUNT, POINT_COUNT};
pub use render_adapter::RenderAdapter;

// Re-export math types for convenience
pub use tesseract_math::{Edge, Projector, RotationPlane, Vec4};
