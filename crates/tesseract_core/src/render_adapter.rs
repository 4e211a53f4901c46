//! Rendering boundary
//!
//! The core never talks to a GPU or window directly. Each frame it hands the
//! projected edge endpoints to whatever implements [`RenderAdapter`].

use crate::positions::ProjectedPositions;

/// Consumer of projected edge endpoints
///
/// Implementations draw one line segment per consecutive pair of points in
/// [`ProjectedPositions::points`] using their own camera.
pub trait RenderAdapter {
    /// Error raised by the backend (lost surfaces and the like)
    type Error;

    /// Draw the current frame's segments
    fn draw_segments(&mut self, positions: &ProjectedPositions) -> Result<(), Self::Error>;

    /// The output surface changed size; update viewport and aspect ratio
    fn resize(&mut self, width: u32, height: u32);
}
