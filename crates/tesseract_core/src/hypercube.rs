//! Live hypercube state
//!
//! Owns the rotated vertex set, the base snapshot used by reset, the
//! selected drag plane and the projected edge buffer. Two modes:
//!
//! - Autonomous: from creation until the first pointer press. Every tick
//!   rotates in XW at the idle speed and in YZ at 0.7x that speed.
//! - Interactive: entered on the first pointer press and never left. Only
//!   drags rotate, in the selected plane.

use tesseract_math::{
    Edge, HypercubeTopology, Projector, RotationPlane, Vec4, EDGE_COUNT, VERTEX_COUNT,
};

use crate::interaction::InteractionState;
use crate::positions::ProjectedPositions;
use crate::render_adapter::RenderAdapter;

/// Default idle rotation per tick in the primary idle plane (radians)
pub const DEFAULT_IDLE_SPEED: f32 = 0.005;
/// Secondary idle plane speed relative to the primary
pub const IDLE_SECONDARY_RATIO: f32 = 0.7;
/// Primary idle plane, axes (0, 3)
pub const IDLE_PRIMARY_PLANE: RotationPlane = RotationPlane::XW;
/// Secondary idle plane, axes (1, 2)
pub const IDLE_SECONDARY_PLANE: RotationPlane = RotationPlane::YZ;
/// Radians of rotation per pixel of pointer travel
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.005;

/// Norm of every hypercube vertex; rotations keep `|w|` below this
const VERTEX_NORM: f32 = 2.0;

/// The rotating tesseract
#[derive(Clone, Debug)]
pub struct HypercubeState {
    topology: HypercubeTopology,
    vertices: [Vec4; VERTEX_COUNT],
    plane: RotationPlane,
    interaction: InteractionState,
    projector: Projector,
    positions: ProjectedPositions,
    idle_speed: f32,
    drag_sensitivity: f32,
}

impl Default for HypercubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl HypercubeState {
    /// Create a hypercube in its base pose, autonomous, rotating drags in XY
    pub fn new() -> Self {
        let topology = HypercubeTopology::generate();
        let vertices = *topology.vertices();
        let mut state = Self {
            topology,
            vertices,
            plane: RotationPlane::default(),
            interaction: InteractionState::new(),
            projector: Projector::default(),
            positions: ProjectedPositions::default(),
            idle_speed: DEFAULT_IDLE_SPEED,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        };
        state.reproject();
        state
    }

    /// Builder: set idle rotation speed (radians per tick)
    pub fn with_idle_speed(mut self, speed: f32) -> Self {
        self.idle_speed = speed;
        self
    }

    /// Builder: set drag sensitivity (radians per pixel)
    pub fn with_drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    /// Builder: set the initial drag plane
    pub fn with_plane(mut self, plane: RotationPlane) -> Self {
        self.plane = plane;
        self
    }

    /// Builder: replace the projector
    pub fn with_projector(mut self, projector: Projector) -> Self {
        if projector.singularity_reachable(VERTEX_NORM) {
            log::warn!(
                "Projection distance {} <= {}: rotated vertices can reach the eye and diverge",
                projector.distance,
                VERTEX_NORM
            );
        }
        self.projector = projector;
        self.reproject();
        self
    }

    /// Change the plane used by later drags. Does not rotate anything.
    pub fn select_plane(&mut self, plane: RotationPlane) {
        if plane != self.plane {
            log::debug!("Drag plane {} -> {}", self.plane, plane);
        }
        self.plane = plane;
    }

    /// Pointer pressed at `(x, y)`: starts a drag and latches interactive mode
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        if !self.interaction.has_interacted() {
            log::debug!("First interaction; idle rotation disabled");
        }
        self.interaction.press(x, y);
    }

    /// Pointer moved to `(x, y)`: rotates all vertices while dragging
    ///
    /// The angle is `(dx + dy) * drag_sensitivity` in the selected plane.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let Some((dx, dy)) = self.interaction.drag_to(x, y) {
            let theta = (dx + dy) * self.drag_sensitivity;
            self.rotate_all(self.plane, theta);
            self.reproject();
        }
    }

    /// Pointer released: ends the drag
    pub fn on_pointer_up(&mut self) {
        self.interaction.release();
    }

    /// Restore every vertex to its base position
    ///
    /// The interaction latch is untouched, so idle rotation does not
    /// come back after a reset.
    pub fn reset(&mut self) {
        self.vertices = *self.topology.vertices();
        self.reproject();
        log::info!("Hypercube reset to base pose");
    }

    /// Apply idle motion (when autonomous) and reproject, without drawing
    pub fn advance(&mut self) {
        if self.is_autonomous() {
            self.rotate_all(IDLE_PRIMARY_PLANE, self.idle_speed);
            self.rotate_all(IDLE_SECONDARY_PLANE, self.idle_speed * IDLE_SECONDARY_RATIO);
        }
        self.reproject();
    }

    /// Advance one frame and hand the projected edges to `adapter`
    pub fn tick<A: RenderAdapter>(&mut self, adapter: &mut A) -> Result<(), A::Error> {
        self.advance();
        adapter.draw_segments(&self.positions)
    }

    /// Whether idle rotation is still active
    #[inline]
    pub fn is_autonomous(&self) -> bool {
        !self.interaction.has_interacted()
    }

    /// Idle rotation per tick in the primary idle plane (radians)
    #[inline]
    pub fn idle_speed(&self) -> f32 {
        self.idle_speed
    }

    /// Drag rotation per pixel (radians)
    #[inline]
    pub fn drag_sensitivity(&self) -> f32 {
        self.drag_sensitivity
    }

    #[inline]
    pub fn plane(&self) -> RotationPlane {
        self.plane
    }

    #[inline]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Current (rotated) vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    /// Vertices as generated, used by [`HypercubeState::reset`]
    #[inline]
    pub fn base_vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        self.topology.vertices()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge; EDGE_COUNT] {
        self.topology.edges()
    }

    /// Projected endpoints as of the last tick, move or reset
    #[inline]
    pub fn positions(&self) -> &ProjectedPositions {
        &self.positions
    }

    fn rotate_all(&mut self, plane: RotationPlane, theta: f32) {
        for v in self.vertices.iter_mut() {
            plane.rotate(v, theta);
        }
    }

    fn reproject(&mut self) {
        self.positions
            .recompute(&self.vertices, self.topology.edges(), &self.projector);
    }
}
