//! Frame-by-frame scenarios for the hypercube state machine
//!
//! These drive `HypercubeState` the way the application loop does: input
//! events first, then one `tick` per frame into a render adapter.

use tesseract_core::{
    HypercubeState, ProjectedPositions, RenderAdapter, RotationPlane, Vec4, DEFAULT_IDLE_SPEED,
};

const EPSILON: f32 = 1e-5;

/// Adapter that keeps a copy of every frame it was handed
#[derive(Default)]
struct RecordingAdapter {
    frames: Vec<Vec<f32>>,
}

impl RenderAdapter for RecordingAdapter {
    type Error = String;

    fn draw_segments(&mut self, positions: &ProjectedPositions) -> Result<(), Self::Error> {
        self.frames.push(positions.as_floats().to_vec());
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Adapter whose backend always fails
struct FailingAdapter;

impl RenderAdapter for FailingAdapter {
    type Error = String;

    fn draw_segments(&mut self, _positions: &ProjectedPositions) -> Result<(), Self::Error> {
        Err("surface lost".to_string())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}

fn rotated(base: &[Vec4; 16], plane: RotationPlane, theta: f32) -> [Vec4; 16] {
    let mut out = *base;
    for v in out.iter_mut() {
        plane.rotate(v, theta);
    }
    out
}

fn assert_close(actual: &[Vec4; 16], expected: &[Vec4; 16]) {
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(a.max_abs_diff(*e) < EPSILON, "vertex {}: {:?} != {:?}", i, a, e);
    }
}

#[test]
fn test_single_idle_tick() {
    let mut state = HypercubeState::new();
    let mut adapter = RecordingAdapter::default();

    state.tick(&mut adapter).unwrap();

    let step1 = rotated(state.base_vertices(), RotationPlane::XW, DEFAULT_IDLE_SPEED);
    let expected = rotated(&step1, RotationPlane::YZ, 0.7 * DEFAULT_IDLE_SPEED);
    assert_close(state.vertices(), &expected);

    assert_eq!(adapter.frames.len(), 1);
    assert_eq!(adapter.frames[0].len(), 192);
    assert_eq!(adapter.frames[0], state.positions().as_floats());
}

#[test]
fn test_drag_then_release_applies_exactly_one_rotation() {
    let mut state = HypercubeState::new();
    let mut adapter = RecordingAdapter::default();

    state.on_pointer_down(200.0, 120.0);
    state.on_pointer_move(210.0, 120.0);
    state.on_pointer_up();

    let expected = rotated(state.base_vertices(), RotationPlane::XY, 0.05);
    assert_close(state.vertices(), &expected);

    for _ in 0..5 {
        state.tick(&mut adapter).unwrap();
    }
    assert_close(state.vertices(), &expected);

    // Every frame shows the same pose
    assert!(adapter.frames.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_drag_uses_plane_selected_before_move() {
    let mut state = HypercubeState::new();
    state.on_pointer_down(0.0, 0.0);
    state.select_plane(RotationPlane::ZW);
    state.on_pointer_move(0.0, 20.0);

    let expected = rotated(state.base_vertices(), RotationPlane::ZW, 0.1);
    assert_close(state.vertices(), &expected);
}

#[test]
fn test_idle_never_resumes_after_interaction() {
    let mut state = HypercubeState::new();
    let mut adapter = RecordingAdapter::default();

    state.tick(&mut adapter).unwrap();
    state.on_pointer_down(5.0, 5.0);
    state.on_pointer_up();
    let frozen = *state.vertices();

    for _ in 0..1000 {
        state.tick(&mut adapter).unwrap();
    }
    assert_eq!(state.vertices(), &frozen);
    assert!(!state.is_autonomous());
}

#[test]
fn test_reset_after_mixed_motion() {
    let mut state = HypercubeState::new();
    let mut adapter = RecordingAdapter::default();

    for _ in 0..50 {
        state.tick(&mut adapter).unwrap();
    }
    state.on_pointer_down(0.0, 0.0);
    for plane in RotationPlane::ALL {
        state.select_plane(plane);
        state.on_pointer_move(13.0, 7.0);
        state.on_pointer_move(-4.0, 22.0);
    }
    state.on_pointer_up();

    state.reset();
    assert_eq!(state.vertices(), state.base_vertices());

    state.tick(&mut adapter).unwrap();
    assert_eq!(state.vertices(), state.base_vertices());
}

#[test]
fn test_vertex_norms_survive_long_rotation() {
    let mut state = HypercubeState::new();
    let mut adapter = RecordingAdapter::default();
    for _ in 0..2000 {
        state.tick(&mut adapter).unwrap();
    }
    for v in state.vertices() {
        assert!((v.length() - 2.0).abs() < 1e-3);
    }
    assert!(state.positions().is_finite());
}

#[test]
fn test_adapter_errors_are_passed_through() {
    let mut state = HypercubeState::new();
    let err = state.tick(&mut FailingAdapter).unwrap_err();
    assert_eq!(err, "surface lost");
    // The frame still advanced
    assert_ne!(state.vertices(), state.base_vertices());
}

