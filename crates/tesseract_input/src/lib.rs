//! Input handling for the tesseract viewer
//!
//! Keyboard events map to [`InputAction`]s; left-button drags become
//! [`PointerEvent`]s that feed the hypercube's drag rotation.

mod input_mapper;
mod pointer;

pub use input_mapper::{InputAction, InputMapper};
pub use pointer::{PointerEvent, PointerTracker};
