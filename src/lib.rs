//! Tesseract - interactive 4D hypercube viewer
//!
//! The binary wires [`tesseract_core::HypercubeState`] to a winit window and
//! the wgpu line renderer. This library exposes the configuration and window
//! pieces so they can be tested on their own.

pub mod config;
pub mod systems;
