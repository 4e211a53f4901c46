//! Tesseract Rendering Library
//!
//! This crate provides the wgpu-based wireframe renderer for the projected
//! hypercube.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera3D`] - Perspective camera looking at the origin
//! - [`pipeline::LinePipeline`] - Line-list pipeline for the edges
//! - [`LineRenderer`] - [`tesseract_core::RenderAdapter`] implementation

pub mod context;
pub mod camera;
pub mod pipeline;
mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::{LineRenderer, LineStyle};
