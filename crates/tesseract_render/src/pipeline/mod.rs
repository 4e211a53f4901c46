//! Rendering pipeline components

pub mod types;
pub mod line_pipeline;

pub use types::{LineUniforms, LineVertex};
pub use line_pipeline::LinePipeline;
