//! wgpu implementation of the render boundary

use tesseract_core::{ProjectedPositions, RenderAdapter};
use winit::dpi::PhysicalSize;

use crate::camera::Camera3D;
use crate::context::RenderContext;
use crate::error::RenderError;
use crate::pipeline::{LinePipeline, LineUniforms};

/// Colors used when drawing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineStyle {
    /// Clear color [r, g, b, a]
    pub background: [f32; 4],
    /// Edge color [r, g, b, a]
    pub line_color: [f32; 4],
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            background: [0.0, 0.0, 0.0, 1.0],
            line_color: [0.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Draws the projected hypercube edges as a wireframe
pub struct LineRenderer {
    context: RenderContext,
    pipeline: LinePipeline,
    camera: Camera3D,
    style: LineStyle,
}

impl LineRenderer {
    /// Create a renderer on an existing context
    pub fn new(context: RenderContext, mut camera: Camera3D, style: LineStyle) -> Self {
        camera.set_viewport(context.size.width, context.size.height);
        let pipeline = LinePipeline::new(&context.device, context.config.format);
        log::info!(
            "Line renderer ready: {}x{}, format {:?}",
            context.size.width,
            context.size.height,
            context.config.format
        );

        Self {
            context,
            pipeline,
            camera,
            style,
        }
    }

    #[inline]
    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    /// Current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    fn clear_color(&self) -> wgpu::Color {
        let bg = &self.style.background;
        wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        }
    }
}

impl RenderAdapter for LineRenderer {
    type Error = RenderError;

    fn draw_segments(&mut self, positions: &ProjectedPositions) -> Result<(), RenderError> {
        self.pipeline
            .upload_points(&self.context.queue, positions.points());
        self.pipeline.update_uniforms(
            &self.context.queue,
            &LineUniforms {
                view_proj: self.camera.view_projection(),
                color: self.style.line_color,
            },
        );

        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(e) => {
                let err = RenderError::from(e);
                if err == RenderError::SurfaceLost {
                    self.context.reconfigure();
                }
                return Err(err);
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline.render(&mut encoder, &view, self.clear_color());

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.context.resize(PhysicalSize::new(width, height));
        self.camera.set_viewport(width, height);
    }
}
