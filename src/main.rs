//! Tesseract - interactive 4D hypercube viewer
//!
//! Drag with the left mouse button to rotate in the selected plane.
//! Keys: 1-6 select XY/XZ/XW/YZ/YW/ZW, Tab cycles planes, R resets,
//! F toggles fullscreen, Escape exits.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use tesseract_core::{HypercubeState, RenderAdapter};
use tesseract_input::{InputAction, InputMapper, PointerEvent, PointerTracker};
use tesseract_render::{context::RenderContext, LineRenderer, RenderError};

use tesseract4d::config::AppConfig;
use tesseract4d::systems::WindowSystem;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<LineRenderer>,
    hypercube: HypercubeState,
    pointer: PointerTracker,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let hypercube = config.hypercube();
        log::info!(
            "Hypercube ready: {} vertices, {} edges, drag plane {}",
            hypercube.vertices().len(),
            hypercube.edges().len(),
            hypercube.plane()
        );

        Self {
            config,
            window: None,
            renderer: None,
            hypercube,
            pointer: PointerTracker::new(),
        }
    }

    fn handle_action(&mut self, event_loop: &ActiveEventLoop, action: InputAction) {
        match action {
            InputAction::Reset => self.hypercube.reset(),
            InputAction::SelectPlane(plane) => self.hypercube.select_plane(plane),
            InputAction::CyclePlane => {
                let next = self.hypercube.plane().next();
                self.hypercube.select_plane(next);
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::Exit => event_loop.exit(),
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.hypercube.on_pointer_down(x, y),
            PointerEvent::Move { x, y } => self.hypercube.on_pointer_move(x, y),
            PointerEvent::Up { .. } => self.hypercube.on_pointer_up(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match self.hypercube.tick(renderer) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("Surface lost; reconfigured, retrying next frame");
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        if let Some(window) = &mut self.window {
            if self.config.debug.show_mode_in_title {
                window.update_title(self.hypercube.plane(), self.hypercube.is_autonomous());
            }
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let context = match pollster::block_on(RenderContext::with_vsync(
            window.window().clone(),
            self.config.window.vsync,
        )) {
            Ok(context) => context,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = LineRenderer::new(
            context,
            self.config.camera.to_camera(),
            self.config.rendering.to_style(),
        );

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(event_loop, action);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pointer_event = self.pointer.cursor_moved(position.x, position.y);
                self.handle_pointer(pointer_event);
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(pointer_event) = self.pointer.cursor_left() {
                    self.handle_pointer(pointer_event);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(pointer_event) = self.pointer.button(button, state) {
                    self.handle_pointer(pointer_event);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    // Config first so its log level can seed the logger
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting tesseract4d");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
