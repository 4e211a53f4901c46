//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`TESSERACT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tesseract_core::{
    HypercubeState, Projector, RotationPlane, DEFAULT_DRAG_SENSITIVITY, DEFAULT_IDLE_SPEED,
};
use tesseract_render::{camera::Camera3D, LineStyle};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Idle motion and drag configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// 4D to 3D projection configuration
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`TESSERACT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // TESSERACT_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("TESSERACT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Build the hypercube state described by the animation and projection sections
    pub fn hypercube(&self) -> HypercubeState {
        HypercubeState::new()
            .with_idle_speed(self.animation.idle_speed)
            .with_drag_sensitivity(self.animation.drag_sensitivity)
            .with_plane(self.animation.default_plane)
            .with_projector(self.projection.to_projector())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tesseract - 4D Hypercube".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Eye distance from the origin along +z
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera3D {
        Camera3D::new(self.fov, self.near, self.far, self.distance)
    }
}

/// Idle motion and drag configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Idle rotation per frame in the XW plane (radians); YZ turns at 0.7x
    pub idle_speed: f32,
    /// Drag rotation per pixel of pointer travel (radians)
    pub drag_sensitivity: f32,
    /// Plane used by drags until another is selected
    pub default_plane: RotationPlane,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            idle_speed: DEFAULT_IDLE_SPEED,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            default_plane: RotationPlane::XY,
        }
    }
}

/// 4D to 3D projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Distance of the 4D eye along +w; at 2 or below edges can diverge
    pub distance: f32,
    /// Scale applied after the perspective divide
    pub scale: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        let p = Projector::default();
        Self {
            distance: p.distance,
            scale: p.scale,
        }
    }
}

impl ProjectionConfig {
    pub fn to_projector(&self) -> Projector {
        Projector::new(self.distance, self.scale)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Edge color [r, g, b, a]
    pub line_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let style = LineStyle::default();
        Self {
            background_color: style.background,
            line_color: style.line_color,
        }
    }
}

impl RenderingConfig {
    pub fn to_style(&self) -> LineStyle {
        LineStyle {
            background: self.background_color,
            line_color: self.line_color,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` wins if set
    pub log_level: String,
    /// Show drag plane and idle/drag mode in the window title
    pub show_mode_in_title: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_mode_in_title: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
