//! Input mapping from raw keyboard events to semantic actions
//!
//! Pointer drags are not mapped here - see [`crate::PointerTracker`].

use tesseract_math::RotationPlane;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Restore the hypercube to its base pose (R key)
    Reset,
    /// Rotate later drags in this plane (1-6 keys)
    SelectPlane(RotationPlane),
    /// Step to the next drag plane (Tab key)
    CyclePlane,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape key)
    Exit,
}

/// Maps raw key events to actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Only presses produce actions; releases and unbound keys return `None`.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::KeyR => Some(InputAction::Reset),
            KeyCode::Digit1 => Some(InputAction::SelectPlane(RotationPlane::XY)),
            KeyCode::Digit2 => Some(InputAction::SelectPlane(RotationPlane::XZ)),
            KeyCode::Digit3 => Some(InputAction::SelectPlane(RotationPlane::XW)),
            KeyCode::Digit4 => Some(InputAction::SelectPlane(RotationPlane::YZ)),
            KeyCode::Digit5 => Some(InputAction::SelectPlane(RotationPlane::YW)),
            KeyCode::Digit6 => Some(InputAction::SelectPlane(RotationPlane::ZW)),
            KeyCode::Tab => Some(InputAction::CyclePlane),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }
}
