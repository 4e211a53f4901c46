//! Pointer tracking
//!
//! winit reports button presses without a position, so the tracker remembers
//! the last `CursorMoved` position and attaches it to button events.

use winit::event::{ElementState, MouseButton};

/// A pointer event carrying the cursor position in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
}

/// Converts winit cursor and mouse button events into [`PointerEvent`]s
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: (f32, f32),
    pressed: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position
    #[inline]
    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    /// Whether the left button is held
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Process a cursor move
    pub fn cursor_moved(&mut self, x: f64, y: f64) -> PointerEvent {
        self.position = (x as f32, y as f32);
        PointerEvent::Move {
            x: self.position.0,
            y: self.position.1,
        }
    }

    /// Process a mouse button event
    ///
    /// Only the left button drives the pointer. Repeated presses or releases
    /// without a matching counterpart are dropped.
    pub fn button(&mut self, button: MouseButton, state: ElementState) -> Option<PointerEvent> {
        if button != MouseButton::Left {
            return None;
        }

        let (x, y) = self.position;
        match state {
            ElementState::Pressed if !self.pressed => {
                self.pressed = true;
                Some(PointerEvent::Down { x, y })
            }
            ElementState::Released if self.pressed => {
                self.pressed = false;
                Some(PointerEvent::Up { x, y })
            }
            _ => None,
        }
    }

    /// The cursor left the window; ends any drag in progress
    pub fn cursor_left(&mut self) -> Option<PointerEvent> {
        if self.pressed {
            self.pressed = false;
            let (x, y) = self.position;
            Some(PointerEvent::Up { x, y })
        } else {
            None
        }
    }
}
