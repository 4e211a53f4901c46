//! Pointer interaction tracking

/// Drag state of the pointer plus the one-way "has interacted" latch
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    dragging: bool,
    has_interacted: bool,
    last_pointer: (f32, f32),
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the pointer has ever been pressed. Never goes back to false.
    #[inline]
    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    /// Last pointer position seen while pressed or dragging
    #[inline]
    pub fn last_pointer(&self) -> (f32, f32) {
        self.last_pointer
    }

    /// Start a drag at `(x, y)`
    pub fn press(&mut self, x: f32, y: f32) {
        self.dragging = true;
        self.has_interacted = true;
        self.last_pointer = (x, y);
    }

    /// Move the pointer to `(x, y)`
    ///
    /// Returns the `(dx, dy)` delta from the previous position while
    /// dragging, `None` otherwise.
    pub fn drag_to(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.dragging {
            return None;
        }
        let (lx, ly) = self.last_pointer;
        self.last_pointer = (x, y);
        Some((x - lx, y - ly))
    }

    /// End the drag. The interaction latch stays set.
    pub fn release(&mut self) {
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let s = InteractionState::new();
        assert!(!s.is_dragging());
        assert!(!s.has_interacted());
    }

    #[test]
    fn test_drag_deltas_accumulate_from_last_position() {
        let mut s = InteractionState::new();
        s.press(100.0, 50.0);
        assert_eq!(s.drag_to(110.0, 50.0), Some((10.0, 0.0)));
        assert_eq!(s.drag_to(105.0, 60.0), Some((-5.0, 10.0)));
        assert_eq!(s.last_pointer(), (105.0, 60.0));
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut s = InteractionState::new();
        assert_eq!(s.drag_to(10.0, 10.0), None);
        assert_eq!(s.last_pointer(), (0.0, 0.0));
    }

    #[test]
    fn test_release_keeps_latch() {
        let mut s = InteractionState::new();
        s.press(0.0, 0.0);
        s.release();
        assert!(!s.is_dragging());
        assert!(s.has_interacted());
        assert_eq!(s.drag_to(5.0, 5.0), None);
    }
}
