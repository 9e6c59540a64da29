//! Pointer input delivered to widgets.

use crate::layout::Point;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// Left mouse button.
    #[default]
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Any extra button, by host index.
    Other(u8),
}

impl MouseButton {
    /// Maps a host button index (0 = left, 1 = right, 2 = middle).
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Middle,
            n => Self::Other(n),
        }
    }
}

/// A click as seen by the widget receiving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// Pointer position in the receiving widget's parent space.
    pub position: Point,
    /// Button that was pressed.
    pub button: MouseButton,
}

impl ClickEvent {
    /// Creates a new click event.
    #[must_use]
    pub const fn new(position: Point, button: MouseButton) -> Self {
        Self { position, button }
    }

    /// Returns the same click expressed in a child space whose origin sits at
    /// `origin` in this space.
    #[must_use]
    pub fn localize(self, origin: Point) -> Self {
        Self::new(self.position.offset(-origin.x, -origin.y), self.button)
    }
}
