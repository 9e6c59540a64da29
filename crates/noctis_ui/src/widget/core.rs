//! Core widget types.

use crate::color::Color;
use crate::input::ClickEvent;
use crate::layout::{Point, Rect, Size};

/// Identifier of a child inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is drawn.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget takes part in rendering inside containers and receives clicks.
    pub const ENABLED: u32 = 1 << 1;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::ENABLED);

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Toggles a flag.
    #[inline]
    pub fn toggle(&mut self, flag: u32) {
        self.0 ^= flag;
    }

    fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Position, size, flags and base color shared by every widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetState {
    rect: Rect,
    flags: WidgetFlags,
    color: Color,
}

impl WidgetState {
    /// Creates a visible, enabled state.
    #[must_use]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self {
            rect,
            flags: WidgetFlags::DEFAULT,
            color,
        }
    }

    /// Bounds in the parent's space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Top-left corner in the parent's space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.rect.origin()
    }

    /// Width and height.
    #[must_use]
    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Moves the widget.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Resizes the widget.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.rect.width = width;
        self.rect.height = height;
    }

    /// Moves and resizes the widget.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.rect = bounds;
    }

    /// Point-in-rect test in the parent's space, edges inclusive.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    /// Raw flags.
    #[must_use]
    pub fn flags(&self) -> WidgetFlags {
        self.flags
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Shows or hides the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.flags.assign(WidgetFlags::VISIBLE, visible);
    }

    /// Flips visibility.
    pub fn toggle_visibility(&mut self) {
        self.flags.toggle(WidgetFlags::VISIBLE);
    }

    /// Returns true if the widget is enabled.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Enables or disables the widget.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.assign(WidgetFlags::ENABLED, enabled);
    }

    /// Flips the enabled flag.
    pub fn toggle_enabled(&mut self) {
        self.flags.toggle(WidgetFlags::ENABLED);
    }

    /// Base color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the base color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

/// Stroke drawn around a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Stroke color.
    pub color: Color,
    /// Stroke width; zero disables the outline.
    pub width: f32,
}

impl Outline {
    /// Creates an outline; negative widths become zero.
    #[must_use]
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width: width.max(0.0),
        }
    }

    /// Whether anything should be drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

/// Callback fired when a widget is clicked.
pub type ClickCallback = Box<dyn FnMut(&ClickEvent)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default_visible_enabled() {
        let mut state = WidgetState::new(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert!(state.is_visible());
        assert!(state.is_enabled());

        state.toggle_visibility();
        state.set_enabled(false);
        assert!(!state.is_visible());
        assert!(!state.is_enabled());

        state.toggle_enabled();
        assert!(state.is_enabled());
    }

    #[test]
    fn test_setters_move_bounds() {
        let mut state = WidgetState::new(Rect::ZERO, Color::WHITE);
        state.set_position(5.0, 6.0);
        state.set_size(7.0, 8.0);
        assert_eq!(state.rect(), Rect::new(5.0, 6.0, 7.0, 8.0));
        assert!(state.contains(Point::new(12.0, 14.0)));
        assert!(!state.contains(Point::new(12.1, 14.0)));
    }

    #[test]
    fn test_outline_width_clamped() {
        assert!(!Outline::new(Color::BLACK, -3.0).is_visible());
        assert!(Outline::new(Color::BLACK, 2.0).is_visible());
    }
}
