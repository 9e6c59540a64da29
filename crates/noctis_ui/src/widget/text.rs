//! Static text.

use crate::color::Color;
use crate::layout::{Point, Rect, Size};
use crate::render::{Font, RenderContext};

use super::core::WidgetState;

/// One run of text drawn at the widget position. Never handles clicks.
///
/// The widget's base color is the text color.
pub struct TextWidget {
    state: WidgetState,
    text: String,
    font_size: f32,
    font: Font,
}

impl TextWidget {
    /// Creates a text widget at `(x, y)`.
    #[must_use]
    pub fn new(x: f32, y: f32, text: impl Into<String>, font_size: f32, color: Color, font: Font) -> Self {
        Self {
            state: WidgetState::new(Rect::new(x, y, 0.0, 0.0), color),
            text: text.into(),
            font_size,
            font,
        }
    }

    /// Shared widget state.
    #[must_use]
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Mutable shared widget state.
    pub fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    /// Text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Font size.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Changes the font size.
    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    /// Changes the font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Size the text occupies with the current font.
    #[must_use]
    pub fn measured_size(&self) -> Size {
        Size::new(
            self.font.measure_width(&self.text, self.font_size),
            self.font.line_height(self.font_size),
        )
    }

    /// Draws the text.
    pub fn render(&mut self, ctx: &mut RenderContext<'_>) {
        if !self.state.is_visible() || self.text.is_empty() {
            return;
        }
        let at: Point = self.state.position();
        ctx.draw_text(self.font.as_ref(), &self.text, at, self.font_size, self.state.color(), false);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::headless::{CommandRecorder, MonospaceFont};

    #[test]
    fn test_text_drawn_at_position() {
        let font = Arc::new(MonospaceFont::new(6.0, 12.0));
        let mut text = TextWidget::new(20.0, 30.0, "Hello", 9.0, Color::CYAN, font.clone());
        assert_eq!(text.measured_size(), Size::new(30.0, 12.0));

        let mut recorder = CommandRecorder::new();
        let mut ctx = RenderContext::new(&mut recorder, Point::ZERO, 1.0, 0);
        text.render(&mut ctx);

        let runs = font.take_runs();
        assert_eq!(runs.len(), 1);
        assert_eq!((runs[0].x, runs[0].y), (20.0, 30.0));
        assert_eq!(runs[0].color, Color::CYAN);
        assert_eq!(recorder.command_count(), 0);
    }
}
