//! Headless backend.
//!
//! [`CommandRecorder`] turns every draw call into a [`RenderCommand`] and
//! [`MonospaceFont`] measures text on a fixed character grid while recording
//! glyph runs. Together they let layout and animation run without a GPU or a
//! font engine. Hosts use them for batching or snapshotting and call
//! `begin_frame` on both every frame; tests use them to assert on exact
//! output.

use parking_lot::Mutex;

use crate::color::Color;
use crate::layout::Rect;
use crate::render::{Renderer2D, TextMetrics, TextureId};

/// A recorded draw call, in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
    },
    /// Filled rounded rectangle.
    RoundedRect {
        /// Bounds.
        bounds: Rect,
        /// Corner radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Rectangle outline.
    Outline {
        /// Bounds.
        bounds: Rect,
        /// Line width.
        width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Rounded rectangle outline.
    RoundedOutline {
        /// Bounds.
        bounds: Rect,
        /// Corner radius.
        radius: f32,
        /// Line width.
        width: f32,
        /// Stroke color.
        color: Color,
    },
    /// Blurred backdrop.
    BlurredRoundedRect {
        /// Bounds.
        bounds: Rect,
        /// Corner radius.
        radius: f32,
        /// Blur radius.
        blur_radius: f32,
        /// Tint color.
        color: Color,
    },
    /// Textured quad.
    Texture {
        /// Bounds.
        bounds: Rect,
        /// Texture handle.
        texture: TextureId,
        /// Tint color.
        tint: Color,
    },
}

impl RenderCommand {
    /// Bounds of the recorded shape.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. }
            | Self::RoundedRect { bounds, .. }
            | Self::Outline { bounds, .. }
            | Self::RoundedOutline { bounds, .. }
            | Self::BlurredRoundedRect { bounds, .. }
            | Self::Texture { bounds, .. } => *bounds,
        }
    }
}

/// Renderer that records commands instead of drawing.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
}

impl CommandRecorder {
    /// Creates a new, empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Begins a new frame, dropping the previous frame's commands.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Renderer2D for CommandRecorder {
    fn draw_rect(&mut self, bounds: Rect, color: Color) {
        self.commands.push(RenderCommand::Rect { bounds, color });
    }

    fn draw_rounded_rect(&mut self, bounds: Rect, radius: f32, color: Color) {
        self.commands.push(RenderCommand::RoundedRect { bounds, radius, color });
    }

    fn draw_outline(&mut self, bounds: Rect, width: f32, color: Color) {
        self.commands.push(RenderCommand::Outline { bounds, width, color });
    }

    fn draw_rounded_outline(&mut self, bounds: Rect, radius: f32, width: f32, color: Color) {
        self.commands.push(RenderCommand::RoundedOutline {
            bounds,
            radius,
            width,
            color,
        });
    }

    fn draw_blurred_rounded_rect(&mut self, bounds: Rect, radius: f32, blur_radius: f32, color: Color) {
        self.commands.push(RenderCommand::BlurredRoundedRect {
            bounds,
            radius,
            blur_radius,
            color,
        });
    }

    fn draw_texture(&mut self, bounds: Rect, texture: TextureId, tint: Color) {
        self.commands.push(RenderCommand::Texture { bounds, texture, tint });
    }
}

/// A glyph run emitted through [`MonospaceFont`].
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    /// Text content.
    pub text: String,
    /// Screen X of the top-left corner.
    pub x: f32,
    /// Screen Y of the top-left corner.
    pub y: f32,
    /// Font size.
    pub font_size: f32,
    /// Text color.
    pub color: Color,
    /// Drawn with a drop shadow.
    pub shadow: bool,
}

/// Fixed-grid font: every character has the same advance.
///
/// Metrics are given at `reference_size` and scale linearly with the
/// requested font size. Every drawn run is logged until the log is cleared
/// with [`MonospaceFont::begin_frame`] or drained with
/// [`MonospaceFont::take_runs`].
#[derive(Debug)]
pub struct MonospaceFont {
    char_width: f32,
    line_height: f32,
    reference_size: f32,
    runs: Mutex<Vec<GlyphRun>>,
}

impl MonospaceFont {
    /// Size at which the given metrics apply unless overridden.
    pub const DEFAULT_REFERENCE_SIZE: f32 = 9.0;

    /// Creates a font with the given per-character advance and line height.
    #[must_use]
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
            reference_size: Self::DEFAULT_REFERENCE_SIZE,
            runs: Mutex::new(Vec::new()),
        }
    }

    /// Sets the size the metrics were measured at.
    #[must_use]
    pub fn with_reference_size(mut self, reference_size: f32) -> Self {
        self.reference_size = reference_size;
        self
    }

    fn scale(&self, font_size: f32) -> f32 {
        if self.reference_size > 0.0 {
            font_size / self.reference_size
        } else {
            1.0
        }
    }

    /// Glyph runs drawn so far.
    #[must_use]
    pub fn runs(&self) -> Vec<GlyphRun> {
        self.runs.lock().clone()
    }

    /// Clears the glyph log. The log only grows otherwise, so long-running
    /// hosts call this (or [`MonospaceFont::take_runs`]) once per frame.
    pub fn begin_frame(&self) {
        self.runs.lock().clear();
    }

    /// Takes the recorded glyph runs.
    pub fn take_runs(&self) -> Vec<GlyphRun> {
        std::mem::take(&mut *self.runs.lock())
    }

    fn record(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color, shadow: bool) {
        self.runs.lock().push(GlyphRun {
            text: text.to_owned(),
            x,
            y,
            font_size,
            color,
            shadow,
        });
    }
}

impl TextMetrics for MonospaceFont {
    fn measure_width(&self, text: &str, font_size: f32) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let count = text.chars().count() as f32;
        count * self.char_width * self.scale(font_size)
    }

    fn line_height(&self, font_size: f32) -> f32 {
        self.line_height * self.scale(font_size)
    }

    fn render_glyphs(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.record(text, x, y, font_size, color, false);
    }

    fn render_glyphs_with_shadow(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        self.record(text, x, y, font_size, color, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_frame() {
        let mut recorder = CommandRecorder::new();
        recorder.draw_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::WHITE);
        recorder.draw_rounded_outline(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, 1.0, Color::BLACK);
        assert_eq!(recorder.command_count(), 2);
        assert_eq!(recorder.commands()[1].bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));

        recorder.begin_frame();
        assert_eq!(recorder.command_count(), 0);
    }

    #[test]
    fn test_monospace_metrics_scale_with_size() {
        let font = MonospaceFont::new(6.0, 12.0);
        assert!((font.measure_width("abcd", 9.0) - 24.0).abs() < f32::EPSILON);
        assert!((font.measure_width("abcd", 18.0) - 48.0).abs() < f32::EPSILON);
        assert!((font.line_height(9.0) - 12.0).abs() < f32::EPSILON);
        assert!(font.measure_width("", 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_monospace_records_runs() {
        let font = MonospaceFont::new(6.0, 12.0);
        font.render_glyphs("hi", 1.0, 2.0, 9.0, Color::WHITE);
        font.render_glyphs_with_shadow("yo", 3.0, 4.0, 9.0, Color::RED);

        let runs = font.take_runs();
        assert_eq!(runs.len(), 2);
        assert!(!runs[0].shadow);
        assert!(runs[1].shadow);
        assert!(font.runs().is_empty());
    }

    #[test]
    fn test_monospace_begin_frame_clears_log() {
        let font = MonospaceFont::new(6.0, 12.0);
        for _ in 0..3 {
            font.begin_frame();
            font.render_glyphs("tick", 0.0, 0.0, 9.0, Color::WHITE);
            assert_eq!(font.runs().len(), 1);
        }
    }
}
