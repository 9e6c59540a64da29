//! Drawing capabilities and the per-frame render context.
//!
//! The toolkit never rasterizes anything itself. Hosts implement
//! [`Renderer2D`] for shapes and [`TextMetrics`] for fonts; widgets draw
//! through a [`RenderContext`] that carries the current coordinate space.

use std::sync::Arc;

use crate::color::Color;
use crate::layout::{Point, Rect};

/// Opaque handle to a texture the host has already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u64);

/// Shape rasterizer supplied by the host.
///
/// All rectangles arrive in screen space.
pub trait Renderer2D {
    /// Filled rectangle.
    fn draw_rect(&mut self, bounds: Rect, color: Color);

    /// Filled rectangle with rounded corners.
    fn draw_rounded_rect(&mut self, bounds: Rect, radius: f32, color: Color);

    /// Rectangle outline.
    fn draw_outline(&mut self, bounds: Rect, width: f32, color: Color);

    /// Rounded rectangle outline.
    fn draw_rounded_outline(&mut self, bounds: Rect, radius: f32, width: f32, color: Color);

    /// Rounded rectangle over a blurred copy of what is behind it.
    fn draw_blurred_rounded_rect(&mut self, bounds: Rect, radius: f32, blur_radius: f32, color: Color);

    /// Textured quad stretched over `bounds`.
    fn draw_texture(&mut self, bounds: Rect, texture: TextureId, tint: Color);
}

/// Font metrics and glyph output for one font face.
pub trait TextMetrics {
    /// Advance width of `text` at `font_size`.
    fn measure_width(&self, text: &str, font_size: f32) -> f32;

    /// Line height at `font_size`.
    fn line_height(&self, font_size: f32) -> f32;

    /// Draws a glyph run with its top-left at `(x, y)` in screen space.
    fn render_glyphs(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color);

    /// Same as [`TextMetrics::render_glyphs`] with a drop shadow.
    fn render_glyphs_with_shadow(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}

/// Shared font handle held by widgets and the notification manager.
pub type Font = Arc<dyn TextMetrics>;

/// Render state threaded through one widget subtree.
///
/// `origin` is where the current local space starts on screen; `pointer` is
/// already expressed in that local space.
pub struct RenderContext<'a> {
    renderer: &'a mut dyn Renderer2D,
    origin: Point,
    pointer: Point,
    delta: f32,
    now_ms: u64,
}

impl<'a> RenderContext<'a> {
    /// Creates a context for the screen space.
    pub fn new(renderer: &'a mut dyn Renderer2D, pointer: Point, delta: f32, now_ms: u64) -> Self {
        Self {
            renderer,
            origin: Point::ZERO,
            pointer,
            delta,
            now_ms,
        }
    }

    /// Pointer position in the current local space.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Screen position of the local origin.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Frame delta handed over by the host.
    #[must_use]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Time this frame is drawn at.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Returns a context for a child space whose origin sits at `offset` in
    /// the current space.
    pub fn translated(&mut self, offset: Point) -> RenderContext<'_> {
        RenderContext {
            renderer: &mut *self.renderer,
            origin: self.origin.offset(offset.x, offset.y),
            pointer: self.pointer.offset(-offset.x, -offset.y),
            delta: self.delta,
            now_ms: self.now_ms,
        }
    }

    fn to_screen(&self, bounds: Rect) -> Rect {
        bounds.translate(self.origin.x, self.origin.y)
    }

    /// Fills a local rectangle.
    pub fn fill_rect(&mut self, bounds: Rect, color: Color) {
        let bounds = self.to_screen(bounds);
        self.renderer.draw_rect(bounds, color);
    }

    /// Fills a local rounded rectangle.
    pub fn fill_rounded_rect(&mut self, bounds: Rect, radius: f32, color: Color) {
        let bounds = self.to_screen(bounds);
        self.renderer.draw_rounded_rect(bounds, radius, color);
    }

    /// Strokes a local rectangle.
    pub fn stroke_rect(&mut self, bounds: Rect, width: f32, color: Color) {
        let bounds = self.to_screen(bounds);
        self.renderer.draw_outline(bounds, width, color);
    }

    /// Strokes a local rounded rectangle.
    pub fn stroke_rounded_rect(&mut self, bounds: Rect, radius: f32, width: f32, color: Color) {
        let bounds = self.to_screen(bounds);
        self.renderer.draw_rounded_outline(bounds, radius, width, color);
    }

    /// Draws a blurred backdrop behind a local rounded rectangle.
    pub fn blur_rounded_rect(&mut self, bounds: Rect, radius: f32, blur_radius: f32, color: Color) {
        let bounds = self.to_screen(bounds);
        self.renderer.draw_blurred_rounded_rect(bounds, radius, blur_radius, color);
    }

    /// Draws a texture over a local rectangle.
    pub fn draw_texture(&mut self, bounds: Rect, texture: TextureId, tint: Color) {
        let bounds = self.to_screen(bounds);
        self.renderer.draw_texture(bounds, texture, tint);
    }

    /// Draws text with its top-left corner at a local position.
    pub fn draw_text(&mut self, font: &dyn TextMetrics, text: &str, at: Point, font_size: f32, color: Color, shadow: bool) {
        let x = self.origin.x + at.x;
        let y = self.origin.y + at.y;
        if shadow {
            font.render_glyphs_with_shadow(text, x, y, font_size, color);
        } else {
            font.render_glyphs(text, x, y, font_size, color);
        }
    }
}
