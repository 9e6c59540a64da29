//! Clickable button with an optional hover animation.

use crate::animation::{HoverAnimator, HoverColors};
use crate::color::Color;
use crate::input::ClickEvent;
use crate::layout::{Point, Rect};
use crate::render::{Font, RenderContext};

use super::core::{ClickCallback, Outline, WidgetState};

/// A rounded button with a centered label.
///
/// The widget's base color is the button background.
pub struct Button {
    state: WidgetState,
    label: String,
    label_color: Color,
    font: Font,
    font_size: f32,
    shadow: bool,
    radius: f32,
    blur_radius: Option<f32>,
    outline: Option<Outline>,
    hover: Option<HoverAnimator>,
    on_click: Option<ClickCallback>,
}

impl Button {
    /// Label size used unless overridden.
    pub const DEFAULT_FONT_SIZE: f32 = 9.0;
    /// Corner radius used unless overridden.
    pub const DEFAULT_RADIUS: f32 = 5.0;

    /// Creates a button without hover effect, outline or click action.
    #[must_use]
    pub fn new(bounds: Rect, label: impl Into<String>, background: Color, label_color: Color, font: Font) -> Self {
        Self {
            state: WidgetState::new(bounds, background),
            label: label.into(),
            label_color,
            font,
            font_size: Self::DEFAULT_FONT_SIZE,
            shadow: false,
            radius: Self::DEFAULT_RADIUS,
            blur_radius: None,
            outline: None,
            hover: None,
            on_click: None,
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

    /// Label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces the label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Base background color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.state.color()
    }

    /// Changes the base background color.
    pub fn set_background(&mut self, color: Color) {
        self.state.set_color(color);
    }

    /// Base label color.
    #[must_use]
    pub fn label_color(&self) -> Color {
        self.label_color
    }

    /// Changes the base label color.
    pub fn set_label_color(&mut self, color: Color) {
        self.label_color = color;
    }

    /// Changes the label font.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Changes the label size.
    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    /// Draws the label with a drop shadow.
    pub fn set_shadow(&mut self, shadow: bool) {
        self.shadow = shadow;
    }

    /// Corner radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Changes the corner radius.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Blurs whatever is behind the button by `blur_radius`; `None` disables it.
    pub fn set_blur(&mut self, blur_radius: Option<f32>) {
        self.blur_radius = blur_radius.filter(|r| *r > 0.0);
    }

    /// Draws an outline; a width of zero removes it.
    pub fn set_outline(&mut self, color: Color, width: f32) {
        self.outline = Some(Outline::new(color, width));
    }

    /// Enables the hover transition toward the given colors.
    pub fn set_hover(&mut self, duration_ms: u64, background: Color, label: Color) {
        self.hover = Some(HoverAnimator::new(duration_ms, HoverColors::new(background, label)));
    }

    /// Hover state machine, when hover is enabled.
    #[must_use]
    pub fn hover(&self) -> Option<&HoverAnimator> {
        self.hover.as_ref()
    }

    /// Sets the action run on click.
    pub fn set_on_click(&mut self, action: impl FnMut(&ClickEvent) + 'static) {
        self.on_click = Some(Box::new(action));
    }

    fn base_colors(&self) -> HoverColors {
        HoverColors::new(self.state.color(), self.label_color)
    }

    /// Advances the hover animation and draws the button.
    pub fn render(&mut self, ctx: &mut RenderContext<'_>) {
        if !self.state.is_visible() {
            return;
        }

        let bounds = self.state.rect();
        let base = self.base_colors();
        let colors = match self.hover.as_mut() {
            Some(animator) => animator.update(bounds.contains(ctx.pointer()), ctx.now_ms(), base),
            None => base,
        };

        if let Some(blur) = self.blur_radius {
            ctx.blur_rounded_rect(bounds, self.radius, blur, colors.background);
        }
        ctx.fill_rounded_rect(bounds, self.radius, colors.background);

        if let Some(outline) = self.outline.filter(Outline::is_visible) {
            ctx.stroke_rounded_rect(bounds, self.radius, outline.width, outline.color);
        }

        let text_width = self.font.measure_width(&self.label, self.font_size);
        let text_height = self.font.line_height(self.font_size);
        let at = Point::new(
            bounds.x + (bounds.width - text_width) / 2.0,
            bounds.y + (bounds.height - text_height) / 2.0,
        );
        ctx.draw_text(self.font.as_ref(), &self.label, at, self.font_size, colors.label, self.shadow);
    }

    /// Runs the click action when the click lands inside the button.
    ///
    /// Hidden or disabled buttons ignore clicks.
    pub fn mouse_clicked(&mut self, event: ClickEvent) -> bool {
        if !self.state.is_visible() || !self.state.is_enabled() || !self.state.contains(event.position) {
            return false;
        }
        if let Some(action) = self.on_click.as_mut() {
            action(&event);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;

    use super::*;
    use crate::animation::HoverPhase;
    use crate::headless::{CommandRecorder, MonospaceFont, RenderCommand};
    use crate::input::MouseButton;

    const BASE_BG: Color = Color::rgb(0, 122, 204);
    const HOVER_BG: Color = Color::rgb(0, 150, 255);

    fn button(font: &Arc<MonospaceFont>) -> Button {
        let font: Font = font.clone();
        let mut button = Button::new(Rect::new(10.0, 10.0, 60.0, 20.0), "OK", BASE_BG, Color::WHITE, font);
        button.set_hover(200, HOVER_BG, Color::YELLOW);
        button
    }

    fn background_of(commands: &[RenderCommand]) -> Color {
        match commands.first() {
            Some(RenderCommand::RoundedRect { color, .. }) => *color,
            other => panic!("expected a rounded rect first, got {other:?}"),
        }
    }

    fn frame(button: &mut Button, pointer: Point, now_ms: u64) -> Vec<RenderCommand> {
        let mut recorder = CommandRecorder::new();
        let mut ctx = RenderContext::new(&mut recorder, pointer, 1.0, now_ms);
        button.render(&mut ctx);
        recorder.take()
    }

    #[test]
    fn test_label_is_centered() {
        let font = Arc::new(MonospaceFont::new(6.0, 12.0));
        let mut button = button(&font);
        frame(&mut button, Point::ZERO, 0);

        let runs = font.take_runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "OK");
        assert!((runs[0].x - 34.0).abs() < 1e-4);
        assert!((runs[0].y - 14.0).abs() < 1e-4);
        assert_eq!(runs[0].color, Color::WHITE);
    }

    #[test]
    fn test_hover_colors_follow_pointer() {
        let font = Arc::new(MonospaceFont::new(6.0, 12.0));
        let mut button = button(&font);
        let inside = Point::new(20.0, 20.0);
        let outside = Point::new(200.0, 200.0);

        assert_eq!(background_of(&frame(&mut button, outside, 0)), BASE_BG);
        assert_eq!(background_of(&frame(&mut button, inside, 100)), BASE_BG);
        assert_eq!(background_of(&frame(&mut button, inside, 300)), HOVER_BG);
        assert_eq!(background_of(&frame(&mut button, outside, 400)), HOVER_BG);
        assert_eq!(background_of(&frame(&mut button, outside, 600)), BASE_BG);
        assert_eq!(button.hover().map(HoverAnimator::phase), Some(HoverPhase::Idle));
    }

    #[test]
    fn test_outline_and_blur_are_drawn() {
        let font = Arc::new(MonospaceFont::new(6.0, 12.0));
        let mut button = button(&font);
        button.set_outline(Color::BLACK, 2.0);
        button.set_blur(Some(4.0));

        let commands = frame(&mut button, Point::ZERO, 0);
        assert!(matches!(commands[0], RenderCommand::BlurredRoundedRect { .. }));
        assert!(matches!(commands[1], RenderCommand::RoundedRect { .. }));
        assert!(matches!(commands[2], RenderCommand::RoundedOutline { width, .. } if (width - 2.0).abs() < 1e-6));
    }

    #[test]
    fn test_click_inside_only() {
        let font = Arc::new(MonospaceFont::new(6.0, 12.0));
        let mut button = button(&font);
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        button.set_on_click(move |_| counter.set(counter.get() + 1));

        assert!(button.mouse_clicked(ClickEvent::new(Point::new(15.0, 15.0), MouseButton::Left)));
        assert!(!button.mouse_clicked(ClickEvent::new(Point::new(5.0, 5.0), MouseButton::Left)));
        assert_eq!(clicks.get(), 1);

        button.state_mut().set_enabled(false);
        assert!(!button.mouse_clicked(ClickEvent::new(Point::new(15.0, 15.0), MouseButton::Left)));
        assert_eq!(clicks.get(), 1);
    }
}
