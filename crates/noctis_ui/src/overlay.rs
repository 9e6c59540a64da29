//! Application root: one widget tree plus the notification stack.

use crate::frame::FrameInput;
use crate::input::ClickEvent;
use crate::layout::{Rect, Size};
use crate::notification::NotificationManager;
use crate::render::{RenderContext, Renderer2D};
use crate::widget::{Container, Widget, WidgetId};

/// Everything drawn over the game, owned by the host for the session.
///
/// Each [`Overlay::frame`] updates the notifications, draws the widget tree
/// and then draws the notifications on top.
pub struct Overlay {
    root: Container,
    notifications: NotificationManager,
}

impl Overlay {
    /// Creates an overlay with an empty, transparent root spanning `viewport`.
    #[must_use]
    pub fn new(viewport: Size, notifications: NotificationManager) -> Self {
        Self {
            root: Container::new(Rect::new(0.0, 0.0, viewport.width, viewport.height)),
            notifications,
        }
    }

    /// Root container of the widget tree.
    #[must_use]
    pub fn root(&self) -> &Container {
        &self.root
    }

    /// Mutable root container.
    pub fn root_mut(&mut self) -> &mut Container {
        &mut self.root
    }

    /// Adds a top-level widget.
    pub fn add_widget(&mut self, widget: impl Into<Widget>) -> WidgetId {
        self.root.add_child(widget)
    }

    /// Notification stack.
    #[must_use]
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// Mutable notification stack, for posting.
    pub fn notifications_mut(&mut self) -> &mut NotificationManager {
        &mut self.notifications
    }

    /// Runs one frame.
    pub fn frame(&mut self, renderer: &mut dyn Renderer2D, input: FrameInput) {
        let viewport = input.viewport;
        self.root.state_mut().set_size(viewport.width, viewport.height);
        self.notifications.update();

        let now = self.notifications.now_ms();
        {
            let mut ctx = RenderContext::new(renderer, input.pointer, input.delta, now);
            self.root.render(&mut ctx);
        }
        self.notifications.render(renderer, viewport);
    }

    /// Routes a screen-space click into the widget tree.
    ///
    /// Returns true if it landed on the root.
    pub fn mouse_clicked(&mut self, event: ClickEvent) -> bool {
        self.root.mouse_clicked(event)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::color::Color;
    use crate::frame::ManualClock;
    use crate::headless::{CommandRecorder, MonospaceFont, RenderCommand};
    use crate::layout::Point;
    use crate::render::Font;
    use crate::widget::Button;

    #[test]
    fn test_widgets_then_notifications() {
        let font: Font = Arc::new(MonospaceFont::new(6.0, 12.0));
        let clock = ManualClock::new(0);
        let manager = NotificationManager::builder()
            .regular_font(font.clone())
            .bold_font(font.clone())
            .icon_font(font.clone())
            .clock(clock.clone())
            .build()
            .expect("fonts supplied");

        let viewport = Size::new(800.0, 600.0);
        let mut overlay = Overlay::new(viewport, manager);
        overlay.add_widget(Button::new(
            Rect::new(10.0, 10.0, 50.0, 20.0),
            "Go",
            Color::BLUE,
            Color::WHITE,
            font,
        ));
        overlay.notifications_mut().info("hello", "Hello", "World");

        clock.set(500);
        let mut recorder = CommandRecorder::new();
        overlay.frame(&mut recorder, FrameInput::new(Point::ZERO, 1.0, viewport));

        let commands = recorder.take();
        assert_eq!(commands[0].bounds(), Rect::new(10.0, 10.0, 50.0, 20.0));
        assert!(matches!(
            commands[1],
            RenderCommand::RoundedRect { bounds, .. } if bounds == Rect::new(568.0, 12.0, 220.0, 40.0)
        ));
        assert_eq!(overlay.notifications().len(), 1);
    }
}
