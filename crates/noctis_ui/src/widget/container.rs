//! Container widget.
//!
//! A container owns its children and gives them a local space whose origin is
//! the container's top-left corner. Both drawing and pointer coordinates are
//! shifted before they reach a child.

use crate::color::Color;
use crate::input::ClickEvent;
use crate::layout::Rect;
use crate::render::RenderContext;

use super::core::{ClickCallback, Outline, WidgetId, WidgetState};
use super::Widget;

/// Custom drawing run after the container background, before the children.
///
/// The context is already in the container's local space.
pub type RenderHook = Box<dyn FnMut(&mut RenderContext<'_>)>;

/// Ordered list of children sharing one local space.
///
/// Insertion order is paint order and click order.
pub struct Container {
    state: WidgetState,
    background: Option<Color>,
    corner_radius: f32,
    outline: Option<Outline>,
    on_click: Option<ClickCallback>,
    render_hook: Option<RenderHook>,
    children: Vec<(WidgetId, Widget)>,
    next_id: u64,
}

impl Container {
    /// Creates an empty, transparent container.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            state: WidgetState::new(bounds, Color::TRANSPARENT),
            background: None,
            corner_radius: 0.0,
            outline: None,
            on_click: None,
            render_hook: None,
            children: Vec::new(),
            next_id: 0,
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

    /// Background fill, if any.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Sets or removes the background fill.
    pub fn set_background(&mut self, color: Option<Color>) {
        self.background = color;
        if let Some(color) = color {
            self.state.set_color(color);
        }
    }

    /// Corner radius of the background and outline.
    #[must_use]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Sets the corner radius; negative values become zero.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
    }

    /// Draws an outline; a width of zero removes it.
    pub fn set_outline(&mut self, color: Color, width: f32) {
        self.outline = Some(Outline::new(color, width));
    }

    /// Sets the action run when a click lands inside the container.
    pub fn set_on_click(&mut self, action: impl FnMut(&ClickEvent) + 'static) {
        self.on_click = Some(Box::new(action));
    }

    /// Sets the custom drawing hook.
    pub fn set_render_hook(&mut self, hook: impl FnMut(&mut RenderContext<'_>) + 'static) {
        self.render_hook = Some(Box::new(hook));
    }

    /// Appends a child and returns its id within this container.
    pub fn add_child(&mut self, child: impl Into<Widget>) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        self.children.push((id, child.into()));
        id
    }

    /// Appends several children in order.
    pub fn add_children<I>(&mut self, children: I) -> Vec<WidgetId>
    where
        I: IntoIterator,
        I::Item: Into<Widget>,
    {
        children.into_iter().map(|child| self.add_child(child)).collect()
    }

    /// Removes a child, handing it back to the caller.
    pub fn remove_child(&mut self, id: WidgetId) -> Option<Widget> {
        let index = self.children.iter().position(|(child_id, _)| *child_id == id)?;
        Some(self.children.remove(index).1)
    }

    /// Removes every child the predicate selects.
    pub fn remove_if(&mut self, mut predicate: impl FnMut(&Widget) -> bool) {
        self.children.retain(|(_, child)| !predicate(child));
    }

    /// Removes all children.
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Looks up a child.
    #[must_use]
    pub fn child(&self, id: WidgetId) -> Option<&Widget> {
        self.children.iter().find(|(child_id, _)| *child_id == id).map(|(_, child)| child)
    }

    /// Looks up a child mutably.
    pub fn child_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.children
            .iter_mut()
            .find(|(child_id, _)| *child_id == id)
            .map(|(_, child)| child)
    }

    /// Children in paint order.
    pub fn children(&self) -> impl Iterator<Item = &Widget> + '_ {
        self.children.iter().map(|(_, child)| child)
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the container has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Draws the background, outline, hook and every visible, enabled child.
    pub fn render(&mut self, ctx: &mut RenderContext<'_>) {
        if !self.state.is_visible() {
            return;
        }

        let size = self.state.size();
        let local_bounds = Rect::new(0.0, 0.0, size.width, size.height);
        let mut local = ctx.translated(self.state.position());
        let rounded = self.corner_radius > 0.0;

        if let Some(background) = self.background {
            if rounded {
                local.fill_rounded_rect(local_bounds, self.corner_radius, background);
            } else {
                local.fill_rect(local_bounds, background);
            }
        }

        if let Some(outline) = self.outline.filter(Outline::is_visible) {
            if rounded {
                local.stroke_rounded_rect(local_bounds, self.corner_radius, outline.width, outline.color);
            } else {
                local.stroke_rect(local_bounds, outline.width, outline.color);
            }
        }

        if let Some(hook) = self.render_hook.as_mut() {
            hook(&mut local);
        }

        for (_, child) in &mut self.children {
            let child_state = child.state();
            if child_state.is_visible() && child_state.is_enabled() {
                child.render(&mut local);
            }
        }
    }

    /// Handles a click expressed in the parent's space.
    ///
    /// Outside the bounds (or while hidden) nothing happens and `false` is
    /// returned. Inside, the container's own action runs, then every child
    /// receives the click in local coordinates, whether or not an earlier
    /// child handled it, and `true` is returned.
    pub fn mouse_clicked(&mut self, event: ClickEvent) -> bool {
        if !self.state.is_visible() || !self.state.contains(event.position) {
            return false;
        }

        if let Some(action) = self.on_click.as_mut() {
            action(&event);
        }

        let local = event.localize(self.state.position());
        for (_, child) in &mut self.children {
            child.mouse_clicked(local);
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
    use crate::headless::{CommandRecorder, MonospaceFont, RenderCommand};
    use crate::input::MouseButton;
    use crate::layout::Point;
    use crate::render::Font;
    use crate::widget::{Button, TextWidget};

    fn font() -> Font {
        Arc::new(MonospaceFont::new(6.0, 12.0))
    }

    fn counting_button(bounds: Rect, counter: &Rc<Cell<u32>>) -> Button {
        let mut button = Button::new(bounds, "b", Color::GRAY, Color::WHITE, font());
        let counter = Rc::clone(counter);
        button.set_on_click(move |_| counter.set(counter.get() + 1));
        button
    }

    fn click(x: f32, y: f32) -> ClickEvent {
        ClickEvent::new(Point::new(x, y), MouseButton::Left)
    }

    #[test]
    fn test_child_hit_uses_local_space() {
        let hits = Rc::new(Cell::new(0));
        let mut container = Container::new(Rect::new(100.0, 100.0, 200.0, 200.0));
        container.add_child(counting_button(Rect::new(10.0, 10.0, 20.0, 20.0), &hits));

        container.mouse_clicked(click(111.0, 111.0));
        assert_eq!(hits.get(), 1);
        container.mouse_clicked(click(109.0, 109.0));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_click_reaches_every_overlapping_child() {
        let hits = Rc::new(Cell::new(0));
        let mut container = Container::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        container.add_children([
            counting_button(Rect::new(0.0, 0.0, 50.0, 50.0), &hits),
            counting_button(Rect::new(10.0, 10.0, 50.0, 50.0), &hits),
        ]);

        assert!(container.mouse_clicked(click(20.0, 20.0)));
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_outside_or_hidden_is_not_handled() {
        let own = Rc::new(Cell::new(0));
        let counter = Rc::clone(&own);
        let mut container = Container::new(Rect::new(0.0, 0.0, 50.0, 50.0));
        container.set_on_click(move |_| counter.set(counter.get() + 1));

        assert!(!container.mouse_clicked(click(60.0, 10.0)));
        container.state_mut().set_visible(false);
        assert!(!container.mouse_clicked(click(10.0, 10.0)));
        assert_eq!(own.get(), 0);
    }

    #[test]
    fn test_render_order_and_translation() {
        let mut container = Container::new(Rect::new(100.0, 50.0, 200.0, 100.0));
        container.set_background(Some(Color::BLACK));
        container.set_outline(Color::WHITE, 1.0);
        let hooked = Rc::new(Cell::new(false));
        let flag = Rc::clone(&hooked);
        container.set_render_hook(move |ctx| {
            flag.set(true);
            assert_eq!(ctx.origin(), Point::new(100.0, 50.0));
        });
        container.add_child(Button::new(Rect::new(10.0, 10.0, 50.0, 20.0), "x", Color::RED, Color::WHITE, font()));

        let mut recorder = CommandRecorder::new();
        container.render(&mut RenderContext::new(&mut recorder, Point::ZERO, 1.0, 0));

        assert!(hooked.get());
        assert_eq!(
            recorder.commands(),
            &[
                RenderCommand::Rect {
                    bounds: Rect::new(100.0, 50.0, 200.0, 100.0),
                    color: Color::BLACK,
                },
                RenderCommand::Outline {
                    bounds: Rect::new(100.0, 50.0, 200.0, 100.0),
                    width: 1.0,
                    color: Color::WHITE,
                },
                RenderCommand::RoundedRect {
                    bounds: Rect::new(110.0, 60.0, 50.0, 20.0),
                    radius: Button::DEFAULT_RADIUS,
                    color: Color::RED,
                },
            ]
        );
    }

    #[test]
    fn test_rounded_background_when_radius_set() {
        let mut container = Container::new(Rect::new(0.0, 0.0, 10.0, 10.0));
        container.set_background(Some(Color::BLACK));
        container.set_corner_radius(4.0);
        container.set_corner_radius(-2.0);
        assert!(container.corner_radius().abs() < f32::EPSILON);

        container.set_corner_radius(4.0);
        let mut recorder = CommandRecorder::new();
        container.render(&mut RenderContext::new(&mut recorder, Point::ZERO, 1.0, 0));
        assert!(matches!(recorder.commands()[0], RenderCommand::RoundedRect { .. }));
    }

    #[test]
    fn test_hidden_and_disabled_children_are_skipped() {
        let mut container = Container::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let hidden = container.add_child(TextWidget::new(0.0, 0.0, "hidden", 9.0, Color::WHITE, font()));
        let disabled = container.add_child(Button::new(Rect::new(0.0, 0.0, 10.0, 10.0), "d", Color::RED, Color::WHITE, font()));
        if let Some(child) = container.child_mut(hidden) {
            child.state_mut().set_visible(false);
        }
        if let Some(child) = container.child_mut(disabled) {
            child.state_mut().set_enabled(false);
        }

        let mut recorder = CommandRecorder::new();
        container.render(&mut RenderContext::new(&mut recorder, Point::ZERO, 1.0, 0));
        assert_eq!(recorder.command_count(), 0);
    }

    #[test]
    fn test_child_management() {
        let mut container = Container::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        let first = container.add_child(TextWidget::new(0.0, 0.0, "a", 9.0, Color::WHITE, font()));
        let ids = container.add_children([
            TextWidget::new(0.0, 0.0, "b", 9.0, Color::WHITE, font()),
            TextWidget::new(0.0, 0.0, "c", 9.0, Color::RED, font()),
        ]);
        assert_eq!(container.len(), 3);
        assert_ne!(first, ids[0]);

        let removed = container.remove_child(first);
        assert!(matches!(removed, Some(Widget::Text(ref t)) if t.text() == "a"));
        assert!(container.remove_child(first).is_none());

        container.remove_if(|child| child.state().color() == Color::RED);
        assert_eq!(container.len(), 1);
        assert!(container.child(ids[0]).is_some());

        container.clear_children();
        assert!(container.is_empty());
    }
}
