//! Widget tree.
//!
//! Widgets are a closed set, so [`Widget`] is an enum and every dispatcher
//! matches exhaustively. A widget lives in exactly one slot: the application
//! root or one [`Container`].

mod button;
mod container;
mod core;
mod image;
mod text;

pub use self::button::Button;
pub use self::container::{Container, RenderHook};
pub use self::core::{ClickCallback, Outline, WidgetFlags, WidgetId, WidgetState};
pub use self::image::ImageWidget;
pub use self::text::TextWidget;

use crate::input::ClickEvent;
use crate::render::RenderContext;

/// Any widget the toolkit knows how to draw and click.
pub enum Widget {
    /// Clickable, hover-animated button.
    Button(Button),
    /// Single line of text.
    Text(TextWidget),
    /// Textured quad.
    Image(ImageWidget),
    /// Container with its own local space.
    Container(Container),
}

impl Widget {
    /// Shared position/size/flags of the widget.
    #[must_use]
    pub fn state(&self) -> &WidgetState {
        match self {
            Self::Button(button) => button.state(),
            Self::Text(text) => text.state(),
            Self::Image(image) => image.state(),
            Self::Container(container) => container.state(),
        }
    }

    /// Mutable access to the shared widget state.
    pub fn state_mut(&mut self) -> &mut WidgetState {
        match self {
            Self::Button(button) => button.state_mut(),
            Self::Text(text) => text.state_mut(),
            Self::Image(image) => image.state_mut(),
            Self::Container(container) => container.state_mut(),
        }
    }

    /// Draws the widget into the context's current space.
    pub fn render(&mut self, ctx: &mut RenderContext<'_>) {
        match self {
            Self::Button(button) => button.render(ctx),
            Self::Text(text) => text.render(ctx),
            Self::Image(image) => image.render(ctx),
            Self::Container(container) => container.render(ctx),
        }
    }

    /// Delivers a click expressed in the widget's parent space.
    ///
    /// Returns true when the widget handled it.
    pub fn mouse_clicked(&mut self, event: ClickEvent) -> bool {
        match self {
            Self::Button(button) => button.mouse_clicked(event),
            Self::Text(_) | Self::Image(_) => false,
            Self::Container(container) => container.mouse_clicked(event),
        }
    }

    /// Returns the button, if this is one.
    #[must_use]
    pub fn as_button(&self) -> Option<&Button> {
        match self {
            Self::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Returns the button mutably, if this is one.
    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            Self::Button(button) => Some(button),
            _ => None,
        }
    }

    /// Returns the container, if this is one.
    #[must_use]
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Returns the container mutably, if this is one.
    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Self::Container(container) => Some(container),
            _ => None,
        }
    }
}

impl From<Button> for Widget {
    fn from(button: Button) -> Self {
        Self::Button(button)
    }
}

impl From<TextWidget> for Widget {
    fn from(text: TextWidget) -> Self {
        Self::Text(text)
    }
}

impl From<ImageWidget> for Widget {
    fn from(image: ImageWidget) -> Self {
        Self::Image(image)
    }
}

impl From<Container> for Widget {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}
