//! Textured quad.

use crate::color::Color;
use crate::layout::Rect;
use crate::render::{RenderContext, TextureId};

use super::core::WidgetState;

/// Draws a host texture stretched over its bounds. Never handles clicks.
///
/// The widget's base color tints the texture; nothing is drawn while no
/// texture is set.
pub struct ImageWidget {
    state: WidgetState,
    texture: Option<TextureId>,
}

impl ImageWidget {
    /// Creates an image widget.
    #[must_use]
    pub fn new(bounds: Rect, texture: Option<TextureId>) -> Self {
        Self {
            state: WidgetState::new(bounds, Color::WHITE),
            texture,
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

    /// Current texture.
    #[must_use]
    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    /// Swaps the texture.
    pub fn set_texture(&mut self, texture: Option<TextureId>) {
        self.texture = texture;
    }

    /// Draws the texture.
    pub fn render(&mut self, ctx: &mut RenderContext<'_>) {
        if !self.state.is_visible() {
            return;
        }
        if let Some(texture) = self.texture {
            ctx.draw_texture(self.state.rect(), texture, self.state.color());
        }
    }
}
