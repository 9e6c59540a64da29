//! Notification layout and timing configuration.
//!
//! Loaded once at startup from TOML. Every field has a default, so a file
//! only needs the values it changes:
//!
//! ```toml
//! width = 260.0
//! default_duration_ms = 5000
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};

/// Geometry, typography and timing of notification cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Card width.
    pub width: f32,
    /// Height of a card whose title and message fit on one line each.
    pub min_height: f32,
    /// Cards never grow past this; extra lines are clipped.
    pub max_height: f32,
    /// Height added per wrapped line.
    pub line_height: f32,
    /// Vertical gap between stacked cards.
    pub spacing: f32,
    /// Distance from the right screen edge.
    pub margin_x: f32,
    /// Distance from the top screen edge.
    pub margin_y: f32,
    /// Card corner radius.
    pub corner_radius: f32,
    /// Card border width.
    pub border_width: f32,
    /// Text column offset from the card's left edge.
    pub text_offset_x: f32,
    /// Space kept free right of the text column.
    pub text_padding_right: f32,
    /// Offset of the first text line from the card's top edge.
    pub text_offset_y: f32,
    /// Gap between the title block and the message block.
    pub title_gap: f32,
    /// Size of title and message text.
    pub font_size: f32,
    /// Size of the stack badge text.
    pub badge_font_size: f32,
    /// Size of the type icon glyph.
    pub icon_size: f32,
    /// Lifetime used by the `success`/`error`/`warning`/`info` helpers.
    pub default_duration_ms: u64,
    /// Fade-in length after creation.
    pub fade_in_ms: u64,
    /// Fade-out length before expiry.
    pub fade_out_ms: u64,
    /// Fraction of the remaining distance covered per frame when sliding.
    pub slide_speed: f32,
    /// Distance under which a sliding card snaps to its slot.
    pub snap_threshold: f32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            width: 220.0,
            min_height: 40.0,
            max_height: 80.0,
            line_height: 12.0,
            spacing: 6.0,
            margin_x: 12.0,
            margin_y: 12.0,
            corner_radius: 8.0,
            border_width: 1.2,
            text_offset_x: 38.0,
            text_padding_right: 8.0,
            text_offset_y: 10.0,
            title_gap: 2.0,
            font_size: 9.0,
            badge_font_size: 8.0,
            icon_size: 10.0,
            default_duration_ms: 3_000,
            fade_in_ms: 300,
            fade_out_ms: 200,
            slide_speed: 0.12,
            snap_threshold: 0.3,
        }
    }
}

impl NotificationConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ConfigParse`] for malformed TOML and
    /// [`UiError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(source: &str) -> UiResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`NotificationConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| UiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "loaded notification config");
        Ok(config)
    }

    /// Width available to wrapped text.
    #[must_use]
    pub fn text_width(&self) -> f32 {
        self.width - self.text_offset_x - self.text_padding_right
    }

    /// Checks that the values describe a drawable card.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> UiResult<()> {
        let fail = |reason: String| {
            tracing::warn!(%reason, "rejected notification config");
            Err(UiError::InvalidConfig(reason))
        };

        if self.min_height <= 0.0 || self.min_height > self.max_height {
            return fail(format!(
                "min_height {} must be positive and not exceed max_height {}",
                self.min_height, self.max_height
            ));
        }
        if self.text_width() <= 0.0 {
            return fail(format!(
                "width {} leaves no room for text after offset {} and padding {}",
                self.width, self.text_offset_x, self.text_padding_right
            ));
        }
        if self.line_height <= 0.0 || self.font_size <= 0.0 {
            return fail("line_height and font_size must be positive".to_owned());
        }
        if !(self.slide_speed > 0.0 && self.slide_speed <= 1.0) {
            return fail(format!("slide_speed {} must be in (0, 1]", self.slide_speed));
        }
        let non_negative = [
            ("snap_threshold", self.snap_threshold),
            ("spacing", self.spacing),
            ("margin_x", self.margin_x),
            ("margin_y", self.margin_y),
            ("corner_radius", self.corner_radius),
            ("border_width", self.border_width),
            ("title_gap", self.title_gap),
            ("icon_size", self.icon_size),
            ("badge_font_size", self.badge_font_size),
        ];
        if let Some((field, value)) = non_negative.iter().find(|(_, value)| !(*value >= 0.0)) {
            return fail(format!("{field} {value} must not be negative"));
        }
        Ok(())
    }
}
