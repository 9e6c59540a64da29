//! Packed ARGB colors.
//!
//! A [`Color`] is a single `u32`: alpha in the top byte, then red, green and
//! blue. Every accessor is derived from the packed value, nothing is stored
//! twice.

use std::fmt;

use crate::error::{UiError, UiResult};

/// Scale factor used by [`Color::brighter`] and [`Color::darker`].
const FACTOR: f64 = 0.7;

/// An immutable RGBA color packed into one `u32` (`0xAARRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    /// Opaque cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Opaque light gray.
    pub const LIGHT_GRAY: Self = Self::rgb(192, 192, 192);
    /// Opaque gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Opaque dark gray.
    pub const DARK_GRAY: Self = Self::rgb(64, 64, 64);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Creates a color from its four channels.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from integer channels, keeping only the low byte of each.
    ///
    /// Out-of-range input is masked, never rejected: `256` becomes `0`.
    #[must_use]
    pub const fn from_channels(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self::rgba((r & 0xFF) as u8, (g & 0xFF) as u8, (b & 0xFF) as u8, (a & 0xFF) as u8)
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value.
    ///
    /// Whatever sits in the top byte is replaced by `0xFF`.
    #[must_use]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(0xFF00_0000 | rgb)
    }

    /// Creates a color from a packed `0xAARRGGBB` value, alpha included.
    #[must_use]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    #[must_use]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Returns the same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::rgba(self.red(), self.green(), self.blue(), alpha)
    }

    /// Returns a brighter version of this color. Alpha is kept.
    ///
    /// Channels below `1 / (1 - 0.7)` are raised to that floor before scaling,
    /// so even pure black visibly lightens.
    #[must_use]
    pub fn brighter(self) -> Self {
        let mut r = i32::from(self.red());
        let mut g = i32::from(self.green());
        let mut b = i32::from(self.blue());
        let alpha = self.alpha();

        #[allow(clippy::cast_possible_truncation)]
        let floor = (1.0 / (1.0 - FACTOR)) as i32;
        if r == 0 && g == 0 && b == 0 {
            return Self::from_channels(floor, floor, floor, i32::from(alpha));
        }
        for channel in [&mut r, &mut g, &mut b] {
            if *channel > 0 && *channel < floor {
                *channel = floor;
            }
        }

        let scale = |c: i32| -> i32 {
            #[allow(clippy::cast_possible_truncation)]
            let scaled = (f64::from(c) / FACTOR) as i32;
            scaled.min(255)
        };
        Self::from_channels(scale(r), scale(g), scale(b), i32::from(alpha))
    }

    /// Returns a darker version of this color. Alpha is kept.
    #[must_use]
    pub fn darker(self) -> Self {
        let scale = |c: u8| -> i32 {
            #[allow(clippy::cast_possible_truncation)]
            let scaled = (f64::from(c) * FACTOR) as i32;
            scaled.max(0)
        };
        Self::from_channels(
            scale(self.red()),
            scale(self.green()),
            scale(self.blue()),
            i32::from(self.alpha()),
        )
    }

    /// Linearly blends every channel, alpha included, from `from` to `to`.
    ///
    /// `t` is NOT clamped. Callers pass a value in `[0, 1]`; anything else
    /// extrapolates and the result is masked back into byte range.
    #[must_use]
    pub fn interpolate(from: Self, to: Self, t: f32) -> Self {
        let mix = |a: u8, b: u8| -> i32 {
            let a = f32::from(a);
            let b = f32::from(b);
            #[allow(clippy::cast_possible_truncation)]
            let value = (a + (b - a) * t) as i32;
            value
        };
        Self::from_channels(
            mix(from.red(), to.red()),
            mix(from.green(), to.green()),
            mix(from.blue(), to.blue()),
            mix(from.alpha(), to.alpha()),
        )
    }

    /// Converts HSB components to a packed opaque `0xFFRRGGBB` value.
    ///
    /// `hue` wraps around (only its fractional part is used); saturation and
    /// brightness are expected in `[0, 1]`.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let byte = |v: f32| -> u32 { ((v * 255.0 + 0.5) as u32) & 0xFF };

        let (r, g, b) = if saturation == 0.0 {
            let v = byte(brightness);
            (v, v, v)
        } else {
            let h = (hue - hue.floor()) * 6.0;
            let f = h - h.floor();
            let p = brightness * (1.0 - saturation);
            let q = brightness * (1.0 - saturation * f);
            let t = brightness * (1.0 - saturation * (1.0 - f));
            #[allow(clippy::cast_possible_truncation)]
            match h as i32 {
                0 => (byte(brightness), byte(t), byte(p)),
                1 => (byte(q), byte(brightness), byte(p)),
                2 => (byte(p), byte(brightness), byte(t)),
                3 => (byte(p), byte(q), byte(brightness)),
                4 => (byte(t), byte(p), byte(brightness)),
                5 => (byte(brightness), byte(p), byte(q)),
                _ => (0, 0, 0),
            }
        };
        0xFF00_0000 | (r << 16) | (g << 8) | b
    }

    /// Converts RGB channels to `[hue, saturation, brightness]`, each in `[0, 1]`.
    #[must_use]
    pub fn rgb_to_hsb(r: u8, g: u8, b: u8) -> [f32; 3] {
        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);

        let brightness = f32::from(cmax) / 255.0;
        let saturation = if cmax == 0 {
            0.0
        } else {
            f32::from(cmax - cmin) / f32::from(cmax)
        };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let span = f32::from(cmax - cmin);
            let rc = f32::from(cmax - r) / span;
            let gc = f32::from(cmax - g) / span;
            let bc = f32::from(cmax - b) / span;
            let sector = if r == cmax {
                bc - gc
            } else if g == cmax {
                2.0 + rc - bc
            } else {
                4.0 + gc - rc
            };
            let raw = sector / 6.0;
            if raw < 0.0 { raw + 1.0 } else { raw }
        };

        [hue, saturation, brightness]
    }

    /// Creates an opaque color from HSB components.
    #[must_use]
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self::from_argb(Self::hsb_to_rgb(hue, saturation, brightness))
    }

    /// Returns this color as `[hue, saturation, brightness]`.
    #[must_use]
    pub fn to_hsb(self) -> [f32; 3] {
        Self::rgb_to_hsb(self.red(), self.green(), self.blue())
    }

    /// Parses an opaque color from `#RRGGBB`, `0xRRGGBB` or a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidColor`] when the string is not a number in
    /// one of those notations.
    pub fn decode(text: &str) -> UiResult<Self> {
        let trimmed = text.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            u32::from_str_radix(hex, 16)
        } else if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            u32::from_str_radix(hex, 16)
        } else {
            trimmed.parse::<u32>()
        };

        let value = parsed.map_err(|_| UiError::InvalidColor(text.to_owned()))?;
        Ok(Self::from_rgb(value & 0x00FF_FFFF))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color[r={},g={},b={},a={}]",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}
