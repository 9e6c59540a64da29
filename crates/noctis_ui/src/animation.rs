//! Time-driven animation.
//!
//! Nothing here ticks on its own. Every value is recomputed from the time a
//! transition started and the time the frame is drawn at, so animations stay
//! correct under any frame rate.

use crate::color::Color;
use crate::layout::clamp;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    QuadOut,
    /// Quadratic ease-in: gentle start, fast finish.
    QuadIn,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = clamp(t, 0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::QuadIn => t * t,
        }
    }
}

/// Fraction of `duration_ms` elapsed between `start_ms` and `now_ms`, in `[0, 1]`.
///
/// A zero duration is complete immediately.
#[must_use]
pub fn progress(start_ms: u64, now_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = now_ms.saturating_sub(start_ms) as f32 / duration_ms as f32;
    clamp(ratio, 0.0, 1.0)
}

/// Background and label colors animated together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverColors {
    /// Fill color.
    pub background: Color,
    /// Label color.
    pub label: Color,
}

impl HoverColors {
    /// Creates a new color pair.
    #[must_use]
    pub const fn new(background: Color, label: Color) -> Self {
        Self { background, label }
    }

    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        Self {
            background: Color::interpolate(from.background, to.background, t),
            label: Color::interpolate(from.label, to.label, t),
        }
    }
}

/// Where a [`HoverAnimator`] currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    /// Not hovered, no transition running: base colors.
    Idle,
    /// Hovered: animating toward (or resting at) the hover colors.
    Entering,
    /// Pointer left: animating back to the base colors.
    Leaving,
}

/// Pointer-over state machine that blends base and hover colors.
///
/// Entering always starts from the base colors, even when the pointer comes
/// back halfway through a leave transition. Under rapid toggling this shows a
/// small jump; it is kept so the animation only ever depends on the last
/// transition start.
#[derive(Debug, Clone)]
pub struct HoverAnimator {
    duration_ms: u64,
    hover: HoverColors,
    hovered: bool,
    transition_start: Option<u64>,
}

impl HoverAnimator {
    /// Creates an idle animator blending toward `hover` over `duration_ms`.
    #[must_use]
    pub fn new(duration_ms: u64, hover: HoverColors) -> Self {
        Self {
            duration_ms,
            hover,
            hovered: false,
            transition_start: None,
        }
    }

    /// Transition length.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Colors reached while hovered.
    #[must_use]
    pub fn hover_colors(&self) -> HoverColors {
        self.hover
    }

    /// Whether the pointer was inside on the last update.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Start of the running transition, if any.
    #[must_use]
    pub fn transition_start(&self) -> Option<u64> {
        self.transition_start
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> HoverPhase {
        match (self.hovered, self.transition_start) {
            (true, _) => HoverPhase::Entering,
            (false, Some(_)) => HoverPhase::Leaving,
            (false, None) => HoverPhase::Idle,
        }
    }

    /// Feeds the pointer state for this frame and returns the colors to draw.
    pub fn update(&mut self, pointer_inside: bool, now_ms: u64, base: HoverColors) -> HoverColors {
        if pointer_inside && !self.hovered {
            self.hovered = true;
            self.transition_start = Some(now_ms);
        } else if !pointer_inside && self.hovered {
            self.hovered = false;
            self.transition_start = Some(now_ms);
        }

        let Some(start) = self.transition_start else {
            return base;
        };

        let t = progress(start, now_ms, self.duration_ms);
        if self.hovered {
            HoverColors::interpolate(base, self.hover, t)
        } else {
            let colors = HoverColors::interpolate(self.hover, base, t);
            if t >= 1.0 {
                self.transition_start = None;
            }
            colors
        }
    }
}
