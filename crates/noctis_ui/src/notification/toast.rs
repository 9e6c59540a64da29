//! A single notification and its animation state.

use crate::animation::{progress, Easing};
use crate::color::Color;
use crate::config::NotificationConfig;
use crate::layout::{clamp, lerp};

/// Severity of a notification; fixes its accent color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Something worked.
    Success,
    /// Something failed.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    Info,
}

impl NotificationKind {
    /// Accent color used for the bar, icon and progress.
    #[must_use]
    pub const fn accent(self) -> Color {
        match self {
            Self::Success => Color::rgb(52, 211, 153),
            Self::Error => Color::rgb(248, 113, 113),
            Self::Warning => Color::rgb(251, 146, 60),
            Self::Info => Color::rgb(59, 130, 246),
        }
    }

    /// Icon glyph, a private-use codepoint of the icon font.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Success => "\u{E951}",
            Self::Error => "\u{EB15}",
            Self::Warning => "\u{E90A}",
            Self::Info => "\u{EA0C}",
        }
    }
}

/// One toast.
///
/// `id` is a deduplication key: a second notification with the same id while
/// this one is alive stacks onto it instead of appearing separately.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: String,
    title: String,
    message: String,
    kind: NotificationKind,
    duration_ms: u64,
    created_at: u64,
    last_stacked_at: u64,
    stack_count: u32,
    target_y: f32,
    current_y: f32,
    animation_progress: f32,
}

impl Notification {
    /// Creates a notification born at `now_ms`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u64,
        now_ms: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            kind,
            duration_ms,
            created_at: now_ms,
            last_stacked_at: now_ms,
            stack_count: 1,
            target_y: 0.0,
            current_y: 0.0,
            animation_progress: 0.0,
        }
    }

    /// Deduplication key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title line (drawn bold).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Severity.
    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    /// Accent color of the severity.
    #[must_use]
    pub fn color(&self) -> Color {
        self.kind.accent()
    }

    /// Lifetime after the last stack.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Creation time.
    #[must_use]
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Time of the last stack (creation time if never stacked).
    #[must_use]
    pub fn last_stacked_at(&self) -> u64 {
        self.last_stacked_at
    }

    /// How many times this notification was posted.
    #[must_use]
    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Returns true once a duplicate has been merged in.
    #[must_use]
    pub fn has_stack(&self) -> bool {
        self.stack_count > 1
    }

    /// Slot this card is sliding toward.
    #[must_use]
    pub fn target_y(&self) -> f32 {
        self.target_y
    }

    /// Assigns the slot this card slides toward.
    pub fn set_target_y(&mut self, target_y: f32) {
        self.target_y = target_y;
    }

    /// Eased vertical offset below the top margin.
    #[must_use]
    pub fn current_y(&self) -> f32 {
        self.current_y
    }

    /// Horizontal slide offset; cards do not slide sideways.
    #[must_use]
    pub fn slide_offset(&self) -> f32 {
        0.0
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        clamp(self.animation_progress, 0.0, 1.0)
    }

    /// Returns true if `other` carries the same id.
    #[must_use]
    pub fn is_similar_to(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Merges a duplicate: bumps the counter and restarts the lifetime.
    pub fn increment_stack(&mut self, now_ms: u64) {
        self.stack_count = self.stack_count.saturating_add(1);
        self.last_stacked_at = now_ms.max(self.created_at);
    }

    /// Time since the last stack.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_stacked_at)
    }

    /// Returns true once the lifetime since the last stack has passed.
    #[must_use]
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) > self.duration_ms
    }

    /// Share of the lifetime still left, for the progress bar.
    #[must_use]
    pub fn remaining_fraction(&self, now_ms: u64) -> f32 {
        1.0 - progress(self.last_stacked_at, now_ms, self.duration_ms)
    }

    /// Recomputes fade progress and moves one easing step toward the slot.
    pub fn tick(&mut self, now_ms: u64, config: &NotificationConfig) {
        self.animation_progress = self.fade(now_ms, config);
        self.step_toward_target(config);
    }

    fn fade(&self, now_ms: u64, config: &NotificationConfig) -> f32 {
        let since_creation = now_ms.saturating_sub(self.created_at);

        if since_creation < config.fade_in_ms {
            Easing::QuadOut.apply(progress(self.created_at, now_ms, config.fade_in_ms))
        } else {
            1.0 - Easing::QuadIn.apply(self.fade_out_progress(now_ms, config.fade_out_ms))
        }
    }

    /// Position inside the fade-out window that ends exactly at expiry.
    ///
    /// For lifetimes shorter than the window the window starts before the
    /// last stack, so the toast is already partly faded when it appears.
    fn fade_out_progress(&self, now_ms: u64, fade_out_ms: u64) -> f32 {
        if fade_out_ms == 0 {
            return 0.0;
        }
        let into_window = self.elapsed_ms(now_ms).saturating_add(fade_out_ms);
        if into_window <= self.duration_ms {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = (into_window - self.duration_ms) as f32 / fade_out_ms as f32;
        clamp(ratio, 0.0, 1.0)
    }

    fn step_toward_target(&mut self, config: &NotificationConfig) {
        if (self.target_y - self.current_y).abs() < config.snap_threshold {
            self.current_y = self.target_y;
        } else {
            self.current_y = lerp(self.current_y, self.target_y, config.slide_speed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(duration_ms: u64) -> Notification {
        Notification::new("save", "Saved", "World saved", NotificationKind::Success, duration_ms, 1_000)
    }

    #[test]
    fn test_kind_palette() {
        assert_eq!(NotificationKind::Success.accent(), Color::rgb(52, 211, 153));
        assert_eq!(NotificationKind::Info.accent(), Color::rgb(59, 130, 246));
        assert_ne!(NotificationKind::Error.icon(), NotificationKind::Warning.icon());
    }

    #[test]
    fn test_expiry_counts_from_last_stack() {
        let mut toast = toast(100);
        assert!(!toast.is_expired(1_100));
        assert!(toast.is_expired(1_101));

        toast.increment_stack(1_080);
        assert_eq!(toast.stack_count(), 2);
        assert!(toast.has_stack());
        assert!(!toast.is_expired(1_101));
        assert!(toast.is_expired(1_181));
        assert!(toast.last_stacked_at() >= toast.created_at());
    }

    #[test]
    fn test_fade_in_then_steady_then_fade_out() {
        let config = NotificationConfig::default();
        let mut toast = toast(3_000);

        toast.tick(1_000, &config);
        assert!(toast.alpha().abs() < 1e-6);

        toast.tick(1_150, &config);
        assert!((toast.alpha() - 0.75).abs() < 1e-4);

        toast.tick(2_000, &config);
        assert!((toast.alpha() - 1.0).abs() < 1e-6);

        toast.tick(3_900, &config);
        assert!((toast.alpha() - 0.75).abs() < 1e-4);

        toast.tick(4_000, &config);
        assert!(toast.alpha().abs() < 1e-6);
    }

    #[test]
    fn test_short_restacked_toast_fades_out_by_expiry() {
        let config = NotificationConfig::default();
        let mut toast = Notification::new("ping", "Ping", "", NotificationKind::Info, 100, 0);
        toast.increment_stack(400);

        toast.tick(450, &config);
        assert!((toast.alpha() - 0.4375).abs() < 1e-4);

        toast.tick(500, &config);
        assert!(!toast.is_expired(500));
        assert!(toast.alpha() < 0.01);
    }

    #[test]
    fn test_without_fade_out_stays_opaque_until_expiry() {
        let config = NotificationConfig {
            fade_out_ms: 0,
            ..NotificationConfig::default()
        };
        let mut toast = toast(3_000);
        toast.tick(4_000, &config);
        assert!((toast.alpha() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_slide_eases_and_snaps() {
        let config = NotificationConfig::default();
        let mut toast = toast(3_000);
        toast.current_y = 100.0;
        toast.set_target_y(0.0);

        toast.tick(2_000, &config);
        assert!((toast.current_y() - 88.0).abs() < 1e-3);

        for _ in 0..200 {
            toast.tick(2_000, &config);
        }
        assert!(toast.current_y().abs() < f32::EPSILON);
    }

    #[test]
    fn test_remaining_fraction() {
        let toast = toast(1_000);
        assert!((toast.remaining_fraction(1_000) - 1.0).abs() < 1e-6);
        assert!((toast.remaining_fraction(1_250) - 0.75).abs() < 1e-6);
        assert!(toast.remaining_fraction(5_000).abs() < 1e-6);
    }
}
