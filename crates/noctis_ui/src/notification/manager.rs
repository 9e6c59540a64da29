//! # Notification Manager
//!
//! Owns the live toasts, deduplicates them by id, lays them out as a stack in
//! the top-right corner of the screen and draws them.
//!
//! ## Frame flow
//!
//! ```text
//! other threads ──NotificationSender──┐
//!                                     v
//! add_notification ──> live set ──> update() ──> render()
//!                                   │ drain channel
//!                                   │ tick fade + slide
//!                                   │ drop expired
//!                                   │ re-pack slots
//! ```
//!
//! The manager is single-threaded. Producers on other threads hold a
//! [`NotificationSender`]; their notifications are drained at the start of
//! the next [`NotificationManager::update`] and timestamped then.

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::color::Color;
use crate::config::NotificationConfig;
use crate::error::{UiError, UiResult};
use crate::frame::{Clock, SystemClock};
use crate::layout::{Rect, Size};
use crate::render::{Font, Renderer2D, TextMetrics};

use super::toast::{Notification, NotificationKind};
use super::wrap::{wrap_text, ELLIPSIS};

/// Card background.
const CARD_BACKGROUND: Color = Color::rgb(24, 26, 29);
/// Card border.
const CARD_BORDER: Color = Color::rgb(52, 58, 64);
/// Message text.
const MESSAGE_TEXT: Color = Color::rgb(170, 178, 190);
/// Progress bar track.
const PROGRESS_TRACK: Color = Color::rgb(40, 44, 48);

/// Pending producer messages before senders start failing.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Scales a color's opacity by `base_alpha * alpha`.
fn faded(color: Color, base_alpha: u8, alpha: f32) -> Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (f32::from(base_alpha) * alpha.clamp(0.0, 1.0)) as u8;
    color.with_alpha(scaled)
}

/// A notification posted from another thread, not yet timestamped.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingNotification {
    id: String,
    title: String,
    message: String,
    kind: NotificationKind,
    duration_ms: u64,
}

/// Cloneable, `Send` handle for posting notifications from any thread.
#[derive(Debug, Clone)]
pub struct NotificationSender {
    sender: Sender<PendingNotification>,
    default_duration_ms: u64,
}

impl NotificationSender {
    /// Queues a notification for the next frame.
    ///
    /// Returns `false` if the queue is full or the manager is gone; the
    /// notification is dropped in that case.
    pub fn add_notification(
        &self,
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u64,
    ) -> bool {
        let pending = PendingNotification {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            kind,
            duration_ms,
        };
        match self.sender.try_send(pending) {
            Ok(()) => true,
            Err(TrySendError::Full(pending)) => {
                tracing::warn!(id = %pending.id, "notification queue full, dropping notification");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Queues a success notification with the default duration.
    pub fn success(&self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> bool {
        self.add_notification(id, title, message, NotificationKind::Success, self.default_duration_ms)
    }

    /// Queues an error notification with the default duration.
    pub fn error(&self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> bool {
        self.add_notification(id, title, message, NotificationKind::Error, self.default_duration_ms)
    }

    /// Queues a warning notification with the default duration.
    pub fn warning(&self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> bool {
        self.add_notification(id, title, message, NotificationKind::Warning, self.default_duration_ms)
    }

    /// Queues an info notification with the default duration.
    pub fn info(&self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> bool {
        self.add_notification(id, title, message, NotificationKind::Info, self.default_duration_ms)
    }
}

/// Fonts a card is drawn with.
#[derive(Clone)]
struct CardFonts {
    regular: Font,
    bold: Font,
    icons: Font,
}

/// Rejects a text column that cannot fit [`ELLIPSIS`] in either text font.
fn check_text_column(config: &NotificationConfig, fonts: &CardFonts) -> UiResult<()> {
    let column = config.text_width();
    for font in [&fonts.regular, &fonts.bold] {
        let needed = font.measure_width(ELLIPSIS, config.font_size);
        if needed > column {
            let reason = format!("text column {column} is narrower than the ellipsis ({needed})");
            tracing::warn!(%reason, "rejected notification config");
            return Err(UiError::InvalidConfig(reason));
        }
    }
    Ok(())
}

/// Builder for [`NotificationManager`].
///
/// All three fonts are required; the clock defaults to [`SystemClock`].
#[derive(Default)]
pub struct NotificationManagerBuilder {
    config: NotificationConfig,
    regular: Option<Font>,
    bold: Option<Font>,
    icons: Option<Font>,
    clock: Option<Arc<dyn Clock>>,
    channel_capacity: Option<usize>,
}

impl NotificationManagerBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the layout and timing configuration.
    #[must_use]
    pub fn config(mut self, config: NotificationConfig) -> Self {
        self.config = config;
        self
    }

    /// Font for message text.
    #[must_use]
    pub fn regular_font(mut self, font: Font) -> Self {
        self.regular = Some(font);
        self
    }

    /// Font for titles and the stack badge.
    #[must_use]
    pub fn bold_font(mut self, font: Font) -> Self {
        self.bold = Some(font);
        self
    }

    /// Font holding the type icon glyphs.
    #[must_use]
    pub fn icon_font(mut self, font: Font) -> Self {
        self.icons = Some(font);
        self
    }

    /// Time source for fades, expiry and the progress bar.
    #[must_use]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Maximum notifications queued by [`NotificationSender`]s between frames.
    #[must_use]
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = Some(capacity);
        self
    }

    /// Builds the manager.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingCapability`] when a font was not supplied
    /// and [`UiError::InvalidConfig`] when the configuration is unusable,
    /// including a text column too narrow to hold a truncation ellipsis.
    pub fn build(self) -> UiResult<NotificationManager> {
        self.config.validate()?;

        let fonts = CardFonts {
            regular: self.regular.ok_or(UiError::MissingCapability("regular font"))?,
            bold: self.bold.ok_or(UiError::MissingCapability("bold font"))?,
            icons: self.icons.ok_or(UiError::MissingCapability("icon font"))?,
        };
        check_text_column(&self.config, &fonts)?;
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock::new()));
        let (sender, receiver) = bounded(self.channel_capacity.unwrap_or(DEFAULT_CHANNEL_CAPACITY));

        Ok(NotificationManager {
            config: self.config,
            fonts,
            clock,
            notifications: Vec::new(),
            sender,
            receiver,
        })
    }
}

/// Stack of toasts in the top-right corner.
pub struct NotificationManager {
    config: NotificationConfig,
    fonts: CardFonts,
    clock: Arc<dyn Clock>,
    notifications: Vec<Notification>,
    sender: Sender<PendingNotification>,
    receiver: Receiver<PendingNotification>,
}

impl NotificationManager {
    /// Starts building a manager.
    #[must_use]
    pub fn builder() -> NotificationManagerBuilder {
        NotificationManagerBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Current time on the manager's clock.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    /// Live notifications, top to bottom.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Live notification with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    /// Number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Returns true if nothing is showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Handle for posting from other threads.
    #[must_use]
    pub fn sender(&self) -> NotificationSender {
        NotificationSender {
            sender: self.sender.clone(),
            default_duration_ms: self.config.default_duration_ms,
        }
    }

    /// Posts a notification.
    ///
    /// If one with the same id is live, it is stacked instead: its counter
    /// goes up and its lifetime restarts, and it keeps its place.
    pub fn add_notification(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        duration_ms: u64,
    ) {
        let now = self.clock.now_ms();
        let incoming = Notification::new(id, title, message, kind, duration_ms, now);

        if let Some(existing) = self.notifications.iter_mut().find(|n| n.is_similar_to(&incoming)) {
            existing.increment_stack(now);
            tracing::debug!(id = existing.id(), count = existing.stack_count(), "notification stacked");
            return;
        }

        tracing::debug!(id = incoming.id(), kind = ?incoming.kind(), duration_ms, "notification posted");
        self.notifications.push(incoming);
    }

    /// Posts a success notification with the default duration.
    pub fn success(&mut self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) {
        let duration = self.config.default_duration_ms;
        self.add_notification(id, title, message, NotificationKind::Success, duration);
    }

    /// Posts an error notification with the default duration.
    pub fn error(&mut self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) {
        let duration = self.config.default_duration_ms;
        self.add_notification(id, title, message, NotificationKind::Error, duration);
    }

    /// Posts a warning notification with the default duration.
    pub fn warning(&mut self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) {
        let duration = self.config.default_duration_ms;
        self.add_notification(id, title, message, NotificationKind::Warning, duration);
    }

    /// Posts an info notification with the default duration.
    pub fn info(&mut self, id: impl Into<String>, title: impl Into<String>, message: impl Into<String>) {
        let duration = self.config.default_duration_ms;
        self.add_notification(id, title, message, NotificationKind::Info, duration);
    }

    fn drain_pending(&mut self) {
        let pending: Vec<PendingNotification> = self.receiver.try_iter().collect();
        if pending.is_empty() {
            return;
        }
        tracing::trace!(count = pending.len(), "draining queued notifications");
        for p in pending {
            self.add_notification(p.id, p.title, p.message, p.kind, p.duration_ms);
        }
    }

    /// Advances one frame: takes queued notifications, animates, drops the
    /// expired ones and re-packs the rest from the top.
    pub fn update(&mut self) {
        self.drain_pending();

        let now = self.clock.now_ms();
        for notification in &mut self.notifications {
            notification.tick(now, &self.config);
        }

        self.notifications.retain(|n| {
            let expired = n.is_expired(now);
            if expired {
                tracing::debug!(id = n.id(), "notification expired");
            }
            !expired
        });

        let mut offset = 0.0;
        for index in 0..self.notifications.len() {
            let height = self.card_height(&self.notifications[index]);
            self.notifications[index].set_target_y(offset);
            offset += height + self.config.spacing;
        }
    }

    fn title_lines(&self, notification: &Notification) -> Vec<String> {
        wrap_text(
            self.fonts.bold.as_ref(),
            notification.title(),
            self.config.font_size,
            self.config.text_width(),
        )
    }

    fn message_lines(&self, notification: &Notification) -> Vec<String> {
        wrap_text(
            self.fonts.regular.as_ref(),
            notification.message(),
            self.config.font_size,
            self.config.text_width(),
        )
    }

    /// Height of a card: grows one line height per wrapped line beyond the
    /// first of title and message, within the configured bounds.
    #[must_use]
    pub fn card_height(&self, notification: &Notification) -> f32 {
        let extra = self.title_lines(notification).len().saturating_sub(1)
            + self.message_lines(notification).len().saturating_sub(1);
        #[allow(clippy::cast_precision_loss)]
        let grown = self.config.min_height + extra as f32 * self.config.line_height;
        grown.clamp(self.config.min_height, self.config.max_height)
    }

    /// Draws every live notification against a screen of `viewport` size.
    pub fn render(&self, renderer: &mut dyn Renderer2D, viewport: Size) {
        if self.notifications.is_empty() {
            return;
        }
        let now = self.clock.now_ms();
        for notification in &self.notifications {
            let x = (viewport.width - self.config.width - self.config.margin_x + notification.slide_offset()).floor();
            let y = (self.config.margin_y + notification.current_y()).floor();
            self.render_card(renderer, notification, x, y, now);
        }
    }

    fn render_card(&self, renderer: &mut dyn Renderer2D, notification: &Notification, x: f32, y: f32, now: u64) {
        let cfg = &self.config;
        let alpha = notification.alpha();
        let height = self.card_height(notification);
        let card = Rect::new(x, y, cfg.width, height);
        let accent = faded(notification.color(), 255, alpha);

        renderer.draw_rounded_rect(card, cfg.corner_radius, faded(CARD_BACKGROUND, 250, alpha));
        renderer.draw_rounded_outline(card, cfg.corner_radius, cfg.border_width, faded(CARD_BORDER, 180, alpha));
        renderer.draw_rounded_rect(Rect::new(x + 4.0, y + 6.0, 3.0, height - 12.0), 1.0, accent);

        let icon_center_y = y + 10.0 + (height - 20.0) / 2.0;
        renderer.draw_rounded_rect(
            Rect::new(x + 13.0, icon_center_y - 10.0, 20.0, 20.0),
            6.0,
            faded(notification.color(), 25, alpha),
        );
        let half_icon = cfg.icon_size / 2.0;
        self.fonts.icons.render_glyphs(
            notification.kind().icon(),
            x + 23.0 - half_icon,
            icon_center_y - half_icon,
            cfg.icon_size,
            accent,
        );

        let text_x = x + cfg.text_offset_x;
        let bottom = y + height;
        let mut text_y = y + cfg.text_offset_y;
        if !notification.title().is_empty() {
            let color = faded(Color::WHITE, 255, alpha);
            text_y = self.draw_lines(self.fonts.bold.as_ref(), &self.title_lines(notification), text_x, text_y, bottom, color);
            text_y += cfg.title_gap;
        }
        if !notification.message().is_empty() {
            let color = faded(MESSAGE_TEXT, 240, alpha);
            self.draw_lines(self.fonts.regular.as_ref(), &self.message_lines(notification), text_x, text_y, bottom, color);
        }

        if notification.has_stack() {
            self.render_badge(notification, x, y, alpha);
        }

        self.render_progress(renderer, notification, x, bottom - 4.0, alpha, now);
    }

    /// Draws lines downward from `y`, skipping any that would cross `bottom`.
    /// Returns the y below the last line.
    fn draw_lines(&self, font: &dyn TextMetrics, lines: &[String], x: f32, y: f32, bottom: f32, color: Color) -> f32 {
        let mut y = y;
        for line in lines {
            if y + self.config.line_height <= bottom {
                font.render_glyphs(line, x, y, self.config.font_size, color);
            }
            y += self.config.line_height;
        }
        y
    }

    fn render_badge(&self, notification: &Notification, x: f32, y: f32, alpha: f32) {
        let size = self.config.badge_font_size;
        let label = format!("\u{00D7}{}", notification.stack_count());
        let text_width = self.fonts.bold.measure_width(&label, size);
        let badge_width = (text_width + 8.0).max(20.0);
        let badge_x = x + self.config.width - badge_width - 6.0;
        let badge_y = y + 6.0;

        self.fonts.bold.render_glyphs(
            &label,
            badge_x + (badge_width - text_width) / 2.0,
            badge_y + 2.0,
            size,
            faded(Color::WHITE, 120, alpha),
        );
    }

    fn render_progress(
        &self,
        renderer: &mut dyn Renderer2D,
        notification: &Notification,
        x: f32,
        y: f32,
        alpha: f32,
        now: u64,
    ) {
        let track_width = self.config.width - 8.0;
        renderer.draw_rounded_rect(Rect::new(x + 4.0, y, track_width, 3.0), 1.0, faded(PROGRESS_TRACK, 120, alpha));

        let remaining = notification.remaining_fraction(now);
        if remaining > 0.0 {
            renderer.draw_rounded_rect(
                Rect::new(x + 4.0, y, track_width * remaining, 3.0),
                1.0,
                faded(notification.color(), 200, alpha),
            );
        }
    }
}
