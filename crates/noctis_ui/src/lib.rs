//! # Noctis UI
//!
//! In-game overlay toolkit: a small retained widget tree (buttons, text,
//! images, containers) and a stack of animated toast notifications, drawn
//! through a host-supplied 2D backend.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       FRAME PIPELINE                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  Clock + Pointer → Overlay::frame → Widget tree → Toasts   │
//! │        ↓                 ↓              ↓           ↓      │
//! │   Hover/fade time   Notification    Renderer2D  Renderer2D │
//! │                       update()     + TextMetrics           │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns the GPU. This crate only calls [`Renderer2D`] and
//! [`TextMetrics`]; the [`headless`] module implements both for tests and
//! tooling.
//!
//! ## Threading
//!
//! Everything runs on the render thread. Other threads post notifications
//! through a [`NotificationSender`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod headless;
pub mod input;
pub mod layout;
pub mod notification;
pub mod overlay;
pub mod render;
pub mod widget;

pub use animation::{Easing, HoverAnimator, HoverColors, HoverPhase};
pub use color::Color;
pub use config::NotificationConfig;
pub use error::{UiError, UiResult};
pub use frame::{Clock, FrameInput, ManualClock, SystemClock};
pub use input::{ClickEvent, MouseButton};
pub use layout::{clamp, lerp, Point, Rect, Size};
pub use notification::{
    Notification, NotificationKind, NotificationManager, NotificationManagerBuilder, NotificationSender,
};
pub use overlay::Overlay;
pub use render::{Font, RenderContext, Renderer2D, TextMetrics, TextureId};
pub use widget::{Button, Container, ImageWidget, TextWidget, Widget, WidgetId};
