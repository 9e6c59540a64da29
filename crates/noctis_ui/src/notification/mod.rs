//! Toast notifications: the live set, its layout and its drawing.

mod manager;
mod toast;
mod wrap;

pub use self::manager::{NotificationManager, NotificationManagerBuilder, NotificationSender};
pub use self::toast::{Notification, NotificationKind};
pub use self::wrap::{truncate_text, wrap_text, ELLIPSIS};
