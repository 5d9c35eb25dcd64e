// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer interaction with the banner stack.
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving animations and deadlines.
    Tick(Instant),
    /// The window surface became available.
    WindowOpened(iced::window::Id),
    /// The window gained focus; used as the late-init fallback signal.
    WindowFocused,
    /// The startup grace delay elapsed.
    StartupDelayElapsed,
    /// The host screen's demo button was pressed.
    ShowDemoBanner,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Optional glyph for an extra banner shown at startup.
    pub icon: Option<String>,
    /// Optional title for an extra banner shown at startup.
    pub title: Option<String>,
    /// Optional message for an extra banner shown at startup.
    pub message: Option<String>,
    /// Optional duration (milliseconds) for the extra startup banner.
    pub duration_ms: Option<u64>,
}

impl Flags {
    /// Builds the extra startup banner request, if any flag asked for one.
    #[must_use]
    pub fn startup_request(&self) -> Option<notifications::Request> {
        if self.icon.is_none()
            && self.title.is_none()
            && self.message.is_none()
            && self.duration_ms.is_none()
        {
            return None;
        }
        Some(notifications::Request {
            icon: self.icon.clone(),
            title: self.title.clone(),
            message: self.message.clone(),
            duration_ms: self.duration_ms,
        })
    }
}
