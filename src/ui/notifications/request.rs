// SPDX-License-Identifier: MPL-2.0
//! Notification request values and identifiers.
//!
//! A [`Request`] carries the caller-provided content for one banner. Every
//! field is optional; missing fields are filled from the defaults below when
//! the card is built. Requests are consumed at show time and never stored.

use std::time::Duration;

/// Glyph shown when the caller does not provide one.
pub const DEFAULT_ICON: &str = "\u{1F514}"; // bell
/// Title shown when the caller does not provide one.
pub const DEFAULT_TITLE: &str = "Notification";
/// Display time before auto-dismiss when the caller does not provide one.
pub const DEFAULT_DURATION_MS: u64 = 60_000;

/// Unique identifier for a notification card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value, for diagnostics records.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-provided content for one banner.
///
/// Any string or number is accepted; there is no validation beyond
/// defaulting.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Short display glyph. Defaults to a bell.
    pub icon: Option<String>,
    /// Title line. Defaults to `"Notification"`.
    pub title: Option<String>,
    /// Message body. Defaults to empty.
    pub message: Option<String>,
    /// Display time in milliseconds before auto-dismiss.
    pub duration_ms: Option<u64>,
}

impl Request {
    /// Creates an empty request; every field falls back to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display glyph.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the title line.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message body.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the display duration in milliseconds.
    #[must_use]
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Resolves the display duration against `fallback`.
    ///
    /// An explicit `0` is treated the same as an omitted duration and falls
    /// back, mirroring the falsy-value fallback of the original system. A
    /// caller cannot request "dismiss immediately" through this field.
    #[must_use]
    pub fn effective_duration(&self, fallback: Duration) -> Duration {
        match self.duration_ms {
            Some(ms) if ms != 0 => Duration::from_millis(ms),
            _ => fallback,
        }
    }
}
