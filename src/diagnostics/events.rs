// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.
//!
//! Events describe what the banner system did and when, so a session can be
//! reconstructed after the fact. They carry wall-clock timestamps and raw
//! notification IDs only; no user-provided content is recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a banner left the screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissCause {
    /// The pointer was pressed on the card.
    Clicked,
    /// The auto-dismiss deadline elapsed.
    TimedOut,
    /// A caller dismissed the card through its handle.
    Requested,
}

/// One recorded occurrence in the banner system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// The host window surface became available.
    SurfaceReady,
    /// The singleton container was created (first successful show).
    ContainerCreated,
    /// A banner was mounted.
    BannerShown { id: u64 },
    /// A banner started its exit transition.
    BannerDismissed { id: u64, cause: DismissCause },
    /// A recoverable problem was absorbed.
    Warning { message: String },
    /// An unexpected fault was absorbed at the entry-point boundary.
    Error { message: String },
}

/// A diagnostic event with its wall-clock timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    /// When the event was recorded.
    pub at: DateTime<Utc>,
    /// What happened.
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Stamps `kind` with the current wall-clock time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Utc::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::BannerDismissed {
            id: 7,
            cause: DismissCause::TimedOut,
        });
        let json = serde_json::to_string(&event).expect("serializable");
        assert!(json.contains("\"banner_dismissed\""));
        assert!(json.contains("\"timed_out\""));
    }

    #[test]
    fn round_trip_preserves_kind() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "surface not ready".into(),
        });
        let json = serde_json::to_string(&event).expect("serializable");
        let back: DiagnosticEvent = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back.kind, event.kind);
    }
}
