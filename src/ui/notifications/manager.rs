// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Manager`] owns the singleton container and is the one entry point
//! other code uses to show banners. Failures never escape it: when the host
//! surface is not ready, or anything goes wrong while building or mounting a
//! card, [`Manager::show`] reports to diagnostics and returns `None` so the
//! caller is unaffected.

use super::card::{Card, DismissReason};
use super::container::Container;
use super::request::{Request, DEFAULT_DURATION_MS};
use super::NotificationId;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, DismissCause};
use std::time::{Duration, Instant};

/// Messages produced by pointer interaction with the card stack.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A card was clicked; dismiss it.
    Dismiss(NotificationId),
    /// The pointer entered a card.
    HoverEntered(NotificationId),
    /// The pointer left a card.
    HoverExited(NotificationId),
}

/// Owns the container and drives every card's lifecycle.
#[derive(Debug)]
pub struct Manager {
    /// Lazily created overlay; at most one per manager, never torn down.
    container: Option<Container>,
    /// Whether the host window surface is available for mounting.
    surface_ready: bool,
    /// Fallback display duration for requests without one.
    default_duration: Duration,
    /// Optional diagnostics channel; silent when absent.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates a manager with the standard fallback duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            container: None,
            surface_ready: false,
            default_duration: Duration::from_millis(DEFAULT_DURATION_MS),
            diagnostics: None,
        }
    }

    /// Overrides the fallback display duration (from configuration).
    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    /// Attaches the diagnostics channel.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Records that the host window surface is available.
    ///
    /// Until this is called, `show` fails gracefully with `None`.
    pub fn mark_surface_ready(&mut self) {
        if !self.surface_ready {
            self.surface_ready = true;
            self.log(DiagnosticEventKind::SurfaceReady);
        }
    }

    /// Returns the singleton container, creating it on first use.
    ///
    /// Returns `None` while the host surface is unavailable; callers must
    /// treat that as "cannot show a notification now". Subsequent calls
    /// return the same container unchanged.
    pub fn ensure_container(&mut self) -> Option<&mut Container> {
        if !self.surface_ready {
            return None;
        }
        if self.container.is_none() {
            self.container = Some(Container::new());
            self.log(DiagnosticEventKind::ContainerCreated);
        }
        self.container.as_mut()
    }

    /// Returns whether the container was ever created.
    ///
    /// The startup fallback keys off this, not off a separate flag, so a
    /// banner shown through any path suppresses a duplicate init.
    #[must_use]
    pub fn has_container(&self) -> bool {
        self.container.is_some()
    }

    /// Shows a notification: the public entry point.
    ///
    /// Builds a card from `request`, mounts it as the container's last
    /// child, leaves it in its off-screen pose for the next tick to animate
    /// in, and arms its auto-dismiss deadline. Returns the card's ID so
    /// advanced callers can dismiss it early, or `None` on failure.
    pub fn show(&mut self, request: Request, now: Instant) -> Option<NotificationId> {
        let default_duration = self.default_duration;
        if self.ensure_container().is_none() {
            self.log_warning("surface not ready; notification dropped");
            return None;
        }

        let card = Card::new(request, default_duration);
        let mounted = self
            .container
            .as_mut()
            .and_then(|container| container.mount(card, now));
        match mounted {
            Some(id) => {
                self.log(DiagnosticEventKind::BannerShown { id: id.value() });
                Some(id)
            }
            None => {
                self.log_error("mounting a freshly built card failed");
                None
            }
        }
    }

    /// Dismisses a card by ID, starting its exit transition.
    ///
    /// Returns `true` if this call started the transition; repeated calls
    /// and calls for unknown or already-dismissing cards return `false`.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant, reason: DismissReason) -> bool {
        let dismissed = self
            .container
            .as_mut()
            .and_then(|container| container.card_mut(id))
            .is_some_and(|card| card.dismiss(now));
        if dismissed {
            self.log(DiagnosticEventKind::BannerDismissed {
                id: id.value(),
                cause: cause_of(reason),
            });
        }
        dismissed
    }

    /// Advances every card and detaches the ones that finished their exit.
    ///
    /// Runs on the UI tick: freshly mounted cards start their entry
    /// transition here (the next-frame deferral), auto-dismiss deadlines are
    /// polled, and finished exits are swept out of the container.
    pub fn tick(&mut self, now: Instant) {
        let Some(container) = self.container.as_mut() else {
            return;
        };

        let mut timed_out = Vec::new();
        for card in container.cards_mut() {
            if card.tick(now) == Some(DismissReason::TimedOut) {
                timed_out.push(card.id());
            }
        }
        container.sweep();

        for id in timed_out {
            self.log(DiagnosticEventKind::BannerDismissed {
                id: id.value(),
                cause: DismissCause::TimedOut,
            });
        }
    }

    /// Handles a pointer-interaction message.
    pub fn handle_message(&mut self, message: Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id, now, DismissReason::Clicked);
            }
            Message::HoverEntered(id) => self.set_hovered(id, true),
            Message::HoverExited(id) => self.set_hovered(id, false),
        }
    }

    /// Returns the attached cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.container.iter().flat_map(Container::cards)
    }

    /// Returns the number of attached cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.container.as_ref().map_or(0, Container::len)
    }

    /// Returns whether any card is attached.
    ///
    /// Gates the tick subscription: with no cards there is nothing to
    /// animate or expire.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        self.card_count() > 0
    }

    fn set_hovered(&mut self, id: NotificationId, hovered: bool) {
        if let Some(card) = self
            .container
            .as_mut()
            .and_then(|container| container.card_mut(id))
        {
            card.set_hovered(hovered);
        }
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }

    fn log_warning(&self, message: &str) {
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(message);
        }
    }

    fn log_error(&self, message: &str) {
        if let Some(handle) = &self.diagnostics {
            handle.log_error(message);
        }
    }
}

fn cause_of(reason: DismissReason) -> DismissCause {
    match reason {
        DismissReason::Clicked => DismissCause::Clicked,
        DismissReason::TimedOut => DismissCause::TimedOut,
        DismissReason::Requested => DismissCause::Requested,
    }
}
