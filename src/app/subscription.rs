// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions feed the update loop: native window events carrying the
//! readiness and focus signals the startup logic depends on, and a
//! frame-cadence tick that runs only while banners are attached.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick interval while banners are live; one tick per frame at 60Hz.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes native window events to startup-relevant messages.
///
/// `Opened` marks the surface as ready (the first moment a banner can be
/// mounted); `Focused` is the defensive fallback that re-checks whether
/// startup ever ran.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(iced::window::Event::Opened { .. }) => {
            Some(Message::WindowOpened(window_id))
        }
        event::Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocused),
        _ => None,
    })
}

/// Creates the periodic tick driving entry/exit transitions and deadlines.
///
/// Suspended whenever no banner is attached: with nothing to animate or
/// expire, there is no work for a tick to do.
pub fn create_tick_subscription(has_cards: bool) -> Subscription<Message> {
    if has_cards {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
