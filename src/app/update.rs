// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Startup follows the defensive double path: the normal route arms a short
//! grace delay once the window surface opens, and the focus event re-checks
//! whether startup ever produced the container. Both routes are guarded on
//! container existence, not on a separate flag, so whichever runs first
//! wins and the other becomes a no-op.

use super::{App, Message, STARTUP_GRACE};
use crate::ui::notifications::Request;
use iced::Task;
use std::time::Instant;

/// Dispatches one top-level message.
pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::WindowOpened(id) => {
            app.window_id = Some(id);
            app.notifications.mark_surface_ready();
            Task::perform(tokio::time::sleep(STARTUP_GRACE), |_| {
                Message::StartupDelayElapsed
            })
        }
        Message::StartupDelayElapsed => {
            if !app.notifications.has_container() {
                run_startup(app);
            }
            Task::none()
        }
        Message::WindowFocused => {
            // Fallback for a missed readiness signal; harmless when
            // startup already created the container.
            if !app.notifications.has_container() {
                run_startup(app);
            }
            Task::none()
        }
        Message::ShowDemoBanner => {
            app.notifications.show(demo_request(), Instant::now());
            Task::none()
        }
        Message::Notification(notification_message) => {
            app.notifications
                .handle_message(notification_message, Instant::now());
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            Task::none()
        }
    }
}

/// Shows the one-time startup banner plus any CLI-requested extra.
fn run_startup(app: &mut App) {
    let now = Instant::now();
    if app.config.startup_banner() {
        app.notifications.show(startup_request(), now);
    }
    if let Some(request) = app.cli_banner.take() {
        app.notifications.show(request, now);
    }
}

/// Fixed content for the one-time startup banner.
fn startup_request() -> Request {
    Request::new()
        .icon("\u{1F389}")
        .title("System Ready!")
        .message("Notification system loaded successfully.")
        .duration_ms(8_000)
}

/// Content for the host screen's demo button.
fn demo_request() -> Request {
    Request::new()
        .icon("\u{1F4E8}")
        .title("Hello")
        .message("This banner was requested by the host screen.")
        .duration_ms(6_000)
}
