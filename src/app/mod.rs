// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the banner system.
//!
//! The `App` struct wires together the notification manager, configuration,
//! and diagnostics, and translates window lifecycle events into the startup
//! sequence. This file intentionally keeps policy decisions (startup grace
//! delay, window sizing, diagnostics wiring) close to the main update loop
//! so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::notifications;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Delay between the surface opening and the startup banner, leaving the
/// first layout/paint a moment to settle.
pub const STARTUP_GRACE: Duration = Duration::from_millis(100);

/// Root Iced application state bridging the banner system, configuration,
/// and diagnostics.
pub struct App {
    config: config::Config,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    window_id: Option<window::Id>,
    /// Extra banner requested on the command line, consumed at startup.
    cli_banner: Option<notifications::Request>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("cards", &self.notifications.card_count())
            .field("window_id", &self.window_id)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            config: config::Config::default(),
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
            window_id: None,
            cli_banner: None,
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        app.config = config::load_with_override(config_dir.as_deref()).unwrap_or_default();

        app.notifications
            .set_default_duration(app.config.default_duration());
        app.notifications.set_diagnostics(app.diagnostics.handle());
        app.cli_banner = flags.startup_request();

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Banner")
    }

    fn theme(&self) -> Theme {
        <Theme as iced::theme::Base>::default(iced::theme::Mode::default())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::handle(self, message);
        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            notifications: &self.notifications,
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.notifications.has_cards());
        Subscription::batch([event_sub, tick_sub])
    }
}
