// SPDX-License-Identifier: MPL-2.0
//! Desktop-style transient notification banners.
//!
//! This module implements the whole banner lifecycle: a lazily created
//! overlay container anchored to the top-right corner, cards that slide in
//! with a short deceleration transition, auto-dismiss after a configurable
//! duration, and click-to-dismiss at any time.
//!
//! # Components
//!
//! - [`request`] - `Request` input values and `NotificationId`
//! - [`card`] - per-card state machine, pose interpolation, easing
//! - [`container`] - the singleton overlay surface and its card stack
//! - [`manager`] - `Manager` entry point, readiness gating, tick driving
//! - [`timing`] - cancellable one-shot deadlines polled on the UI tick
//! - [`toast`] - Iced widgets rendering cards and the overlay
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Request};
//!
//! let mut manager = Manager::new();
//! manager.mark_surface_ready();
//!
//! // Show a banner; `None` means the surface was not ready.
//! let id = manager.show(Request::new().title("Saved"), Instant::now());
//!
//! // In the view, render the overlay above the host content.
//! let overlay = Toast::view_overlay(&manager, Instant::now()).map(Message::Notification);
//! ```
//!
//! # Design
//!
//! - One container per manager, created on first show, never destroyed
//! - Cards stack in insertion order; layout flow handles repositioning
//! - Dismissal is idempotent, so a click racing the auto-dismiss deadline
//!   cannot double-remove a card
//! - All state changes run on the single UI task queue; time is passed in
//!   explicitly, which keeps the lifecycle deterministic under test

mod card;
mod container;
mod manager;
mod request;
mod timing;
mod toast;

pub use card::{Card, DismissReason, Phase, Pose, HOVER_SCALE, TRANSITION};
pub use container::{Container, ANCHOR_MARGIN};
pub use manager::{Manager, Message as NotificationMessage};
pub use request::{
    NotificationId, Request, DEFAULT_DURATION_MS, DEFAULT_ICON, DEFAULT_TITLE,
};
pub use timing::OneShot;
pub use toast::Toast;
