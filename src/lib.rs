// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` shows desktop-style transient notification banners built
//! with the Iced GUI framework.
//!
//! Banners slide in at the top-right of the window, auto-dismiss after a
//! configurable duration, and can be dismissed early with a click. The
//! library exposes the banner system itself (`ui::notifications`) plus a
//! small demo application shell (`app`); diagnostics are recorded only when
//! a handle is injected.

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
