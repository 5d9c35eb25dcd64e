// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - The banner system (cards, container, manager, toasts)

pub mod design_tokens;
pub mod notifications;
