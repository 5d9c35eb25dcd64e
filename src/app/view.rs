// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The view is two layers: plain host content underneath, and the banner
//! overlay pushed last so it stacks above everything else. The overlay's
//! empty regions carry no interaction handlers, so clicks there fall
//! through to the host content.

use super::Message;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub notifications: &'a Manager,
}

/// Renders the host content with the banner overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay =
        Toast::view_overlay(ctx.notifications, Instant::now()).map(Message::Notification);

    Stack::new()
        .push(host_content())
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Minimal host surface standing in for the embedding application.
fn host_content() -> Element<'static, Message> {
    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Iced Banner").size(typography::TITLE_MD))
        .push(
            Text::new("Transient notification banners, desktop style.")
                .size(typography::BODY),
        )
        .push(
            button(Text::new("Show notification").size(typography::BODY))
                .padding(spacing::XS)
                .on_press(Message::ShowDemoBanner),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
