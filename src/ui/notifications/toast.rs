// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notification cards.
//!
//! Toasts are the visual representation of cards: a leading glyph, an
//! emphasized title line, a muted word-wrapped message, and a trailing
//! status dot. The card's pose drives the rendering — opacity is folded
//! into every color, the horizontal offset becomes a clipped slide, and the
//! hover scale emphasis is rendered as elevation since the renderer has no
//! widget transform.

use super::card::{Card, Pose};
use super::container::ANCHOR_MARGIN;
use super::manager::{Manager, Message};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::font::Weight;
use iced::widget::{container, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Color, Element, Font, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single card at its pose for `now`.
    pub fn view(card: &Card, now: Instant) -> Element<'_, Message> {
        let pose = card.pose(now);
        let id = card.id();

        let icon_widget = Text::new(card.icon()).size(sizing::ICON_MD);

        let title_widget = Text::new(card.title())
            .size(typography::BODY)
            .font(Font {
                weight: Weight::Semibold,
                ..Font::default()
            })
            .style(move |theme: &Theme| iced::widget::text::Style {
                color: Some(fade(theme.palette().text, pose.opacity)),
            });

        let message_widget = Text::new(card.message())
            .size(typography::BODY_SM)
            .style(move |theme: &Theme| iced::widget::text::Style {
                color: Some(fade(muted_text(theme), pose.opacity)),
            });

        let status_dot = Container::new(Space::new())
            .width(Length::Fixed(sizing::STATUS_DOT))
            .height(Length::Fixed(sizing::STATUS_DOT))
            .style(move |_theme: &Theme| status_dot_style(pose));

        // Layout: [glyph] [title / message] [dot]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(icon_widget)
            .push(
                Column::new()
                    .spacing(spacing::XXS)
                    .width(Length::Fill)
                    .push(title_widget)
                    .push(message_widget),
            )
            .push(status_dot);

        let body = Container::new(content)
            .width(Length::Fixed(sizing::BANNER_WIDTH))
            .padding(spacing::MD)
            .style(move |theme: &Theme| card_style(theme, pose));

        // Slide: shift the fixed-width body rightward behind a clipping
        // window so the off-screen share of the pose is simply cut off.
        let slid = Row::new()
            .push(Space::new().width(Length::Fixed(pose.offset)))
            .push(body);
        let window = Container::new(slid)
            .width(Length::Fixed(sizing::BANNER_WIDTH))
            .clip(true);

        mouse_area(window)
            .on_press(Message::Dismiss(id))
            .on_enter(Message::HoverEntered(id))
            .on_exit(Message::HoverExited(id))
            .interaction(iced::mouse::Interaction::Pointer)
            .into()
    }

    /// Renders the overlay with every attached card.
    ///
    /// Cards stack top-right in insertion order; newer cards appear below
    /// older ones through normal column flow. Neither the overlay container
    /// nor the column carries interaction handlers, so pointer input outside
    /// the cards falls through to the host content beneath.
    pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .cards()
            .map(|card| Self::view(card, now))
            .collect();

        if toasts.is_empty() {
            return Container::new(Space::new())
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let stack = Column::with_children(toasts)
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Right);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(ANCHOR_MARGIN)
            .into()
    }
}

/// Multiplies a color's alpha by the pose opacity.
fn fade(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn muted_text(theme: &Theme) -> Color {
    let base = theme.extended_palette().background.base.text;
    Color {
        a: opacity::OVERLAY_STRONG,
        ..base
    }
}

/// Style for the card surface; hover emphasis renders as elevation.
fn card_style(theme: &Theme, pose: Pose) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let elevated = pose.scale > 1.0;
    let shadow_base = if elevated { shadow::LG } else { shadow::MD };

    container::Style {
        background: Some(Background::Color(fade(
            Color {
                a: opacity::SURFACE,
                ..base
            },
            pose.opacity,
        ))),
        border: iced::Border {
            color: fade(
                Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_200
                },
                pose.opacity,
            ),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: fade(shadow_base.color, pose.opacity * opacity::OVERLAY_SUBTLE),
            ..shadow_base
        },
        text_color: Some(fade(theme.palette().text, pose.opacity)),
        ..Default::default()
    }
}

/// Style for the trailing status dot.
fn status_dot_style(pose: Pose) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(palette::PRIMARY_500, pose.opacity))),
        border: iced::Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
