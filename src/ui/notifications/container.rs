// SPDX-License-Identifier: MPL-2.0
//! The overlay surface hosting all notification cards.
//!
//! Exactly one container exists per manager, created lazily on the first
//! successful show and kept for the life of the application. Cards are its
//! only children, held in insertion order; new cards are appended so earlier
//! cards stack above later ones through normal layout flow, with no explicit
//! repositioning. The container itself never intercepts pointer input; only
//! the cards do.

use super::card::Card;
use super::NotificationId;
use std::time::Instant;

/// Distance from the screen's top and right edges to the card stack.
pub const ANCHOR_MARGIN: f32 = 20.0;

/// The fixed overlay surface holding the card stack.
#[derive(Debug, Default)]
pub struct Container {
    cards: Vec<Card>,
}

impl Container {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a card as the last child.
    ///
    /// The card must still be in its `Created` phase; mounting arms its
    /// auto-dismiss deadline. Returns the card's ID on success.
    pub fn mount(&mut self, mut card: Card, now: Instant) -> Option<NotificationId> {
        if !card.mount(now) {
            return None;
        }
        let id = card.id();
        self.cards.push(card);
        Some(id)
    }

    /// Returns the card with the given ID, if still attached.
    pub fn card_mut(&mut self, id: NotificationId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id() == id)
    }

    /// Returns the attached cards in insertion order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the attached cards mutably, in insertion order.
    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Detaches every card that finished its exit transition.
    ///
    /// Detaching is driven purely by the terminal phase, so a card that was
    /// already swept is simply absent and a second sweep is a no-op.
    pub fn sweep(&mut self) {
        self.cards.retain(|card| !card.is_removed());
    }

    /// Returns the number of attached cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::super::request::Request;
    use super::*;
    use std::time::Duration;

    fn card(title: &str) -> Card {
        Card::new(
            Request::new().title(title).duration_ms(60_000),
            Duration::from_millis(60_000),
        )
    }

    #[test]
    fn mount_appends_in_insertion_order() {
        let mut container = Container::new();
        let now = Instant::now();

        container.mount(card("first"), now);
        container.mount(card("second"), now);
        container.mount(card("third"), now);

        let titles: Vec<_> = container.cards().map(Card::title).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn mount_rejects_reattached_card() {
        let mut container = Container::new();
        let now = Instant::now();
        let mut c = card("once");
        assert!(c.mount(now));

        // Already mounted elsewhere; the container must refuse it.
        assert!(container.mount(c, now).is_none());
        assert!(container.is_empty());
    }

    #[test]
    fn sweep_detaches_only_removed_cards() {
        let mut container = Container::new();
        let t0 = Instant::now();
        let kept = container.mount(card("kept"), t0).unwrap();
        let dropped = container.mount(card("dropped"), t0).unwrap();

        let c = container.card_mut(dropped).unwrap();
        c.tick(t0);
        c.dismiss(t0 + Duration::from_millis(10));
        c.tick(t0 + Duration::from_millis(400));
        assert!(c.is_removed());

        container.sweep();
        assert_eq!(container.len(), 1);
        assert!(container.card_mut(kept).is_some());
        assert!(container.card_mut(dropped).is_none());

        // Sweeping again with nothing removed changes nothing.
        container.sweep();
        assert_eq!(container.len(), 1);
    }
}
