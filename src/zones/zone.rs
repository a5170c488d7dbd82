//! A single ordered card container.
//!
//! Order is significant only for decks (the top is the end of the vector);
//! every other zone keeps insertion order purely for display.

use crate::cards::Card;
use crate::core::{EntityId, GameRng};

/// Ordered sequence of cards. Owns its cards outright.
#[derive(Debug, Default)]
pub struct Zone {
    cards: Vec<Card>,
}

impl Zone {
    /// Create a new empty zone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The top card (last in the vec).
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Put several cards on top, in order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove the top card.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Remove a specific card, keeping the order of the rest.
    pub fn take(&mut self, id: EntityId) -> Option<Card> {
        let position = self.cards.iter().position(|card| card.id() == id)?;
        Some(self.cards.remove(position))
    }

    /// Remove every card, bottom to top.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.cards.iter().any(|card| card.id() == id)
    }

    /// First card with the given name, ignoring case.
    #[must_use]
    pub fn find_named(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.is_named(name))
    }

    /// Number of cards with the given name, ignoring case.
    #[must_use]
    pub fn count_named(&self, name: &str) -> usize {
        self.cards.iter().filter(|card| card.is_named(name)).count()
    }

    /// Card names bottom to top.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.cards.iter().map(|card| card.name().to_string()).collect()
    }

    /// Randomize the order in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::CardInfo;

    fn card(id: u32, name: &str) -> Card {
        Card::new(EntityId(id), Arc::new(CardInfo::treasure(name, 0, 1)))
    }

    #[test]
    fn test_push_pop_is_stack_order() {
        let mut zone = Zone::new();
        zone.push(card(1, "Copper"));
        zone.push(card(2, "Silver"));

        assert_eq!(zone.top().unwrap().name(), "Silver");
        assert_eq!(zone.pop().unwrap().id(), EntityId(2));
        assert_eq!(zone.len(), 1);
    }

    #[test]
    fn test_take_preserves_order() {
        let mut zone = Zone::new();
        zone.extend([card(1, "A"), card(2, "B"), card(3, "C")]);

        let taken = zone.take(EntityId(2)).unwrap();
        assert_eq!(taken.name(), "B");
        assert_eq!(zone.names(), vec!["A", "C"]);
        assert!(zone.take(EntityId(2)).is_none());
    }

    #[test]
    fn test_named_queries() {
        let mut zone = Zone::new();
        zone.extend([card(1, "Copper"), card(2, "Copper"), card(3, "Gold")]);

        assert_eq!(zone.count_named("copper"), 2);
        assert_eq!(zone.find_named("GOLD").unwrap().id(), EntityId(3));
        assert!(zone.find_named("Silver").is_none());
    }

    #[test]
    fn test_drain_empties_zone() {
        let mut zone = Zone::new();
        zone.extend([card(1, "A"), card(2, "B")]);

        let drained = zone.drain();
        assert_eq!(drained.len(), 2);
        assert!(zone.is_empty());
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut zone = Zone::new();
        zone.extend((0..20).map(|i| card(i, "Copper")));
        let mut rng = GameRng::new(3);

        zone.shuffle(&mut rng);

        assert_eq!(zone.len(), 20);
        assert!((0..20).all(|i| zone.contains(EntityId(i))));
    }
}
