//! A participant's private zones and the moves between them.
//!
//! Every move is remove-then-insert on owned `Card` values, so a move either
//! happens completely or not at all.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{EntityId, GameRng};

use super::Zone;

/// Names of a participant's zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Draw pile. Top is the end.
    Deck,
    Hand,
    /// Cards played this turn.
    Played,
    Discard,
    /// Cards temporarily shown by an effect.
    Reveal,
}

impl ZoneKind {
    pub const ALL: [ZoneKind; 5] = [
        ZoneKind::Deck,
        ZoneKind::Hand,
        ZoneKind::Played,
        ZoneKind::Discard,
        ZoneKind::Reveal,
    ];
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Deck => "deck",
            ZoneKind::Hand => "hand",
            ZoneKind::Played => "play area",
            ZoneKind::Discard => "discard pile",
            ZoneKind::Reveal => "revealed cards",
        };
        f.write_str(name)
    }
}

/// Deck, hand, play area, discard pile and reveal area of one participant.
#[derive(Debug, Default)]
pub struct ZoneSet {
    deck: Zone,
    hand: Zone,
    played: Zone,
    discard: Zone,
    reveal: Zone,
}

impl ZoneSet {
    /// Create a zone set whose deck holds `cards`, shuffled.
    pub fn with_deck(cards: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut zones = Self::default();
        zones.deck.extend(cards);
        zones.deck.shuffle(rng);
        zones
    }

    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::Deck => &self.deck,
            ZoneKind::Hand => &self.hand,
            ZoneKind::Played => &self.played,
            ZoneKind::Discard => &self.discard,
            ZoneKind::Reveal => &self.reveal,
        }
    }

    pub fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::Deck => &mut self.deck,
            ZoneKind::Hand => &mut self.hand,
            ZoneKind::Played => &mut self.played,
            ZoneKind::Discard => &mut self.discard,
            ZoneKind::Reveal => &mut self.reveal,
        }
    }

    #[must_use]
    pub fn hand(&self) -> &Zone {
        &self.hand
    }

    #[must_use]
    pub fn deck(&self) -> &Zone {
        &self.deck
    }

    #[must_use]
    pub fn discard(&self) -> &Zone {
        &self.discard
    }

    #[must_use]
    pub fn played(&self) -> &Zone {
        &self.played
    }

    #[must_use]
    pub fn reveal(&self) -> &Zone {
        &self.reveal
    }

    /// Move one card between two of these zones.
    ///
    /// Returns `false` (and moves nothing) if the card is not in `from`.
    pub fn move_card(&mut self, id: EntityId, from: ZoneKind, to: ZoneKind) -> bool {
        match self.zone_mut(from).take(id) {
            Some(card) => {
                self.zone_mut(to).push(card);
                true
            }
            None => false,
        }
    }

    /// Remove a card from one of these zones, e.g. to trash it.
    pub fn take(&mut self, id: EntityId, from: ZoneKind) -> Option<Card> {
        self.zone_mut(from).take(id)
    }

    /// Place a card into one of these zones.
    pub fn put(&mut self, card: Card, to: ZoneKind) {
        self.zone_mut(to).push(card);
    }

    /// Shuffle the discard pile into an empty deck.
    ///
    /// Does nothing unless the deck is empty. Returns whether a reshuffle happened.
    pub fn refill_deck(&mut self, rng: &mut GameRng) -> bool {
        if !self.deck.is_empty() || self.discard.is_empty() {
            return false;
        }
        let cards = self.discard.drain();
        debug!("reshuffling {} cards into the deck", cards.len());
        self.deck.extend(cards);
        self.deck.shuffle(rng);
        true
    }

    /// Draw the top card into hand, reshuffling if the deck is empty.
    ///
    /// Returns `None` when deck and discard are both empty.
    pub fn draw_one(&mut self, rng: &mut GameRng) -> Option<EntityId> {
        self.refill_deck(rng);
        let card = self.deck.pop()?;
        let id = card.id();
        self.hand.push(card);
        Some(id)
    }

    /// Draw up to `count` cards. Returns how many were actually drawn.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> usize {
        (0..count)
            .take_while(|_| self.draw_one(rng).is_some())
            .count()
    }

    /// Move the top card of the deck to the reveal area, reshuffling if needed.
    pub fn reveal_top(&mut self, rng: &mut GameRng) -> Option<EntityId> {
        self.refill_deck(rng);
        let card = self.deck.pop()?;
        let id = card.id();
        self.reveal.push(card);
        Some(id)
    }

    /// Put the whole deck into the discard pile, top card first.
    pub fn discard_deck(&mut self) {
        while let Some(card) = self.deck.pop() {
            self.discard.push(card);
        }
    }

    /// Discard hand, play area and reveal area.
    pub fn discard_in_play(&mut self) {
        let hand = self.hand.drain();
        let played = self.played.drain();
        let revealed = self.reveal.drain();
        self.discard.extend(hand.into_iter().chain(played).chain(revealed));
    }

    /// Every card this participant owns, across all zones.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        ZoneKind::ALL
            .into_iter()
            .flat_map(move |kind| self.zone(kind).iter())
    }

    /// Total number of owned cards.
    #[must_use]
    pub fn total(&self) -> usize {
        ZoneKind::ALL.iter().map(|&kind| self.zone(kind).len()).sum()
    }
}
