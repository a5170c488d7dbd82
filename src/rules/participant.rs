//! One seat's cards and per-turn budgets.

use std::fmt;

use log::debug;

use crate::cards::{Card, CardInfo};
use crate::core::{EntityId, GameRng};
use crate::zones::{ZoneKind, ZoneSet};

/// Cards drawn at cleanup (and at setup).
pub const HAND_SIZE: usize = 5;

/// A participant: zones plus the budgets of the current turn.
///
/// `coins_available` is derived: the coin value of the hand plus
/// `coin_bonus`, which effects raise and purchases lower.
#[derive(Debug)]
pub struct Participant {
    name: String,
    zones: ZoneSet,
    actions_remaining: u32,
    buys_remaining: u32,
    coin_bonus: i32,
    turns: u32,
}

impl Participant {
    /// Seat a participant with a shuffled starting deck and an opening hand.
    pub fn new(name: impl Into<String>, starting_deck: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut zones = ZoneSet::with_deck(starting_deck, rng);
        zones.draw(HAND_SIZE, rng);
        Self {
            name: name.into(),
            zones,
            actions_remaining: 0,
            buys_remaining: 0,
            coin_bonus: 0,
            turns: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    pub(crate) fn zones_mut(&mut self) -> &mut ZoneSet {
        &mut self.zones
    }

    #[must_use]
    pub fn actions_remaining(&self) -> u32 {
        self.actions_remaining
    }

    #[must_use]
    pub fn buys_remaining(&self) -> u32 {
        self.buys_remaining
    }

    #[must_use]
    pub fn coin_bonus(&self) -> i32 {
        self.coin_bonus
    }

    /// Turns started so far, including the current one.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Coin value of the hand plus the bonus.
    #[must_use]
    pub fn coins_available(&self) -> i32 {
        let in_hand: u32 = self.zones.hand().iter().map(|card| card.info().coins).sum();
        in_hand as i32 + self.coin_bonus
    }

    #[must_use]
    pub fn can_act(&self) -> bool {
        self.actions_remaining > 0
    }

    #[must_use]
    pub fn can_buy(&self) -> bool {
        self.buys_remaining > 0
    }

    // === Budget changes ===

    /// Count the turn and reset budgets to one action, one buy, no bonus.
    pub(crate) fn begin_turn(&mut self) {
        self.turns += 1;
        self.actions_remaining = 1;
        self.buys_remaining = 1;
        self.coin_bonus = 0;
    }

    pub(crate) fn add_actions(&mut self, n: u32) {
        self.actions_remaining += n;
    }

    pub(crate) fn add_buys(&mut self, n: u32) {
        self.buys_remaining += n;
    }

    pub(crate) fn add_coins(&mut self, n: u32) {
        self.coin_bonus += n as i32;
    }

    /// Consume one action point to play `card` from hand.
    pub(crate) fn play_from_hand(&mut self, card: EntityId) -> bool {
        if self.actions_remaining == 0 || !self.zones.move_card(card, ZoneKind::Hand, ZoneKind::Played) {
            return false;
        }
        self.actions_remaining -= 1;
        true
    }

    /// Pay for and gain a purchased card. A purchase ends the action phase.
    pub(crate) fn buy(&mut self, card: Card) {
        self.coin_bonus -= card.info().cost as i32;
        self.buys_remaining = self.buys_remaining.saturating_sub(1);
        self.actions_remaining = 0;
        self.zones.put(card, ZoneKind::Discard);
    }

    /// Discard everything in play and draw a fresh hand.
    pub(crate) fn cleanup(&mut self, rng: &mut GameRng) {
        self.zones.discard_in_play();
        let drawn = self.zones.draw(HAND_SIZE, rng);
        self.actions_remaining = 0;
        self.buys_remaining = 0;
        self.coin_bonus = 0;
        debug!("{} drew {} cards at cleanup", self.name, drawn);
    }

    // === Queries ===

    /// Every card this participant owns.
    pub fn owned(&self) -> impl Iterator<Item = &CardInfo> {
        self.zones.all_cards().map(Card::info)
    }

    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.zones.total()
    }

    /// Copies of a card owned, in any zone.
    #[must_use]
    pub fn owned_named(&self, name: &str) -> usize {
        self.owned().filter(|info| info.is_named(name)).count()
    }

    /// Total victory points across every owned card.
    #[must_use]
    pub fn victory_points(&self) -> i32 {
        let owned = self.owned_count();
        self.owned().map(|info| info.points_in_deck_of(owned)).sum()
    }

    /// A snapshot for display.
    #[must_use]
    pub fn summary(&self) -> ParticipantSummary {
        ParticipantSummary {
            name: self.name.clone(),
            hand: self.zones.hand().names(),
            played: self.zones.played().names(),
            actions: self.actions_remaining,
            buys: self.buys_remaining,
            coins: self.coins_available(),
            deck: self.zones.deck().len(),
            discard: self.zones.discard().len(),
        }
    }
}

/// What a participant would see of their own state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantSummary {
    pub name: String,
    pub hand: Vec<String>,
    pub played: Vec<String>,
    pub actions: u32,
    pub buys: u32,
    pub coins: i32,
    pub deck: usize,
    pub discard: usize,
}

impl fmt::Display for ParticipantSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} actions, {} buys, {} coins", self.name, self.actions, self.buys, self.coins)?;
        writeln!(f, "  hand: {}", self.hand.join(", "))?;
        if !self.played.is_empty() {
            writeln!(f, "  played: {}", self.played.join(", "))?;
        }
        write!(f, "  deck: {}  discard: {}", self.deck, self.discard)
    }
}
