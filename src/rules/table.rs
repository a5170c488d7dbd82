//! Everything on the table: supply, trash, participants, and the read-only view.

use std::sync::Arc;

use log::info;

use crate::cards::{CardCatalog, CardIndex, CardInfo};
use crate::core::{EntityId, GameRng, PlayerId, PlayerMap};
use crate::decision::Location;
use crate::supply::Supply;
use crate::zones::{Zone, ZoneKind};

use super::Participant;

/// Shared game state that effects and the turn engine mutate.
///
/// Owns every card in the game. A card is always in exactly one place:
/// a supply pile, a participant zone, the trash, or the holding zone.
#[derive(Debug)]
pub struct Table {
    pub(crate) catalog: Arc<CardCatalog>,
    pub(crate) index: CardIndex,
    pub(crate) supply: Supply,
    pub(crate) trash: Zone,
    /// Cards trashed mid-effect, waiting to be claimed. Empty between instructions.
    pub(crate) holding: Zone,
    pub(crate) players: PlayerMap<Participant>,
    pub(crate) active: Option<PlayerId>,
    pub(crate) rng: GameRng,
}

impl Table {
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView { table: self }
    }

    // === Card movement ===

    /// Draw `count` cards for a participant.
    pub(crate) fn draw(&mut self, player: PlayerId, count: usize) -> usize {
        self.players[player].zones_mut().draw(count, &mut self.rng)
    }

    /// Draw a single card, returning its id.
    pub(crate) fn draw_one(&mut self, player: PlayerId) -> Option<EntityId> {
        self.players[player].zones_mut().draw_one(&mut self.rng)
    }

    /// Reveal the top card of a participant's deck, reshuffling if needed.
    pub(crate) fn reveal_top(&mut self, player: PlayerId) -> Option<EntityId> {
        self.players[player].zones_mut().reveal_top(&mut self.rng)
    }

    pub(crate) fn move_card(
        &mut self,
        player: PlayerId,
        card: EntityId,
        from: ZoneKind,
        to: ZoneKind,
    ) -> bool {
        self.players[player].zones_mut().move_card(card, from, to)
    }

    /// Take a card from a pile into a participant zone.
    pub(crate) fn gain(&mut self, player: PlayerId, name: &str, to: ZoneKind) -> Option<EntityId> {
        let card = self.supply.take(name)?;
        let id = card.id();
        info!("{} gains {} into {}", self.players[player].name(), card.name(), to);
        self.players[player].zones_mut().put(card, to);
        Some(id)
    }

    /// Move a card from a participant zone to the trash.
    pub(crate) fn trash(&mut self, player: PlayerId, card: EntityId, from: ZoneKind) -> bool {
        match self.players[player].zones_mut().take(card, from) {
            Some(card) => {
                info!("{} trashes {}", self.players[player].name(), card.name());
                self.trash.push(card);
                true
            }
            None => false,
        }
    }

    /// Move a card from a participant zone to the holding zone.
    pub(crate) fn hold(&mut self, player: PlayerId, card: EntityId, from: ZoneKind) -> bool {
        match self.players[player].zones_mut().take(card, from) {
            Some(card) => {
                self.holding.push(card);
                true
            }
            None => false,
        }
    }

    /// Move a held card into a participant zone.
    pub(crate) fn claim(&mut self, player: PlayerId, card: EntityId, to: ZoneKind) -> bool {
        match self.holding.take(card) {
            Some(card) => {
                info!("{} claims {}", self.players[player].name(), card.name());
                self.players[player].zones_mut().put(card, to);
                true
            }
            None => false,
        }
    }

    /// Everything left in holding goes to the trash.
    pub(crate) fn flush_holding(&mut self) {
        let held = self.holding.drain();
        self.trash.extend(held);
    }

    /// Find a card by id in a location.
    pub(crate) fn card_info(&self, location: Location, card: EntityId) -> Option<&CardInfo> {
        self.view().zone(location).iter().find(|c| c.id() == card).map(|c| c.info())
    }
}

/// Read-only projection of the table.
///
/// Handed to every [`DecisionSource`](crate::decision::DecisionSource) call
/// and to the strategy layer.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    table: &'a Table,
}

impl<'a> GameView<'a> {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.table.players.player_count()
    }

    /// Participants in seat order.
    pub fn participants(&self) -> impl Iterator<Item = (PlayerId, &'a Participant)> {
        self.table.players.iter()
    }

    #[must_use]
    pub fn participant(&self, player: PlayerId) -> &'a Participant {
        &self.table.players[player]
    }

    /// The seat whose turn it is, if a turn has started.
    #[must_use]
    pub fn active(&self) -> Option<PlayerId> {
        self.table.active
    }

    #[must_use]
    pub fn supply(&self) -> &'a Supply {
        &self.table.supply
    }

    #[must_use]
    pub fn trash(&self) -> &'a Zone {
        &self.table.trash
    }

    #[must_use]
    pub fn holding(&self) -> &'a Zone {
        &self.table.holding
    }

    #[must_use]
    pub fn catalog(&self) -> &'a CardCatalog {
        &self.table.catalog
    }

    /// Category index of the cards in this game.
    #[must_use]
    pub fn index(&self) -> &'a CardIndex {
        &self.table.index
    }

    #[must_use]
    pub fn zone(&self, location: Location) -> &'a Zone {
        match location {
            Location::Zone(player, kind) => self.table.players[player].zones().zone(kind),
            Location::Holding => &self.table.holding,
        }
    }

    /// Every card in the game, wherever it is, plus every card still in the supply.
    ///
    /// Constant for the whole game.
    #[must_use]
    pub fn card_total(&self) -> usize {
        let owned: usize = self.participants().map(|(_, p)| p.owned_count()).sum();
        owned + self.table.trash.len() + self.table.holding.len() + self.table.supply.remaining_total()
    }
}
