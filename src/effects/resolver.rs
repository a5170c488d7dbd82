//! Effect resolution - executing action cards against the game.
//!
//! Every resolution applies the card's catalog bonus first (cards, actions,
//! buys, coins) and then its special handler. Handlers take all their
//! choices through the `Game` decision helpers, which validate answers
//! before anything moves.

use log::{debug, info};

use crate::cards::names;
use crate::core::{EntityId, GameError, PlayerId};
use crate::decision::{CardFilter, GainPurpose, GainRequest, Location, Purpose, Question, SelectionRequest};
use crate::rules::Game;
use crate::zones::ZoneKind;

use super::ActionCard;

/// Hand size Library draws up to.
pub const LIBRARY_HAND: usize = 7;
/// Hand size Militia victims discard down to.
pub const MILITIA_HAND: usize = 3;
/// Cards Chapel may trash.
pub const CHAPEL_TRASH: usize = 4;
/// Treasures Adventurer digs for.
pub const ADVENTURER_TREASURES: usize = 2;
/// Cards Thief reveals from each victim.
pub const THIEF_REVEAL: usize = 2;

/// Resolves action cards.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `action` for `player`. `card` is the already-played instance.
    ///
    /// Throne Room calls back into this for its target, once per replay.
    pub fn resolve(
        game: &mut Game,
        player: PlayerId,
        card: EntityId,
        action: ActionCard,
    ) -> Result<(), GameError> {
        Self::apply_bonus(game, player, action);

        match action {
            ActionCard::Festival
            | ActionCard::Laboratory
            | ActionCard::Market
            | ActionCard::Moat
            | ActionCard::Smithy
            | ActionCard::Village
            | ActionCard::Woodcutter => {}
            ActionCard::Adventurer => Self::adventurer(game, player),
            ActionCard::Bureaucrat => Self::bureaucrat(game, player),
            ActionCard::Cellar => Self::cellar(game, player),
            ActionCard::Chancellor => Self::chancellor(game, player),
            ActionCard::Chapel => Self::chapel(game, player),
            ActionCard::CouncilRoom => Self::council_room(game, player),
            ActionCard::Feast => Self::feast(game, player, card),
            ActionCard::Library => Self::library(game, player),
            ActionCard::Militia => Self::militia(game, player),
            ActionCard::Mine => Self::mine(game, player),
            ActionCard::Moneylender => Self::moneylender(game, player),
            ActionCard::Remodel => Self::remodel(game, player),
            ActionCard::Spy => Self::spy(game, player),
            ActionCard::Thief => Self::thief(game, player),
            ActionCard::ThroneRoom => return Self::throne_room(game, player),
            ActionCard::Witch => Self::witch(game, player),
            ActionCard::Workshop => Self::workshop(game, player),
        }
        Ok(())
    }

    fn apply_bonus(game: &mut Game, player: PlayerId, action: ActionCard) {
        let Some(bonus) = game.table.catalog.lookup(action.name()).map(|info| info.bonus) else {
            return;
        };
        if bonus.is_empty() {
            return;
        }

        let drawn = game.table.draw(player, bonus.cards as usize);
        let participant = &mut game.table.players[player];
        participant.add_actions(bonus.actions);
        participant.add_buys(bonus.buys);
        participant.add_coins(bonus.coins);
        debug!(
            "{}: +{} cards ({} drawn), +{} actions, +{} buys, +{} coins",
            action, bonus.cards, drawn, bonus.actions, bonus.buys, bonus.coins
        );
    }

    /// Run `hit` against every other seat in turn order that does not defend.
    fn attack(game: &mut Game, attacker: PlayerId, mut hit: impl FnMut(&mut Game, PlayerId)) {
        let count = game.table.players.player_count();
        for victim in attacker.others_in_turn_order(count) {
            if !game.try_defend(victim) {
                hit(game, victim);
            }
        }
    }

    fn name_in(game: &Game, location: Location, card: EntityId) -> Option<(String, u32)> {
        game.table
            .card_info(location, card)
            .map(|info| (info.name.clone(), info.cost))
    }

    // === Handlers ===

    fn adventurer(game: &mut Game, me: PlayerId) {
        let mut found = 0;
        let mut misses = Vec::new();

        while found < ADVENTURER_TREASURES {
            let Some(card) = game.table.reveal_top(me) else {
                break;
            };
            let treasure = game
                .table
                .card_info(Location::Zone(me, ZoneKind::Reveal), card)
                .is_some_and(|info| info.is_treasure());
            if treasure {
                game.table.move_card(me, card, ZoneKind::Reveal, ZoneKind::Hand);
                found += 1;
            } else {
                misses.push(card);
            }
        }

        for card in misses {
            game.table.move_card(me, card, ZoneKind::Reveal, ZoneKind::Discard);
        }
        debug!("Adventurer found {} treasures", found);
    }

    fn bureaucrat(game: &mut Game, me: PlayerId) {
        game.table.gain(me, names::SILVER, ZoneKind::Deck);

        Self::attack(game, me, |game, victim| {
            let picked = game.select(
                victim,
                SelectionRequest {
                    purpose: Purpose::TopDeckVictory,
                    location: Location::Zone(victim, ZoneKind::Hand),
                    filter: CardFilter::Victory,
                    min: 1,
                    max: 1,
                },
            );
            let participant = game.table.players[victim].name().to_string();
            match picked.first() {
                Some(&card) => {
                    game.table.move_card(victim, card, ZoneKind::Hand, ZoneKind::Deck);
                    info!("{} puts a victory card on their deck", participant);
                }
                None => {
                    let hand = game.table.players[victim].zones().hand().names();
                    info!("{} reveals a hand with no victory cards: {}", participant, hand.join(", "));
                }
            }
        });
    }

    fn cellar(game: &mut Game, me: PlayerId) {
        let hand = game.table.players[me].zones().hand().len();
        let picked = game.select(
            me,
            SelectionRequest {
                purpose: Purpose::RedrawDiscard,
                location: Location::Zone(me, ZoneKind::Hand),
                filter: CardFilter::Any,
                min: 0,
                max: hand,
            },
        );
        for &card in &picked {
            game.table.move_card(me, card, ZoneKind::Hand, ZoneKind::Discard);
        }
        game.table.draw(me, picked.len());
    }

    fn chancellor(game: &mut Game, me: PlayerId) {
        if game.table.players[me].zones().deck().is_empty() {
            return;
        }
        if game.confirm(me, Question::DiscardDeck) {
            game.table.players[me].zones_mut().discard_deck();
            info!("{} puts their deck into their discard pile", game.table.players[me].name());
        }
    }

    fn chapel(game: &mut Game, me: PlayerId) {
        let picked = game.select(
            me,
            SelectionRequest {
                purpose: Purpose::Trash,
                location: Location::Zone(me, ZoneKind::Hand),
                filter: CardFilter::Any,
                min: 0,
                max: CHAPEL_TRASH,
            },
        );
        for &card in &picked {
            game.table.trash(me, card, ZoneKind::Hand);
        }
    }

    fn council_room(game: &mut Game, me: PlayerId) {
        let count = game.table.players.player_count();
        for other in me.others_in_turn_order(count) {
            game.table.draw(other, 1);
        }
    }

    fn feast(game: &mut Game, me: PlayerId, card: EntityId) {
        // A replayed Feast is already gone; it still gains.
        game.table.trash(me, card, ZoneKind::Played);
        game.gain_named(
            me,
            GainRequest {
                purpose: GainPurpose::Feast,
                max_cost: 5,
                filter: CardFilter::Any,
            },
            ZoneKind::Discard,
        );
    }

    fn library(game: &mut Game, me: PlayerId) {
        let mut set_aside = Vec::new();

        while game.table.players[me].zones().hand().len() < LIBRARY_HAND {
            let Some(card) = game.table.draw_one(me) else {
                break;
            };
            let action = game
                .table
                .card_info(Location::Zone(me, ZoneKind::Hand), card)
                .filter(|info| info.is_action())
                .map(|info| info.name.clone());
            if let Some(name) = action {
                if game.confirm(me, Question::SetAside { card: name }) {
                    game.table.move_card(me, card, ZoneKind::Hand, ZoneKind::Reveal);
                    set_aside.push(card);
                }
            }
        }

        for card in set_aside {
            game.table.move_card(me, card, ZoneKind::Reveal, ZoneKind::Discard);
        }
    }

    fn militia(game: &mut Game, me: PlayerId) {
        Self::attack(game, me, |game, victim| {
            let hand = game.table.players[victim].zones().hand().len();
            if hand <= MILITIA_HAND {
                return;
            }
            let excess = hand - MILITIA_HAND;
            let picked = game.select(
                victim,
                SelectionRequest {
                    purpose: Purpose::DiscardDownTo(MILITIA_HAND),
                    location: Location::Zone(victim, ZoneKind::Hand),
                    filter: CardFilter::Any,
                    min: excess,
                    max: excess,
                },
            );
            for &card in &picked {
                game.table.move_card(victim, card, ZoneKind::Hand, ZoneKind::Discard);
            }
        });
    }

    fn mine(game: &mut Game, me: PlayerId) {
        let picked = game.select(
            me,
            SelectionRequest {
                purpose: Purpose::UpgradeTreasure,
                location: Location::Zone(me, ZoneKind::Hand),
                filter: CardFilter::Treasure,
                min: 1,
                max: 1,
            },
        );
        let Some(&card) = picked.first() else {
            return;
        };
        let Some((trashed, cost)) = Self::name_in(game, Location::Zone(me, ZoneKind::Hand), card) else {
            return;
        };

        game.table.trash(me, card, ZoneKind::Hand);
        game.gain_named(
            me,
            GainRequest {
                purpose: GainPurpose::Mine { trashed },
                max_cost: cost + 3,
                filter: CardFilter::Treasure,
            },
            ZoneKind::Hand,
        );
    }

    fn moneylender(game: &mut Game, me: PlayerId) {
        let copper = game.table.players[me]
            .zones()
            .hand()
            .find_named(names::COPPER)
            .map(|card| card.id());
        if let Some(card) = copper {
            game.table.trash(me, card, ZoneKind::Hand);
            game.table.players[me].add_coins(3);
        }
    }

    fn remodel(game: &mut Game, me: PlayerId) {
        let picked = game.select(
            me,
            SelectionRequest {
                purpose: Purpose::RemodelTrash,
                location: Location::Zone(me, ZoneKind::Hand),
                filter: CardFilter::Any,
                min: 1,
                max: 1,
            },
        );
        let Some(&card) = picked.first() else {
            return;
        };
        let Some((trashed, cost)) = Self::name_in(game, Location::Zone(me, ZoneKind::Hand), card) else {
            return;
        };

        game.table.trash(me, card, ZoneKind::Hand);
        game.gain_named(
            me,
            GainRequest {
                purpose: GainPurpose::Remodel { trashed },
                max_cost: cost + 2,
                filter: CardFilter::Any,
            },
            ZoneKind::Discard,
        );
    }

    fn spy(game: &mut Game, me: PlayerId) {
        Self::spy_on(game, me, me);
        Self::attack(game, me, |game, victim| Self::spy_on(game, me, victim));
    }

    fn spy_on(game: &mut Game, spy: PlayerId, target: PlayerId) {
        let Some(card) = game.table.reveal_top(target) else {
            return;
        };
        let Some((name, _)) = Self::name_in(game, Location::Zone(target, ZoneKind::Reveal), card) else {
            return;
        };
        info!("{} reveals {}", game.table.players[target].name(), name);

        let question = Question::DiscardRevealed { owner: target, card: name };
        let to = if game.confirm(spy, question) {
            ZoneKind::Discard
        } else {
            ZoneKind::Deck
        };
        game.table.move_card(target, card, ZoneKind::Reveal, to);
    }

    fn thief(game: &mut Game, me: PlayerId) {
        Self::attack(game, me, |game, victim| {
            let revealed: Vec<EntityId> = (0..THIEF_REVEAL)
                .filter_map(|_| game.table.reveal_top(victim))
                .collect();

            let picked = game.select(
                me,
                SelectionRequest {
                    purpose: Purpose::StealTreasure { victim },
                    location: Location::Zone(victim, ZoneKind::Reveal),
                    filter: CardFilter::Treasure,
                    min: 1,
                    max: 1,
                },
            );
            if let Some(&card) = picked.first() {
                game.table.hold(victim, card, ZoneKind::Reveal);
            }
            for card in revealed {
                game.table.move_card(victim, card, ZoneKind::Reveal, ZoneKind::Discard);
            }
        });

        let held = game.table.holding.len();
        let claimed = game.select(
            me,
            SelectionRequest {
                purpose: Purpose::ClaimStolen,
                location: Location::Holding,
                filter: CardFilter::Any,
                min: 0,
                max: held,
            },
        );
        for &card in &claimed {
            game.table.claim(me, card, ZoneKind::Discard);
        }
        game.table.flush_holding();
    }

    fn throne_room(game: &mut Game, me: PlayerId) -> Result<(), GameError> {
        let picked = game.select(
            me,
            SelectionRequest {
                purpose: Purpose::Replay,
                location: Location::Zone(me, ZoneKind::Hand),
                filter: CardFilter::Action,
                min: 1,
                max: 1,
            },
        );
        let Some(&card) = picked.first() else {
            return Ok(());
        };
        let Some((name, _)) = Self::name_in(game, Location::Zone(me, ZoneKind::Hand), card) else {
            return Ok(());
        };
        let action = ActionCard::from_name(&name).ok_or(GameError::MissingHandler(name))?;

        // Moved into play without spending an action.
        game.table.move_card(me, card, ZoneKind::Hand, ZoneKind::Played);
        info!("{} plays {} twice", game.table.players[me].name(), action);

        for _ in 0..2 {
            Self::resolve(game, me, card, action)?;
        }
        Ok(())
    }

    fn witch(game: &mut Game, me: PlayerId) {
        Self::attack(game, me, |game, victim| {
            if game.table.gain(victim, names::CURSE, ZoneKind::Discard).is_none() {
                debug!("no Curses left for {}", game.table.players[victim].name());
            }
        });
    }

    fn workshop(game: &mut Game, me: PlayerId) {
        game.gain_named(
            me,
            GainRequest {
                purpose: GainPurpose::Workshop,
                max_cost: 4,
                filter: CardFilter::Any,
            },
            ZoneKind::Discard,
        );
    }
}
