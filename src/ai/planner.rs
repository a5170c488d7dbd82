//! Instruction planning for `SudoAi`.

use log::debug;

use crate::cards::CardInfo;
use crate::core::{GameRng, PlayerId};
use crate::rules::{GameView, Instruction};

use super::buying::{action_purchase, strategy_purchase, treasure_purchase, victory_purchase};
use super::{AiConfig, StrategyQueue};

/// Chance that an assisted human buys an action instead of treasure.
pub const ASSIST_ACTION_CHANCE: f64 = 0.4;

/// The action card to play next, if any is worth playing.
///
/// The first card in hand that draws or gives actions wins outright.
/// Otherwise a random action, holding back `situational` until more than
/// `situational_turns` turns have been taken.
pub fn action_choice(
    hand: &[&CardInfo],
    turns: u32,
    situational: Option<&str>,
    situational_turns: u32,
    rng: &mut GameRng,
) -> Option<String> {
    let actions: Vec<&CardInfo> = hand.iter().copied().filter(|info| info.is_action()).collect();

    if let Some(info) = actions
        .iter()
        .find(|info| info.bonus.cards > 0 || info.bonus.actions > 0)
    {
        return Some(info.name.clone());
    }

    let held_back = |info: &CardInfo| {
        turns <= situational_turns && situational.is_some_and(|card| info.is_named(card))
    };
    let eligible: Vec<&CardInfo> = actions.into_iter().filter(|info| !held_back(*info)).collect();
    rng.choose(&eligible).map(|info| info.name.clone())
}

#[derive(Clone, Debug)]
enum Mode {
    /// Follow the seat's configured strategies.
    Autonomous { config: AiConfig, queue: StrategyQueue },
    /// Stand in for a human: Province at 8, otherwise a coin flip between
    /// an action and treasure.
    Assistant,
}

/// Picks whole instructions for a seat.
#[derive(Clone, Debug)]
pub struct Planner {
    mode: Mode,
    rng: GameRng,
}

impl Planner {
    pub fn autonomous(config: AiConfig, rng: GameRng) -> Self {
        let queue = StrategyQueue::new(config.strategies.clone());
        Self {
            mode: Mode::Autonomous { config, queue },
            rng,
        }
    }

    pub fn assistant(rng: GameRng) -> Self {
        Self {
            mode: Mode::Assistant,
            rng,
        }
    }

    /// Play, then buy, then end the turn.
    pub fn next_instruction(&mut self, view: &GameView<'_>, me: PlayerId) -> Instruction {
        let participant = view.participant(me);
        let turns = participant.turns();

        if participant.can_act() {
            let hand: Vec<&CardInfo> = participant.zones().hand().iter().map(|c| c.info()).collect();
            let (situational, situational_turns) = match &self.mode {
                Mode::Autonomous { config, .. } => {
                    (config.situational_card.as_deref(), config.situational_turns)
                }
                Mode::Assistant => (None, 0),
            };
            if let Some(card) = action_choice(&hand, turns, situational, situational_turns, &mut self.rng) {
                return Instruction::Play(card);
            }
        }

        if participant.can_buy() {
            let purchase = match &mut self.mode {
                Mode::Autonomous { config, queue } => {
                    queue.advance(turns);
                    strategy_purchase(queue.current(), view, me, &mut self.rng, config.first_victory_round)
                        .or_else(|| victory_purchase(view, me, config.first_victory_round))
                }
                Mode::Assistant => victory_purchase(view, me, None).or_else(|| {
                    if self.rng.gen_bool(ASSIST_ACTION_CHANCE) {
                        action_purchase(view, me, &mut self.rng)
                            .or_else(|| treasure_purchase(view, me))
                    } else {
                        treasure_purchase(view, me)
                    }
                }),
            };
            if let Some(card) = purchase {
                debug!("{} plans to buy {}", participant.name(), card);
                return Instruction::Buy(card);
            }
        }

        Instruction::Next
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cards::CardCatalog;

    fn infos<'a>(catalog: &'a CardCatalog, cards: &[&str]) -> Vec<&'a CardInfo> {
        cards
            .iter()
            .map(|name| catalog.lookup(name).map(Arc::as_ref).unwrap())
            .collect()
    }

    #[test]
    fn test_draw_or_action_card_first_found() {
        let catalog = CardCatalog::standard();
        let hand = infos(&catalog, &["Copper", "Militia", "Smithy", "Village"]);
        let mut rng = GameRng::new(1);

        assert_eq!(action_choice(&hand, 1, None, 0, &mut rng).as_deref(), Some("Smithy"));
    }

    #[test]
    fn test_situational_card_held_back() {
        let catalog = CardCatalog::standard();
        let hand = infos(&catalog, &["Copper", "Remodel"]);
        let mut rng = GameRng::new(1);

        assert_eq!(action_choice(&hand, 3, Some("Remodel"), 6, &mut rng), None);
        assert_eq!(action_choice(&hand, 7, Some("Remodel"), 6, &mut rng).as_deref(), Some("Remodel"));
    }

    #[test]
    fn test_no_actions() {
        let catalog = CardCatalog::standard();
        let hand = infos(&catalog, &["Copper", "Estate"]);
        let mut rng = GameRng::new(1);

        assert_eq!(action_choice(&hand, 1, None, 0, &mut rng), None);
    }
}
