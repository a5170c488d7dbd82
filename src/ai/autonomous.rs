//! Decisions for seats with no human behind them.

use log::debug;

use crate::cards::{names, CardInfo};
use crate::core::{GameRng, PlayerId};
use crate::decision::{DecisionSource, GainPurpose, GainRequest, Purpose, Question, SelectionRequest};
use crate::rules::{GameView, Instruction};

use super::heuristics::{forced_discard, redraw_discard, remodel_gain_target, remodel_trash_target};
use super::AiConfig;

/// Worth discarding or trashing whoever owns it.
fn is_junk(info: &CardInfo) -> bool {
    info.is_victory() || info.victory_points < 0 || info.is_named(names::COPPER)
}

/// Trim `wanted` to what is actually on offer and pad it up to `min`.
///
/// `eligible` is consumed as a multiset so a name is never picked more
/// often than it appears.
fn fit(wanted: Vec<String>, eligible: &[&CardInfo], min: usize, max: usize) -> Vec<String> {
    let mut left: Vec<&CardInfo> = eligible.to_vec();
    let mut picked = Vec::new();

    for name in wanted {
        if picked.len() == max {
            break;
        }
        if let Some(pos) = left.iter().position(|info| info.is_named(&name)) {
            picked.push(left.remove(pos).name.clone());
        }
    }
    while picked.len() < min && !left.is_empty() {
        picked.push(left.remove(0).name.clone());
    }
    picked
}

/// The built-in `DecisionSource`.
///
/// Turn planning is left to the seat's planner: `next_instruction` always
/// answers `SudoAi`.
#[derive(Clone, Debug)]
pub struct AutonomousDecisions {
    config: AiConfig,
    rng: GameRng,
}

impl AutonomousDecisions {
    pub fn new(config: AiConfig, rng: GameRng) -> Self {
        Self { config, rng }
    }

    fn preferred(
        &self,
        view: &GameView<'_>,
        me: PlayerId,
        request: &SelectionRequest,
        eligible: &[&CardInfo],
    ) -> Vec<String> {
        let participant = view.participant(me);
        let named = |pred: &dyn Fn(&CardInfo) -> bool| -> Vec<String> {
            eligible
                .iter()
                .filter(|info| pred(**info))
                .map(|info| info.name.clone())
                .collect()
        };

        match request.purpose {
            Purpose::RedrawDiscard => {
                let owned: Vec<&CardInfo> = participant.owned().collect();
                redraw_discard(eligible, &owned, self.config.redraw_threshold)
            }
            Purpose::DiscardDownTo(_) => forced_discard(eligible, request.min),
            Purpose::Trash => {
                let mut order = named(&|info| info.victory_points < 0);
                order.extend(named(&|info| info.is_named(names::ESTATE)));
                order.extend(named(&|info| info.is_named(names::COPPER)));
                order
            }
            Purpose::RemodelTrash => {
                remodel_trash_target(eligible, participant.turns(), self.config.first_victory_round)
                    .into_iter()
                    .collect()
            }
            Purpose::UpgradeTreasure => {
                let mut order = named(&|info| info.is_named(names::SILVER));
                order.extend(named(&|info| info.is_named(names::COPPER)));
                order
            }
            Purpose::TopDeckVictory => eligible
                .iter()
                .min_by_key(|info| info.cost)
                .map(|info| vec![info.name.clone()])
                .unwrap_or_default(),
            Purpose::Replay => eligible
                .iter()
                .find(|info| info.bonus.cards > 0 || info.bonus.actions > 0)
                .or_else(|| eligible.iter().max_by_key(|info| info.cost))
                .map(|info| vec![info.name.clone()])
                .unwrap_or_default(),
            Purpose::StealTreasure { .. } => eligible
                .iter()
                .max_by_key(|info| (info.coins, info.cost))
                .map(|info| vec![info.name.clone()])
                .unwrap_or_default(),
            Purpose::ClaimStolen => named(&|info| !is_junk(info)),
        }
    }

    /// Gold, then the most expensive kingdom action, then the most expensive card.
    fn best_gain(view: &GameView<'_>, request: &GainRequest) -> String {
        let supply = view.supply();
        let allowed: Vec<&CardInfo> = supply
            .cards()
            .map(|info| &**info)
            .filter(|info| request.allows(info) && supply.can_take(&info.name))
            .collect();

        allowed
            .iter()
            .find(|info| info.is_named(names::GOLD))
            .or_else(|| {
                allowed
                    .iter()
                    .filter(|info| info.is_kingdom() && info.is_action())
                    .max_by_key(|info| info.cost)
            })
            .or_else(|| allowed.iter().max_by_key(|info| info.cost))
            .map_or_else(|| names::COPPER.to_string(), |info| info.name.clone())
    }
}

impl DecisionSource for AutonomousDecisions {
    fn next_instruction(&mut self, _view: &GameView<'_>, _me: PlayerId) -> Instruction {
        Instruction::SudoAi
    }

    fn select_cards(&mut self, view: &GameView<'_>, me: PlayerId, request: &SelectionRequest) -> Vec<String> {
        let eligible: Vec<&CardInfo> = view
            .zone(request.location)
            .iter()
            .map(|card| card.info())
            .filter(|info| request.filter.accepts(info))
            .collect();

        let wanted = self.preferred(view, me, request, &eligible);
        let picked = fit(wanted, &eligible, request.min, request.max);
        debug!("{} selects {:?} for {:?}", view.participant(me).name(), picked, request.purpose);
        picked
    }

    fn confirm(&mut self, view: &GameView<'_>, me: PlayerId, question: &Question) -> Option<bool> {
        let answer = match question {
            Question::RevealDefense { .. } | Question::DiscardDeck => true,
            Question::SetAside { .. } => view.participant(me).actions_remaining() == 0,
            Question::DiscardRevealed { owner, card } => {
                let junk = view.catalog().lookup(card).is_some_and(|info| is_junk(info));
                if *owner == me {
                    junk
                } else {
                    !junk
                }
            }
        };
        Some(answer)
    }

    fn name_card(&mut self, view: &GameView<'_>, _me: PlayerId, request: &GainRequest) -> String {
        if let GainPurpose::Remodel { trashed } = &request.purpose {
            if let Some(trashed) = view.catalog().lookup(trashed) {
                let supply = view.supply();
                let catalog = view.catalog();
                let in_supply = |name: &str| {
                    supply.can_take(name) && catalog.lookup(name).is_some_and(|info| request.allows(info))
                };
                let actions: Vec<&CardInfo> = view.index().actions().iter().map(|info| &**info).collect();
                let target = remodel_gain_target(trashed, &actions, in_supply, &mut self.rng);
                if in_supply(&target) {
                    return target;
                }
            }
        }
        Self::best_gain(view, request)
    }
}
