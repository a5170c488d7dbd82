//! Purchase choices.
//!
//! Every function returns the name of a card the seat can legally buy right
//! now, or `None`.

use log::debug;

use crate::cards::names;
use crate::core::{GameRng, PlayerId};
use crate::rules::GameView;

use super::{BuyStrategy, Weights};

/// Coins needed for each flat-priority tier.
pub const PROVINCE_COINS: i32 = 8;
pub const GOLD_COINS: i32 = 6;
pub const DUCHY_COINS: i32 = 5;
pub const SILVER_COINS: i32 = 3;

/// The Copper-buying enabler.
const MONEYLENDER: &str = "Moneylender";

fn coins(view: &GameView<'_>, me: PlayerId) -> i32 {
    view.participant(me).coins_available()
}

/// Whether `name` is in the supply and costs no more than the seat holds.
fn affordable(view: &GameView<'_>, me: PlayerId, name: &str) -> bool {
    let supply = view.supply();
    supply.can_take(name)
        && view
            .catalog()
            .lookup(name)
            .is_some_and(|info| info.cost as i32 <= coins(view, me))
}

fn buy_if(view: &GameView<'_>, me: PlayerId, at_least: i32, name: &str) -> Option<String> {
    (coins(view, me) >= at_least && affordable(view, me, name)).then(|| name.to_string())
}

/// Province whenever affordable; Duchy at 5 once past `first_victory_round`.
pub fn victory_purchase(
    view: &GameView<'_>,
    me: PlayerId,
    first_victory_round: Option<u32>,
) -> Option<String> {
    if let Some(card) = buy_if(view, me, PROVINCE_COINS, names::PROVINCE) {
        return Some(card);
    }
    let turns = view.participant(me).turns();
    match first_victory_round {
        Some(round) if turns > round => buy_if(view, me, DUCHY_COINS, names::DUCHY),
        _ => None,
    }
}

/// Gold at 6, Silver at 3, Copper for a Moneylender deck.
///
/// With Gold sold out, 6 or more coins still buy Silver.
pub fn treasure_purchase(view: &GameView<'_>, me: PlayerId) -> Option<String> {
    buy_if(view, me, GOLD_COINS, names::GOLD)
        .or_else(|| buy_if(view, me, SILVER_COINS, names::SILVER))
        .or_else(|| {
            (view.participant(me).owned_named(MONEYLENDER) > 0)
                .then(|| buy_if(view, me, 0, names::COPPER))
                .flatten()
        })
}

/// A random affordable kingdom action.
pub fn action_purchase(view: &GameView<'_>, me: PlayerId, rng: &mut GameRng) -> Option<String> {
    let candidates: Vec<&str> = view
        .index()
        .actions()
        .iter()
        .filter(|info| affordable(view, me, &info.name))
        .map(|info| info.name.as_str())
        .collect();
    rng.choose(&candidates).map(|name| name.to_string())
}

/// Province, Gold, then `insertion` (while under its copy cap), then Silver.
fn flat_priority(view: &GameView<'_>, me: PlayerId, insertion: Option<(&str, usize)>) -> Option<String> {
    let inserted = || {
        let (card, max_copies) = insertion?;
        if view.participant(me).owned_named(card) >= max_copies || !affordable(view, me, card) {
            return None;
        }
        view.catalog().lookup(card).map(|info| info.name.clone())
    };

    buy_if(view, me, PROVINCE_COINS, names::PROVINCE)
        .or_else(|| buy_if(view, me, GOLD_COINS, names::GOLD))
        .or_else(inserted)
        .or_else(|| buy_if(view, me, SILVER_COINS, names::SILVER))
}

/// Balance owned action and treasure shares against `weights`.
///
/// The victory heuristic is always consulted first.
fn weighted(
    weights: &Weights,
    view: &GameView<'_>,
    me: PlayerId,
    rng: &mut GameRng,
    first_victory_round: Option<u32>,
) -> Option<String> {
    if let Some(card) = victory_purchase(view, me, first_victory_round) {
        return Some(card);
    }

    let participant = view.participant(me);
    let total = participant.owned_count().max(1) as f64;
    let actions = participant.owned().filter(|info| info.is_action()).count();
    let treasures = participant.owned().filter(|info| info.is_treasure()).count();

    let action_share = actions as f64 / total;
    let treasure_share = treasures as f64 / total;
    let action_over = action_share >= weights.action;
    let treasure_over = treasure_share >= weights.treasure;
    let action_maxed = actions >= weights.max_actions;
    let treasure_maxed = treasures >= weights.max_treasure;

    debug!(
        "weighted: actions {}/{:.2}, treasure {}/{:.2}",
        actions, action_share, treasures, treasure_share
    );

    let buy_action = match (action_maxed, treasure_maxed) {
        (false, false) => match (action_over, treasure_over) {
            (false, false) => shortfall(weights.action, action_share) > shortfall(weights.treasure, treasure_share),
            (true, false) => false,
            (false, true) => true,
            (true, true) => return None,
        },
        (true, false) if !treasure_over => false,
        (false, true) if !action_over => true,
        _ => return None,
    };

    if buy_action {
        action_purchase(view, me, rng)
    } else {
        treasure_purchase(view, me)
    }
}

/// How far below target a share is, relative to the target.
fn shortfall(target: f64, share: f64) -> f64 {
    if target <= 0.0 {
        0.0
    } else {
        (target - share) / target
    }
}

/// The purchase `strategy` wants, before any victory fallback.
pub fn strategy_purchase(
    strategy: &BuyStrategy,
    view: &GameView<'_>,
    me: PlayerId,
    rng: &mut GameRng,
    first_victory_round: Option<u32>,
) -> Option<String> {
    match strategy {
        BuyStrategy::FlatPriority => flat_priority(view, me, None),
        BuyStrategy::KingdomInsertion { card, max_copies } => {
            flat_priority(view, me, Some((card.as_str(), *max_copies)))
        }
        BuyStrategy::Weighted(weights) => weighted(weights, view, me, rng, first_victory_round),
        BuyStrategy::Opening { card, max_coins } => {
            let opener = coins(view, me) <= *max_coins
                && view.participant(me).owned_named(card) == 0
                && affordable(view, me, card);
            if opener {
                view.catalog().lookup(card).map(|info| info.name.clone())
            } else {
                flat_priority(view, me, None)
            }
        }
    }
}
