//! Card-choice heuristics shared by autonomous seats.
//!
//! These work on plain `CardInfo` lists so they can be checked without a
//! running game.

use crate::cards::{names, CardInfo};
use crate::core::GameRng;

/// Binomial coefficient as a float. Zero when `k > n`.
///
/// ```
/// use rust_dominion::ai::choose;
///
/// assert_eq!(choose(5, 2), 10.0);
/// assert_eq!(choose(3, 4), 0.0);
/// ```
#[must_use]
pub fn choose(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

fn is_junk_victory(info: &CardInfo) -> bool {
    info.is_victory() || info.victory_points < 0
}

/// Cards to discard when forced down to a hand size.
///
/// Victory cards (and curses) go first, then Copper, then actions from most
/// to least expensive, then other treasure, then anything left.
///
/// ```
/// use rust_dominion::ai::forced_discard;
/// use rust_dominion::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// let hand: Vec<_> = ["Estate", "Estate", "Copper", "Smithy", "Gold"]
///     .iter()
///     .map(|name| catalog.lookup(name).unwrap().as_ref())
///     .collect();
///
/// assert_eq!(forced_discard(&hand, 2), vec!["Estate", "Estate"]);
/// ```
#[must_use]
pub fn forced_discard(hand: &[&CardInfo], count: usize) -> Vec<String> {
    let mut actions: Vec<&CardInfo> = hand.iter().copied().filter(|info| info.is_action()).collect();
    actions.sort_by(|a, b| b.cost.cmp(&a.cost));

    let victory = hand.iter().copied().filter(|info| is_junk_victory(info));
    let copper = hand
        .iter()
        .copied()
        .filter(|info| !is_junk_victory(info) && info.is_named(names::COPPER));
    let treasure = hand.iter().copied().filter(|info| {
        !is_junk_victory(info) && !info.is_action() && info.is_treasure() && !info.is_named(names::COPPER)
    });
    let rest = hand
        .iter()
        .copied()
        .filter(|info| !is_junk_victory(info) && !info.is_action() && !info.is_treasure());

    victory
        .chain(copper)
        .chain(actions)
        .chain(treasure)
        .chain(rest)
        .take(count)
        .map(|info| info.name.clone())
        .collect()
}

/// Whether a card is worth drawing instead of a Copper.
fn is_better_draw(info: &CardInfo) -> bool {
    info.bonus.cards > 0 || info.bonus.coins > 1 || info.coins > 1
}

/// Cards to discard before redrawing the same number.
///
/// Every victory card goes. Coppers go too when swapping `i` of them gives
/// the best chance, over `owned`, of drawing only better cards, and that
/// chance reaches `threshold`.
#[must_use]
pub fn redraw_discard(hand: &[&CardInfo], owned: &[&CardInfo], threshold: f64) -> Vec<String> {
    let mut discard: Vec<String> = hand
        .iter()
        .filter(|info| is_junk_victory(info))
        .map(|info| info.name.clone())
        .collect();

    let coppers = hand.iter().filter(|info| info.is_named(names::COPPER)).count();
    let better = owned.iter().filter(|info| is_better_draw(info)).count();
    let all = owned.len();

    let mut best: Option<(usize, f64)> = None;
    for i in 1..=coppers {
        let total = choose(all, i);
        if total == 0.0 {
            break;
        }
        let rate = choose(better, i) / total;
        if best.map_or(true, |(_, top)| rate > top) {
            best = Some((i, rate));
        }
    }

    if let Some((count, rate)) = best {
        if rate >= threshold {
            discard.extend(std::iter::repeat(names::COPPER.to_string()).take(count));
        }
    }
    discard
}

/// The card to trash for a remodel.
///
/// Negative points first, then a 4-cost card, then (past `late_after`
/// turns, or always when it is `None`) a 6-cost card, then Copper, then the
/// cheapest action, then the cheapest card. Autonomous seats pass their
/// first victory round, so Gold only turns into a Province once Duchies
/// are wanted too.
///
/// ```
/// use rust_dominion::ai::remodel_trash_target;
/// use rust_dominion::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// let hand: Vec<_> = ["Silver", "Curse", "Smithy"]
///     .iter()
///     .map(|name| catalog.lookup(name).unwrap().as_ref())
///     .collect();
///
/// assert_eq!(remodel_trash_target(&hand, 1, Some(6)).as_deref(), Some("Curse"));
/// ```
#[must_use]
pub fn remodel_trash_target(
    hand: &[&CardInfo],
    turns: u32,
    late_after: Option<u32>,
) -> Option<String> {
    let find = |pred: &dyn Fn(&CardInfo) -> bool| hand.iter().copied().find(|info| pred(info));
    let cheapest = |pred: &dyn Fn(&CardInfo) -> bool| {
        hand.iter()
            .copied()
            .filter(|info| pred(info))
            .min_by_key(|info| info.cost)
    };

    find(&|info| info.victory_points < 0)
        .or_else(|| find(&|info| info.cost == 4))
        .or_else(|| {
            if late_after.map_or(true, |round| turns > round) {
                find(&|info| info.cost == 6)
            } else {
                None
            }
        })
        .or_else(|| find(&|info| info.is_named(names::COPPER)))
        .or_else(|| cheapest(&|info| info.is_action()))
        .or_else(|| cheapest(&|_| true))
        .map(|info| info.name.clone())
}

/// Cost increase a remodel allows.
pub const REMODEL_STEP: u32 = 2;

/// The card to gain after trashing `trashed` to a remodel.
///
/// `in_supply` says whether a pile can be taken from; `actions` are the
/// game's kingdom actions. Exact targets of 8 and 6 map to Province and
/// Gold. Otherwise a random action at the exact target cost, then one
/// cheaper. Falls back to the trashed card's own name.
pub fn remodel_gain_target(
    trashed: &CardInfo,
    actions: &[&CardInfo],
    in_supply: impl Fn(&str) -> bool,
    rng: &mut GameRng,
) -> String {
    let target = trashed.cost + REMODEL_STEP;
    match target {
        8 => return names::PROVINCE.to_string(),
        6 => {
            return if in_supply(names::GOLD) {
                names::GOLD.to_string()
            } else {
                trashed.name.clone()
            };
        }
        _ => {}
    }

    for cost in [target, target.saturating_sub(1)] {
        let candidates: Vec<&CardInfo> = actions
            .iter()
            .copied()
            .filter(|info| info.cost == cost && in_supply(&info.name))
            .collect();
        if let Some(info) = rng.choose(&candidates) {
            return info.name.clone();
        }
    }
    trashed.name.clone()
}
