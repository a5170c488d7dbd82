//! Buy strategies and the round-scoped strategy queue.

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};

/// Target proportions and caps for the weighted strategy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Target share of action cards among owned cards (0.0 - 1.0).
    pub action: f64,
    /// Target share of treasure cards among owned cards (0.0 - 1.0).
    pub treasure: f64,
    /// Stop buying actions at this many owned.
    pub max_actions: usize,
    /// Stop buying treasure at this many owned.
    pub max_treasure: usize,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            action: 0.10,
            treasure: 0.80,
            max_actions: 1,
            max_treasure: 15,
        }
    }
}

/// How a seat picks purchases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BuyStrategy {
    /// Province at 8, Gold at 6, Silver at 3.
    FlatPriority,
    /// Flat priority with one kingdom card inserted ahead of Silver,
    /// bought while fewer than `max_copies` are owned.
    KingdomInsertion { card: String, max_copies: usize },
    /// Balance action and treasure shares against targets.
    Weighted(Weights),
    /// Buy `card` when holding at most `max_coins` and none is owned yet,
    /// otherwise flat priority.
    Opening { card: String, max_coins: i32 },
}

/// A strategy that applies until the seat has taken more than `threshold` turns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundStrategy {
    pub threshold: u32,
    pub strategy: BuyStrategy,
}

impl RoundStrategy {
    pub fn new(threshold: u32, strategy: BuyStrategy) -> Self {
        Self { threshold, strategy }
    }

    /// A strategy that is never retired.
    pub fn always(strategy: BuyStrategy) -> Self {
        Self::new(u32::MAX, strategy)
    }
}

/// Round-scoped strategies, consumed front to back.
///
/// The last strategy is never retired, so the queue is never empty.
///
/// ```
/// use rust_dominion::ai::{BuyStrategy, RoundStrategy, StrategyQueue};
///
/// let mut queue = StrategyQueue::new(vec![
///     RoundStrategy::new(2, BuyStrategy::Opening { card: "Chapel".into(), max_coins: 4 }),
///     RoundStrategy::always(BuyStrategy::FlatPriority),
/// ]);
///
/// queue.advance(2);
/// assert!(matches!(queue.current(), BuyStrategy::Opening { .. }));
/// queue.advance(3);
/// assert_eq!(queue.current(), &BuyStrategy::FlatPriority);
/// ```
#[derive(Clone, Debug)]
pub struct StrategyQueue {
    rounds: VecDeque<RoundStrategy>,
}

impl StrategyQueue {
    /// Build a queue. An empty list falls back to flat priority.
    pub fn new(rounds: Vec<RoundStrategy>) -> Self {
        let mut rounds: VecDeque<_> = rounds.into();
        if rounds.is_empty() {
            rounds.push_back(RoundStrategy::always(BuyStrategy::FlatPriority));
        }
        Self { rounds }
    }

    /// Retire every leading strategy whose threshold `turns` has passed.
    pub fn advance(&mut self, turns: u32) {
        while self.rounds.len() > 1 && self.rounds.front().is_some_and(|r| turns > r.threshold) {
            if let Some(retired) = self.rounds.pop_front() {
                debug!("strategy {:?} retired after turn {}", retired.strategy, retired.threshold);
            }
        }
    }

    #[must_use]
    pub fn current(&self) -> &BuyStrategy {
        // Never empty: `new` guarantees one entry and `advance` keeps the last.
        &self.rounds[0].strategy
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_defaults_to_flat() {
        let queue = StrategyQueue::new(Vec::new());
        assert_eq!(queue.current(), &BuyStrategy::FlatPriority);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_last_strategy_is_kept() {
        let mut queue = StrategyQueue::new(vec![
            RoundStrategy::new(1, BuyStrategy::FlatPriority),
            RoundStrategy::new(3, BuyStrategy::Weighted(Weights::default())),
        ]);

        queue.advance(100);

        assert_eq!(queue.len(), 1);
        assert!(matches!(queue.current(), BuyStrategy::Weighted(_)));
    }

    #[test]
    fn test_advance_is_monotonic() {
        let mut queue = StrategyQueue::new(vec![
            RoundStrategy::new(1, BuyStrategy::FlatPriority),
            RoundStrategy::always(BuyStrategy::Weighted(Weights::default())),
        ]);

        queue.advance(2);
        queue.advance(0);

        assert!(matches!(queue.current(), BuyStrategy::Weighted(_)));
    }
}
