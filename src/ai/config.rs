//! Autonomous player configuration.

use serde::{Deserialize, Serialize};

use super::{BuyStrategy, RoundStrategy, Weights};

/// Configuration of one autonomous seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Buy strategies, consumed in order as turns pass.
    pub strategies: Vec<RoundStrategy>,

    /// Duchy becomes a purchase once more than this many turns were taken.
    /// `None` restricts victory purchases to Province.
    pub first_victory_round: Option<u32>,

    /// Action card held back until `situational_turns` have passed.
    pub situational_card: Option<String>,

    /// See `situational_card`.
    pub situational_turns: u32,

    /// Minimum chance of drawing a better card before a redraw discards Copper.
    pub redraw_threshold: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::weighted()
    }
}

impl AiConfig {
    fn with_strategies(strategies: Vec<RoundStrategy>) -> Self {
        Self {
            strategies,
            first_victory_round: Some(11),
            situational_card: Some("Remodel".to_string()),
            situational_turns: 6,
            redraw_threshold: 0.2,
        }
    }

    /// Treasure and Provinces only.
    pub fn big_money() -> Self {
        Self::with_strategies(vec![RoundStrategy::always(BuyStrategy::FlatPriority)])
    }

    /// Big Money plus up to 3 Smithies.
    pub fn grand_smithy() -> Self {
        Self::with_strategies(vec![RoundStrategy::always(BuyStrategy::KingdomInsertion {
            card: "Smithy".to_string(),
            max_copies: 3,
        })])
    }

    /// A Chapel on a weak opening hand, then Big Money.
    pub fn chapel() -> Self {
        Self::with_strategies(vec![
            RoundStrategy::new(
                2,
                BuyStrategy::Opening {
                    card: "Chapel".to_string(),
                    max_coins: 4,
                },
            ),
            RoundStrategy::always(BuyStrategy::FlatPriority),
        ])
    }

    /// Keep about 10% actions and 80% treasure.
    pub fn weighted() -> Self {
        Self::with_strategies(vec![RoundStrategy::always(BuyStrategy::Weighted(
            Weights::default(),
        ))])
    }

    pub fn with_first_victory_round(mut self, round: Option<u32>) -> Self {
        self.first_victory_round = round;
        self
    }

    pub fn with_situational_card(mut self, card: Option<String>, turns: u32) -> Self {
        self.situational_card = card;
        self.situational_turns = turns;
        self
    }

    pub fn with_redraw_threshold(mut self, threshold: f64) -> Self {
        self.redraw_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AiConfig::default();
        assert_eq!(config, AiConfig::weighted());
        assert_eq!(config.first_victory_round, Some(11));
        assert_eq!(config.situational_turns, 6);
        assert!((config.redraw_threshold - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AiConfig::big_money()
            .with_first_victory_round(None)
            .with_situational_card(None, 0)
            .with_redraw_threshold(0.5);

        assert_eq!(config.first_victory_round, None);
        assert!(config.situational_card.is_none());
        assert_eq!(config.redraw_threshold, 0.5);
    }

    #[test]
    fn test_serialization() {
        let config = AiConfig::chapel();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
