//! Game configuration.
//!
//! A `GameConfig` describes one table: the kingdom, the seats in turn order,
//! and an optional seed. It is plain data, so a whole table of autonomous
//! players can be read from JSON.
//!
//! ```
//! use rust_dominion::ai::AiConfig;
//! use rust_dominion::core::GameConfig;
//!
//! let config = GameConfig::new(["Cellar", "Moat", "Village", "Smithy", "Militia",
//!                               "Remodel", "Market", "Mine", "Laboratory", "Witch"])
//!     .with_seed(7)
//!     .with_human("Alice")
//!     .with_autonomous("Bot", AiConfig::big_money());
//!
//! assert_eq!(config.seats.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::ai::AiConfig;

/// Who makes a seat's decisions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Controller {
    /// Decisions come from a caller-supplied `DecisionSource`.
    Human,
    /// Decisions come from the built-in heuristics.
    Autonomous(AiConfig),
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Display name.
    pub name: String,
    /// Decision source selection.
    pub controller: Controller,
}

/// Configuration for a single game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// The 10 kingdom card names. Empty means "generate a random kingdom".
    #[serde(default)]
    pub kingdom: Vec<String>,

    /// Seed for every shuffle and random choice. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Seats in turn order.
    pub seats: Vec<SeatConfig>,
}

impl GameConfig {
    /// Create a config for the given kingdom with no seats yet.
    pub fn new<I, S>(kingdom: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kingdom: kingdom.into_iter().map(Into::into).collect(),
            seed: None,
            seats: Vec::new(),
        }
    }

    /// Create a config whose kingdom is drawn at setup.
    #[must_use]
    pub fn random_kingdom() -> Self {
        Self::default()
    }

    /// Fix the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a human-controlled seat.
    #[must_use]
    pub fn with_human(mut self, name: impl Into<String>) -> Self {
        self.seats.push(SeatConfig {
            name: name.into(),
            controller: Controller::Human,
        });
        self
    }

    /// Add an autonomous seat.
    #[must_use]
    pub fn with_autonomous(mut self, name: impl Into<String>, ai: AiConfig) -> Self {
        self.seats.push(SeatConfig {
            name: name.into(),
            controller: Controller::Autonomous(ai),
        });
        self
    }

    /// Number of human seats, i.e. how many decision sources setup expects.
    #[must_use]
    pub fn human_count(&self) -> usize {
        self.seats
            .iter()
            .filter(|seat| seat.controller == Controller::Human)
            .count()
    }
}
