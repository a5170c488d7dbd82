//! Autonomous play.
//!
//! Two pieces cooperate for every seat:
//!
//! - `Planner`: picks whole instructions when a seat issues `SudoAi`. Autonomous
//!   seats follow their `AiConfig`; human seats get a simpler assistant.
//! - `AutonomousDecisions`: the `DecisionSource` of autonomous seats,
//!   answering selections, questions and gains with the heuristics below.
//!
//! Purchases come from a `StrategyQueue` of round-scoped `BuyStrategy`s.

mod autonomous;
mod buying;
mod config;
mod heuristics;
mod planner;
mod strategy;

pub use autonomous::AutonomousDecisions;
pub use buying::{
    action_purchase, strategy_purchase, treasure_purchase, victory_purchase, DUCHY_COINS, GOLD_COINS,
    PROVINCE_COINS, SILVER_COINS,
};
pub use config::AiConfig;
pub use heuristics::{choose, forced_discard, redraw_discard, remodel_gain_target, remodel_trash_target, REMODEL_STEP};
pub use planner::{action_choice, Planner, ASSIST_ACTION_CHANCE};
pub use strategy::{BuyStrategy, RoundStrategy, StrategyQueue, Weights};
