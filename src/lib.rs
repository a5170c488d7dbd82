//! # rust-dominion
//!
//! A turn-based deck-building card game engine: supply piles, per-player
//! decks, action card effects, and heuristic autonomous players.
//!
//! ## Design Principles
//!
//! 1. **One decision capability**: Human and autonomous seats differ only in
//!    the `DecisionSource` they hold. The engine validates every answer and
//!    asks again on rejection.
//!
//! 2. **Cards are never created or destroyed mid-game**: The supply is the
//!    only factory, and every card is always in exactly one place.
//!
//! 3. **Deterministic by seed**: Every shuffle and random choice draws from
//!    a seeded `GameRng`, forked per seat.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, players, RNG, configuration, errors
//! - `cards`: Card metadata, the catalog and per-game category index
//! - `zones`: Ordered card containers and each participant's zone set
//! - `supply`: Purchasable piles and the end-of-game condition
//! - `rules`: The turn engine, instructions and scoring
//! - `effects`: Action card handlers
//! - `decision`: The `DecisionSource` trait plus console and scripted sources
//! - `ai`: Buy strategies, choice heuristics and the autonomous source
//!
//! ## Example
//!
//! ```
//! use rust_dominion::ai::AiConfig;
//! use rust_dominion::rules::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .seed(11)
//!     .autonomous("Ada", AiConfig::big_money())
//!     .autonomous("Grace", AiConfig::grand_smithy())
//!     .build()
//!     .unwrap();
//!
//! let standings = game.run(500).unwrap().unwrap();
//! assert!(standings.winners().next().is_some());
//! ```

pub mod core;
pub mod cards;
pub mod zones;
pub mod supply;
pub mod rules;
pub mod effects;
pub mod decision;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Controller, DecisionError, EntityId, GameConfig, GameError, GameRng, IllegalAction,
    InstructionError, PlayerId, PlayerMap, SeatConfig, SetupError,
};

pub use crate::cards::{Card, CardCatalog, CardIndex, CardInfo, CardKind};

pub use crate::zones::{Zone, ZoneKind, ZoneSet};

pub use crate::supply::{PileLevel, Supply};

pub use crate::rules::{
    Game, GameBuilder, GameResult, GameView, Instruction, Outcome, Participant, Phase, Standings,
};

pub use crate::effects::{ActionCard, EffectResolver};

pub use crate::decision::{
    ConsoleDecisions, DecisionSource, GainRequest, Question, ScriptedDecisions, SelectionRequest,
};

pub use crate::ai::{AiConfig, AutonomousDecisions, BuyStrategy, Planner};
