//! Core engine types: card identity, seats, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these; none of them know any card
//! rules.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{EntityAllocator, EntityId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{Controller, GameConfig, SeatConfig};
pub use error::{DecisionError, GameError, IllegalAction, InstructionError, SetupError};
