//! The turn engine and everything it owns.
//!
//! - `Game`: setup, turn flow, instruction handling, decision validation
//! - `Table` / `GameView`: shared state and its read-only projection
//! - `Participant`: one seat's zones and turn budgets
//! - `Instruction`: the keyworded command surface
//! - `Standings`: end-of-game ranking

pub mod game;
pub mod instruction;
pub mod participant;
pub mod scoring;
pub mod table;

pub use game::{Game, GameBuilder, Outcome, Phase};
pub(crate) use game::Selection;
pub use instruction::Instruction;
pub use participant::{Participant, ParticipantSummary, HAND_SIZE};
pub use scoring::{GameResult, Standing, Standings};
pub use table::{GameView, Table};
