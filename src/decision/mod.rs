//! Decision sources.
//!
//! Every seat holds a `DecisionSource`. The engine asks it for the next
//! instruction of a turn and for every choice an effect needs:
//!
//! - `select_cards`: pick cards from a zone (discard, trash, top-deck, ...)
//! - `confirm`: answer a yes/no question
//! - `name_card`: name a card to gain from the supply
//!
//! Implementations:
//!
//! - `ConsoleDecisions`: line-based prompts over any `BufRead`/`Write` pair
//! - `ScriptedDecisions`: queued answers for tests and harnesses
//! - `AutonomousDecisions` (in `ai`): built-in heuristics

mod console;
mod request;
mod scripted;
mod source;

pub use console::{parse_card_list, parse_yes_no, ConsoleDecisions, SELECT_ALL};
pub use request::{CardFilter, GainPurpose, GainRequest, Location, Purpose, Question, SelectionRequest};
pub use scripted::{ScriptedDecisions, Transcript};
pub use source::DecisionSource;
