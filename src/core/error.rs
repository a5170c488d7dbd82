//! Error taxonomy.
//!
//! Four recoverable categories and one fatal one:
//!
//! - [`SetupError`]: the game could not be constructed.
//! - [`InstructionError`]: an instruction was malformed. It is discarded and
//!   the turn continues.
//! - [`IllegalAction`]: a well-formed instruction is not allowed right now.
//!   Nothing is mutated and the turn continues.
//! - [`DecisionError`]: a decision answer was invalid. The same decision is
//!   requested again.
//! - [`GameError::MissingHandler`]: a played action card has no effect
//!   handler. This is a catalog defect and aborts the operation.

use thiserror::Error;

/// The game could not be set up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs 1 to 4 players, got {0}")]
    PlayerCount(usize),

    #[error("a kingdom needs exactly 10 distinct cards, got {0}")]
    KingdomSize(usize),

    #[error("{0} appears in the kingdom more than once")]
    DuplicateKingdomCard(String),

    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("{0} is not a kingdom card")]
    NotKingdomCard(String),

    #[error("seat {0} is human-controlled but no decision source was supplied")]
    MissingHumanSource(String),

    #[error("{0} decision sources were supplied but not used")]
    UnusedHumanSources(usize),

    #[error("the catalog cannot produce a kingdom meeting the setup constraints")]
    KingdomUnsatisfiable,
}

/// An instruction could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InstructionError {
    #[error("empty instruction")]
    Empty,

    #[error("invalid instruction: {0}")]
    UnknownKeyword(String),

    #[error("{0} needs a card name")]
    MissingCardName(&'static str),
}

/// A well-formed instruction that the rules do not allow right now.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("the game has ended")]
    GameOver,

    #[error("no turn is in progress")]
    NoActiveTurn,

    #[error("cannot take an action anymore this turn")]
    NoActionsLeft,

    #[error("cannot buy anymore this turn")]
    NoBuysLeft,

    #[error("you don't have {0} in hand")]
    NotInHand(String),

    #[error("{0} is not an action card")]
    NotAnAction(String),

    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("not enough coins to buy {card} (costs {cost}, have {available})")]
    InsufficientCoins { card: String, cost: u32, available: i32 },

    #[error("cannot find {0} in supply")]
    NotInSupply(String),

    #[error("the {0} pile is empty")]
    PileEmpty(String),

    #[error("zones can only be arranged between turns")]
    TurnInProgress,
}

/// A decision answer that violates the request's constraints.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecisionError {
    #[error("choose between {min} and {max} cards, got {got}")]
    WrongCount { min: usize, max: usize, got: usize },

    #[error("{0} is not among the cards you can choose from")]
    NotInZone(String),

    #[error("{0} cannot be chosen here")]
    Ineligible(String),

    #[error("unknown card: {0}")]
    UnknownCard(String),

    #[error("{card} is too expensive to gain (costs {cost}, limit {max})")]
    TooExpensive { card: String, cost: u32, max: u32 },

    #[error("{0} is not in supply")]
    NotInSupply(String),
}

/// Top-level engine error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Instruction(#[from] InstructionError),

    #[error(transparent)]
    Illegal(#[from] IllegalAction),

    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error("action card {0} has no effect handler")]
    MissingHandler(String),
}

impl GameError {
    /// Whether play can continue after reporting this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::MissingHandler(_) | GameError::Setup(_))
    }
}
