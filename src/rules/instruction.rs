//! Turn instructions and their text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::InstructionError;

/// One command issued by the active participant.
///
/// ```
/// use rust_dominion::rules::Instruction;
///
/// let buy: Instruction = "buy council room".parse().unwrap();
/// assert_eq!(buy, Instruction::Buy("council room".to_string()));
/// assert_eq!("NEXT".parse::<Instruction>().unwrap(), Instruction::Next);
/// assert!("play".parse::<Instruction>().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// Play an action card from hand.
    Play(String),
    /// Buy a card from the supply.
    Buy(String),
    /// End the turn (cleanup).
    Next,
    /// Show the active participant's state.
    Info,
    /// Show the supply.
    Supply,
    /// End the game now and score it.
    Quit,
    /// Let the seat's planner pick and apply the next instruction.
    SudoAi,
}

impl FromStr for Instruction {
    type Err = InstructionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InstructionError::Empty);
        }

        let (keyword, rest) = match s.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (s, ""),
        };

        let card = |label: &'static str| {
            if rest.is_empty() {
                Err(InstructionError::MissingCardName(label))
            } else {
                Ok(rest.to_string())
            }
        };

        match keyword.to_ascii_lowercase().as_str() {
            "play" => card("play").map(Instruction::Play),
            "buy" => card("buy").map(Instruction::Buy),
            "next" => Ok(Instruction::Next),
            "info" => Ok(Instruction::Info),
            "supply" => Ok(Instruction::Supply),
            "quit" | "exit" => Ok(Instruction::Quit),
            "sudoai" => Ok(Instruction::SudoAi),
            _ => Err(InstructionError::UnknownKeyword(s.to_string())),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Play(card) => write!(f, "play {}", card),
            Instruction::Buy(card) => write!(f, "buy {}", card),
            Instruction::Next => f.write_str("next"),
            Instruction::Info => f.write_str("info"),
            Instruction::Supply => f.write_str("supply"),
            Instruction::Quit => f.write_str("quit"),
            Instruction::SudoAi => f.write_str("sudoai"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!("play Smithy".parse::<Instruction>(), Ok(Instruction::Play("Smithy".to_string())));
        assert_eq!("  Buy   Throne Room ".parse::<Instruction>(), Ok(Instruction::Buy("Throne Room".to_string())));
        assert_eq!("info".parse::<Instruction>(), Ok(Instruction::Info));
        assert_eq!("Supply".parse::<Instruction>(), Ok(Instruction::Supply));
        assert_eq!("exit".parse::<Instruction>(), Ok(Instruction::Quit));
        assert_eq!("SudoAI".parse::<Instruction>(), Ok(Instruction::SudoAi));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Instruction>(), Err(InstructionError::Empty));
        assert_eq!("buy ".parse::<Instruction>(), Err(InstructionError::MissingCardName("buy")));
        assert_eq!(
            "dance wildly".parse::<Instruction>(),
            Err(InstructionError::UnknownKeyword("dance wildly".to_string()))
        );
    }

    #[test]
    fn test_display_parses_back() {
        for instruction in [
            Instruction::Play("Council Room".to_string()),
            Instruction::Next,
            Instruction::SudoAi,
        ] {
            assert_eq!(instruction.to_string().parse::<Instruction>(), Ok(instruction));
        }
    }
}
