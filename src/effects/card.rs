//! The closed set of action cards the resolver knows how to play.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every action card with a handler.
///
/// Catalog entries are matched to variants by name, so a catalog can carry
/// an action card this enum does not know; playing it is a fatal
/// `GameError::MissingHandler`.
///
/// ```
/// use rust_dominion::effects::ActionCard;
///
/// assert_eq!(ActionCard::from_name("throne room"), Some(ActionCard::ThroneRoom));
/// assert_eq!(ActionCard::ThroneRoom.name(), "Throne Room");
/// assert_eq!(ActionCard::from_name("Gardens"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCard {
    Adventurer,
    Bureaucrat,
    Cellar,
    Chancellor,
    Chapel,
    CouncilRoom,
    Feast,
    Festival,
    Laboratory,
    Library,
    Market,
    Militia,
    Mine,
    Moat,
    Moneylender,
    Remodel,
    Smithy,
    Spy,
    Thief,
    ThroneRoom,
    Village,
    Witch,
    Woodcutter,
    Workshop,
}

impl ActionCard {
    pub const ALL: [ActionCard; 24] = [
        ActionCard::Adventurer,
        ActionCard::Bureaucrat,
        ActionCard::Cellar,
        ActionCard::Chancellor,
        ActionCard::Chapel,
        ActionCard::CouncilRoom,
        ActionCard::Feast,
        ActionCard::Festival,
        ActionCard::Laboratory,
        ActionCard::Library,
        ActionCard::Market,
        ActionCard::Militia,
        ActionCard::Mine,
        ActionCard::Moat,
        ActionCard::Moneylender,
        ActionCard::Remodel,
        ActionCard::Smithy,
        ActionCard::Spy,
        ActionCard::Thief,
        ActionCard::ThroneRoom,
        ActionCard::Village,
        ActionCard::Witch,
        ActionCard::Woodcutter,
        ActionCard::Workshop,
    ];

    /// Catalog name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionCard::Adventurer => "Adventurer",
            ActionCard::Bureaucrat => "Bureaucrat",
            ActionCard::Cellar => "Cellar",
            ActionCard::Chancellor => "Chancellor",
            ActionCard::Chapel => "Chapel",
            ActionCard::CouncilRoom => "Council Room",
            ActionCard::Feast => "Feast",
            ActionCard::Festival => "Festival",
            ActionCard::Laboratory => "Laboratory",
            ActionCard::Library => "Library",
            ActionCard::Market => "Market",
            ActionCard::Militia => "Militia",
            ActionCard::Mine => "Mine",
            ActionCard::Moat => "Moat",
            ActionCard::Moneylender => "Moneylender",
            ActionCard::Remodel => "Remodel",
            ActionCard::Smithy => "Smithy",
            ActionCard::Spy => "Spy",
            ActionCard::Thief => "Thief",
            ActionCard::ThroneRoom => "Throne Room",
            ActionCard::Village => "Village",
            ActionCard::Witch => "Witch",
            ActionCard::Woodcutter => "Woodcutter",
            ActionCard::Workshop => "Workshop",
        }
    }

    /// Look up a handler by card name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|card| card.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ActionCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
