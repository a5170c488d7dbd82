//! What the engine can ask a participant.

use serde::{Deserialize, Serialize};

use crate::cards::CardInfo;
use crate::core::PlayerId;
use crate::zones::ZoneKind;

/// Where the cards on offer live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Location {
    /// A participant's zone.
    Zone(PlayerId, ZoneKind),
    /// Cards trashed by the current effect, not yet in the trash.
    Holding,
}

/// Which cards in the location may be chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFilter {
    Any,
    Treasure,
    Victory,
    Action,
}

impl CardFilter {
    #[must_use]
    pub fn accepts(self, info: &CardInfo) -> bool {
        match self {
            CardFilter::Any => true,
            CardFilter::Treasure => info.is_treasure(),
            CardFilter::Victory => info.is_victory(),
            CardFilter::Action => info.is_action(),
        }
    }
}

/// Why cards are being selected. Autonomous sources key their heuristics on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    /// Discard any number, then draw as many (Cellar).
    RedrawDiscard,
    /// Discard down to this hand size (Militia).
    DiscardDownTo(usize),
    /// Trash up to the maximum (Chapel).
    Trash,
    /// Trash one card to gain a better one (Remodel).
    RemodelTrash,
    /// Trash a treasure to gain a better one (Mine).
    UpgradeTreasure,
    /// Put a victory card from hand on the deck (Bureaucrat).
    TopDeckVictory,
    /// Pick an action card to play twice (Throne Room).
    Replay,
    /// Pick which of a victim's revealed treasures to trash (Thief).
    StealTreasure { victim: PlayerId },
    /// Take any of the stolen treasures (Thief).
    ClaimStolen,
}

/// A request to choose between `min` and `max` cards from one location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    pub purpose: Purpose,
    pub location: Location,
    pub filter: CardFilter,
    pub min: usize,
    pub max: usize,
}

impl SelectionRequest {
    /// Human-readable prompt.
    #[must_use]
    pub fn prompt(&self) -> String {
        let count = if self.min == self.max {
            format!("exactly {}", self.min)
        } else if self.min == 0 {
            format!("up to {}", self.max)
        } else {
            format!("{} to {}", self.min, self.max)
        };
        match self.purpose {
            Purpose::RedrawDiscard => format!("choose {} cards to discard and redraw", count),
            Purpose::DiscardDownTo(size) => {
                format!("discard down to {} cards: choose {} cards", size, count)
            }
            Purpose::Trash => format!("choose {} cards to trash", count),
            Purpose::RemodelTrash => "choose a card to trash".to_string(),
            Purpose::UpgradeTreasure => "choose a treasure card to trash".to_string(),
            Purpose::TopDeckVictory => "choose a victory card to put on your deck".to_string(),
            Purpose::Replay => "choose an action card to play twice".to_string(),
            Purpose::StealTreasure { victim } => {
                format!("choose one of {}'s treasures to trash", victim)
            }
            Purpose::ClaimStolen => "choose which trashed cards to gain (or \"all\")".to_string(),
        }
    }
}

/// Yes/no questions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Question {
    /// Reveal this defend card to block an attack?
    RevealDefense { card: String },
    /// Put your deck into your discard pile? (Chancellor)
    DiscardDeck,
    /// Set aside this drawn action card? (Library)
    SetAside { card: String },
    /// Discard this card revealed from `owner`'s deck? Otherwise it goes back. (Spy)
    DiscardRevealed { owner: PlayerId, card: String },
}

impl Question {
    /// The answer used when the source gives none.
    #[must_use]
    pub fn default_answer(&self) -> bool {
        !matches!(self, Question::SetAside { .. })
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        match self {
            Question::RevealDefense { card } => {
                format!("reveal {} to defend against this attack?", card)
            }
            Question::DiscardDeck => "put your deck into your discard pile?".to_string(),
            Question::SetAside { card } => format!("you drew {}, set it aside?", card),
            Question::DiscardRevealed { owner, card } => {
                format!("{} revealed {}, discard it?", owner, card)
            }
        }
    }
}

/// What prompted a gain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GainPurpose {
    Feast,
    Workshop,
    Remodel { trashed: String },
    Mine { trashed: String },
}

/// A request to name a card to gain from the supply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GainRequest {
    pub purpose: GainPurpose,
    pub max_cost: u32,
    pub filter: CardFilter,
}

impl GainRequest {
    /// Whether `info` satisfies the category and cost ceiling.
    #[must_use]
    pub fn allows(&self, info: &CardInfo) -> bool {
        self.filter.accepts(info) && info.cost <= self.max_cost
    }

    #[must_use]
    pub fn prompt(&self) -> String {
        match self.filter {
            CardFilter::Treasure => format!("choose a treasure card to gain (up to {} coins)", self.max_cost),
            _ => format!("choose a card to gain (up to {} coins)", self.max_cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(Question::DiscardDeck.default_answer());
        assert!(Question::RevealDefense { card: "Moat".into() }.default_answer());
        assert!(!Question::SetAside { card: "Village".into() }.default_answer());
    }

    #[test]
    fn test_filters() {
        let gold = CardInfo::treasure("Gold", 6, 3);
        let estate = CardInfo::victory("Estate", 2, 1);

        assert!(CardFilter::Treasure.accepts(&gold));
        assert!(!CardFilter::Treasure.accepts(&estate));
        assert!(CardFilter::Any.accepts(&estate));

        let request = GainRequest {
            purpose: GainPurpose::Mine { trashed: "Silver".into() },
            max_cost: 6,
            filter: CardFilter::Treasure,
        };
        assert!(request.allows(&gold));
        assert!(!request.allows(&estate));
    }

    #[test]
    fn test_prompts() {
        let request = SelectionRequest {
            purpose: Purpose::Trash,
            location: Location::Zone(PlayerId::new(0), ZoneKind::Hand),
            filter: CardFilter::Any,
            min: 0,
            max: 4,
        };
        assert_eq!(request.prompt(), "choose up to 4 cards to trash");
    }
}
