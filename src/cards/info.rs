//! Catalog entries - static card data.
//!
//! `CardInfo` holds the immutable properties of a card type: what it costs,
//! what it is worth, which categories it belongs to, and the flat bonuses it
//! yields when played. Physical cards (`Card`) point at one of these.

use serde::{Deserialize, Serialize};

/// Category flags. A card may carry several (Moat is an action and a defend card).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CardKind {
    pub treasure: bool,
    pub victory: bool,
    pub action: bool,
    pub kingdom: bool,
    pub attack: bool,
    pub defend: bool,
}

/// Flat yields applied every time an action card resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Bonus {
    pub actions: u32,
    pub cards: u32,
    pub buys: u32,
    pub coins: u32,
}

impl Bonus {
    /// No bonus at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Bonus::default()
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::CardInfo;
///
/// let village = CardInfo::action("Village", 3).plus_cards(1).plus_actions(2);
///
/// assert!(village.is_action());
/// assert!(village.is_kingdom());
/// assert_eq!(village.bonus.actions, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInfo {
    /// Display name. Lookups ignore case.
    pub name: String,

    /// Price in coins.
    pub cost: u32,

    /// Coins contributed while in hand.
    #[serde(default)]
    pub coins: u32,

    /// Flat victory points (negative for curses).
    #[serde(default)]
    pub victory_points: i32,

    /// One extra victory point per this many owned cards (Gardens).
    #[serde(default)]
    pub points_per_cards: Option<u32>,

    #[serde(default)]
    pub kind: CardKind,

    #[serde(default)]
    pub bonus: Bonus,
}

impl CardInfo {
    fn blank(name: impl Into<String>, cost: u32) -> Self {
        Self {
            name: name.into(),
            cost,
            coins: 0,
            victory_points: 0,
            points_per_cards: None,
            kind: CardKind::default(),
            bonus: Bonus::default(),
        }
    }

    /// A basic treasure card.
    pub fn treasure(name: impl Into<String>, cost: u32, coins: u32) -> Self {
        let mut info = Self::blank(name, cost);
        info.coins = coins;
        info.kind.treasure = true;
        info
    }

    /// A basic victory card.
    pub fn victory(name: impl Into<String>, cost: u32, victory_points: i32) -> Self {
        let mut info = Self::blank(name, cost);
        info.victory_points = victory_points;
        info.kind.victory = true;
        info
    }

    /// A card with no category at all (Curse).
    pub fn plain(name: impl Into<String>, cost: u32, victory_points: i32) -> Self {
        let mut info = Self::blank(name, cost);
        info.victory_points = victory_points;
        info
    }

    /// A kingdom action card.
    pub fn action(name: impl Into<String>, cost: u32) -> Self {
        let mut info = Self::blank(name, cost);
        info.kind.action = true;
        info.kind.kingdom = true;
        info
    }

    /// Mark as a kingdom card.
    #[must_use]
    pub fn kingdom(mut self) -> Self {
        self.kind.kingdom = true;
        self
    }

    /// Mark as an attack.
    #[must_use]
    pub fn attack(mut self) -> Self {
        self.kind.attack = true;
        self
    }

    /// Mark as a defend (reaction) card.
    #[must_use]
    pub fn defend(mut self) -> Self {
        self.kind.defend = true;
        self
    }

    /// Score one point per `cards` owned cards.
    #[must_use]
    pub fn points_per(mut self, cards: u32) -> Self {
        self.points_per_cards = Some(cards);
        self
    }

    #[must_use]
    pub fn plus_actions(mut self, n: u32) -> Self {
        self.bonus.actions = n;
        self
    }

    #[must_use]
    pub fn plus_cards(mut self, n: u32) -> Self {
        self.bonus.cards = n;
        self
    }

    #[must_use]
    pub fn plus_buys(mut self, n: u32) -> Self {
        self.bonus.buys = n;
        self
    }

    #[must_use]
    pub fn plus_coins(mut self, n: u32) -> Self {
        self.bonus.coins = n;
        self
    }

    // === Category queries ===

    #[must_use]
    pub fn is_treasure(&self) -> bool {
        self.kind.treasure
    }

    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.kind.victory
    }

    #[must_use]
    pub fn is_action(&self) -> bool {
        self.kind.action
    }

    #[must_use]
    pub fn is_kingdom(&self) -> bool {
        self.kind.kingdom
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.kind.attack
    }

    #[must_use]
    pub fn is_defend(&self) -> bool {
        self.kind.defend
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Victory points this card is worth in a deck of `owned` cards.
    #[must_use]
    pub fn points_in_deck_of(&self, owned: usize) -> i32 {
        let scaled = self
            .points_per_cards
            .filter(|per| *per > 0)
            .map_or(0, |per| (owned / per as usize) as i32);
        self.victory_points + scaled
    }
}
