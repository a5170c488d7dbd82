//! Card catalog for name lookup.
//!
//! The `CardCatalog` stores every card definition a game may use. It is built
//! once, wrapped in an `Arc`, and handed to the game; nothing mutates it after
//! that.

use std::sync::Arc;

use log::debug;
use rustc_hash::FxHashMap;

use crate::core::{GameRng, SetupError};

use super::CardInfo;

/// Names of the cards the rules refer to directly.
pub mod names {
    pub const COPPER: &str = "Copper";
    pub const SILVER: &str = "Silver";
    pub const GOLD: &str = "Gold";
    pub const ESTATE: &str = "Estate";
    pub const DUCHY: &str = "Duchy";
    pub const PROVINCE: &str = "Province";
    pub const CURSE: &str = "Curse";
}

/// Cards in a kingdom.
pub const KINGDOM_SIZE: usize = 10;

const MAX_KINGDOM_ATTEMPTS: usize = 1000;

/// Registry of card definitions, looked up by case-insensitive name.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
///
/// let smithy = catalog.lookup("smithy").unwrap();
/// assert_eq!(smithy.name, "Smithy");
/// assert_eq!(smithy.bonus.cards, 3);
/// assert!(catalog.lookup("Dragon").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Arc<CardInfo>>,
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same name (ignoring case) already exists.
    pub fn register(&mut self, info: CardInfo) {
        let key = info.name.to_lowercase();
        if self.by_name.contains_key(&key) {
            panic!("Card {} already registered", info.name);
        }
        self.by_name.insert(key, self.cards.len());
        self.cards.push(Arc::new(info));
    }

    /// Builder form of `register`.
    #[must_use]
    pub fn with_card(mut self, info: CardInfo) -> Self {
        self.register(info);
        self
    }

    /// The base set: 7 basic cards and 25 kingdom cards.
    #[must_use]
    pub fn standard() -> Self {
        use names::*;

        let basics = [
            CardInfo::treasure(COPPER, 0, 1),
            CardInfo::treasure(SILVER, 3, 2),
            CardInfo::treasure(GOLD, 6, 3),
            CardInfo::victory(ESTATE, 2, 1),
            CardInfo::victory(DUCHY, 5, 3),
            CardInfo::victory(PROVINCE, 8, 6),
            CardInfo::plain(CURSE, 0, -1),
        ];

        let kingdom = [
            CardInfo::action("Adventurer", 6),
            CardInfo::action("Bureaucrat", 4).attack(),
            CardInfo::action("Cellar", 2).plus_actions(1),
            CardInfo::action("Chancellor", 3).plus_coins(2),
            CardInfo::action("Chapel", 2),
            CardInfo::action("Council Room", 5).plus_cards(4).plus_buys(1),
            CardInfo::action("Feast", 4),
            CardInfo::action("Festival", 5).plus_actions(2).plus_buys(1).plus_coins(2),
            CardInfo::victory("Gardens", 4, 0).kingdom().points_per(10),
            CardInfo::action("Laboratory", 5).plus_actions(1).plus_cards(2),
            CardInfo::action("Library", 5),
            CardInfo::action("Market", 5)
                .plus_actions(1)
                .plus_cards(1)
                .plus_buys(1)
                .plus_coins(1),
            CardInfo::action("Militia", 4).attack().plus_coins(2),
            CardInfo::action("Mine", 5),
            CardInfo::action("Moat", 2).defend().plus_cards(2),
            CardInfo::action("Moneylender", 4),
            CardInfo::action("Remodel", 4),
            CardInfo::action("Smithy", 4).plus_cards(3),
            CardInfo::action("Spy", 4).attack().plus_actions(1).plus_cards(1),
            CardInfo::action("Thief", 4).attack(),
            CardInfo::action("Throne Room", 4),
            CardInfo::action("Village", 3).plus_actions(2).plus_cards(1),
            CardInfo::action("Witch", 5).attack().plus_cards(2),
            CardInfo::action("Woodcutter", 3).plus_buys(1).plus_coins(2),
            CardInfo::action("Workshop", 3),
        ];

        basics
            .into_iter()
            .chain(kingdom)
            .fold(Self::new(), Self::with_card)
    }

    /// Look up a card by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Arc<CardInfo>> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&index| &self.cards[index])
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardInfo>> {
        self.cards.iter()
    }

    /// Iterate over kingdom cards.
    pub fn kingdom_cards(&self) -> impl Iterator<Item = &Arc<CardInfo>> {
        self.cards.iter().filter(|info| info.is_kingdom())
    }

    /// Draw a random kingdom of 10 cards.
    ///
    /// The kingdom always contains a card costing 2, and contains a defend
    /// card whenever it contains an attack.
    pub fn random_kingdom(&self, rng: &mut GameRng) -> Result<Vec<String>, SetupError> {
        let mut pool: Vec<&Arc<CardInfo>> = self.kingdom_cards().collect();
        if pool.len() < KINGDOM_SIZE {
            return Err(SetupError::KingdomUnsatisfiable);
        }

        for attempt in 1..=MAX_KINGDOM_ATTEMPTS {
            rng.shuffle(&mut pool);
            let pick = &pool[..KINGDOM_SIZE];

            let has_two_cost = pick.iter().any(|info| info.cost == 2);
            let has_attack = pick.iter().any(|info| info.is_attack());
            let has_defend = pick.iter().any(|info| info.is_defend());

            if has_two_cost && (!has_attack || has_defend) {
                debug!("random kingdom accepted after {} draws", attempt);
                return Ok(pick.iter().map(|info| info.name.clone()).collect());
            }
        }

        Err(SetupError::KingdomUnsatisfiable)
    }
}
