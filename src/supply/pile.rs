use std::sync::Arc;

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{names, Card, CardCatalog, CardInfo, KINGDOM_SIZE};
use crate::core::{EntityAllocator, SetupError};

use super::{
    curse_pile, victory_pile, COPPER_PILE, DRY_PILE_COUNT, GOLD_PILE, KINGDOM_PILE, SILVER_PILE,
    STARTING_COPPERS, STARTING_ESTATES, TOP_VICTORY,
};

#[derive(Debug)]
struct Pile {
    info: Arc<CardInfo>,
    remaining: usize,
}

/// Snapshot of one pile for display and strategy code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileLevel {
    pub name: String,
    pub cost: u32,
    pub remaining: usize,
}

impl std::fmt::Display for PileLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<14} cost {:>2}  left {:>2}", self.name, self.cost, self.remaining)
    }
}

/// All purchasable piles of one game.
///
/// ## Example
///
/// ```
/// use rust_dominion::cards::CardCatalog;
/// use rust_dominion::supply::Supply;
///
/// let catalog = CardCatalog::standard();
/// let kingdom: Vec<String> = ["Cellar", "Moat", "Village", "Smithy", "Militia",
///                             "Remodel", "Market", "Mine", "Laboratory", "Witch"]
///     .iter().map(|s| s.to_string()).collect();
///
/// let mut supply = Supply::build(&catalog, &kingdom, 2).unwrap();
/// let gold = supply.take("gold").unwrap();
///
/// assert_eq!(gold.name(), "Gold");
/// assert_eq!(supply.remaining("Gold"), Some(29));
/// assert!(!supply.is_dry());
/// ```
#[derive(Debug)]
pub struct Supply {
    piles: Vec<Pile>,
    by_name: FxHashMap<String, usize>,
    ids: EntityAllocator,
    initial_total: usize,
}

impl Supply {
    /// Validate the kingdom and lay out every pile for `player_count` players.
    pub fn build(
        catalog: &CardCatalog,
        kingdom: &[String],
        player_count: usize,
    ) -> Result<Self, SetupError> {
        if !(1..=4).contains(&player_count) {
            return Err(SetupError::PlayerCount(player_count));
        }
        if kingdom.len() != KINGDOM_SIZE {
            return Err(SetupError::KingdomSize(kingdom.len()));
        }

        let mut entries: Vec<(Arc<CardInfo>, usize)> = Vec::new();

        for name in kingdom {
            let info = catalog
                .lookup(name)
                .ok_or_else(|| SetupError::UnknownCard(name.clone()))?;
            if !info.is_kingdom() {
                return Err(SetupError::NotKingdomCard(info.name.clone()));
            }
            if entries.iter().any(|(seen, _)| seen.name == info.name) {
                return Err(SetupError::DuplicateKingdomCard(info.name.clone()));
            }
            let count = if info.is_victory() {
                victory_pile(player_count)
            } else {
                KINGDOM_PILE
            };
            entries.push((Arc::clone(info), count));
        }

        let basics = [
            (names::COPPER, COPPER_PILE + STARTING_COPPERS * player_count),
            (names::SILVER, SILVER_PILE),
            (names::GOLD, GOLD_PILE),
            (names::ESTATE, victory_pile(player_count) + STARTING_ESTATES * player_count),
            (names::DUCHY, victory_pile(player_count)),
            (names::PROVINCE, victory_pile(player_count)),
            (names::CURSE, curse_pile(player_count)),
        ];
        for (name, count) in basics {
            let info = catalog
                .lookup(name)
                .ok_or_else(|| SetupError::UnknownCard(name.to_string()))?;
            entries.push((Arc::clone(info), count));
        }

        // Display order: actions, treasures, victory, everything else.
        entries.sort_by_key(|(info, _)| display_rank(info));

        let mut supply = Self {
            piles: Vec::with_capacity(entries.len()),
            by_name: FxHashMap::default(),
            ids: EntityAllocator::default(),
            initial_total: entries.iter().map(|(_, count)| count).sum(),
        };
        for (info, remaining) in entries {
            supply.by_name.insert(info.name.to_lowercase(), supply.piles.len());
            supply.piles.push(Pile { info, remaining });
        }

        info!(
            "supply ready for {} players: {} piles, {} cards",
            player_count,
            supply.piles.len(),
            supply.initial_total
        );
        Ok(supply)
    }

    fn pile(&self, name: &str) -> Option<&Pile> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&index| &self.piles[index])
    }

    fn pile_mut(&mut self, name: &str) -> Option<&mut Pile> {
        let index = *self.by_name.get(&name.trim().to_lowercase())?;
        Some(&mut self.piles[index])
    }

    /// Copies left in a pile, or `None` if this game has no such pile.
    #[must_use]
    pub fn remaining(&self, name: &str) -> Option<usize> {
        self.pile(name).map(|pile| pile.remaining)
    }

    /// Whether a pile exists and is non-empty.
    #[must_use]
    pub fn can_take(&self, name: &str) -> bool {
        self.remaining(name).is_some_and(|count| count > 0)
    }

    /// Take one card from a pile, materializing it.
    ///
    /// Returns `None` if the pile does not exist or is empty.
    pub fn take(&mut self, name: &str) -> Option<Card> {
        let pile = self.pile_mut(name)?;
        if pile.remaining == 0 {
            return None;
        }
        pile.remaining -= 1;
        let info = Arc::clone(&pile.info);
        let id = self.ids.allocate();
        debug!("{} taken from supply ({} left)", info.name, self.remaining(&info.name).unwrap_or(0));
        Some(Card::new(id, info))
    }

    /// Put a card back on its pile. Only used when rigging zones for a harness.
    ///
    /// Hands the card back if there is no pile for it.
    pub fn restore(&mut self, card: Card) -> Result<(), Card> {
        match self.pile_mut(card.name()) {
            Some(pile) => {
                pile.remaining += 1;
                Ok(())
            }
            None => Err(card),
        }
    }

    /// The 3 Estates and 7 Coppers every participant starts with.
    pub fn deal_starting_deck(&mut self) -> Result<Vec<Card>, SetupError> {
        let wanted = std::iter::repeat(names::ESTATE)
            .take(STARTING_ESTATES)
            .chain(std::iter::repeat(names::COPPER).take(STARTING_COPPERS));

        wanted
            .map(|name| {
                self.take(name)
                    .ok_or_else(|| SetupError::UnknownCard(name.to_string()))
            })
            .collect()
    }

    /// Number of empty piles.
    #[must_use]
    pub fn empty_piles(&self) -> usize {
        self.piles.iter().filter(|pile| pile.remaining == 0).count()
    }

    /// The game-end condition: Provinces gone, or three piles empty.
    #[must_use]
    pub fn is_dry(&self) -> bool {
        self.remaining(TOP_VICTORY) == Some(0) || self.empty_piles() >= DRY_PILE_COUNT
    }

    /// Cards still in the supply.
    #[must_use]
    pub fn remaining_total(&self) -> usize {
        self.piles.iter().map(|pile| pile.remaining).sum()
    }

    /// Cards laid out at setup, before starting decks were dealt.
    #[must_use]
    pub fn initial_total(&self) -> usize {
        self.initial_total
    }

    /// Pile levels in display order.
    #[must_use]
    pub fn levels(&self) -> Vec<PileLevel> {
        self.piles
            .iter()
            .map(|pile| PileLevel {
                name: pile.info.name.clone(),
                cost: pile.info.cost,
                remaining: pile.remaining,
            })
            .collect()
    }

    /// Catalog entries of every pile, in display order.
    pub fn cards(&self) -> impl Iterator<Item = &Arc<CardInfo>> {
        self.piles.iter().map(|pile| &pile.info)
    }
}

fn display_rank(info: &CardInfo) -> u8 {
    if info.is_action() {
        0
    } else if info.is_treasure() {
        1
    } else if info.is_victory() {
        2
    } else {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kingdom(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn base_kingdom() -> Vec<String> {
        kingdom(&[
            "Cellar", "Moat", "Village", "Smithy", "Militia", "Remodel", "Market", "Mine",
            "Laboratory", "Witch",
        ])
    }

    #[test]
    fn test_two_player_counts() {
        let catalog = CardCatalog::standard();
        let supply = Supply::build(&catalog, &base_kingdom(), 2).unwrap();

        assert_eq!(supply.remaining("Estate"), Some(8 + 6));
        assert_eq!(supply.remaining("Copper"), Some(60 + 14));
        assert_eq!(supply.remaining("Province"), Some(8));
        assert_eq!(supply.remaining("Curse"), Some(10));
        assert_eq!(supply.remaining("Smithy"), Some(10));
        assert_eq!(supply.remaining("Chapel"), None);
    }

    #[test]
    fn test_kingdom_victory_uses_victory_count() {
        let catalog = CardCatalog::standard();
        let mut names = base_kingdom();
        names[0] = "Gardens".to_string();

        let two = Supply::build(&catalog, &names, 2).unwrap();
        let four = Supply::build(&catalog, &names, 4).unwrap();

        assert_eq!(two.remaining("Gardens"), Some(8));
        assert_eq!(four.remaining("Gardens"), Some(12));
        assert_eq!(four.remaining("Curse"), Some(30));
    }

    #[test]
    fn test_setup_validation() {
        let catalog = CardCatalog::standard();

        assert_eq!(
            Supply::build(&catalog, &base_kingdom(), 5).unwrap_err(),
            SetupError::PlayerCount(5)
        );
        assert_eq!(
            Supply::build(&catalog, &base_kingdom()[..9], 2).unwrap_err(),
            SetupError::KingdomSize(9)
        );

        let mut dup = base_kingdom();
        dup[1] = "cellar".to_string();
        assert_eq!(
            Supply::build(&catalog, &dup, 2).unwrap_err(),
            SetupError::DuplicateKingdomCard("Cellar".to_string())
        );

        let mut basic = base_kingdom();
        basic[1] = "Gold".to_string();
        assert_eq!(
            Supply::build(&catalog, &basic, 2).unwrap_err(),
            SetupError::NotKingdomCard("Gold".to_string())
        );

        let mut unknown = base_kingdom();
        unknown[1] = "Dragon".to_string();
        assert_eq!(
            Supply::build(&catalog, &unknown, 2).unwrap_err(),
            SetupError::UnknownCard("Dragon".to_string())
        );
    }

    #[test]
    fn test_take_allocates_distinct_ids() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::build(&catalog, &base_kingdom(), 2).unwrap();

        let a = supply.take("Silver").unwrap();
        let b = supply.take("silver").unwrap();
        assert_ne!(a.id(), b.id());
        assert_eq!(supply.remaining("Silver"), Some(38));
        assert!(supply.take("Chapel").is_none());
    }

    #[test]
    fn test_dry_when_province_empty() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::build(&catalog, &base_kingdom(), 2).unwrap();

        for _ in 0..7 {
            supply.take("Province");
        }
        assert!(!supply.is_dry());
        supply.take("Province");
        assert!(supply.is_dry());
    }

    #[test]
    fn test_dry_when_three_piles_empty() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::build(&catalog, &base_kingdom(), 2).unwrap();

        for name in ["Smithy", "Village"] {
            while supply.take(name).is_some() {}
        }
        assert_eq!(supply.empty_piles(), 2);
        assert!(!supply.is_dry());

        while supply.take("Witch").is_some() {}
        assert!(supply.is_dry());
    }

    #[test]
    fn test_starting_deck_and_conservation() {
        let catalog = CardCatalog::standard();
        let mut supply = Supply::build(&catalog, &base_kingdom(), 2).unwrap();
        let initial = supply.initial_total();

        let deck = supply.deal_starting_deck().unwrap();
        assert_eq!(deck.len(), 10);
        assert_eq!(deck.iter().filter(|c| c.name() == "Estate").count(), 3);
        assert_eq!(supply.remaining_total() + deck.len(), initial);

        let card = supply.take("Gold").unwrap();
        supply.restore(card).unwrap();
        assert_eq!(supply.remaining("Gold"), Some(30));
    }

    #[test]
    fn test_levels_display_order() {
        let catalog = CardCatalog::standard();
        let supply = Supply::build(&catalog, &base_kingdom(), 2).unwrap();
        let levels = supply.levels();

        assert_eq!(levels.len(), 17);
        assert_eq!(levels[0].name, "Cellar");
        let copper = levels.iter().position(|l| l.name == "Copper").unwrap();
        let estate = levels.iter().position(|l| l.name == "Estate").unwrap();
        assert!(copper < estate);
        assert_eq!(levels.last().unwrap().name, "Curse");
    }
}
