//! Static category index for one game's card set.
//!
//! Built once at setup from the catalog and the chosen kingdom. The strategy
//! layer uses it to enumerate candidate purchases without rescanning the
//! catalog on every decision.

use std::sync::Arc;

use super::{CardCatalog, CardInfo};

/// Card names grouped by category, restricted to cards in this game's supply.
#[derive(Clone, Debug, Default)]
pub struct CardIndex {
    kingdom: Vec<Arc<CardInfo>>,
    actions: Vec<Arc<CardInfo>>,
    attacks: Vec<Arc<CardInfo>>,
    reactions: Vec<Arc<CardInfo>>,
    victory: Vec<Arc<CardInfo>>,
    treasure: Vec<Arc<CardInfo>>,
}

impl CardIndex {
    /// Index the basic cards of `catalog` plus the named kingdom cards.
    ///
    /// Kingdom names that are not in the catalog are skipped; setup validates
    /// them before building the index.
    pub fn build(catalog: &CardCatalog, kingdom: &[String]) -> Self {
        let mut index = Self::default();

        let chosen = kingdom.iter().filter_map(|name| catalog.lookup(name));
        let basics = catalog.iter().filter(|info| !info.is_kingdom());

        for info in chosen.chain(basics) {
            if info.is_kingdom() {
                index.kingdom.push(Arc::clone(info));
            }
            if info.is_action() {
                index.actions.push(Arc::clone(info));
            }
            if info.is_attack() {
                index.attacks.push(Arc::clone(info));
            }
            if info.is_defend() {
                index.reactions.push(Arc::clone(info));
            }
            if info.is_victory() {
                index.victory.push(Arc::clone(info));
            }
            if info.is_treasure() {
                index.treasure.push(Arc::clone(info));
            }
        }

        index
    }

    #[must_use]
    pub fn kingdom(&self) -> &[Arc<CardInfo>] {
        &self.kingdom
    }

    #[must_use]
    pub fn actions(&self) -> &[Arc<CardInfo>] {
        &self.actions
    }

    #[must_use]
    pub fn attacks(&self) -> &[Arc<CardInfo>] {
        &self.attacks
    }

    #[must_use]
    pub fn reactions(&self) -> &[Arc<CardInfo>] {
        &self.reactions
    }

    #[must_use]
    pub fn victory(&self) -> &[Arc<CardInfo>] {
        &self.victory
    }

    #[must_use]
    pub fn treasure(&self) -> &[Arc<CardInfo>] {
        &self.treasure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kingdom() -> Vec<String> {
        ["Cellar", "Moat", "Village", "Smithy", "Militia", "Gardens", "Market", "Mine", "Laboratory", "Witch"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_index_categories() {
        let catalog = CardCatalog::standard();
        let index = CardIndex::build(&catalog, &kingdom());

        assert_eq!(index.kingdom().len(), 10);
        assert_eq!(index.actions().len(), 9);
        assert_eq!(index.attacks().len(), 2);
        assert_eq!(index.reactions().len(), 1);
        assert_eq!(index.treasure().len(), 3);
        // Estate, Duchy, Province, Gardens
        assert_eq!(index.victory().len(), 4);
    }

    #[test]
    fn test_index_excludes_unchosen_kingdom_cards() {
        let catalog = CardCatalog::standard();
        let index = CardIndex::build(&catalog, &kingdom());

        assert!(index.actions().iter().all(|info| info.name != "Chapel"));
    }
}
