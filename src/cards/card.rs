//! Physical cards.
//!
//! A `Card` pairs a unique `EntityId` with a shared reference to its catalog
//! entry. It is deliberately not `Clone`: the only way to get a card into a
//! zone is to move it out of another zone (or out of a supply pile), so a card
//! can never be in two places at once.

use std::sync::Arc;

use crate::core::EntityId;

use super::CardInfo;

/// A single card instance.
#[derive(Debug)]
pub struct Card {
    id: EntityId,
    info: Arc<CardInfo>,
}

impl Card {
    /// Materialize a card. Only the supply does this.
    pub(crate) fn new(id: EntityId, info: Arc<CardInfo>) -> Self {
        Self { id, info }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    #[must_use]
    pub fn info(&self) -> &CardInfo {
        &self.info
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Case-insensitive name comparison.
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.info.is_named(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_distinct_identity() {
        let info = Arc::new(CardInfo::treasure("Copper", 0, 1));
        let a = Card::new(EntityId(1), Arc::clone(&info));
        let b = Card::new(EntityId(2), info);

        assert_eq!(a.name(), b.name());
        assert_ne!(a.id(), b.id());
        assert!(a.is_named("copper"));
    }
}
