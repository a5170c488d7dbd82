//! Card identity.
//!
//! Every physical card in a game carries a unique `EntityId`. Two Coppers are
//! interchangeable for play but never share an id, so a card can be tracked as
//! it moves from supply to discard to hand and eventually to the trash.
//!
//! ## Allocation
//!
//! Ids are handed out by the supply when a card is taken from a pile; they
//! start at zero and are never reused within a game.
//!
//! ```
//! use rust_dominion::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::default();
//! assert_eq!(ids.allocate(), EntityId(0));
//! assert_eq!(ids.allocate(), EntityId(1));
//! assert_eq!(ids.allocated(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Monotonic id source.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Hand out the next unused id.
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
