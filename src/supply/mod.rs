//! Supply piles.
//!
//! The supply tracks how many copies of each card remain purchasable and is
//! the only place cards come into existence: taking from a pile materializes a
//! fresh `Card` with a new id. It also decides when the game is over.
//!
//! ## Pile sizes
//!
//! | Pile | 1-2 players | 3 players | 4 players |
//! |---|---|---|---|
//! | Copper | 60 | 60 | 60 |
//! | Silver | 40 | 40 | 40 |
//! | Gold | 30 | 30 | 30 |
//! | Estate, Duchy, Province | 8 | 12 | 12 |
//! | Curse | 10 | 20 | 30 |
//! | Kingdom victory card | 8 | 12 | 12 |
//! | Other kingdom card | 10 | 10 | 10 |
//!
//! On top of that, Copper and Estate piles start with enough extra copies for
//! the starting decks, which are dealt out of the supply during setup.

pub mod pile;

pub use pile::{PileLevel, Supply};

use crate::cards::names;

/// Copies of each non-victory kingdom card.
pub const KINGDOM_PILE: usize = 10;
pub const COPPER_PILE: usize = 60;
pub const SILVER_PILE: usize = 40;
pub const GOLD_PILE: usize = 30;

/// Starting deck composition.
pub const STARTING_ESTATES: usize = 3;
pub const STARTING_COPPERS: usize = 7;

/// Empty piles that end the game.
pub const DRY_PILE_COUNT: usize = 3;

/// The pile whose exhaustion alone ends the game.
pub const TOP_VICTORY: &str = names::PROVINCE;

/// Pile size for every victory card, basic or kingdom.
#[must_use]
pub fn victory_pile(player_count: usize) -> usize {
    if player_count <= 2 {
        8
    } else {
        12
    }
}

/// Curses scale with the number of opponents.
#[must_use]
pub fn curse_pile(player_count: usize) -> usize {
    (10 * player_count.saturating_sub(1)).max(10)
}
