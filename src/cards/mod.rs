//! Card system: catalog entries, physical cards, and per-game category index.
//!
//! - `CardInfo`: immutable data for a card type (cost, coins, points, flags, bonuses)
//! - `Card`: one physical card (unique id + shared `CardInfo`)
//! - `CardCatalog`: every card type, looked up by case-insensitive name
//! - `CardIndex`: the categories present in one game's supply

pub mod info;
pub mod card;
pub mod catalog;
pub mod index;

pub use info::{Bonus, CardInfo, CardKind};
pub use card::Card;
pub use catalog::{names, CardCatalog, KINGDOM_SIZE};
pub use index::CardIndex;
