//! Zone system for card locations.
//!
//! ## Key Types
//!
//! - `Zone`: an owned, ordered container of cards
//! - `ZoneSet`: one participant's deck, hand, play area, discard and reveal zones
//! - `ZoneKind`: names those zones
//!
//! The shared trash and the temporary holding area are plain `Zone`s owned by
//! the table.

pub mod zone;
pub mod set;

pub use zone::Zone;
pub use set::{ZoneKind, ZoneSet};
