//! Action card effects.
//!
//! - `ActionCard`: the closed set of cards with handlers, looked up by name
//! - `EffectResolver`: applies a card's catalog bonus, then its handler
//!
//! Cross-participant effects visit every other seat once, in turn order
//! starting after the active participant. Attacks skip any seat that
//! reveals a defend card from hand.

mod card;
mod resolver;

pub use card::ActionCard;
pub use resolver::{
    EffectResolver, ADVENTURER_TREASURES, CHAPEL_TRASH, LIBRARY_HAND, MILITIA_HAND, THIEF_REVEAL,
};
