//! Shared card zones: the draw deck and the discard pile.
//!
//! ## Key Types
//!
//! - `Deck`: ordered draw pile with fixed starting composition
//! - `ZonePosition`: where a returned card goes in the deck
//! - `EmptyDeck`: non-fatal signal from `Deck::draw`
//! - `DiscardPile`: driver-owned pile for cards leaving play

pub mod deck;
pub mod discard;

pub use deck::{Deck, EmptyDeck, ZonePosition};
pub use discard::DiscardPile;
