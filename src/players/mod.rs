//! Player records.
//!
//! A `Player` owns a hand, a collected-moods area and a block counter. The
//! rules engine takes ownership of every `Player` for the duration of a game
//! and hands them back on reset.

pub mod player;

pub use player::{CollectedMood, Player, PlayerSnapshot};
