//! Game configuration.
//!
//! `GameConfig` is built once by the caller and passed into the engine and
//! the table driver. Nothing reads configuration from ambient state.
//!
//! ```
//! use flip_out::core::{DeckComposition, GameConfig};
//!
//! let config = GameConfig::default()
//!     .with_composition(DeckComposition::new(8, 4))
//!     .with_seed(7);
//!
//! assert!(config.validate().is_ok());
//! assert_eq!(config.composition.total(), 60);
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{Mood, SwingKind};

/// Smallest table the rules support.
pub const MIN_PLAYERS: usize = 2;
/// Largest table the rules support.
pub const MAX_PLAYERS: usize = 6;

/// How many copies of each card a fresh deck holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckComposition {
    /// Copies of each of the five mood categories.
    pub moods_per_category: usize,
    /// Copies of each of the five swing kinds.
    pub swings_per_kind: usize,
}

impl DeckComposition {
    /// Create a composition with `n` mood cards per category and `m` swing
    /// cards per kind.
    #[must_use]
    pub const fn new(moods_per_category: usize, swings_per_kind: usize) -> Self {
        Self {
            moods_per_category,
            swings_per_kind,
        }
    }

    /// Total number of cards: `5*N + 5*M`.
    #[must_use]
    pub const fn total(&self) -> usize {
        Mood::ALL.len() * self.moods_per_category + SwingKind::ALL.len() * self.swings_per_kind
    }
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self::new(5, 3)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards in a fresh deck.
    pub composition: DeckComposition,

    /// Cards dealt to each player before the first turn.
    pub starting_hand_size: usize,

    /// Fewest players `start_game` accepts.
    pub min_players: usize,

    /// Most players `start_game` accepts.
    pub max_players: usize,

    /// Turns a `block_mood` lasts. A fresh block overwrites, never adds.
    pub block_turns: u32,

    /// Hand limit: the table driver refuses draws once a hand reaches it.
    pub max_hand_size: usize,

    /// Whether the driver reshuffles the discard pile into an empty deck.
    pub reshuffle_discard: bool,

    /// Seed for every random decision in the game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            composition: DeckComposition::default(),
            starting_hand_size: 5,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            block_turns: 2,
            max_hand_size: 10,
            reshuffle_discard: true,
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Set the deck composition.
    #[must_use]
    pub fn with_composition(mut self, composition: DeckComposition) -> Self {
        self.composition = composition;
        self
    }

    /// Set the starting hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the accepted player-count range.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the block duration.
    #[must_use]
    pub fn with_block_turns(mut self, turns: u32) -> Self {
        self.block_turns = turns;
        self
    }

    /// Set the hand limit.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Enable or disable reshuffling the discard pile into an empty deck.
    #[must_use]
    pub fn with_reshuffle_discard(mut self, enabled: bool) -> Self {
        self.reshuffle_discard = enabled;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check every field is within the range the rules support.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < MIN_PLAYERS
            || self.max_players > MAX_PLAYERS
            || self.min_players > self.max_players
        {
            return Err(ConfigError::PlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }

        if !(1..=10).contains(&self.starting_hand_size) {
            return Err(ConfigError::StartingHandSize(self.starting_hand_size));
        }

        if self.max_hand_size < self.starting_hand_size {
            return Err(ConfigError::MaxHandSize {
                max: self.max_hand_size,
                starting: self.starting_hand_size,
            });
        }

        if self.composition.total() == 0 {
            return Err(ConfigError::EmptyComposition);
        }

        if self.block_turns == 0 {
            return Err(ConfigError::BlockTurns);
        }

        Ok(())
    }
}
