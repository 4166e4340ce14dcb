//! Error taxonomy.
//!
//! Two kinds of failure exist:
//!
//! - **Game conditions** (empty deck, blocked player, missing target) are not
//!   errors. They come back as `Ok(Outcome)` with `success == false` and a
//!   short message for the player.
//! - **Contract violations** are bugs in the calling layer: an out-of-range
//!   hand index, an unknown card name, a player id that does not exist.
//!   These come back as `Err(ContractViolation)` and must never be shown to
//!   the player as a game message.

use thiserror::Error;

use super::player::PlayerId;

/// A caller broke the engine's calling contract.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("hand index {index} out of range for a hand of {len} cards")]
    HandIndexOutOfRange { index: usize, len: usize },

    #[error("unknown mood category `{0}`")]
    UnknownMood(String),

    #[error("unknown swing card kind `{0}`")]
    UnknownSwingKind(String),

    #[error("{0} does not exist in this game")]
    NoSuchPlayer(PlayerId),

    #[error("a game needs {min}..={max} players, got {count}")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },

    #[error("no selection is pending")]
    NoPendingSelection,

    #[error("the pending selection belongs to a different player or effect")]
    WrongPendingSelection,

    #[error("card has the wrong kind for this operation")]
    WrongCardKind,

    #[error("a game is already in progress; reset it first")]
    GameInProgress,

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Invalid game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player bounds {min}..={max} must lie within 2..=6")]
    PlayerBounds { min: usize, max: usize },

    #[error("starting hand size must be between 1 and 10, got {0}")]
    StartingHandSize(usize),

    #[error("max hand size {max} is smaller than the starting hand size {starting}")]
    MaxHandSize { max: usize, starting: usize },

    #[error("deck composition has no cards")]
    EmptyComposition,

    #[error("block duration must be at least one turn")]
    BlockTurns,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violation_messages() {
        let err = ContractViolation::HandIndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "hand index 7 out of range for a hand of 3 cards");

        let err = ContractViolation::NoSuchPlayer(PlayerId::new(4));
        assert_eq!(err.to_string(), "Player 4 does not exist in this game");

        let err = ContractViolation::UnknownMood("grumpy".to_string());
        assert!(err.to_string().contains("grumpy"));

        let err = ContractViolation::from(ConfigError::BlockTurns);
        assert_eq!(
            err.to_string(),
            "invalid configuration: block duration must be at least one turn"
        );
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::StartingHandSize(0).to_string(),
            "starting hand size must be between 1 and 10, got 0"
        );
    }
}
