//! Core engine types: players, RNG, configuration, phases, actions, state
//! projection and errors.
//!
//! Nothing here knows the rules of the game. `rules::GameLogic` combines
//! these pieces with the card and player types.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{DeckComposition, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, ContractViolation};
pub use phase::{GamePhase, TurnPhase};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::GameSnapshot;
