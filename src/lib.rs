//! # flip-out
//!
//! Rules engine for *Flip Out!*, a turn-based card game in which players
//! collect one card of each of five moods while swing cards let them steal,
//! swap, block and otherwise disrupt each other.
//!
//! ## Design Principles
//!
//! 1. **Cards move, never copy**: every physical card has a `CardId` and is
//!    owned by exactly one place at a time (deck, hand, collection, discard
//!    pile). The engine hands back every card it lets go of.
//!
//! 2. **Game conditions are not errors**: an empty deck or a blocked steal
//!    is an `Outcome` with `success == false`. Only caller bugs are `Err`.
//!
//! 3. **Configuration over globals**: `GameConfig` is passed in; nothing is
//!    read from process-wide state, and every random choice comes from a
//!    seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, phases, actions, snapshots, errors
//! - `cards`: moods, swing kinds and identity-bearing card instances
//! - `zones`: the draw deck and the discard pile
//! - `players`: hands, collected moods and blocks
//! - `effects`: swing-card effect resolution and targeting
//! - `rules`: the `GameLogic` state machine
//! - `games`: the reference `Table` driver and automated policies

pub mod cards;
pub mod core;
pub mod effects;
pub mod games;
pub mod players;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, ContractViolation, DeckComposition, GameConfig, GamePhase,
    GameRng, GameRngState, GameSnapshot, PlayerId, PlayerMap, TurnPhase,
};

pub use crate::cards::{Card, CardFactory, CardId, CardKind, Mood, SwingKind};

pub use crate::zones::{Deck, DiscardPile, EmptyDeck, ZonePosition};

pub use crate::players::{CollectedMood, Player, PlayerSnapshot};

pub use crate::effects::{EffectOutcome, EffectResolver, FollowUp, TargetFilter, TargetSelector};

pub use crate::rules::{GameLogic, Outcome, PendingSelection};

pub use crate::games::table::{PlayerPolicy, PriorityPolicy, RandomPolicy, Table, TableBuilder, TableError};
