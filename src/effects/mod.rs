//! Swing-card effects.
//!
//! - `EffectResolver`: applies a swing card's immediate effect to players
//! - `FollowUp`: selection the actor still owes (wild nomination, forced discard)
//! - `TargetFilter` / `TargetSelector`: which seats a swing card may aim at
//!
//! The resolver works on player state only. Card custody and turn flow stay
//! with the rules engine.

mod resolver;
mod targeting;

pub use resolver::{EffectOutcome, EffectResolver, FollowUp};
pub use targeting::{TargetFilter, TargetSelector, Targets};
