//! The rules engine.
//!
//! `GameLogic` validates every request against the game phase, the turn
//! phase and the blocked state, mutates players, and reports an `Outcome`.
//! It never polls: callers check `check_win_condition` after each change and
//! call `end_game` themselves.

pub mod engine;
pub mod outcome;

pub use engine::GameLogic;
pub use outcome::{Outcome, PendingSelection};
