//! Card system: kinds and physical instances.
//!
//! ## Key Types
//!
//! - `Mood`, `SwingKind`: the five categories and the five special actions
//! - `CardKind`: tagged union the rules engine dispatches on
//! - `Card`: one physical card (identity + kind), move-only
//! - `CardFactory`: allocates card identities

pub mod definition;
pub mod instance;

pub use definition::{CardKind, Mood, SwingKind};
pub use instance::{Card, CardFactory, CardId};
