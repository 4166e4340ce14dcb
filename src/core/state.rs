//! Read-only game state projection.
//!
//! `GameSnapshot` is what a renderer or a log sees. It holds owned data only,
//! never references into the engine, so it can outlive the call that built it
//! and be serialized as is.

use serde::Serialize;

use super::phase::{GamePhase, TurnPhase};
use crate::players::PlayerSnapshot;
use crate::rules::PendingSelection;

/// Complete public view of a game at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub turn_phase: TurnPhase,
    /// Starts at 1 on `start_game`; 0 before.
    pub turn_number: u32,
    pub current_player_name: Option<String>,
    pub winner_name: Option<String>,
    pub pending: Option<PendingSelection>,
    /// In turn order.
    pub players: Vec<PlayerSnapshot>,
}

impl GameSnapshot {
    /// Snapshot of an engine with no players seated.
    #[must_use]
    pub fn empty(phase: GamePhase) -> Self {
        Self {
            phase,
            turn_phase: TurnPhase::default(),
            turn_number: 0,
            current_player_name: None,
            winner_name: None,
            pending: None,
            players: Vec::new(),
        }
    }

    /// Whether the snapshot shows a finished game.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
