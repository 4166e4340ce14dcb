//! Game lifecycle and per-turn phases.

use serde::{Deserialize, Serialize};

/// Engine lifecycle stage.
///
/// `Setup -> Playing -> GameOver`, and back to `Setup` on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Setup,
    Playing,
    GameOver,
}

/// Stage within a single player's turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    #[default]
    Draw,
    Play,
    Discard,
}

impl TurnPhase {
    /// Phase that follows this one within the same turn.
    ///
    /// `Discard` has no successor: leaving it ends the turn.
    #[must_use]
    pub const fn next(self) -> Option<TurnPhase> {
        match self {
            TurnPhase::Draw => Some(TurnPhase::Play),
            TurnPhase::Play => Some(TurnPhase::Discard),
            TurnPhase::Discard => None,
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GamePhase::Setup => "setup",
            GamePhase::Playing => "playing",
            GamePhase::GameOver => "game_over",
        })
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TurnPhase::Draw => "draw",
            TurnPhase::Play => "play",
            TurnPhase::Discard => "discard",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_phase_order() {
        assert_eq!(TurnPhase::default(), TurnPhase::Draw);
        assert_eq!(TurnPhase::Draw.next(), Some(TurnPhase::Play));
        assert_eq!(TurnPhase::Play.next(), Some(TurnPhase::Discard));
        assert_eq!(TurnPhase::Discard.next(), None);
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(GamePhase::GameOver.to_string(), "game_over");
        assert_eq!(serde_json::to_string(&GamePhase::GameOver).unwrap(), "\"game_over\"");
        assert_eq!(TurnPhase::Discard.to_string(), "discard");
    }
}
