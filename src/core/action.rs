//! Action representation and history records.
//!
//! An `Action` is everything a player (human or automated) can ask the
//! engine to do. Drivers enumerate them with `GameLogic::legal_actions` and
//! submit them with `GameLogic::apply_action`; the engine records each one
//! it accepts as an `ActionRecord`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::Mood;

/// A single player request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Take the top card of the deck.
    Draw,
    /// Collect the mood card at `card_index`.
    PlayMood { card_index: usize },
    /// Play the swing card at `card_index`, optionally at a target.
    PlaySwing {
        card_index: usize,
        target: Option<PlayerId>,
    },
    /// Put the card at `card_index` on the discard pile and end the turn.
    Discard { card_index: usize },
    /// Name the category a pending wild mood stands for.
    NominateWild { mood: Mood },
    /// Pick which mood the double-trouble target must give up.
    ForceDiscard { mood: Mood },
    /// Move to the next turn phase (ending the turn from discard).
    AdvancePhase,
}

impl Action {
    /// Whether this action uses a card from the acting player's hand.
    #[must_use]
    pub fn card_index(&self) -> Option<usize> {
        match *self {
            Action::PlayMood { card_index }
            | Action::PlaySwing { card_index, .. }
            | Action::Discard { card_index } => Some(card_index),
            Action::Draw
            | Action::NominateWild { .. }
            | Action::ForceDiscard { .. }
            | Action::AdvancePhase => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
