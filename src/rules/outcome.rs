//! Results of turn-mutating engine calls.

use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::PlayerId;

/// A choice the engine is waiting on before the current play completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PendingSelection {
    /// `actor` must name the category their wild card counts as.
    WildNomination { actor: PlayerId, card: CardId },
    /// `actor` must pick which of `target`'s moods is discarded.
    ForcedDiscard { actor: PlayerId, target: PlayerId },
}

impl PendingSelection {
    /// The player who has to answer.
    #[must_use]
    pub const fn actor(&self) -> PlayerId {
        match *self {
            PendingSelection::WildNomination { actor, .. } => actor,
            PendingSelection::ForcedDiscard { actor, .. } => actor,
        }
    }
}

/// What a turn-mutating call did.
///
/// `success == false` means a game condition refused the action and nothing
/// changed. Cards the engine let go of travel in `released`; the caller puts
/// them on the discard pile.
#[derive(Debug, Default)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    pub released: SmallVec<[Card; 2]>,
    pub pending: Option<PendingSelection>,
}

impl Outcome {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_released(mut self, card: Card) -> Self {
        self.released.push(card);
        self
    }

    #[must_use]
    pub fn with_pending(mut self, pending: Option<PendingSelection>) -> Self {
        self.pending = pending;
        self
    }

    /// Take over the cards released by a follow-on step.
    pub fn absorb(&mut self, other: Outcome) {
        self.released.extend(other.released);
    }

    /// Drain released cards.
    pub fn take_released(&mut self) -> SmallVec<[Card; 2]> {
        std::mem::take(&mut self.released)
    }
}
