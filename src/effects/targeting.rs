//! Swing-card targeting.
//!
//! - `TargetFilter`: which seats a swing kind may aim at
//! - `TargetSelector`: enumerates and ranks candidate targets

use smallvec::SmallVec;

use crate::cards::SwingKind;
use crate::core::{PlayerId, PlayerMap};
use crate::players::Player;

/// Candidate targets; tables never exceed six seats.
pub type Targets = SmallVec<[PlayerId; 8]>;

/// Filters for valid targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetFilter {
    /// No target is taken.
    NoTarget,
    /// Any seat except the actor.
    Opponent,
    /// An opponent holding at least one card.
    OpponentWithCards,
    /// An opponent with at least one collected mood.
    OpponentWithMoods,
}

impl TargetFilter {
    /// Filter that picks targets where the effect of `kind` would apply.
    #[must_use]
    pub const fn useful_for(kind: SwingKind) -> Self {
        match kind {
            SwingKind::WildMood => TargetFilter::NoTarget,
            SwingKind::StealMood => TargetFilter::OpponentWithCards,
            SwingKind::DoubleTrouble => TargetFilter::OpponentWithMoods,
            SwingKind::SwapHands | SwingKind::BlockMood => TargetFilter::Opponent,
        }
    }

    /// Check whether `candidate` passes this filter for `actor`.
    #[must_use]
    pub fn matches(self, actor: PlayerId, candidate: PlayerId, players: &PlayerMap<Player>) -> bool {
        if candidate == actor {
            return false;
        }
        let Some(player) = players.get(candidate) else {
            return false;
        };
        match self {
            TargetFilter::NoTarget => false,
            TargetFilter::Opponent => true,
            TargetFilter::OpponentWithCards => player.hand_size() > 0,
            TargetFilter::OpponentWithMoods => !player.collected().is_empty(),
        }
    }
}

/// Target enumeration.
pub struct TargetSelector;

impl TargetSelector {
    /// Every seat other than `actor`, in turn order.
    #[must_use]
    pub fn legal_targets(actor: PlayerId, players: &PlayerMap<Player>) -> Targets {
        Self::filtered(actor, TargetFilter::Opponent, players)
    }

    /// Seats passing `filter`, in turn order.
    #[must_use]
    pub fn filtered(actor: PlayerId, filter: TargetFilter, players: &PlayerMap<Player>) -> Targets {
        players
            .player_ids()
            .filter(|&p| filter.matches(actor, p, players))
            .collect()
    }

    /// The opponent with the most distinct collected moods.
    ///
    /// Ties go to the seat that comes first in turn order.
    #[must_use]
    pub fn leader(actor: PlayerId, players: &PlayerMap<Player>) -> Option<PlayerId> {
        let mut best: Option<(PlayerId, usize)> = None;
        for (id, player) in players.iter() {
            if id == actor {
                continue;
            }
            let count = player.unique_mood_count();
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((id, count));
            }
        }
        best.map(|(id, _)| id)
    }
}
