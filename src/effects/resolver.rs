//! Swing-card effect resolution.
//!
//! `EffectResolver::execute_swing_effect` applies the immediate part of a
//! swing card to the players. It never touches the swing card itself: the
//! engine has already taken it out of the actor's hand and decides where it
//! goes based on the returned `FollowUp`.

use tracing::debug;

use crate::cards::SwingKind;
use crate::core::{GameRng, PlayerId, PlayerMap};
use crate::players::Player;

/// A selection the caller must make before the effect is complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// The actor names the category the wild card stands for.
    WildNomination,
    /// The actor picks a mood the target must give up.
    ForcedDiscard { target: PlayerId },
}

/// Result of resolving a swing card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectOutcome {
    /// Narration for the players.
    pub message: String,
    /// Whether the narrated effect changed anything.
    pub applied: bool,
    /// Selection still owed by the caller.
    pub follow_up: Option<FollowUp>,
}

impl EffectOutcome {
    fn applied(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: true,
            follow_up: None,
        }
    }

    fn no_op(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            applied: false,
            follow_up: None,
        }
    }

    fn awaiting(message: impl Into<String>, follow_up: FollowUp) -> Self {
        Self {
            message: message.into(),
            applied: true,
            follow_up: Some(follow_up),
        }
    }
}

/// Resolves swing effects on player state.
pub struct EffectResolver;

impl EffectResolver {
    /// Apply `kind` played by `actor` at `target`.
    ///
    /// `target` must already be a seat in `players` and different from
    /// `actor`; `None` means no target was selected. Effects whose
    /// precondition fails narrate why and change nothing.
    pub fn execute_swing_effect(
        kind: SwingKind,
        actor: PlayerId,
        target: Option<PlayerId>,
        players: &mut PlayerMap<Player>,
        rng: &mut GameRng,
        block_turns: u32,
    ) -> EffectOutcome {
        let outcome = match kind {
            SwingKind::StealMood => Self::steal(actor, target, players, rng),
            SwingKind::SwapHands => Self::swap(actor, target, players),
            SwingKind::BlockMood => Self::block(target, players, block_turns),
            SwingKind::DoubleTrouble => Self::double_trouble(target, players),
            SwingKind::WildMood => EffectOutcome::awaiting(
                "Wild mood! Choose any mood type to collect!",
                FollowUp::WildNomination,
            ),
        };

        debug!(
            kind = kind.name(),
            actor = actor.0,
            target = target.map(|t| t.0),
            applied = outcome.applied,
            "swing effect resolved"
        );
        outcome
    }

    fn steal(
        actor: PlayerId,
        target: Option<PlayerId>,
        players: &mut PlayerMap<Player>,
        rng: &mut GameRng,
    ) -> EffectOutcome {
        let Some((thief, victim)) = target.and_then(|t| players.pair_mut(actor, t)) else {
            return EffectOutcome::no_op("No cards to steal!");
        };

        let Some(index) = rng.choose_index(victim.hand_size()) else {
            return EffectOutcome::no_op("No cards to steal!");
        };

        match victim.remove_from_hand(index) {
            Ok(card) => {
                let message = format!("Stole {} from {}!", card.name(), victim.name());
                thief.add_to_hand(card);
                EffectOutcome::applied(message)
            }
            Err(_) => EffectOutcome::no_op("No cards to steal!"),
        }
    }

    fn swap(
        actor: PlayerId,
        target: Option<PlayerId>,
        players: &mut PlayerMap<Player>,
    ) -> EffectOutcome {
        let Some((a, b)) = target.and_then(|t| players.pair_mut(actor, t)) else {
            return EffectOutcome::no_op("No target player selected!");
        };

        let a_hand = a.take_hand();
        let b_hand = b.replace_hand(a_hand);
        a.replace_hand(b_hand);
        EffectOutcome::applied(format!("Swapped hands with {}!", b.name()))
    }

    fn block(
        target: Option<PlayerId>,
        players: &mut PlayerMap<Player>,
        block_turns: u32,
    ) -> EffectOutcome {
        let Some(victim) = target.and_then(|t| players.get_mut(t)) else {
            return EffectOutcome::no_op("No target player selected!");
        };

        victim.block_for(block_turns);
        EffectOutcome::applied(format!(
            "Blocked {} from stealing/discarding for {} turns!",
            victim.name(),
            block_turns
        ))
    }

    fn double_trouble(target: Option<PlayerId>, players: &PlayerMap<Player>) -> EffectOutcome {
        let Some((target, victim)) = target.and_then(|t| players.get(t).map(|p| (t, p))) else {
            return EffectOutcome::no_op("No target player selected!");
        };

        if victim.collected().is_empty() {
            return EffectOutcome::no_op(format!(
                "Double trouble! {} has no moods to discard.",
                victim.name()
            ));
        }

        EffectOutcome::awaiting(
            format!(
                "Double trouble! {} must discard a mood of your choice!",
                victim.name()
            ),
            FollowUp::ForcedDiscard { target },
        )
    }
}
