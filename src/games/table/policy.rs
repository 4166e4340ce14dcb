//! Decision policies for automated seats.
//!
//! A policy only ever picks from `GameLogic::legal_actions`, so it cannot
//! bypass a legality check. `RandomPolicy` picks uniformly;
//! `PriorityPolicy` plays by a fixed card ranking.

use crate::cards::{CardKind, Mood, SwingKind};
use crate::core::{Action, GameRng, PlayerId, TurnPhase};
use crate::effects::{TargetFilter, TargetSelector};
use crate::players::Player;
use crate::rules::{GameLogic, PendingSelection};

/// Chooses the next action for an automated seat.
pub trait PlayerPolicy {
    /// Pick an action for `player`.
    ///
    /// Returns `None` if `player` has nothing to do right now.
    fn choose_action(&mut self, engine: &GameLogic, player: PlayerId, rng: &mut GameRng) -> Option<Action>;
}

/// Uniform choice among legal actions.
///
/// Advancing the phase is only chosen when nothing else is legal, so the
/// policy always draws, plays and discards when it can.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl PlayerPolicy for RandomPolicy {
    fn choose_action(&mut self, engine: &GameLogic, player: PlayerId, rng: &mut GameRng) -> Option<Action> {
        let actions = engine.legal_actions(player);
        let doing: Vec<Action> = actions
            .iter()
            .copied()
            .filter(|a| *a != Action::AdvancePhase)
            .collect();
        if doing.is_empty() {
            return actions.first().copied();
        }
        rng.choose(&doing).copied()
    }
}

/// Fixed-preference play.
///
/// Card ranking, best first: wild mood, a mood not yet collected, steal,
/// swap, block, double trouble. Duplicate moods are never played and are the
/// first to go in the discard phase. Targeted cards aim at the opponent with
/// the most collected moods among those the card would affect.
#[derive(Clone, Debug, Default)]
pub struct PriorityPolicy;

impl PriorityPolicy {
    fn rank(seat: &Player, kind: CardKind) -> u8 {
        match kind {
            CardKind::Swing(SwingKind::WildMood) => 0,
            CardKind::Mood(mood) if !seat.has_mood(mood) => 1,
            CardKind::Swing(SwingKind::StealMood) => 2,
            CardKind::Swing(SwingKind::SwapHands) => 3,
            CardKind::Swing(SwingKind::BlockMood) => 4,
            CardKind::Swing(SwingKind::DoubleTrouble) => 5,
            CardKind::Mood(_) => 6,
        }
    }

    fn candidate(engine: &GameLogic, player: PlayerId, card_index: usize, kind: CardKind) -> Option<Action> {
        match kind {
            CardKind::Mood(_) => Some(Action::PlayMood { card_index }),
            CardKind::Swing(kind) if kind.needs_target() => {
                let seats = engine.seats()?;
                let useful = TargetSelector::filtered(player, TargetFilter::useful_for(kind), seats);
                let target = useful
                    .iter()
                    .copied()
                    .max_by_key(|&t| (seats.get(t).map_or(0, Player::unique_mood_count), std::cmp::Reverse(t)))?;
                Some(Action::PlaySwing {
                    card_index,
                    target: Some(target),
                })
            }
            CardKind::Swing(_) => Some(Action::PlaySwing {
                card_index,
                target: None,
            }),
        }
    }

    fn best_play(engine: &GameLogic, player: PlayerId, seat: &Player, legal: &[Action]) -> Option<Action> {
        let mut ranked: Vec<(u8, usize, CardKind)> = seat
            .hand()
            .iter()
            .enumerate()
            .map(|(i, card)| (Self::rank(seat, card.kind()), i, card.kind()))
            .filter(|&(rank, _, _)| rank < 6)
            .collect();
        ranked.sort_by_key(|&(rank, i, _)| (rank, i));

        ranked
            .into_iter()
            .filter_map(|(_, i, kind)| Self::candidate(engine, player, i, kind))
            .find(|action| legal.contains(action))
    }

    fn worst_card(seat: &Player) -> Option<Action> {
        seat.hand()
            .iter()
            .enumerate()
            .max_by_key(|&(i, card)| (Self::rank(seat, card.kind()), std::cmp::Reverse(i)))
            .map(|(card_index, _)| Action::Discard { card_index })
    }
}

impl PlayerPolicy for PriorityPolicy {
    fn choose_action(&mut self, engine: &GameLogic, player: PlayerId, _rng: &mut GameRng) -> Option<Action> {
        let legal = engine.legal_actions(player);
        if legal.is_empty() {
            return None;
        }
        let seat = engine.player(player)?;

        match engine.pending() {
            Some(PendingSelection::WildNomination { .. }) => {
                let mood = seat.missing_moods().first().copied().unwrap_or(Mood::Silly);
                return Some(Action::NominateWild { mood });
            }
            Some(PendingSelection::ForcedDiscard { .. }) => return legal.first().copied(),
            None => {}
        }

        match engine.turn_phase() {
            TurnPhase::Draw => Some(Action::Draw),
            TurnPhase::Play => Self::best_play(engine, player, seat, &legal).or(Some(Action::AdvancePhase)),
            TurnPhase::Discard => Self::worst_card(seat).or(Some(Action::AdvancePhase)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardFactory;
    use crate::core::GameConfig;

    const A: PlayerId = PlayerId(0);
    const B: PlayerId = PlayerId(1);
    const C: PlayerId = PlayerId(2);

    fn engine_in_play(a: Player, others: Vec<Player>) -> GameLogic {
        let mut players = vec![a];
        players.extend(others);
        let mut engine = GameLogic::new(GameConfig::default());
        engine.start_game(players).unwrap();
        engine.advance_phase();
        engine
    }

    #[test]
    fn test_random_policy_only_picks_legal_actions() {
        let mut factory = CardFactory::new();
        let mut a = Player::automated("A");
        a.add_to_hand(factory.make_mood_card(Mood::Sad));
        a.add_to_hand(factory.make_swing_card(SwingKind::SwapHands));
        let engine = engine_in_play(a, vec![Player::new("B")]);
        let legal = engine.legal_actions(A);

        let mut rng = GameRng::new(11);
        for _ in 0..20 {
            let action = RandomPolicy.choose_action(&engine, A, &mut rng).unwrap();
            assert!(legal.contains(&action));
            assert_ne!(action, Action::AdvancePhase);
        }
        assert_eq!(RandomPolicy.choose_action(&engine, B, &mut rng), None);
    }

    #[test]
    fn test_priority_prefers_wild_then_new_mood() {
        let mut factory = CardFactory::new();
        let mut a = Player::automated("A");
        a.collect_mood(factory.make_mood_card(Mood::Sad)).unwrap();
        a.add_to_hand(factory.make_mood_card(Mood::Sad));
        a.add_to_hand(factory.make_mood_card(Mood::Happy));
        a.add_to_hand(factory.make_swing_card(SwingKind::WildMood));
        let engine = engine_in_play(a, vec![Player::new("B")]);
        let mut rng = GameRng::new(0);

        assert_eq!(
            PriorityPolicy.choose_action(&engine, A, &mut rng),
            Some(Action::PlaySwing { card_index: 2, target: None })
        );

        let mut a = Player::automated("A");
        a.collect_mood(factory.make_mood_card(Mood::Sad)).unwrap();
        a.add_to_hand(factory.make_mood_card(Mood::Sad));
        a.add_to_hand(factory.make_mood_card(Mood::Happy));
        let engine = engine_in_play(a, vec![Player::new("B")]);
        assert_eq!(
            PriorityPolicy.choose_action(&engine, A, &mut rng),
            Some(Action::PlayMood { card_index: 1 })
        );
    }

    #[test]
    fn test_priority_targets_the_leader() {
        let mut factory = CardFactory::new();
        let mut a = Player::automated("A");
        a.add_to_hand(factory.make_swing_card(SwingKind::BlockMood));
        let mut b = Player::new("B");
        b.collect_mood(factory.make_mood_card(Mood::Sad)).unwrap();
        let mut c = Player::new("C");
        c.collect_mood(factory.make_mood_card(Mood::Sad)).unwrap();
        c.collect_mood(factory.make_mood_card(Mood::Angry)).unwrap();
        let engine = engine_in_play(a, vec![b, c]);

        assert_eq!(
            PriorityPolicy.choose_action(&engine, A, &mut GameRng::new(0)),
            Some(Action::PlaySwing { card_index: 0, target: Some(C) })
        );
    }

    #[test]
    fn test_priority_skips_useless_steal() {
        let mut factory = CardFactory::new();
        let mut a = Player::automated("A");
        a.add_to_hand(factory.make_swing_card(SwingKind::StealMood));
        let engine = engine_in_play(a, vec![Player::new("B"), Player::new("C")]);

        assert_eq!(
            PriorityPolicy.choose_action(&engine, A, &mut GameRng::new(0)),
            Some(Action::AdvancePhase)
        );
    }

    #[test]
    fn test_priority_discards_duplicates_first() {
        let mut factory = CardFactory::new();
        let mut seat = Player::automated("A");
        seat.collect_mood(factory.make_mood_card(Mood::Angry)).unwrap();
        seat.add_to_hand(factory.make_swing_card(SwingKind::StealMood));
        seat.add_to_hand(factory.make_mood_card(Mood::Angry));
        seat.add_to_hand(factory.make_mood_card(Mood::Happy));

        assert_eq!(
            PriorityPolicy::worst_card(&seat),
            Some(Action::Discard { card_index: 1 })
        );
    }
}
