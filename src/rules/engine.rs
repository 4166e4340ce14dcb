//! The rules engine.
//!
//! `GameLogic` owns the seated players, the turn order and the turn phase.
//! It does not own the deck or the discard pile: `draw_card` borrows the
//! deck for one call, and every card the engine lets go of comes back in
//! `Outcome::released` for the caller to place.
//!
//! ## Call results
//!
//! - `Ok(outcome)` with `outcome.success == false`: a game condition refused
//!   the action and nothing changed.
//! - `Err(ContractViolation)`: the caller passed a bad index, an unknown
//!   seat or answered a selection that was never asked.

use im::Vector;
use tracing::{debug, info};

use super::outcome::{Outcome, PendingSelection};
use crate::cards::{Card, CardKind, Mood};
use crate::core::{
    Action, ActionRecord, ContractViolation, GameConfig, GamePhase, GameRng, GameRngState,
    GameSnapshot, PlayerId, PlayerMap, TurnPhase,
};
use crate::effects::{EffectResolver, FollowUp, TargetSelector};
use crate::players::Player;
use crate::zones::Deck;

/// An open selection plus the card it keeps out of play.
#[derive(Debug)]
struct HeldSelection {
    selection: PendingSelection,
    card: Option<Card>,
}

/// Turn/phase state machine and effect dispatcher.
///
/// ```
/// use flip_out::cards::{CardFactory, Mood};
/// use flip_out::core::{GameConfig, PlayerId};
/// use flip_out::players::Player;
/// use flip_out::rules::GameLogic;
/// use flip_out::zones::Deck;
///
/// let mut factory = CardFactory::new();
/// let mut deck = Deck::from_cards(vec![factory.make_mood_card(Mood::Happy)]);
/// let mut engine = GameLogic::new(GameConfig::default());
/// engine
///     .start_game(vec![Player::new("Ada"), Player::new("Bo")])
///     .unwrap();
///
/// let ada = PlayerId::new(0);
/// assert!(engine.draw_card(ada, &mut deck).unwrap().success);
/// let outcome = engine.play_mood_card(ada, 0).unwrap();
/// assert_eq!(outcome.message, "Played happy mood card");
/// assert!(engine.player(ada).unwrap().has_mood(Mood::Happy));
/// ```
#[derive(Debug)]
pub struct GameLogic {
    config: GameConfig,
    phase: GamePhase,
    turn_phase: TurnPhase,
    players: Option<PlayerMap<Player>>,
    turn_order: Vec<PlayerId>,
    current_turn_index: usize,
    turn_number: u32,
    action_sequence: u32,
    winner: Option<PlayerId>,
    pending: Option<HeldSelection>,
    history: Vector<ActionRecord>,
    rng: GameRng,
}

impl GameLogic {
    /// Create an engine in `Setup` with no players seated.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = GameRng::new(config.seed).for_context("steal");
        Self {
            config,
            phase: GamePhase::Setup,
            turn_phase: TurnPhase::Draw,
            players: None,
            turn_order: Vec::new(),
            current_turn_index: 0,
            turn_number: 0,
            action_sequence: 0,
            winner: None,
            pending: None,
            history: Vector::new(),
            rng,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Lifecycle ===

    /// Seat `players` in the given order and begin the first turn.
    ///
    /// Players keep whatever hands, collections and blocks they arrive with.
    /// The configuration is validated here, before any seat is built.
    pub fn start_game(&mut self, players: Vec<Player>) -> Result<(), ContractViolation> {
        if self.phase != GamePhase::Setup {
            return Err(ContractViolation::GameInProgress);
        }
        self.config.validate()?;
        let count = players.len();
        if count < self.config.min_players || count > self.config.max_players {
            return Err(ContractViolation::InvalidPlayerCount {
                count,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }

        let players = PlayerMap::from_vec(players);
        self.turn_order = players.player_ids().collect();
        self.players = Some(players);
        self.current_turn_index = 0;
        self.turn_phase = TurnPhase::Draw;
        self.turn_number = 1;
        self.action_sequence = 0;
        self.winner = None;
        self.pending = None;
        self.history = Vector::new();
        self.phase = GamePhase::Playing;

        info!(
            players = count,
            first = self.current_player().map(Player::name),
            "game started"
        );
        Ok(())
    }

    /// Freeze the game with `winner` as the winner.
    ///
    /// A wild card held by an open selection is released. Only a running
    /// game can end; otherwise the usual rejection comes back.
    pub fn end_game(&mut self, winner: PlayerId) -> Result<Outcome, ContractViolation> {
        if let Some(rejection) = self.not_playing() {
            return Ok(rejection);
        }
        let name = self.seat(winner)?.name().to_owned();
        let mut outcome = Outcome::ok(format!("{name} wins!"));
        if let Some(card) = self.cancel_pending() {
            outcome.released.push(card);
        }
        self.phase = GamePhase::GameOver;
        self.winner = Some(winner);
        info!(winner = %name, turn = self.turn_number, "game over");
        Ok(outcome)
    }

    /// Return to `Setup` and hand the seated players back.
    ///
    /// A wild card still waiting for its nomination goes back into the hand
    /// of the player who played it. Clearing hands and collections is up to
    /// the caller.
    pub fn reset_game(&mut self) -> Vec<Player> {
        let held = self.pending.take();
        let mut players = self.players.take();

        if let (Some(HeldSelection { selection, card: Some(card) }), Some(map)) =
            (held, players.as_mut())
        {
            if let Some(owner) = map.get_mut(selection.actor()) {
                owner.add_to_hand(card);
            }
        }

        self.phase = GamePhase::Setup;
        self.turn_phase = TurnPhase::Draw;
        self.turn_order.clear();
        self.current_turn_index = 0;
        self.turn_number = 0;
        self.action_sequence = 0;
        self.winner = None;
        self.history = Vector::new();
        info!("game reset");

        players.map(PlayerMap::into_vec).unwrap_or_default()
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        self.turn_phase
    }

    /// Starts at 1 and counts every turn, not rounds.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        if self.phase == GamePhase::Setup {
            return None;
        }
        self.turn_order.get(self.current_turn_index).copied()
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player_id().and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.as_ref().and_then(|m| m.get(id))
    }

    /// Seated players in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter().flat_map(|m| m.iter())
    }

    /// Read-only seat map, for target selection.
    #[must_use]
    pub fn seats(&self) -> Option<&PlayerMap<Player>> {
        self.players.as_ref()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.as_ref().map_or(0, PlayerMap::player_count)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingSelection> {
        self.pending.as_ref().map(|h| h.selection)
    }

    /// Every accepted action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Position of the steal stream, for replays.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Whether `player` holds or wild-credits all five categories.
    #[must_use]
    pub fn check_win_condition(&self, player: PlayerId) -> bool {
        self.player(player).is_some_and(Player::is_winner)
    }

    /// Card legality for `player` at `card_index`, ignoring whose turn it is.
    ///
    /// An out-of-range index or unknown seat is simply not playable.
    #[must_use]
    pub fn can_play_card(&self, player: PlayerId, card_index: usize) -> bool {
        self.player(player)
            .is_some_and(|seat| Self::playable(seat, card_index))
    }

    fn playable(seat: &Player, card_index: usize) -> bool {
        match seat.hand().get(card_index).map(Card::kind) {
            None => false,
            Some(CardKind::Mood(_)) => true,
            Some(CardKind::Swing(kind)) => !(kind.barred_while_blocked() && seat.is_blocked()),
        }
    }

    /// Owned projection of the whole game for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let Some(players) = self.players.as_ref() else {
            return GameSnapshot::empty(self.phase);
        };
        GameSnapshot {
            phase: self.phase,
            turn_phase: self.turn_phase,
            turn_number: self.turn_number,
            current_player_name: self.current_player().map(|p| p.name().to_owned()),
            winner_name: self
                .winner
                .and_then(|w| players.get(w))
                .map(|p| p.name().to_owned()),
            pending: self.pending(),
            players: self
                .turn_order
                .iter()
                .filter_map(|&id| players.get(id))
                .map(Player::snapshot)
                .collect(),
        }
    }

    /// Actions `player` may submit right now.
    ///
    /// Empty when it is not their turn or the game is not running.
    #[must_use]
    pub fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if self.phase != GamePhase::Playing || self.current_player_id() != Some(player) {
            return Vec::new();
        }
        let (Some(players), Some(seat)) = (self.players.as_ref(), self.player(player)) else {
            return Vec::new();
        };

        if let Some(pending) = self.pending() {
            return match pending {
                PendingSelection::WildNomination { .. } => Mood::ALL
                    .iter()
                    .map(|&mood| Action::NominateWild { mood })
                    .collect(),
                PendingSelection::ForcedDiscard { target, .. } => {
                    let Some(victim) = players.get(target) else {
                        return Vec::new();
                    };
                    Mood::ALL
                        .iter()
                        .filter(|&&mood| victim.collected().iter().any(|c| c.mood() == mood))
                        .map(|&mood| Action::ForceDiscard { mood })
                        .collect()
                }
            };
        }

        let mut actions = Vec::new();
        match self.turn_phase {
            TurnPhase::Draw => actions.push(Action::Draw),
            TurnPhase::Play => {
                for (card_index, card) in seat.hand().iter().enumerate() {
                    if !Self::playable(seat, card_index) {
                        continue;
                    }
                    match card.kind() {
                        CardKind::Mood(_) => actions.push(Action::PlayMood { card_index }),
                        CardKind::Swing(kind) if kind.needs_target() => {
                            actions.extend(
                                TargetSelector::legal_targets(player, players)
                                    .into_iter()
                                    .map(|t| Action::PlaySwing {
                                        card_index,
                                        target: Some(t),
                                    }),
                            );
                        }
                        CardKind::Swing(_) => actions.push(Action::PlaySwing {
                            card_index,
                            target: None,
                        }),
                    }
                }
            }
            TurnPhase::Discard => {
                actions.extend((0..seat.hand_size()).map(|card_index| Action::Discard { card_index }));
            }
        }
        actions.push(Action::AdvancePhase);
        actions
    }

    // === Turn flow ===

    /// Pass the turn to the next seat and consume one of its block turns.
    ///
    /// Any open selection is cancelled first.
    pub fn next_turn(&mut self) -> Outcome {
        if let Some(rejection) = self.not_playing() {
            return rejection;
        }
        if self.turn_order.is_empty() {
            return Outcome::rejected("The game has not started");
        }

        let mut outcome = Outcome::ok(String::new());
        if let Some(card) = self.cancel_pending() {
            outcome.released.push(card);
        }

        self.current_turn_index = (self.current_turn_index + 1) % self.turn_order.len();
        self.turn_phase = TurnPhase::Draw;
        self.turn_number += 1;
        self.action_sequence = 0;

        let id = self.turn_order[self.current_turn_index];
        let turn = self.turn_number;
        if let Some(seat) = self.players.as_mut().and_then(|m| m.get_mut(id)) {
            if seat.consume_block_turn() {
                info!(player = %seat.name(), "no longer blocked");
            }
            debug!(turn, player = %seat.name(), blocked_turns = seat.blocked_turns(), "turn started");
            outcome.message = format!("It is {}'s turn", seat.name());
        }
        outcome
    }

    /// Move the current turn to its next phase.
    ///
    /// Leaving `Discard` ends the turn. Entering `Discard` with an empty
    /// hand ends it too. An open selection is cancelled and its held card
    /// released.
    pub fn advance_phase(&mut self) -> Outcome {
        if let Some(rejection) = self.not_playing() {
            return rejection;
        }
        let Some(actor) = self.current_player_id() else {
            return Outcome::rejected("The game has not started");
        };

        let held = self.cancel_pending();
        self.record(actor, Action::AdvancePhase);

        let mut outcome = match self.turn_phase.next() {
            Some(TurnPhase::Discard) => self.enter_discard(),
            Some(next) => {
                self.turn_phase = next;
                Outcome::ok(format!("Moved to the {next} phase"))
            }
            None => self.next_turn(),
        };
        if let Some(card) = held {
            outcome.released.push(card);
        }
        outcome
    }

    /// Move the deck's top card into `player`'s hand.
    ///
    /// Only in the `Draw` phase of `player`'s own turn. An empty deck is a
    /// rejected outcome and leaves the phase unchanged.
    pub fn draw_card(&mut self, player: PlayerId, deck: &mut Deck) -> Result<Outcome, ContractViolation> {
        if let Some(rejection) = self.gate(player, TurnPhase::Draw)? {
            return Ok(rejection);
        }

        let seat = self.seat_mut(player)?;
        let card = match deck.draw() {
            Ok(card) => card,
            Err(empty) => {
                debug!(player = %seat.name(), "draw from empty deck");
                return Ok(Outcome::rejected(empty.to_string()));
            }
        };
        let message = format!("Drew: {}", card.name());
        seat.add_to_hand(card);

        self.turn_phase = TurnPhase::Play;
        self.record(player, Action::Draw);
        Ok(Outcome::ok(message))
    }

    /// Collect the mood card at `card_index` for `player`.
    pub fn play_mood_card(&mut self, player: PlayerId, card_index: usize) -> Result<Outcome, ContractViolation> {
        if let Some(rejection) = self.gate(player, TurnPhase::Play)? {
            return Ok(rejection);
        }
        self.check_index(player, card_index)?;
        if !self.can_play_card(player, card_index) {
            return Ok(self.reject(player, "Cannot play this card"));
        }

        let seat = self.seat_mut(player)?;
        let Some(mood) = seat.hand()[card_index].mood() else {
            return Ok(Outcome::rejected("Not a mood card"));
        };
        let card = seat.remove_from_hand(card_index)?;
        if let Err(card) = seat.collect_mood(card) {
            seat.insert_into_hand(card_index, card);
            return Err(ContractViolation::WrongCardKind);
        }
        info!(player = %seat.name(), mood = mood.name(), moods = seat.unique_mood_count(), "mood collected");

        self.record(player, Action::PlayMood { card_index });
        let mut outcome = Outcome::ok(format!("Played {} mood card", mood.name()));
        let next = self.enter_discard();
        outcome.absorb(next);
        Ok(outcome)
    }

    /// Play the swing card at `card_index`, aimed at `target`.
    ///
    /// Once the card passes the legality gate it leaves the hand for good,
    /// even when the effect turns out to be a no-op. Aiming at yourself is
    /// the same as selecting no target.
    pub fn play_swing_card(
        &mut self,
        player: PlayerId,
        card_index: usize,
        target: Option<PlayerId>,
    ) -> Result<Outcome, ContractViolation> {
        if let Some(rejection) = self.gate(player, TurnPhase::Play)? {
            return Ok(rejection);
        }
        if let Some(t) = target {
            self.seat(t)?;
        }
        self.check_index(player, card_index)?;
        if !self.can_play_card(player, card_index) {
            return Ok(self.reject(player, "Cannot play this card"));
        }

        let seat = self.seat_mut(player)?;
        let Some(kind) = seat.hand()[card_index].swing() else {
            return Ok(Outcome::rejected("Not a swing card"));
        };
        let card = seat.remove_from_hand(card_index)?;

        let Some(players) = self.players.as_mut() else {
            return Err(ContractViolation::NoSuchPlayer(player));
        };
        let effect = EffectResolver::execute_swing_effect(
            kind,
            player,
            target.filter(|&t| t != player),
            players,
            &mut self.rng,
            self.config.block_turns,
        );
        info!(
            player = %player,
            kind = kind.name(),
            target = target.map(|t| t.0),
            message = %effect.message,
            "swing card played"
        );
        self.record(player, Action::PlaySwing { card_index, target });

        let mut outcome = Outcome::ok(effect.message);
        match effect.follow_up {
            Some(FollowUp::WildNomination) => {
                let selection = PendingSelection::WildNomination {
                    actor: player,
                    card: card.id(),
                };
                self.pending = Some(HeldSelection {
                    selection,
                    card: Some(card),
                });
                outcome.pending = Some(selection);
            }
            Some(FollowUp::ForcedDiscard { target }) => {
                let selection = PendingSelection::ForcedDiscard { actor: player, target };
                self.pending = Some(HeldSelection { selection, card: None });
                outcome.pending = Some(selection);
                outcome.released.push(card);
            }
            None => {
                outcome.released.push(card);
                let next = self.enter_discard();
                outcome.absorb(next);
            }
        }
        Ok(outcome)
    }

    /// Answer an open wild nomination: the held wild card becomes a credit
    /// for `mood` in `player`'s collection.
    pub fn nominate_wild(&mut self, player: PlayerId, mood: Mood) -> Result<Outcome, ContractViolation> {
        if let Some(rejection) = self.not_playing() {
            return Ok(rejection);
        }
        self.seat(player)?;
        let held = self.take_pending(player, |s| matches!(s, PendingSelection::WildNomination { .. }))?;
        let Some(card) = held.card else {
            return Err(ContractViolation::WrongCardKind);
        };

        let seat = self.seat_mut(player)?;
        if let Err(card) = seat.credit_wild(card, mood) {
            seat.add_to_hand(card);
            return Err(ContractViolation::WrongCardKind);
        }
        let message = format!("{} counts the wild mood as {}!", seat.name(), mood.name());
        info!(player = %seat.name(), mood = mood.name(), "wild mood credited");

        self.record(player, Action::NominateWild { mood });
        let mut outcome = Outcome::ok(message);
        let next = self.enter_discard();
        outcome.absorb(next);
        Ok(outcome)
    }

    /// Answer an open double-trouble selection: one collected `mood` entry
    /// leaves the target's collection and is released.
    ///
    /// Naming a mood the target does not have is rejected and the selection
    /// stays open.
    pub fn resolve_forced_discard(&mut self, player: PlayerId, mood: Mood) -> Result<Outcome, ContractViolation> {
        if let Some(rejection) = self.not_playing() {
            return Ok(rejection);
        }
        self.seat(player)?;
        let target = match self.pending() {
            None => return Err(ContractViolation::NoPendingSelection),
            Some(PendingSelection::ForcedDiscard { actor, target }) if actor == player => target,
            Some(_) => return Err(ContractViolation::WrongPendingSelection),
        };

        let victim = self.seat_mut(target)?;
        let Some(entry) = victim.discard_collected(mood) else {
            let message = format!("{} has no {} mood to discard", victim.name(), mood.name());
            return Ok(Outcome::rejected(message));
        };
        let message = format!("{} discarded {}!", victim.name(), entry.label());
        info!(target = %victim.name(), mood = mood.name(), "forced discard");
        self.pending = None;

        self.record(player, Action::ForceDiscard { mood });
        let mut outcome = Outcome::ok(message).with_released(entry.into_card());
        let next = self.enter_discard();
        outcome.absorb(next);
        Ok(outcome)
    }

    /// Discard the card at `card_index` and end `player`'s turn.
    pub fn discard_card(&mut self, player: PlayerId, card_index: usize) -> Result<Outcome, ContractViolation> {
        if let Some(rejection) = self.gate(player, TurnPhase::Discard)? {
            return Ok(rejection);
        }
        let card = self.seat_mut(player)?.remove_from_hand(card_index)?;
        debug!(player = %player, card = %card, "discarded");

        self.record(player, Action::Discard { card_index });
        let mut outcome = Outcome::ok(format!("Discarded: {}", card.name())).with_released(card);
        let next = self.next_turn();
        outcome.absorb(next);
        Ok(outcome)
    }

    /// Dispatch a submitted action to the matching call.
    pub fn apply_action(
        &mut self,
        player: PlayerId,
        action: &Action,
        deck: &mut Deck,
    ) -> Result<Outcome, ContractViolation> {
        match *action {
            Action::Draw => self.draw_card(player, deck),
            Action::PlayMood { card_index } => self.play_mood_card(player, card_index),
            Action::PlaySwing { card_index, target } => self.play_swing_card(player, card_index, target),
            Action::Discard { card_index } => self.discard_card(player, card_index),
            Action::NominateWild { mood } => self.nominate_wild(player, mood),
            Action::ForceDiscard { mood } => self.resolve_forced_discard(player, mood),
            Action::AdvancePhase => {
                if let Some(rejection) = self.not_playing() {
                    return Ok(rejection);
                }
                self.seat(player)?;
                if self.current_player_id() != Some(player) {
                    return Ok(self.reject(player, "It is not your turn"));
                }
                Ok(self.advance_phase())
            }
        }
    }

    // === Internals ===

    fn not_playing(&self) -> Option<Outcome> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Setup => Some(Outcome::rejected("The game has not started")),
            GamePhase::GameOver => Some(Outcome::rejected("Game is over")),
        }
    }

    /// Common checks for turn actions: running game, known seat, own turn,
    /// right phase, nothing pending.
    fn gate(&self, player: PlayerId, phase: TurnPhase) -> Result<Option<Outcome>, ContractViolation> {
        if let Some(rejection) = self.not_playing() {
            return Ok(Some(rejection));
        }
        self.seat(player)?;
        if self.current_player_id() != Some(player) {
            return Ok(Some(self.reject(player, "It is not your turn")));
        }
        if self.pending.is_some() {
            return Ok(Some(self.reject(player, "Finish the pending selection first")));
        }
        if self.turn_phase != phase {
            let message = format!("Cannot do that during the {} phase", self.turn_phase);
            return Ok(Some(self.reject(player, message)));
        }
        Ok(None)
    }

    fn reject(&self, player: PlayerId, message: impl Into<String>) -> Outcome {
        let outcome = Outcome::rejected(message);
        debug!(player = %player, reason = %outcome.message, "action rejected");
        outcome
    }

    fn check_index(&self, player: PlayerId, card_index: usize) -> Result<(), ContractViolation> {
        let len = self.seat(player)?.hand_size();
        if card_index >= len {
            return Err(ContractViolation::HandIndexOutOfRange { index: card_index, len });
        }
        Ok(())
    }

    fn seat(&self, player: PlayerId) -> Result<&Player, ContractViolation> {
        self.player(player).ok_or(ContractViolation::NoSuchPlayer(player))
    }

    fn seat_mut(&mut self, player: PlayerId) -> Result<&mut Player, ContractViolation> {
        self.players
            .as_mut()
            .and_then(|m| m.get_mut(player))
            .ok_or(ContractViolation::NoSuchPlayer(player))
    }

    fn take_pending(
        &mut self,
        player: PlayerId,
        expected: impl Fn(&PendingSelection) -> bool,
    ) -> Result<HeldSelection, ContractViolation> {
        match self.pending.as_ref() {
            None => Err(ContractViolation::NoPendingSelection),
            Some(held) if held.selection.actor() != player || !expected(&held.selection) => {
                Err(ContractViolation::WrongPendingSelection)
            }
            Some(_) => self.pending.take().ok_or(ContractViolation::NoPendingSelection),
        }
    }

    fn cancel_pending(&mut self) -> Option<Card> {
        let held = self.pending.take()?;
        debug!(selection = ?held.selection, "pending selection cancelled");
        held.card
    }

    /// After a resolved play: discard phase, or the next turn when the hand
    /// is already empty.
    fn enter_discard(&mut self) -> Outcome {
        self.turn_phase = TurnPhase::Discard;
        if self.current_player().is_some_and(|p| p.hand_size() == 0) {
            return self.next_turn();
        }
        Outcome::ok("Discard a card to end your turn")
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        self.history
            .push_back(ActionRecord::new(player, action, self.turn_number, self.action_sequence));
        self.action_sequence += 1;
    }
}
