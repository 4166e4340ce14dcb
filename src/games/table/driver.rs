//! The table: deck, discard pile and engine wired together.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::policy::PlayerPolicy;
use crate::cards::CardFactory;
use crate::core::{
    Action, ConfigError, ContractViolation, GameConfig, GamePhase, GameRng, GameSnapshot, PlayerId,
    TurnPhase,
};
use crate::players::Player;
use crate::rules::{GameLogic, Outcome};
use crate::zones::{Deck, DiscardPile};

/// Actions a single automated turn may take before the table forces the
/// turn to end.
const MAX_STEPS_PER_TURN: usize = 32;

/// Failure to set up a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Contract(#[from] ContractViolation),
}

/// What happened during one automated turn.
#[derive(Clone, Debug, Default)]
pub struct TurnReport {
    pub player: Option<PlayerId>,
    pub actions: Vec<Action>,
    pub messages: Vec<String>,
}

/// Builder for creating a `Table`.
pub struct TableBuilder {
    config: GameConfig,
    seats: Vec<(String, bool)>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seats: Vec::new(),
        }
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a human-controlled seat.
    pub fn seat(mut self, name: impl Into<String>) -> Self {
        self.seats.push((name.into(), false));
        self
    }

    /// Add a policy-controlled seat.
    pub fn automated_seat(mut self, name: impl Into<String>) -> Self {
        self.seats.push((name.into(), true));
        self
    }

    /// Validate the configuration, shuffle a fresh deck, deal starting hands
    /// in seat order and start the game.
    pub fn build(self) -> Result<Table, TableError> {
        self.config.validate()?;

        let root = GameRng::new(self.config.seed);
        let mut shuffle_rng = root.for_context("shuffle");
        let mut factory = CardFactory::new();
        let mut deck = Deck::new(self.config.composition, &mut factory);
        deck.shuffle(&mut shuffle_rng);

        let mut players: Vec<Player> = self
            .seats
            .into_iter()
            .map(|(name, automated)| {
                if automated {
                    Player::automated(name)
                } else {
                    Player::new(name)
                }
            })
            .collect();

        'deal: for _ in 0..self.config.starting_hand_size {
            for player in &mut players {
                match deck.draw() {
                    Ok(card) => player.add_to_hand(card),
                    Err(_) => {
                        warn!("deck ran out while dealing");
                        break 'deal;
                    }
                }
            }
        }

        let mut engine = GameLogic::new(self.config);
        engine.start_game(players)?;

        Ok(Table {
            engine,
            deck,
            discard: DiscardPile::new(),
            factory,
            shuffle_rng,
            policy_rng: root.for_context("policy"),
        })
    }
}

/// A running game with its shared zones.
///
/// The table is the caller the engine expects: it lends the deck for draws,
/// puts every released card on the discard pile, checks the win condition
/// after each accepted action and ends the game when someone wins.
#[derive(Debug)]
pub struct Table {
    engine: GameLogic,
    deck: Deck,
    discard: DiscardPile,
    factory: CardFactory,
    shuffle_rng: GameRng,
    policy_rng: GameRng,
}

impl Table {
    /// Build a table from `(name, automated)` seats.
    pub fn new(config: GameConfig, seats: &[(&str, bool)]) -> Result<Self, TableError> {
        seats
            .iter()
            .fold(TableBuilder::new().config(config), |builder, &(name, automated)| {
                if automated {
                    builder.automated_seat(name)
                } else {
                    builder.seat(name)
                }
            })
            .build()
    }

    #[must_use]
    pub fn engine(&self) -> &GameLogic {
        &self.engine
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.engine.snapshot()
    }

    /// Every card the table has ever created, wherever it is now.
    #[must_use]
    pub fn cards_issued(&self) -> usize {
        self.factory.issued() as usize
    }

    /// Cards currently in the deck, the discard pile, hands and collections.
    #[must_use]
    pub fn cards_accounted_for(&self) -> usize {
        let held: usize = self
            .engine
            .players()
            .map(|(_, p)| p.hand_size() + p.collected().len())
            .sum();
        let pending = usize::from(matches!(
            self.engine.pending(),
            Some(crate::rules::PendingSelection::WildNomination { .. })
        ));
        self.deck.len() + self.discard.len() + held + pending
    }

    /// Draw for `player`, refilling the deck from the discard pile first
    /// when it is empty and the configuration allows it.
    ///
    /// A player already holding `max_hand_size` cards may not draw.
    pub fn draw(&mut self, player: PlayerId) -> Result<Outcome, ContractViolation> {
        let limit = self.engine.config().max_hand_size;
        if self.engine.player(player).is_some_and(|p| p.hand_size() >= limit)
            && self.engine.current_player_id() == Some(player)
            && self.engine.turn_phase() == TurnPhase::Draw
        {
            return Ok(Outcome::rejected(format!("Hand is full ({limit} cards)")));
        }

        if self.deck.is_empty() && self.engine.config().reshuffle_discard && !self.discard.is_empty() {
            let moved = self.deck.refill_from(&mut self.discard, &mut self.shuffle_rng);
            info!(cards = moved, "discard pile shuffled into the deck");
        }
        let outcome = self.engine.draw_card(player, &mut self.deck)?;
        Ok(self.settle(player, outcome))
    }

    /// Submit `action` for `player`, then file released cards and check
    /// for a winner.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> Result<Outcome, ContractViolation> {
        if action == Action::Draw {
            return self.draw(player);
        }
        let outcome = self.engine.apply_action(player, &action, &mut self.deck)?;
        Ok(self.settle(player, outcome))
    }

    fn settle(&mut self, player: PlayerId, mut outcome: Outcome) -> Outcome {
        self.discard.extend(outcome.take_released());

        if outcome.success
            && self.engine.phase() == GamePhase::Playing
            && self.engine.check_win_condition(player)
        {
            match self.engine.end_game(player) {
                Ok(mut ended) => {
                    self.discard.extend(ended.take_released());
                    outcome.message = format!("{} {}", outcome.message, ended.message);
                }
                Err(err) => warn!(error = %err, "could not end the game"),
            }
        }
        outcome
    }

    /// Play the current seat's whole turn with `policy`.
    ///
    /// The seat is driven whether or not it is flagged automated. A turn
    /// that does not finish within a bounded number of actions is ended by
    /// the table.
    pub fn play_automated_turn(&mut self, policy: &mut dyn PlayerPolicy) -> Result<TurnReport, ContractViolation> {
        let mut report = TurnReport::default();
        let Some(player) = self.engine.current_player_id() else {
            return Ok(report);
        };
        report.player = Some(player);
        let turn = self.engine.turn_number();

        for _ in 0..MAX_STEPS_PER_TURN {
            if self.engine.phase() != GamePhase::Playing || self.engine.turn_number() != turn {
                return Ok(report);
            }
            let action = policy
                .choose_action(&self.engine, player, &mut self.policy_rng)
                .unwrap_or(Action::AdvancePhase);
            let outcome = self.apply(player, action)?;
            debug!(player = %player, ?action, success = outcome.success, message = %outcome.message, "automated action");
            report.actions.push(action);
            report.messages.push(outcome.message);

            if !outcome.success && action != Action::AdvancePhase {
                let skipped = self.apply(player, Action::AdvancePhase)?;
                report.actions.push(Action::AdvancePhase);
                report.messages.push(skipped.message);
            }
        }

        if self.engine.phase() == GamePhase::Playing && self.engine.turn_number() == turn {
            warn!(player = %player, "turn did not finish; forcing the next turn");
            let mut forced = self.engine.next_turn();
            self.discard.extend(forced.take_released());
            report.messages.push(forced.message);
        }
        Ok(report)
    }

    /// Keep playing automated turns until someone wins or `max_turns` turns
    /// have been played. Returns the winner, if any.
    pub fn run_to_completion(
        &mut self,
        policy: &mut dyn PlayerPolicy,
        max_turns: u32,
    ) -> Result<Option<PlayerId>, ContractViolation> {
        while self.engine.phase() == GamePhase::Playing && self.engine.turn_number() <= max_turns {
            self.play_automated_turn(policy)?;
        }
        if let Some(winner) = self.engine.winner() {
            info!(winner = %winner, turns = self.engine.turn_number(), "table finished");
        }
        Ok(self.engine.winner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::table::{PriorityPolicy, RandomPolicy};

    fn table(seed: u64) -> Table {
        Table::new(
            GameConfig::default().with_seed(seed),
            &[("Ada", false), ("Bot 1", true), ("Bot 2", true)],
        )
        .unwrap()
    }

    #[test]
    fn test_build_deals_starting_hands() {
        let table = table(1);
        assert_eq!(table.engine().phase(), GamePhase::Playing);
        for (_, player) in table.engine().players() {
            assert_eq!(player.hand_size(), 5);
        }
        assert_eq!(table.deck().len(), 40 - 15);
        assert_eq!(table.cards_accounted_for(), table.cards_issued());
    }

    #[test]
    fn test_build_rejects_bad_config() {
        let err = Table::new(GameConfig::default().with_starting_hand_size(0), &[("A", true), ("B", true)])
            .unwrap_err();
        assert!(matches!(err, TableError::Config(ConfigError::StartingHandSize(0))));

        let err = Table::new(GameConfig::default(), &[("A", true)]).unwrap_err();
        assert!(matches!(err, TableError::Contract(ContractViolation::InvalidPlayerCount { .. })));
    }

    #[test]
    fn test_automated_turn_passes_the_turn() {
        let mut table = table(2);
        let report = table.play_automated_turn(&mut PriorityPolicy).unwrap();
        assert_eq!(report.player, Some(PlayerId(0)));
        assert_eq!(report.actions.first(), Some(&Action::Draw));
        if table.engine().phase() == GamePhase::Playing {
            assert_eq!(table.engine().current_player_id(), Some(PlayerId(1)));
        }
        assert_eq!(table.cards_accounted_for(), table.cards_issued());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = table(9);
        let mut b = table(9);
        let wa = a.run_to_completion(&mut RandomPolicy, 200).unwrap();
        let wb = b.run_to_completion(&mut RandomPolicy, 200).unwrap();
        assert_eq!(wa, wb);
        assert_eq!(a.engine().history(), b.engine().history());
    }
}
