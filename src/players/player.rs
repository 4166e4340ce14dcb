//! A seat at the table: hand, collected moods, block counter.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::cards::{Card, CardId, Mood, SwingKind};
use crate::core::ContractViolation;

/// One entry in a player's collected-moods area.
#[derive(Debug, PartialEq, Eq)]
pub enum CollectedMood {
    /// A real mood card.
    Real { card: Card, mood: Mood },
    /// A wild_mood swing card converted into a credit for `nominated`.
    Wild { card: Card, nominated: Mood },
}

impl CollectedMood {
    /// Category this entry counts as.
    #[must_use]
    pub fn mood(&self) -> Mood {
        match self {
            CollectedMood::Real { mood, .. } => *mood,
            CollectedMood::Wild { nominated, .. } => *nominated,
        }
    }

    #[must_use]
    pub fn is_wild(&self) -> bool {
        matches!(self, CollectedMood::Wild { .. })
    }

    #[must_use]
    pub fn card(&self) -> &Card {
        match self {
            CollectedMood::Real { card, .. } | CollectedMood::Wild { card, .. } => card,
        }
    }

    /// Give the physical card back.
    #[must_use]
    pub fn into_card(self) -> Card {
        match self {
            CollectedMood::Real { card, .. } | CollectedMood::Wild { card, .. } => card,
        }
    }

    /// Label for snapshots: `"angry"` or `"wild(silly)"`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            CollectedMood::Real { card, .. } => card.name().to_string(),
            CollectedMood::Wild { nominated, .. } => format!("wild({})", nominated),
        }
    }
}

/// A player record.
///
/// Every field is always present; a new player starts with an empty hand,
/// nothing collected and no block.
#[derive(Debug)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    collected: Vec<CollectedMood>,
    blocked_turns: u32,
    is_automated: bool,
}

impl Player {
    /// Create a human-controlled player.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            collected: Vec::new(),
            blocked_turns: 0,
            is_automated: false,
        }
    }

    /// Create an automated player.
    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            is_automated: true,
            ..Self::new(name)
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_automated(&self) -> bool {
        self.is_automated
    }

    // === Hand ===

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove the card at `index`, keeping the order of the rest.
    pub fn remove_from_hand(&mut self, index: usize) -> Result<Card, ContractViolation> {
        if index < self.hand.len() {
            Ok(self.hand.remove(index))
        } else {
            Err(ContractViolation::HandIndexOutOfRange {
                index,
                len: self.hand.len(),
            })
        }
    }

    /// Put a card back at `index` (clamped to the hand size).
    pub fn insert_into_hand(&mut self, index: usize, card: Card) {
        let idx = index.min(self.hand.len());
        self.hand.insert(idx, card);
    }

    /// Remove a specific physical card from the hand.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.hand.iter().position(|c| c.id() == id)?;
        Some(self.hand.remove(pos))
    }

    /// Take the whole hand, leaving it empty.
    pub fn take_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    /// Replace the whole hand, returning the old one.
    pub fn replace_hand(&mut self, hand: Vec<Card>) -> Vec<Card> {
        std::mem::replace(&mut self.hand, hand)
    }

    // === Collected moods ===

    #[must_use]
    pub fn collected(&self) -> &[CollectedMood] {
        &self.collected
    }

    /// Add a mood card to the collection.
    ///
    /// Gives the card back if it is not a mood card.
    pub fn collect_mood(&mut self, card: Card) -> Result<(), Card> {
        match card.mood() {
            Some(mood) => {
                self.collected.push(CollectedMood::Real { card, mood });
                Ok(())
            }
            None => Err(card),
        }
    }

    /// Record a wild_mood card as a credit for `nominated`.
    ///
    /// Gives the card back if it is not a wild_mood card.
    pub fn credit_wild(&mut self, card: Card, nominated: Mood) -> Result<(), Card> {
        if card.swing() == Some(SwingKind::WildMood) {
            self.collected.push(CollectedMood::Wild { card, nominated });
            Ok(())
        } else {
            Err(card)
        }
    }

    /// Remove one collected entry counting as `mood`, real cards first.
    pub fn discard_collected(&mut self, mood: Mood) -> Option<CollectedMood> {
        let pos = self
            .collected
            .iter()
            .position(|c| !c.is_wild() && c.mood() == mood)
            .or_else(|| self.collected.iter().position(|c| c.mood() == mood))?;
        Some(self.collected.remove(pos))
    }

    /// Number of distinct categories collected.
    ///
    /// Any wild credit forces the count to the maximum: wild satisfies
    /// every missing category.
    #[must_use]
    pub fn unique_mood_count(&self) -> usize {
        if self.has_wild_credit() {
            return Mood::ALL.len();
        }

        self.collected
            .iter()
            .map(CollectedMood::mood)
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// True for a real card of `mood` or any wild credit.
    #[must_use]
    pub fn has_mood(&self, mood: Mood) -> bool {
        self.collected
            .iter()
            .any(|c| c.is_wild() || c.mood() == mood)
    }

    #[must_use]
    pub fn has_wild_credit(&self) -> bool {
        self.collected.iter().any(CollectedMood::is_wild)
    }

    /// All five categories held (or wild-credited).
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.unique_mood_count() >= Mood::ALL.len()
    }

    /// Categories not yet held by a real card.
    #[must_use]
    pub fn missing_moods(&self) -> Vec<Mood> {
        Mood::ALL
            .into_iter()
            .filter(|m| !self.collected.iter().any(|c| !c.is_wild() && c.mood() == *m))
            .collect()
    }

    // === Blocking ===

    #[must_use]
    pub fn blocked_turns(&self) -> u32 {
        self.blocked_turns
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked_turns > 0
    }

    /// Block for `turns` of this player's own turns.
    ///
    /// Overwrites any remaining block; blocks never accumulate.
    pub fn block_for(&mut self, turns: u32) {
        self.blocked_turns = turns;
    }

    pub fn clear_block(&mut self) {
        self.blocked_turns = 0;
    }

    /// Use up one blocked turn. Returns true if this lifted the block.
    pub fn consume_block_turn(&mut self) -> bool {
        if self.blocked_turns == 0 {
            return false;
        }
        self.blocked_turns -= 1;
        self.blocked_turns == 0
    }

    /// Read-only projection for rendering.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            name: self.name.clone(),
            hand_size: self.hand.len(),
            unique_mood_count: self.unique_mood_count(),
            collected_mood_names: self.collected.iter().map(CollectedMood::label).collect(),
            blocked_turns: self.blocked_turns,
            is_automated: self.is_automated,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player({}, Hand: {}, Moods: {})",
            self.name,
            self.hand.len(),
            self.collected.len()
        )
    }
}

/// Per-player part of a game snapshot. Owned data only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub hand_size: usize,
    pub unique_mood_count: usize,
    pub collected_mood_names: Vec<String>,
    pub blocked_turns: u32,
    pub is_automated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardFactory;

    fn collect_all(player: &mut Player, factory: &mut CardFactory, moods: &[Mood]) {
        for &mood in moods {
            player.collect_mood(factory.make_mood_card(mood)).unwrap();
        }
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("Ada");
        assert_eq!(player.name(), "Ada");
        assert!(!player.is_automated());
        assert_eq!(player.hand_size(), 0);
        assert!(player.collected().is_empty());
        assert_eq!(player.blocked_turns(), 0);
        assert!(!player.is_blocked());

        assert!(Player::automated("Bot").is_automated());
    }

    #[test]
    fn test_remove_from_hand_preserves_order() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");
        for mood in [Mood::Angry, Mood::Happy, Mood::Sad] {
            player.add_to_hand(factory.make_mood_card(mood));
        }

        let removed = player.remove_from_hand(1).unwrap();
        assert_eq!(removed.mood(), Some(Mood::Happy));
        let rest: Vec<_> = player.hand().iter().filter_map(Card::mood).collect();
        assert_eq!(rest, vec![Mood::Angry, Mood::Sad]);

        assert_eq!(
            player.remove_from_hand(2),
            Err(ContractViolation::HandIndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_remove_card_by_identity() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");
        let first = factory.make_mood_card(Mood::Angry);
        let second = factory.make_mood_card(Mood::Angry);
        let second_id = second.id();
        player.add_to_hand(first);
        player.add_to_hand(second);

        let removed = player.remove_card(second_id).unwrap();
        assert_eq!(removed.id(), second_id);
        assert_eq!(player.hand_size(), 1);
        assert_ne!(player.hand()[0].id(), second_id);
        assert!(player.remove_card(second_id).is_none());
    }

    #[test]
    fn test_collect_mood_rejects_swing() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");

        let swing = factory.make_swing_card(SwingKind::StealMood);
        let returned = player.collect_mood(swing).unwrap_err();
        assert_eq!(returned.swing(), Some(SwingKind::StealMood));
        assert!(player.collected().is_empty());

        assert!(player.collect_mood(factory.make_mood_card(Mood::Sad)).is_ok());
        assert_eq!(player.collected().len(), 1);
    }

    #[test]
    fn test_unique_mood_count_ignores_duplicates() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");
        collect_all(
            &mut player,
            &mut factory,
            &[Mood::Angry, Mood::Happy, Mood::Sad, Mood::Scared, Mood::Scared],
        );

        assert_eq!(player.collected().len(), 5);
        assert_eq!(player.unique_mood_count(), 4);
        assert!(!player.is_winner());
        assert_eq!(player.missing_moods(), vec![Mood::Silly]);
    }

    #[test]
    fn test_all_five_moods_win() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");
        collect_all(&mut player, &mut factory, &Mood::ALL);

        assert_eq!(player.unique_mood_count(), 5);
        assert!(player.is_winner());
    }

    #[test]
    fn test_single_wild_credit_forces_max() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");
        collect_all(&mut player, &mut factory, &[Mood::Angry]);

        let wild = factory.make_swing_card(SwingKind::WildMood);
        player.credit_wild(wild, Mood::Silly).unwrap();

        assert_eq!(player.unique_mood_count(), 5);
        assert!(player.is_winner());
        assert!(player.has_mood(Mood::Scared));
        assert!(player.has_wild_credit());
    }

    #[test]
    fn test_credit_wild_rejects_other_cards() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");

        let block = factory.make_swing_card(SwingKind::BlockMood);
        assert!(player.credit_wild(block, Mood::Happy).is_err());
        let mood = factory.make_mood_card(Mood::Happy);
        assert!(player.credit_wild(mood, Mood::Happy).is_err());
        assert!(!player.has_wild_credit());
    }

    #[test]
    fn test_has_mood() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");
        collect_all(&mut player, &mut factory, &[Mood::Happy]);

        assert!(player.has_mood(Mood::Happy));
        assert!(!player.has_mood(Mood::Sad));
    }

    #[test]
    fn test_discard_collected_prefers_real_cards() {
        let mut factory = CardFactory::new();
        let mut player = Player::new("Ada");
        player
            .credit_wild(factory.make_swing_card(SwingKind::WildMood), Mood::Sad)
            .unwrap();
        collect_all(&mut player, &mut factory, &[Mood::Sad]);

        let first = player.discard_collected(Mood::Sad).unwrap();
        assert!(!first.is_wild());
        let second = player.discard_collected(Mood::Sad).unwrap();
        assert!(second.is_wild());
        assert!(player.discard_collected(Mood::Sad).is_none());
        assert!(player.collected().is_empty());
    }

    #[test]
    fn test_block_overwrites_not_accumulates() {
        let mut player = Player::new("Ada");
        player.block_for(2);
        assert!(!player.consume_block_turn());
        assert_eq!(player.blocked_turns(), 1);

        player.block_for(2);
        assert_eq!(player.blocked_turns(), 2);
        player.block_for(2);
        assert_eq!(player.blocked_turns(), 2);

        player.clear_block();
        assert!(!player.is_blocked());
    }

    #[test]
    fn test_consume_block_never_negative() {
        let mut player = Player::new("Ada");
        player.block_for(1);
        assert!(player.consume_block_turn());
        assert_eq!(player.blocked_turns(), 0);
        assert!(!player.consume_block_turn());
        assert_eq!(player.blocked_turns(), 0);
    }

    #[test]
    fn test_swap_via_take_and_replace() {
        let mut factory = CardFactory::new();
        let mut a = Player::new("A");
        let mut b = Player::new("B");
        a.add_to_hand(factory.make_mood_card(Mood::Angry));
        b.add_to_hand(factory.make_mood_card(Mood::Happy));
        b.add_to_hand(factory.make_mood_card(Mood::Sad));

        let a_hand = a.take_hand();
        let b_hand = b.replace_hand(a_hand);
        a.replace_hand(b_hand);

        assert_eq!(a.hand_size(), 2);
        assert_eq!(b.hand_size(), 1);
        assert_eq!(b.hand()[0].mood(), Some(Mood::Angry));
    }

    #[test]
    fn test_snapshot() {
        let mut factory = CardFactory::new();
        let mut player = Player::automated("Bot");
        player.add_to_hand(factory.make_mood_card(Mood::Silly));
        collect_all(&mut player, &mut factory, &[Mood::Happy]);
        player
            .credit_wild(factory.make_swing_card(SwingKind::WildMood), Mood::Angry)
            .unwrap();
        player.block_for(2);

        let snap = player.snapshot();
        assert_eq!(snap.name, "Bot");
        assert_eq!(snap.hand_size, 1);
        assert_eq!(snap.unique_mood_count, 5);
        assert_eq!(snap.collected_mood_names, vec!["happy", "wild(angry)"]);
        assert_eq!(snap.blocked_turns, 2);
        assert!(snap.is_automated);
        assert_eq!(player.to_string(), "Player(Bot, Hand: 1, Moods: 2)");
    }
}
