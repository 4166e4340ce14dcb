//! The draw deck.
//!
//! An ordered stack of cards. Index 0 is the bottom, the last element is the
//! top; `draw` pops from the top. The deck knows nothing about players.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cards::{Card, CardFactory, CardId, CardKind, Mood, SwingKind};
use crate::core::{DeckComposition, GameRng};

use super::discard::DiscardPile;

/// Position for returning a card to the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZonePosition {
    /// Next card to be drawn.
    Top,
    /// Last card to be drawn.
    Bottom,
    /// Insert at specific index (0 = bottom). Clamped to the deck size.
    Index(usize),
}

/// The deck ran out of cards.
///
/// Not fatal: the caller decides whether to reshuffle the discard pile,
/// skip the draw, or end the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("the deck is empty")]
pub struct EmptyDeck;

/// Ordered draw pile.
///
/// ## Usage
///
/// ```
/// use flip_out::cards::CardFactory;
/// use flip_out::core::{DeckComposition, GameRng};
/// use flip_out::zones::Deck;
///
/// let mut factory = CardFactory::new();
/// let mut deck = Deck::new(DeckComposition::new(5, 3), &mut factory);
/// assert_eq!(deck.len(), 40);
///
/// deck.shuffle(&mut GameRng::new(42));
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.len(), 39);
/// # let _ = card;
/// ```
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a fresh, unshuffled deck.
    ///
    /// Cards are laid down bottom-to-top in category order (angry ... silly)
    /// followed by swing kinds (steal_mood ... wild_mood).
    pub fn new(composition: DeckComposition, factory: &mut CardFactory) -> Self {
        let mut cards = Vec::with_capacity(composition.total());

        for mood in Mood::ALL {
            for _ in 0..composition.moods_per_category {
                cards.push(factory.make_mood_card(mood));
            }
        }

        for kind in SwingKind::ALL {
            for _ in 0..composition.swings_per_kind {
                cards.push(factory.make_swing_card(kind));
            }
        }

        Self { cards }
    }

    /// Standard 40-card deck: 5 of each mood, 3 of each swing card.
    pub fn standard(factory: &mut CardFactory) -> Self {
        Self::new(DeckComposition::default(), factory)
    }

    /// Build a deck from explicit cards, bottom first.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Uniformly permute the deck.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, EmptyDeck> {
        self.cards.pop().ok_or(EmptyDeck)
    }

    /// Return a card to the deck.
    pub fn put(&mut self, card: Card, position: ZonePosition) {
        match position {
            ZonePosition::Top => self.cards.push(card),
            ZonePosition::Bottom => self.cards.insert(0, card),
            ZonePosition::Index(i) => {
                let idx = i.min(self.cards.len());
                self.cards.insert(idx, card);
            }
        }
    }

    /// Put several cards underneath the current bottom card, keeping their order.
    pub fn extend_bottom(&mut self, cards: impl IntoIterator<Item = Card>) {
        let mut bottom: Vec<Card> = cards.into_iter().collect();
        bottom.append(&mut self.cards);
        self.cards = bottom;
    }

    /// Move every card of `discard` into the deck and shuffle.
    ///
    /// Returns how many cards were moved.
    pub fn refill_from(&mut self, discard: &mut DiscardPile, rng: &mut GameRng) -> usize {
        let moved = discard.len();
        self.extend_bottom(discard.take_all());
        self.shuffle(rng);
        moved
    }

    /// Kind of the card `draw` would return next.
    #[must_use]
    pub fn peek_top(&self) -> Option<CardKind> {
        self.cards.last().map(Card::kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether a specific physical card is in the deck.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }

    /// Count of cards per kind.
    #[must_use]
    pub fn composition(&self) -> FxHashMap<CardKind, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Kinds bottom-to-top, for inspection and tests.
    pub fn kinds(&self) -> impl Iterator<Item = CardKind> + '_ {
        self.cards.iter().map(Card::kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deck_composition() {
        let mut factory = CardFactory::new();
        let deck = Deck::standard(&mut factory);

        assert_eq!(deck.len(), 40);
        let counts = deck.composition();
        for mood in Mood::ALL {
            assert_eq!(counts[&CardKind::Mood(mood)], 5);
        }
        for kind in SwingKind::ALL {
            assert_eq!(counts[&CardKind::Swing(kind)], 3);
        }
    }

    #[test]
    fn test_creation_order_is_deterministic() {
        let mut factory = CardFactory::new();
        let deck = Deck::new(DeckComposition::new(1, 1), &mut factory);

        let kinds: Vec<_> = deck.kinds().collect();
        let expected: Vec<_> = CardKind::all().collect();
        assert_eq!(kinds, expected);
        assert_eq!(deck.peek_top(), Some(CardKind::Swing(SwingKind::WildMood)));
    }

    #[test]
    fn test_draw_until_empty() {
        let mut factory = CardFactory::new();
        let mut deck = Deck::new(DeckComposition::new(1, 0), &mut factory);

        for remaining in (0..5).rev() {
            assert!(deck.draw().is_ok());
            assert_eq!(deck.len(), remaining);
        }
        assert_eq!(deck.draw(), Err(EmptyDeck));
        assert!(deck.is_empty());
        assert_eq!(deck.peek_top(), None);
    }

    #[test]
    fn test_put_positions() {
        let mut factory = CardFactory::new();
        let mut deck = Deck::default();

        let a = factory.make_mood_card(Mood::Angry);
        let b = factory.make_mood_card(Mood::Happy);
        let c = factory.make_mood_card(Mood::Sad);
        let d = factory.make_mood_card(Mood::Silly);
        let (a_id, b_id, c_id, d_id) = (a.id(), b.id(), c.id(), d.id());

        deck.put(a, ZonePosition::Top);
        deck.put(b, ZonePosition::Bottom);
        deck.put(c, ZonePosition::Top);
        deck.put(d, ZonePosition::Index(99));

        // Bottom to top: b, a, c, d
        assert_eq!(deck.draw().unwrap().id(), d_id);
        assert_eq!(deck.draw().unwrap().id(), c_id);
        assert_eq!(deck.draw().unwrap().id(), a_id);
        assert_eq!(deck.draw().unwrap().id(), b_id);
    }

    #[test]
    fn test_refill_from_discard() {
        let mut factory = CardFactory::new();
        let mut deck = Deck::default();
        let mut discard = DiscardPile::new();
        let first = factory.make_mood_card(Mood::Angry);
        let first_id = first.id();
        discard.push(first);
        discard.push(factory.make_swing_card(SwingKind::SwapHands));

        let moved = deck.refill_from(&mut discard, &mut GameRng::new(1));

        assert_eq!(moved, 2);
        assert_eq!(deck.len(), 2);
        assert!(deck.contains(first_id));
        assert!(discard.is_empty());
    }
}
