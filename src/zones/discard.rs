//! Discard pile.
//!
//! Owned by the driver, never by the rules engine. Every card the engine
//! releases (played swing cards, discards, forced discards) is expected to
//! end up here.

use crate::cards::Card;

/// Face-up pile; the last card pushed is on top.
#[derive(Debug, Default)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Card on top of the pile.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Empty the pile, oldest card first.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardFactory, Mood, SwingKind};

    #[test]
    fn test_push_and_top() {
        let mut factory = CardFactory::new();
        let mut pile = DiscardPile::new();
        assert!(pile.top().is_none());

        pile.push(factory.make_mood_card(Mood::Sad));
        pile.extend([factory.make_swing_card(SwingKind::BlockMood)]);

        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top().map(Card::name), Some("Block Mood"));

        let all = pile.take_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].mood(), Some(Mood::Sad));
        assert!(pile.is_empty());
    }
}
