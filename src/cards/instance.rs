//! Card instances - individual physical cards.
//!
//! Two angry mood cards are different cards: each carries its own `CardId`,
//! handed out by a `CardFactory`. Removal from hands and collections is by
//! id, never by value.
//!
//! `Card` is deliberately not `Clone`. A card can only move from one owner
//! (deck, hand, collection, discard pile) to another, so no code path can
//! duplicate or silently drop one.

use serde::Serialize;

use super::definition::{CardKind, Mood, SwingKind};

/// Unique identity of one physical card within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One physical card: an identity plus an immutable kind.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    id: CardId,
    kind: CardKind,
}

impl Card {
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> CardKind {
        self.kind
    }

    /// Display name (mood name or swing card title).
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind.display_name()
    }

    #[must_use]
    pub const fn mood(&self) -> Option<Mood> {
        self.kind.as_mood()
    }

    #[must_use]
    pub const fn swing(&self) -> Option<SwingKind> {
        self.kind.as_swing()
    }

    #[must_use]
    pub const fn is_mood(&self) -> bool {
        self.kind.is_mood()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

/// Allocates card identities.
///
/// One factory per game. Every card in play must come from the same factory
/// so identities never collide.
///
/// ```
/// use flip_out::cards::{CardFactory, Mood};
///
/// let mut factory = CardFactory::new();
/// let a = factory.make_mood_card(Mood::Angry);
/// let b = factory.make_mood_card(Mood::Angry);
///
/// assert_eq!(a.kind(), b.kind());
/// assert_ne!(a.id(), b.id());
/// ```
#[derive(Debug, Default)]
pub struct CardFactory {
    next_id: u32,
}

impl CardFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a card of any kind.
    pub fn make(&mut self, kind: CardKind) -> Card {
        let id = CardId(self.next_id);
        self.next_id += 1;
        Card { id, kind }
    }

    pub fn make_mood_card(&mut self, mood: Mood) -> Card {
        self.make(CardKind::Mood(mood))
    }

    pub fn make_swing_card(&mut self, kind: SwingKind) -> Card {
        self.make(CardKind::Swing(kind))
    }

    /// Number of cards created so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_issues_unique_ids() {
        let mut factory = CardFactory::new();
        let cards: Vec<_> = (0..10).map(|_| factory.make_mood_card(Mood::Happy)).collect();

        let mut ids: Vec<_> = cards.iter().map(Card::id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 10);
        assert_eq!(factory.issued(), 10);
    }

    #[test]
    fn test_same_kind_cards_are_distinct() {
        let mut factory = CardFactory::new();
        let a = factory.make_mood_card(Mood::Angry);
        let b = factory.make_mood_card(Mood::Angry);

        assert_eq!(a.kind(), b.kind());
        assert_ne!(a, b);
    }

    #[test]
    fn test_card_accessors() {
        let mut factory = CardFactory::new();
        let mood = factory.make_mood_card(Mood::Scared);
        let swing = factory.make_swing_card(SwingKind::StealMood);

        assert_eq!(mood.mood(), Some(Mood::Scared));
        assert!(mood.is_mood());
        assert_eq!(mood.name(), "scared");
        assert_eq!(swing.swing(), Some(SwingKind::StealMood));
        assert_eq!(swing.name(), "Steal Mood");
        assert_eq!(swing.to_string(), "MoodSwingCard(steal_mood)");
        assert_eq!(format!("{}", swing.id()), "Card(1)");
    }
}
