//! Card definitions - what a card *is*, independent of which copy.
//!
//! A card is either a mood (one of five categories) or a swing card (one of
//! five special actions). `CardKind` is the tagged union the rules engine
//! dispatches on; every match over it is exhaustive.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::ContractViolation;

/// One of the five mood categories. Collecting all five wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Angry,
    Happy,
    Sad,
    Scared,
    Silly,
}

impl Mood {
    /// Every category, in deck order.
    pub const ALL: [Mood; 5] = [Mood::Angry, Mood::Happy, Mood::Sad, Mood::Scared, Mood::Silly];

    /// Lowercase name, as used on the wire and in snapshots.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mood::Angry => "angry",
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Scared => "scared",
            Mood::Silly => "silly",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Mood::Angry => "😡",
            Mood::Happy => "😂",
            Mood::Sad => "😢",
            Mood::Scared => "😨",
            Mood::Silly => "🤪",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = ContractViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name() == s)
            .ok_or_else(|| ContractViolation::UnknownMood(s.to_string()))
    }
}

/// One of the five special-action cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingKind {
    StealMood,
    SwapHands,
    BlockMood,
    DoubleTrouble,
    WildMood,
}

impl SwingKind {
    /// Every kind, in deck order.
    pub const ALL: [SwingKind; 5] = [
        SwingKind::StealMood,
        SwingKind::SwapHands,
        SwingKind::BlockMood,
        SwingKind::DoubleTrouble,
        SwingKind::WildMood,
    ];

    /// Snake-case tag, as used on the wire and in snapshots.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SwingKind::StealMood => "steal_mood",
            SwingKind::SwapHands => "swap_hands",
            SwingKind::BlockMood => "block_mood",
            SwingKind::DoubleTrouble => "double_trouble",
            SwingKind::WildMood => "wild_mood",
        }
    }

    /// Title shown on the card face.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            SwingKind::StealMood => "Steal Mood",
            SwingKind::SwapHands => "Swap Hands",
            SwingKind::BlockMood => "Block Mood",
            SwingKind::DoubleTrouble => "Double Trouble",
            SwingKind::WildMood => "Wild Mood",
        }
    }

    /// Rules text shown in tooltips.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            SwingKind::StealMood => "Take a random card from an opponent's hand",
            SwingKind::SwapHands => "Swap your entire hand with another player",
            SwingKind::BlockMood => "Stop a player from stealing or forcing discards",
            SwingKind::DoubleTrouble => "Force a player to discard a mood of your choice",
            SwingKind::WildMood => "Acts as any one mood to complete your set",
        }
    }

    /// Whether playing this card requires a target player.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        !matches!(self, SwingKind::WildMood)
    }

    /// Whether a blocked player is barred from playing this card.
    #[must_use]
    pub const fn barred_while_blocked(self) -> bool {
        matches!(self, SwingKind::StealMood | SwingKind::DoubleTrouble)
    }
}

impl std::fmt::Display for SwingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SwingKind {
    type Err = ContractViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwingKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ContractViolation::UnknownSwingKind(s.to_string()))
    }
}

/// What a card is: a mood or a swing action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Mood(Mood),
    Swing(SwingKind),
}

impl CardKind {
    /// Display name: the mood name or the swing card title.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            CardKind::Mood(mood) => mood.name(),
            CardKind::Swing(kind) => kind.display_name(),
        }
    }

    #[must_use]
    pub const fn as_mood(self) -> Option<Mood> {
        match self {
            CardKind::Mood(mood) => Some(mood),
            CardKind::Swing(_) => None,
        }
    }

    #[must_use]
    pub const fn as_swing(self) -> Option<SwingKind> {
        match self {
            CardKind::Mood(_) => None,
            CardKind::Swing(kind) => Some(kind),
        }
    }

    #[must_use]
    pub const fn is_mood(self) -> bool {
        matches!(self, CardKind::Mood(_))
    }

    /// Every kind a standard deck holds: moods first, then swing cards.
    pub fn all() -> impl Iterator<Item = CardKind> {
        Mood::ALL
            .into_iter()
            .map(CardKind::Mood)
            .chain(SwingKind::ALL.into_iter().map(CardKind::Swing))
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Mood(mood) => write!(f, "MoodCard({})", mood),
            CardKind::Swing(kind) => write!(f, "MoodSwingCard({})", kind),
        }
    }
}
