//! Card types and deck constants.

use core::fmt;

use crate::error::SuitError;

/// Card suit.
///
/// Suits are ordered Clubs < Diamonds < Hearts < Spades, which also fixes the
/// order of a freshly built deck and the 1-based menu used for suit declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Parses a 1-based menu choice (1 = Clubs .. 4 = Spades).
    ///
    /// # Errors
    ///
    /// Returns [`SuitError::InvalidSuitChoice`] for anything outside `1..=4`.
    pub fn from_choice(choice: u8) -> Result<Self, SuitError> {
        choice
            .checked_sub(1)
            .ok_or(SuitError::InvalidSuitChoice)
            .and_then(Self::try_from)
    }
}

impl TryFrom<u8> for Suit {
    type Error = SuitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or(SuitError::InvalidSuitChoice)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards compare by suit first, then by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but render as `"?"`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether this card is wild (an eight).
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        self.rank == WILD_RANK
    }

    /// Returns the rank's display name.
    #[must_use]
    pub const fn rank_name(&self) -> &'static str {
        match self.rank {
            1 => "Ace",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "Jack",
            12 => "Queen",
            13 => "King",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank_name(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Rank that may be played on anything and lets the player declare a suit.
pub const WILD_RANK: u8 = 8;

/// Rank that forces the opponent to draw two cards.
pub const DRAW_TWO_RANK: u8 = 2;

/// Rank that skips the opponent's next turn (Queen).
pub const SKIP_RANK: u8 = 12;
