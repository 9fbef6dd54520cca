//! The discard pile.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Suit};
use crate::collection::CardCollection;
use crate::error::PileError;

/// The discard pile and the suit that the next play must follow.
///
/// `current_suit` tracks the suit of the last card added unless a player
/// declares a different one after playing a wild card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardPile {
    cards: Vec<Card>,
    current_suit: Suit,
}

impl DiscardPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            current_suit: Suit::Clubs,
        }
    }

    /// Adds a card to the top and follows its suit.
    pub fn add_card(&mut self, card: Card) {
        self.push_card(card);
    }

    /// Returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::EmptyPile`] if no card has been discarded yet.
    pub fn top_card(&self) -> Result<Card, PileError> {
        self.cards.last().copied().ok_or(PileError::EmptyPile)
    }

    /// Returns the suit the next play must follow.
    #[must_use]
    pub const fn current_suit(&self) -> Suit {
        self.current_suit
    }

    /// Overrides the suit to follow.
    pub const fn set_current_suit(&mut self, suit: Suit) {
        self.current_suit = suit;
    }

    /// Removes every card below the top one, bottom first.
    ///
    /// The top card and the current suit are left in place.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        let Some(top) = self.cards.pop() else {
            return Vec::new();
        };
        let rest = core::mem::take(&mut self.cards);
        self.cards.push(top);
        rest
    }
}

impl Default for DiscardPile {
    fn default() -> Self {
        Self::new()
    }
}

impl CardCollection for DiscardPile {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }

    fn push_card(&mut self, card: Card) {
        self.cards.push(card);
        self.current_suit = card.suit;
    }
}

impl fmt::Display for DiscardPile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top_card() {
            Ok(top) => write!(f, "Top of discard pile: {top}")?,
            Err(_) => f.write_str("Discard pile is empty")?,
        }
        write!(f, "\nCurrent suit: {}", self.current_suit)
    }
}
