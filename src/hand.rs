//! Player hands.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::collection::CardCollection;

/// A player's hand, identity, and bankroll.
///
/// The hand lives for the whole session: cards are cleared and redealt each
/// round while the money balance carries over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Player display name.
    name: String,
    /// Money available for wagers.
    money: usize,
}

impl Hand {
    /// Creates a new empty hand for the named player.
    #[must_use]
    pub fn new(name: impl Into<String>, money: usize) -> Self {
        Self {
            cards: Vec::new(),
            name: name.into(),
            money,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's money balance.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the card at a 1-based display index.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        index.checked_sub(1).and_then(|position| self.cards.get(position))
    }

    pub(crate) const fn withdraw(&mut self, amount: usize) {
        self.money -= amount;
    }

    pub(crate) const fn deposit(&mut self, amount: usize) {
        self.money += amount;
    }
}

impl CardCollection for Hand {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cards.is_empty() {
            return write!(f, "{}'s hand is empty", self.name);
        }

        write!(f, "{}'s hand contains:", self.name)?;
        for (index, card) in self.cards.iter().enumerate() {
            write!(f, "\n{:>3}. {card}", index + 1)?;
        }
        Ok(())
    }
}
