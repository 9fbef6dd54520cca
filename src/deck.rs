//! The draw deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::collection::CardCollection;
use crate::error::DeckError;
use crate::hand::Hand;
use crate::options::ShuffleMode;

/// The deck players draw from.
///
/// Cards are dealt and drawn from the end of the sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a deck holding exactly the given cards, last card on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Builds the standard 52-card deck in suit-major, rank-minor order.
    #[must_use]
    pub fn build_standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in 1..=13 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, mode: ShuffleMode) {
        match mode {
            ShuffleMode::FisherYates => self.cards.shuffle(rng),
            ShuffleMode::FullRangeSwap => {
                let n = self.cards.len();
                for i in 0..n {
                    let j = rng.random_range(0..n);
                    self.cards.swap(i, j);
                }
            }
        }
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck has no cards.
    pub fn pop_last(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }

    /// Deals up to `count` cards one at a time, cycling through `recipients`
    /// in order.
    ///
    /// Stops early when the deck runs out; the deck never refills itself here.
    /// Returns the number of cards dealt.
    pub fn deal(&mut self, recipients: &mut [Hand], count: usize) -> usize {
        if recipients.is_empty() {
            return 0;
        }

        let mut dealt = 0;
        while dealt < count {
            let Some(card) = self.cards.pop() else {
                break;
            };
            recipients[dealt % recipients.len()].add_card(card);
            dealt += 1;
        }
        dealt
    }

    /// Inserts recycled cards at the bottom of the deck.
    pub fn absorb(&mut self, cards: Vec<Card>) {
        self.cards.splice(0..0, cards);
    }
}

impl CardCollection for Deck {
    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn cards_mut(&mut self) -> &mut Vec<Card> {
        &mut self.cards
    }
}
