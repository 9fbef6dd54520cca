//! Ordered card collection shared by the deck, hands, and discard pile.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// An ordered sequence of cards.
///
/// Implementors only expose their backing storage; the sequence operations
/// are provided. Insertion order is significant: it is the deal order and the
/// order cards are listed to players.
pub trait CardCollection {
    /// Returns the cards in order.
    fn cards(&self) -> &[Card];

    /// Returns mutable access to the backing storage.
    fn cards_mut(&mut self) -> &mut Vec<Card>;

    /// Returns the number of cards.
    fn len(&self) -> usize {
        self.cards().len()
    }

    /// Returns whether there are no cards.
    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Appends a card at the end.
    fn push_card(&mut self, card: Card) {
        self.cards_mut().push(card);
    }

    /// Removes and returns the last card.
    fn pop_card(&mut self) -> Option<Card> {
        self.cards_mut().pop()
    }

    /// Removes and returns the card at a 0-based position.
    fn remove_at(&mut self, position: usize) -> Option<Card> {
        let cards = self.cards_mut();
        (position < cards.len()).then(|| cards.remove(position))
    }

    /// Returns the card at a 0-based position.
    fn get(&self, position: usize) -> Option<&Card> {
        self.cards().get(position)
    }

    /// Removes every card.
    fn clear(&mut self) {
        self.cards_mut().clear();
    }
}
