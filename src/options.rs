//! Game configuration options.

use crate::card::DECK_SIZE;
use crate::game::PLAYER_COUNT;

/// Largest hand size that still leaves a card to seed the discard pile.
pub const MAX_HAND_SIZE: usize = (DECK_SIZE - 1) / 2;

/// Largest bankroll for which every player's money together fits in a `usize`.
pub const MAX_STARTING_MONEY: usize = usize::MAX / PLAYER_COUNT;

/// How the deck is shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ShuffleMode {
    /// Uniform Fisher-Yates shuffle.
    #[default]
    FisherYates,
    /// Swaps every position with an index drawn from the whole deck.
    ///
    /// A valid permutation, but not uniformly distributed.
    FullRangeSwap,
}

/// Configuration options for a Crazy Eights game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use crazy8s::{GameOptions, ShuffleMode};
///
/// let options = GameOptions::default()
///     .with_hand_size(7)
///     .with_starting_money(1_000)
///     .with_shuffle(ShuffleMode::FullRangeSwap);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Cards dealt to each player at the start of a round.
    pub hand_size: usize,
    /// Money each player starts the session with.
    pub starting_money: usize,
    /// Shuffle algorithm used for new decks and refills.
    pub shuffle: ShuffleMode,
    /// Whether a wager of zero is accepted.
    pub zero_bets: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hand_size: 6,
            starting_money: 500,
            shuffle: ShuffleMode::FisherYates,
            zero_bets: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of cards dealt to each player.
    ///
    /// Values above [`MAX_HAND_SIZE`] are clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{GameOptions, MAX_HAND_SIZE};
    ///
    /// let options = GameOptions::default().with_hand_size(8);
    /// assert_eq!(options.hand_size, 8);
    ///
    /// let options = GameOptions::default().with_hand_size(40);
    /// assert_eq!(options.hand_size, MAX_HAND_SIZE);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = if hand_size > MAX_HAND_SIZE {
            MAX_HAND_SIZE
        } else {
            hand_size
        };
        self
    }

    /// Sets the starting money for both players.
    ///
    /// Values above [`MAX_STARTING_MONEY`] are clamped.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{GameOptions, MAX_STARTING_MONEY};
    ///
    /// let options = GameOptions::default().with_starting_money(250);
    /// assert_eq!(options.starting_money, 250);
    ///
    /// let options = GameOptions::default().with_starting_money(usize::MAX);
    /// assert_eq!(options.starting_money, MAX_STARTING_MONEY);
    /// ```
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = if money > MAX_STARTING_MONEY {
            MAX_STARTING_MONEY
        } else {
            money
        };
        self
    }

    /// Sets the shuffle algorithm.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{GameOptions, ShuffleMode};
    ///
    /// let options = GameOptions::default().with_shuffle(ShuffleMode::FullRangeSwap);
    /// assert_eq!(options.shuffle, ShuffleMode::FullRangeSwap);
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, mode: ShuffleMode) -> Self {
        self.shuffle = mode;
        self
    }

    /// Sets whether zero wagers are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_zero_bets(false);
    /// assert!(!options.zero_bets);
    /// ```
    #[must_use]
    pub const fn with_zero_bets(mut self, allowed: bool) -> Self {
        self.zero_bets = allowed;
        self
    }
}
