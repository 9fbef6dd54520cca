//! Outcome types returned by plays, turn changes, and round ends.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// How the turn moved on after a completed play or pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnChange {
    /// The player whose turn it now is.
    pub player: usize,
    /// The player whose turn was skipped, if a Queen was pending.
    pub skipped: Option<usize>,
    /// Cards the new current player was forced to draw by a pending two.
    pub forced_draw: Vec<Card>,
    /// Whether the forced draw came up short because the deck ran dry.
    pub deck_exhausted: bool,
}

/// Result of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The winning player, or `None` if the round ended in a stalemate.
    pub winner: Option<usize>,
    /// Amount paid to the winner, or refunded in total on a stalemate.
    pub pot: usize,
    /// Both players' money after settlement.
    pub money: [usize; 2],
}

/// Result of a successful [`Game::play_card`](crate::Game::play_card).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The play is complete and the turn has passed.
    TurnPassed(TurnChange),
    /// A wild card was played; the same player must now declare a suit.
    SuitRequired,
    /// The player emptied their hand and collected the pot.
    RoundWon(RoundResult),
}

/// Result of a successful [`Game::pass`](crate::Game::pass).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// The turn has passed to the opponent.
    TurnPassed(TurnChange),
    /// Both players passed in a row; wagers were refunded.
    Stalemate(RoundResult),
}
