//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Player has already wagered this round.
    #[error("player has already wagered this round")]
    AlreadyBet,
    /// Bet amount is zero and zero bets are disabled.
    #[error("bet amount is zero")]
    ZeroBet,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Card selection outside the hand.
    #[error("no card at that position")]
    InvalidCardIndex,
    /// Card matches neither the current suit nor the top card's rank.
    #[error("cannot discard that card")]
    IllegalPlay,
    /// The deck is empty and cannot be refilled.
    #[error("no cards left to draw")]
    EmptyDeck,
    /// Passing is only allowed when nothing can be played or drawn.
    #[error("a play or draw is still possible")]
    MovesAvailable,
}

/// Errors that can occur when declaring a suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuitError {
    /// No suit declaration is pending.
    #[error("no suit declaration is pending")]
    InvalidState,
    /// Another player owes the declaration.
    #[error("not this player's declaration")]
    NotYourTurn,
    /// Suit outside the four valid values.
    #[error("invalid suit choice")]
    InvalidSuitChoice,
}

/// Errors that can occur when refilling the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RefillError {
    /// The discard pile holds only its top card.
    #[error("discard pile has no cards to recycle")]
    NoRefillPossible,
}

/// Errors raised by the deck itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Pop attempted on an empty deck.
    #[error("deck is empty")]
    EmptyDeck,
}

/// Errors raised by the discard pile itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// The pile has never received a card.
    #[error("discard pile is empty")]
    EmptyPile,
}

/// Errors that can occur when starting or ending a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The session has ended.
    #[error("session is over")]
    SessionOver,
    /// Wagers are staked on a round still in play.
    #[error("round still in progress")]
    RoundInProgress,
}

/// An engine error raised by input the session forwarded.
///
/// The session reports these and asks for the same input again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// A wager was refused.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// A draw, play, or pass was refused.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// A suit declaration was refused.
    #[error(transparent)]
    Suit(#[from] SuitError),
}
