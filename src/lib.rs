//! A two-player Crazy Eights game engine with betting and optional `no_std`
//! support.
//!
//! The crate provides a [`Game`] type that manages the full round flow,
//! including wagers, drawing with deck refills, legal-play checks, special
//! cards, and payout. A [`Session`] drives a game from an [`InputProvider`],
//! which is how a terminal shell or a test script plugs in.
//!
//! # Example
//!
//! ```
//! use crazy8s::{Game, GameOptions, GameState};
//!
//! let mut game = Game::new(["Alice", "Bob"], GameOptions::default(), 42);
//! game.place_bet(0, 100).unwrap();
//! game.place_bet(1, 50).unwrap();
//! assert_eq!(game.state(), GameState::AwaitingMove);
//! assert_eq!(game.pot(), 150);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod collection;
pub mod deck;
pub mod discard;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, DRAW_TWO_RANK, SKIP_RANK, Suit, WILD_RANK};
pub use collection::CardCollection;
pub use deck::Deck;
pub use discard::DiscardPile;
pub use error::{
    ActionError, BetError, DeckError, InputError, PileError, RefillError, RoundError, SuitError,
};
pub use game::{Game, GameState, PLAYER_COUNT, PendingEffects, PlayEffects, opponent};
pub use hand::Hand;
pub use options::{GameOptions, MAX_HAND_SIZE, MAX_STARTING_MONEY, ShuffleMode};
pub use result::{PassOutcome, PlayOutcome, RoundResult, TurnChange};
pub use session::{InputProvider, Session, SessionEvent, SessionSummary, TurnAction};
