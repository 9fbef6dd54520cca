//! Game engine and state management.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::card::{Card, Suit};
use crate::collection::CardCollection;
use crate::deck::Deck;
use crate::discard::DiscardPile;
use crate::error::{PileError, RefillError, RoundError};
use crate::hand::Hand;
use crate::options::{GameOptions, MAX_HAND_SIZE, MAX_STARTING_MONEY};
use crate::result::RoundResult;

mod actions;
mod bet;
pub mod state;

pub use state::{GameState, PendingEffects, PlayEffects};

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;

/// Returns the other player.
#[must_use]
pub const fn opponent(player: usize) -> usize {
    (player + 1) % PLAYER_COUNT
}

/// A Crazy Eights game engine for two players.
///
/// The game owns the deck, both hands, the discard pile, and the pot. Players
/// are addressed by index (`0` or `1`); player `0` leads every round. Use
/// [`GameOptions`] to configure hand size, bankrolls, and shuffling.
pub struct Game {
    /// Cards left to draw.
    pub deck: Deck,
    /// Both players' hands, indexed by player.
    pub hands: [Hand; PLAYER_COUNT],
    /// The discard pile.
    pub discard: DiscardPile,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Player whose move it is.
    current_player: usize,
    /// Effects waiting to be consumed.
    pending: PendingEffects,
    /// Sum of this round's wagers.
    pot: usize,
    /// Wager per player for this round.
    bets: [Option<usize>; PLAYER_COUNT],
    /// Passes in a row without a play or draw in between.
    consecutive_passes: usize,
    /// Settlement of the most recent round.
    last_result: Option<RoundResult>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed and deals the first round.
    ///
    /// Bankrolls above [`MAX_STARTING_MONEY`] are clamped so the money in play
    /// can never overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(["Alice", "Bob"], GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::AwaitingBets);
    /// assert_eq!(game.cards_remaining(), 39);
    /// ```
    #[must_use]
    pub fn new<N: Into<String>>(names: [N; PLAYER_COUNT], options: GameOptions, seed: u64) -> Self {
        let [first, second] = names;
        let money = options.starting_money.min(MAX_STARTING_MONEY);

        let mut game = Self {
            deck: Deck::new(),
            hands: [Hand::new(first, money), Hand::new(second, money)],
            discard: DiscardPile::new(),
            options,
            state: GameState::AwaitingBets,
            current_player: 0,
            pending: PendingEffects::default(),
            pot: 0,
            bets: [None; PLAYER_COUNT],
            consecutive_passes: 0,
            last_result: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.start_round();
        game
    }

    /// Rebuilds and shuffles the deck, deals fresh hands, and seeds the
    /// discard pile. Names and money are untouched.
    fn start_round(&mut self) {
        self.deck = Deck::build_standard();
        self.deck.shuffle(&mut self.rng, self.options.shuffle);

        for hand in &mut self.hands {
            hand.clear();
        }
        let hand_size = self.options.hand_size.min(MAX_HAND_SIZE);
        self.deck.deal(&mut self.hands, hand_size * PLAYER_COUNT);

        self.discard = DiscardPile::new();
        if let Ok(card) = self.deck.pop_last() {
            self.discard.add_card(card);
        }

        self.pending = PendingEffects::default();
        self.pot = 0;
        self.bets = [None; PLAYER_COUNT];
        self.current_player = 0;
        self.consecutive_passes = 0;
        self.last_result = None;
        self.state = GameState::AwaitingBets;
    }

    /// Starts a new round with the same players.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has ended or wagers are staked on a
    /// round that is still in play.
    pub fn reset_round(&mut self) -> Result<(), RoundError> {
        if self.state == GameState::SessionOver {
            return Err(RoundError::SessionOver);
        }
        if self.round_in_play() {
            return Err(RoundError::RoundInProgress);
        }

        self.start_round();
        Ok(())
    }

    /// Ends the session.
    ///
    /// Wagers on a round that never finished are returned to their players.
    pub fn end_session(&mut self) {
        if self.state != GameState::RoundOver && self.state != GameState::SessionOver {
            let refunded = self.refund_wagers();
            if refunded > 0 {
                info!(refunded, "session ended mid-round; wagers returned");
            }
        }
        self.state = GameState::SessionOver;
    }

    fn round_in_play(&self) -> bool {
        match self.state {
            GameState::AwaitingMove | GameState::AwaitingSuitDeclaration => true,
            GameState::AwaitingBets => self.bets.iter().any(Option::is_some),
            GameState::RoundOver | GameState::SessionOver => false,
        }
    }

    /// Moves every discard card except the top one back into the deck and
    /// shuffles it.
    ///
    /// The current suit is kept, so a suit declared after a wild card survives.
    /// Returns the number of cards recycled.
    ///
    /// # Errors
    ///
    /// Returns [`RefillError::NoRefillPossible`] if the discard pile holds
    /// fewer than two cards.
    pub fn refill_deck(&mut self) -> Result<usize, RefillError> {
        if self.discard.len() < 2 {
            return Err(RefillError::NoRefillPossible);
        }

        let recycled = self.discard.take_all_but_top();
        let count = recycled.len();
        self.deck.absorb(recycled);
        self.deck.shuffle(&mut self.rng, self.options.shuffle);

        info!(recycled = count, "refilled deck from discard pile");
        Ok(count)
    }

    /// Draws up to `count` cards into a player's hand, refilling the deck from
    /// the discard pile whenever it runs dry.
    ///
    /// Returns the cards drawn and whether the deck gave out before `count`.
    fn draw_cards(&mut self, player: usize, count: usize) -> (Vec<Card>, bool) {
        let mut drawn = Vec::with_capacity(count);

        for _ in 0..count {
            if self.deck.is_empty() && self.refill_deck().is_err() {
                return (drawn, true);
            }
            let Ok(card) = self.deck.pop_last() else {
                return (drawn, true);
            };
            self.hands[player].add_card(card);
            drawn.push(card);

            if self.deck.is_empty() {
                if let Err(err) = self.refill_deck() {
                    warn!(%err, "deck ran out and cannot be refilled yet");
                }
            }
        }

        (drawn, false)
    }

    /// Returns whether the deck is empty and cannot be refilled.
    #[must_use]
    pub fn deck_exhausted(&self) -> bool {
        self.deck.is_empty() && self.discard.len() < 2
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player whose move it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns a player's hand.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns a player's money balance.
    #[must_use]
    pub fn money(&self, player: usize) -> Option<usize> {
        self.hands.get(player).map(Hand::money)
    }

    /// Returns a player's wager for the current round.
    #[must_use]
    pub fn bet(&self, player: usize) -> Option<usize> {
        self.bets.get(player).copied().flatten()
    }

    /// Returns the pot for the current round.
    #[must_use]
    pub const fn pot(&self) -> usize {
        self.pot
    }

    /// Returns the effects still waiting to be consumed.
    #[must_use]
    pub const fn pending(&self) -> PendingEffects {
        self.pending
    }

    /// Returns the top card of the discard pile.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::EmptyPile`] if nothing has been discarded.
    pub fn top_card(&self) -> Result<Card, PileError> {
        self.discard.top_card()
    }

    /// Returns the suit the next play must follow.
    #[must_use]
    pub const fn current_suit(&self) -> Suit {
        self.discard.current_suit()
    }

    /// Overrides the suit to follow without any turn checks.
    pub const fn set_current_suit(&mut self, suit: Suit) {
        self.discard.set_current_suit(suit);
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the settlement of the last finished round, until the next reset.
    #[must_use]
    pub const fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }
}
