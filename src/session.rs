//! Session driver that runs rounds from an injected input source.
//!
//! The [`Session`] state machine follows [`GameState`]: it asks the
//! [`InputProvider`] for whatever the current state needs, forwards it to the
//! [`Game`], and reports what happened through [`InputProvider::notify`].
//! Refused input is reported as [`SessionEvent::Rejected`] and asked for again.

extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::{Card, Suit};
use crate::error::InputError;
use crate::game::{Game, GameState, PLAYER_COUNT};
use crate::result::{PassOutcome, PlayOutcome, RoundResult, TurnChange};

/// A move chosen by the player whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAction {
    /// Draw one card from the deck.
    Draw,
    /// Discard the card at this 1-based index.
    Play(usize),
    /// Pass; only accepted when nothing can be played or drawn.
    Pass,
}

/// Something the session did on a player's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A wager was accepted.
    BetPlaced {
        /// The wagering player.
        player: usize,
        /// The amount added to the pot.
        amount: usize,
    },
    /// A player's turn began.
    TurnStarted {
        /// The player to move.
        player: usize,
    },
    /// A player's turn was skipped by a Queen.
    TurnSkipped {
        /// The skipped player.
        player: usize,
    },
    /// A player was forced to draw by a two.
    ForcedDraw {
        /// The drawing player.
        player: usize,
        /// The cards drawn.
        cards: Vec<Card>,
        /// Whether the deck gave out before two cards were drawn.
        deck_exhausted: bool,
    },
    /// A player drew from the deck.
    Drew {
        /// The drawing player.
        player: usize,
        /// The cards drawn.
        cards: Vec<Card>,
    },
    /// A player discarded a card.
    Played {
        /// The discarding player.
        player: usize,
        /// The card discarded.
        card: Card,
    },
    /// A player declared the suit to follow.
    SuitDeclared {
        /// The declaring player.
        player: usize,
        /// The declared suit.
        suit: Suit,
    },
    /// Input was refused; the same input will be asked for again.
    Rejected {
        /// The player whose input was refused.
        player: usize,
        /// Why it was refused.
        error: InputError,
    },
    /// The round was settled.
    RoundOver(RoundResult),
}

/// Source of player decisions.
///
/// Returning `None` from any prompt means the player quit; the session then
/// ends and any wagers still in play are returned.
pub trait InputProvider {
    /// Asks `player` how much to wager this round.
    fn wager(&mut self, game: &Game, player: usize) -> Option<usize>;

    /// Asks `player` for their next move.
    fn turn_action(&mut self, game: &Game, player: usize) -> Option<TurnAction>;

    /// Asks `player` for a suit after a wild card (1 = Clubs .. 4 = Spades).
    fn suit_choice(&mut self, game: &Game, player: usize) -> Option<u8>;

    /// Asks whether to play another round.
    fn play_again(&mut self, game: &Game, result: &RoundResult) -> bool;

    /// Observes an event. Does nothing by default.
    fn notify(&mut self, game: &Game, event: &SessionEvent) {
        let _ = (game, event);
    }
}

/// Totals reported when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds that reached settlement.
    pub rounds_played: usize,
    /// Both players' final money.
    pub money: [usize; PLAYER_COUNT],
}

/// Drives a [`Game`] through rounds until a player quits.
pub struct Session<P> {
    game: Game,
    provider: P,
    rounds_played: usize,
    turn_announced: bool,
}

impl<P: InputProvider> Session<P> {
    /// Creates a session around a freshly dealt game.
    #[must_use]
    pub const fn new(game: Game, provider: P) -> Self {
        Self {
            game,
            provider,
            rounds_played: 0,
            turn_announced: false,
        }
    }

    /// Returns the game.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the input provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Consumes the session, returning the game and the provider.
    pub fn into_parts(self) -> (Game, P) {
        (self.game, self.provider)
    }

    /// Runs until the session is over.
    pub fn run(&mut self) -> SessionSummary {
        while self.step() {}
        self.summary()
    }

    /// Returns the totals so far.
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            rounds_played: self.rounds_played,
            money: [self.game.hands[0].money(), self.game.hands[1].money()],
        }
    }

    /// Handles one input for the current state.
    ///
    /// Returns `false` once the session is over.
    pub fn step(&mut self) -> bool {
        match self.game.state() {
            GameState::AwaitingBets => self.collect_bet(),
            GameState::AwaitingMove => self.take_turn(),
            GameState::AwaitingSuitDeclaration => self.take_suit(),
            GameState::RoundOver => self.finish_round(),
            GameState::SessionOver => return false,
        }
        self.game.state() != GameState::SessionOver
    }

    fn emit(&mut self, event: &SessionEvent) {
        self.provider.notify(&self.game, event);
    }

    fn reject(&mut self, player: usize, error: impl Into<InputError>) {
        let error = error.into();
        debug!(player, %error, "input rejected");
        self.emit(&SessionEvent::Rejected { player, error });
    }

    fn quit(&mut self) {
        debug!("player quit");
        self.game.end_session();
    }

    fn collect_bet(&mut self) {
        let Some(player) = (0..PLAYER_COUNT).find(|&p| self.game.bet(p).is_none()) else {
            return;
        };
        let Some(amount) = self.provider.wager(&self.game, player) else {
            self.quit();
            return;
        };

        match self.game.place_bet(player, amount) {
            Ok(()) => self.emit(&SessionEvent::BetPlaced { player, amount }),
            Err(err) => self.reject(player, err),
        }
    }

    fn take_turn(&mut self) {
        let player = self.game.current_player();
        if !self.turn_announced {
            self.turn_announced = true;
            self.emit(&SessionEvent::TurnStarted { player });
        }

        let Some(action) = self.provider.turn_action(&self.game, player) else {
            self.quit();
            return;
        };

        match action {
            TurnAction::Draw => match self.game.draw(player, 1) {
                Ok(cards) => self.emit(&SessionEvent::Drew { player, cards }),
                Err(err) => self.reject(player, err),
            },
            TurnAction::Play(index) => match self.game.play_card(player, index) {
                Ok(outcome) => {
                    if let Ok(card) = self.game.top_card() {
                        self.emit(&SessionEvent::Played { player, card });
                    }
                    match outcome {
                        PlayOutcome::TurnPassed(change) => self.report_turn_change(change),
                        PlayOutcome::SuitRequired | PlayOutcome::RoundWon(_) => {}
                    }
                }
                Err(err) => self.reject(player, err),
            },
            TurnAction::Pass => match self.game.pass(player) {
                Ok(PassOutcome::TurnPassed(change)) => self.report_turn_change(change),
                Ok(PassOutcome::Stalemate(_)) => {}
                Err(err) => self.reject(player, err),
            },
        }
    }

    fn take_suit(&mut self) {
        let player = self.game.current_player();
        let Some(choice) = self.provider.suit_choice(&self.game, player) else {
            self.quit();
            return;
        };

        let suit = match Suit::from_choice(choice) {
            Ok(suit) => suit,
            Err(err) => {
                self.reject(player, err);
                return;
            }
        };

        match self.game.declare_suit(player, suit) {
            Ok(change) => {
                self.emit(&SessionEvent::SuitDeclared { player, suit });
                self.report_turn_change(change);
            }
            Err(err) => self.reject(player, err),
        }
    }

    fn report_turn_change(&mut self, change: TurnChange) {
        self.turn_announced = false;

        if let Some(player) = change.skipped {
            self.emit(&SessionEvent::TurnSkipped { player });
        }
        if !change.forced_draw.is_empty() || change.deck_exhausted {
            self.emit(&SessionEvent::ForcedDraw {
                player: change.player,
                cards: change.forced_draw,
                deck_exhausted: change.deck_exhausted,
            });
        }
    }

    fn finish_round(&mut self) {
        self.turn_announced = false;
        let Some(result) = self.game.last_result() else {
            self.game.end_session();
            return;
        };

        self.rounds_played += 1;
        self.emit(&SessionEvent::RoundOver(result));

        if !self.provider.play_again(&self.game, &result) || self.game.reset_round().is_err() {
            self.game.end_session();
        }
    }
}
