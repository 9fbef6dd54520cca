extern crate alloc;

use alloc::vec::Vec;

use tracing::debug;

use crate::card::{Card, Suit};
use crate::collection::CardCollection;
use crate::error::{ActionError, SuitError};
use crate::result::{PassOutcome, PlayOutcome, TurnChange};

use super::{Game, GameState, PLAYER_COUNT, PlayEffects, opponent};

impl Game {
    fn ensure_player_turn(&self, player: usize) -> Result<(), ActionError> {
        if player >= PLAYER_COUNT {
            return Err(ActionError::PlayerNotFound);
        }

        if self.state != GameState::AwaitingMove {
            return Err(ActionError::InvalidState);
        }

        if self.current_player != player {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Returns whether `card` may be discarded onto the pile.
    ///
    /// Eights are always playable. Any other card must follow the current
    /// suit or match the top card's rank, so only eights go onto an empty pile.
    #[must_use]
    pub fn is_legal_play(&self, card: &Card) -> bool {
        if card.is_wild() {
            return true;
        }

        self.discard.top_card().is_ok_and(|top| {
            card.suit == self.discard.current_suit() || top.rank == card.rank
        })
    }

    /// Returns the 1-based indices of the cards a player could discard.
    #[must_use]
    pub fn legal_plays(&self, player: usize) -> Vec<usize> {
        self.hands.get(player).map_or_else(Vec::new, |hand| {
            hand.cards()
                .iter()
                .enumerate()
                .filter(|(_, card)| self.is_legal_play(card))
                .map(|(position, _)| position + 1)
                .collect()
        })
    }

    /// Returns whether a player holds at least one playable card.
    #[must_use]
    pub fn has_legal_move(&self, player: usize) -> bool {
        self.hands
            .get(player)
            .is_some_and(|hand| hand.cards().iter().any(|card| self.is_legal_play(card)))
    }

    /// Player action: draw `count` cards from the deck.
    ///
    /// The deck is refilled from the discard pile whenever it runs dry. Drawing
    /// does not end the turn. Returns the cards drawn, which may be fewer than
    /// `count` if the deck gives out part way.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move, it is not the
    /// player's turn, or no card at all could be drawn.
    pub fn draw(&mut self, player: usize, count: usize) -> Result<Vec<Card>, ActionError> {
        self.ensure_player_turn(player)?;

        let (drawn, _) = self.draw_cards(player, count);
        if drawn.is_empty() && count > 0 {
            debug!(player, "draw refused: deck exhausted");
            return Err(ActionError::EmptyDeck);
        }

        self.consecutive_passes = 0;
        Ok(drawn)
    }

    /// Player action: discard the card at 1-based `index`.
    ///
    /// A wild card leaves the game waiting for [`Game::declare_suit`]. Emptying
    /// the hand wins the round at once, with no suit declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move, it is not the
    /// player's turn, the index is outside the hand, or the card cannot be
    /// played. Nothing changes on error.
    pub fn play_card(&mut self, player: usize, index: usize) -> Result<PlayOutcome, ActionError> {
        self.ensure_player_turn(player)?;

        let card = *self.hands[player]
            .card_at(index)
            .ok_or(ActionError::InvalidCardIndex)?;

        if !self.is_legal_play(&card) {
            debug!(player, %card, suit = %self.discard.current_suit(), "illegal play");
            return Err(ActionError::IllegalPlay);
        }

        self.hands[player].remove_at(index - 1);
        self.discard.add_card(card);
        self.consecutive_passes = 0;
        self.pending.schedule(PlayEffects::of(&card));

        if self.hands[player].is_empty() {
            return Ok(PlayOutcome::RoundWon(self.settle_win(player)));
        }

        if self.pending.choose_suit {
            self.state = GameState::AwaitingSuitDeclaration;
            return Ok(PlayOutcome::SuitRequired);
        }

        Ok(PlayOutcome::TurnPassed(self.advance_turn()))
    }

    /// Declares the suit to follow after a wild card and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no declaration is pending or `player` did not play
    /// the wild card.
    pub fn declare_suit(&mut self, player: usize, suit: Suit) -> Result<TurnChange, SuitError> {
        if self.state != GameState::AwaitingSuitDeclaration {
            return Err(SuitError::InvalidState);
        }

        if self.current_player != player {
            return Err(SuitError::NotYourTurn);
        }

        self.discard.set_current_suit(suit);
        self.pending.choose_suit = false;
        Ok(self.advance_turn())
    }

    /// Player action: pass when nothing can be played or drawn.
    ///
    /// Two passes in a row end the round in a stalemate and return the wagers.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not awaiting a move, it is not the
    /// player's turn, or the player could still draw or play.
    pub fn pass(&mut self, player: usize) -> Result<PassOutcome, ActionError> {
        self.ensure_player_turn(player)?;

        if !self.deck_exhausted() || self.has_legal_move(player) {
            return Err(ActionError::MovesAvailable);
        }

        self.consecutive_passes += 1;
        if self.consecutive_passes >= PLAYER_COUNT {
            return Ok(PassOutcome::Stalemate(self.settle_stalemate()));
        }

        Ok(PassOutcome::TurnPassed(self.advance_turn()))
    }

    /// Hands the turn to the opponent, consuming a pending skip and then a
    /// pending draw-two.
    fn advance_turn(&mut self) -> TurnChange {
        let mut next = opponent(self.current_player);
        let mut skipped = None;

        if self.pending.skip_turn {
            self.pending.skip_turn = false;
            skipped = Some(next);
            next = opponent(next);
        }

        self.current_player = next;
        self.state = GameState::AwaitingMove;

        let (forced_draw, deck_exhausted) = if self.pending.draw_two {
            self.pending.draw_two = false;
            self.draw_cards(next, 2)
        } else {
            (Vec::new(), false)
        };

        debug!(
            player = next,
            ?skipped,
            forced = forced_draw.len(),
            "turn passed"
        );

        TurnChange {
            player: next,
            skipped,
            forced_draw,
            deck_exhausted,
        }
    }
}
