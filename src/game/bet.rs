use tracing::info;

use crate::error::BetError;
use crate::result::RoundResult;

use super::{Game, GameState, PendingEffects};

impl Game {
    /// Places a wager for the specified player and adds it to the pot.
    ///
    /// Once both players have wagered, play begins with player `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not taking bets, the wager is zero while
    /// zero bets are disabled, the player cannot be found, the player lacks
    /// funds, or the player has already wagered this round.
    pub fn place_bet(&mut self, player: usize, amount: usize) -> Result<(), BetError> {
        if self.state != GameState::AwaitingBets {
            return Err(BetError::InvalidState);
        }

        if amount == 0 && !self.options.zero_bets {
            return Err(BetError::ZeroBet);
        }

        let hand = self
            .hands
            .get_mut(player)
            .ok_or(BetError::PlayerNotFound)?;

        if hand.money() < amount {
            return Err(BetError::InsufficientFunds);
        }

        if self.bets[player].is_some() {
            return Err(BetError::AlreadyBet);
        }

        hand.withdraw(amount);
        self.pot += amount;
        self.bets[player] = Some(amount);

        if self.bets.iter().all(Option::is_some) {
            self.current_player = 0;
            self.state = GameState::AwaitingMove;
        }

        Ok(())
    }

    /// Pays the pot to `winner` and closes the round.
    pub(super) fn settle_win(&mut self, winner: usize) -> RoundResult {
        self.hands[winner].deposit(self.pot);
        info!(
            winner = self.hands[winner].name(),
            payout = self.pot,
            "round won"
        );
        self.close_round(Some(winner), self.pot)
    }

    /// Returns every wager and closes the round without a winner.
    pub(super) fn settle_stalemate(&mut self) -> RoundResult {
        let refunded = self.refund_wagers();
        info!(refunded, "round ended in a stalemate");
        self.close_round(None, refunded)
    }

    /// Returns staked wagers to their players and empties the pot.
    pub(super) fn refund_wagers(&mut self) -> usize {
        let mut refunded = 0;
        for (hand, bet) in self.hands.iter_mut().zip(&mut self.bets) {
            if let Some(amount) = bet.take() {
                hand.deposit(amount);
                refunded += amount;
            }
        }
        self.pot = 0;
        refunded
    }

    fn close_round(&mut self, winner: Option<usize>, pot: usize) -> RoundResult {
        let result = RoundResult {
            winner,
            pot,
            money: [self.hands[0].money(), self.hands[1].money()],
        };
        self.pending = PendingEffects::default();
        self.consecutive_passes = 0;
        self.last_result = Some(result);
        self.state = GameState::RoundOver;
        result
    }
}
