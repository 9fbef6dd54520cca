//! Game state types.

use crate::card::{Card, DRAW_TWO_RANK, SKIP_RANK};

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards are dealt; waiting for both players to wager.
    AwaitingBets,
    /// Waiting for the current player to draw, play, or pass.
    AwaitingMove,
    /// A wild card was played; waiting for its player to declare a suit.
    AwaitingSuitDeclaration,
    /// The round is settled and can be reset.
    RoundOver,
    /// The session has ended; no further rounds are played.
    SessionOver,
}

/// Effects a card has once it is committed to the discard pile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayEffects {
    /// The player must declare the suit to follow.
    pub choose_suit: bool,
    /// The opponent's next turn is skipped.
    pub skip_turn: bool,
    /// The opponent draws two cards at the start of their next turn.
    pub draw_two: bool,
}

impl PlayEffects {
    /// Returns the effects of playing `card`.
    #[must_use]
    pub const fn of(card: &Card) -> Self {
        Self {
            choose_suit: card.is_wild(),
            skip_turn: card.rank == SKIP_RANK,
            draw_two: card.rank == DRAW_TWO_RANK,
        }
    }

    /// Returns whether the card has no special effect.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.choose_suit && !self.skip_turn && !self.draw_two
    }
}

/// Effects scheduled by earlier plays and not yet consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingEffects {
    /// A suit declaration is owed by the player who played a wild card.
    pub choose_suit: bool,
    /// The next player's turn will be skipped.
    pub skip_turn: bool,
    /// The next player will draw two cards before moving.
    pub draw_two: bool,
}

impl PendingEffects {
    pub(crate) const fn schedule(&mut self, effects: PlayEffects) {
        self.choose_suit |= effects.choose_suit;
        self.skip_turn |= effects.skip_turn;
        self.draw_two |= effects.draw_two;
    }
}
