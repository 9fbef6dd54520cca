//! Game integration tests.

use crazy8s::{
    ActionError, BetError, Card, CardCollection, DECK_SIZE, Deck, DiscardPile, Game, GameOptions,
    GameState, MAX_HAND_SIZE, MAX_STARTING_MONEY, PassOutcome, PlayOutcome, RefillError,
    RoundError, Suit, SuitError,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn new_game(seed: u64) -> Game {
    Game::new(["Alice", "Bob"], GameOptions::default(), seed)
}

fn set_deck_from_draws(game: &mut Game, draws: &[Card]) {
    let mut deck: Vec<Card> = draws.to_vec();
    deck.reverse();
    game.deck = Deck::from_cards(deck);
}

fn set_hand(game: &mut Game, player: usize, cards: &[Card]) {
    let hand = &mut game.hands[player];
    hand.clear();
    for &c in cards {
        hand.add_card(c);
    }
}

fn set_discard(game: &mut Game, cards: &[Card]) {
    game.discard = DiscardPile::new();
    for &c in cards {
        game.discard.add_card(c);
    }
}

fn start_play(game: &mut Game) {
    game.place_bet(0, 100).unwrap();
    game.place_bet(1, 50).unwrap();
    assert_eq!(game.state(), GameState::AwaitingMove);
}

#[test]
fn fresh_round_deals_six_each_and_seeds_discard() {
    let game = new_game(1);

    assert_eq!(game.state(), GameState::AwaitingBets);
    assert_eq!(game.hands[0].len(), 6);
    assert_eq!(game.hands[1].len(), 6);
    assert_eq!(game.discard.len(), 1);
    assert_eq!(game.cards_remaining(), 39);
    assert_eq!(game.pot(), 0);
    assert_eq!(game.pending(), crazy8s::PendingEffects::default());
    assert_eq!(game.current_suit(), game.top_card().unwrap().suit);
    assert_eq!(game.money(0), Some(500));
    assert_eq!(game.hands[0].name(), "Alice");
}

#[test]
fn fresh_round_accounts_for_every_card_once() {
    let game = new_game(2);

    let mut all: Vec<Card> = game
        .deck
        .cards()
        .iter()
        .chain(game.hands[0].cards())
        .chain(game.hands[1].cards())
        .chain(game.discard.cards())
        .copied()
        .collect();
    all.sort();

    assert_eq!(all.len(), DECK_SIZE);
    assert_eq!(all, Deck::build_standard().cards());
}

#[test]
fn same_seed_deals_same_round() {
    let a = new_game(99);
    let b = new_game(99);
    assert_eq!(a.hands, b.hands);
    assert_eq!(a.deck, b.deck);
    assert_eq!(a.discard, b.discard);
}

#[test]
fn custom_hand_size_is_dealt() {
    let game = Game::new(
        ["Alice", "Bob"],
        GameOptions::default().with_hand_size(8).with_starting_money(20),
        3,
    );
    assert_eq!(game.hands[0].len(), 8);
    assert_eq!(game.hands[1].len(), 8);
    assert_eq!(game.cards_remaining(), DECK_SIZE - 17);
    assert_eq!(game.money(1), Some(20));
}

#[test]
fn bet_errors() {
    let mut game = Game::new(
        ["Alice", "Bob"],
        GameOptions::default().with_zero_bets(false),
        1,
    );

    assert_eq!(game.place_bet(0, 0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        game.place_bet(0, 501).unwrap_err(),
        BetError::InsufficientFunds
    );
    assert_eq!(game.place_bet(2, 1).unwrap_err(), BetError::PlayerNotFound);

    game.place_bet(0, 10).unwrap();
    assert_eq!(game.place_bet(0, 10).unwrap_err(), BetError::AlreadyBet);
    assert_eq!(game.state(), GameState::AwaitingBets);

    game.place_bet(1, 10).unwrap();
    assert_eq!(game.place_bet(1, 10).unwrap_err(), BetError::InvalidState);
}

#[test]
fn zero_bet_outside_betting_reports_state() {
    let mut game = Game::new(
        ["Alice", "Bob"],
        GameOptions::default().with_zero_bets(false),
        1,
    );
    game.place_bet(0, 10).unwrap();
    game.place_bet(1, 10).unwrap();

    assert_eq!(game.place_bet(0, 0).unwrap_err(), BetError::InvalidState);
}

#[test]
fn huge_bankrolls_are_clamped_and_settle_without_overflow() {
    let options = GameOptions {
        starting_money: usize::MAX,
        ..GameOptions::default()
    };
    let mut game = Game::new(["Alice", "Bob"], options, 3);
    assert_eq!(game.money(0), Some(MAX_STARTING_MONEY));

    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Hearts, 3)]);
    game.place_bet(0, MAX_STARTING_MONEY).unwrap();
    game.place_bet(1, MAX_STARTING_MONEY).unwrap();
    assert_eq!(game.pot(), 2 * MAX_STARTING_MONEY);

    let PlayOutcome::RoundWon(result) = game.play_card(0, 1).unwrap() else {
        panic!("expected a win");
    };
    assert_eq!(result.money, [2 * MAX_STARTING_MONEY, 0]);

    let options = GameOptions::default().with_starting_money(usize::MAX);
    let mut game = Game::new(["Alice", "Bob"], options, 3);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Hearts, 3)]);
    game.place_bet(0, 0).unwrap();
    game.place_bet(1, 1).unwrap();
    game.play_card(0, 1).unwrap();
    assert_eq!(game.money(0), Some(MAX_STARTING_MONEY + 1));
}

#[test]
fn oversized_hand_field_still_seeds_discard() {
    let options = GameOptions {
        hand_size: 26,
        ..GameOptions::default()
    };
    let game = Game::new(["Alice", "Bob"], options, 1);

    assert_eq!(game.hands[0].len(), MAX_HAND_SIZE);
    assert_eq!(game.hands[1].len(), MAX_HAND_SIZE);
    assert_eq!(game.discard.len(), 1);
    assert!(game.top_card().is_ok());
    assert_eq!(game.cards_remaining(), DECK_SIZE - 2 * MAX_HAND_SIZE - 1);
}

#[test]
fn empty_pile_accepts_only_eights() {
    let mut game = new_game(4);
    game.discard = DiscardPile::new();

    assert!(!game.is_legal_play(&card(Suit::Clubs, 3)));
    assert!(!game.is_legal_play(&card(Suit::Hearts, 3)));
    assert!(game.is_legal_play(&card(Suit::Diamonds, 8)));
}

#[test]
fn zero_bets_are_accepted_by_default() {
    let mut game = new_game(1);
    game.place_bet(0, 0).unwrap();
    game.place_bet(1, 0).unwrap();
    assert_eq!(game.pot(), 0);
    assert_eq!(game.state(), GameState::AwaitingMove);
}

#[test]
fn wagering_whole_bankroll_leaves_nothing_to_bet() {
    let mut game = new_game(5);

    game.place_bet(0, 500).unwrap();
    assert_eq!(game.money(0), Some(0));
    assert_eq!(game.pot(), 500);
    assert_eq!(game.bet(0), Some(500));

    assert_eq!(
        game.place_bet(0, 1).unwrap_err(),
        BetError::InsufficientFunds
    );
}

#[test]
fn legality_follows_suit_or_rank() {
    let mut game = new_game(3);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);

    assert_eq!(game.current_suit(), Suit::Hearts);
    assert!(game.is_legal_play(&card(Suit::Hearts, 3)));
    assert!(game.is_legal_play(&card(Suit::Spades, 7)));
    assert!(!game.is_legal_play(&card(Suit::Clubs, 3)));
    assert!(game.is_legal_play(&card(Suit::Clubs, 8)));
}

#[test]
fn declared_suit_overrides_top_card_suit() {
    let mut game = new_game(3);
    set_discard(&mut game, &[card(Suit::Hearts, 8)]);
    game.set_current_suit(Suit::Spades);

    assert!(game.is_legal_play(&card(Suit::Spades, 4)));
    assert!(!game.is_legal_play(&card(Suit::Hearts, 4)));
    assert!(game.is_legal_play(&card(Suit::Diamonds, 8)));
}

#[test]
fn legal_plays_lists_one_based_indices() {
    let mut game = new_game(3);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(
        &mut game,
        0,
        &[
            card(Suit::Clubs, 3),
            card(Suit::Hearts, 9),
            card(Suit::Spades, 5),
            card(Suit::Diamonds, 8),
        ],
    );

    assert_eq!(game.legal_plays(0), vec![2, 4]);
    assert!(game.has_legal_move(0));
    assert!(game.legal_plays(2).is_empty());
}

#[test]
fn play_errors_leave_state_untouched() {
    let mut game = new_game(4);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Clubs, 3), card(Suit::Hearts, 5)]);

    assert_eq!(game.play_card(0, 1).unwrap_err(), ActionError::InvalidState);

    start_play(&mut game);

    assert_eq!(game.play_card(1, 1).unwrap_err(), ActionError::NotYourTurn);
    assert_eq!(game.play_card(3, 1).unwrap_err(), ActionError::PlayerNotFound);
    assert_eq!(
        game.play_card(0, 0).unwrap_err(),
        ActionError::InvalidCardIndex
    );
    assert_eq!(
        game.play_card(0, 3).unwrap_err(),
        ActionError::InvalidCardIndex
    );
    assert_eq!(game.play_card(0, 1).unwrap_err(), ActionError::IllegalPlay);

    assert_eq!(game.hands[0].len(), 2);
    assert_eq!(game.discard.len(), 1);
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.pending(), crazy8s::PendingEffects::default());
}

#[test]
fn plain_play_passes_turn() {
    let mut game = new_game(4);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Clubs, 3), card(Suit::Hearts, 5)]);
    start_play(&mut game);

    let PlayOutcome::TurnPassed(change) = game.play_card(0, 2).unwrap() else {
        panic!("expected the turn to pass");
    };
    assert_eq!(change.player, 1);
    assert_eq!(change.skipped, None);
    assert!(change.forced_draw.is_empty());

    assert_eq!(game.current_player(), 1);
    assert_eq!(game.top_card().unwrap(), card(Suit::Hearts, 5));
    assert_eq!(game.hands[0].cards(), &[card(Suit::Clubs, 3)]);
}

#[test]
fn two_forces_opponent_to_draw_two_once() {
    let mut game = new_game(6);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Hearts, 2), card(Suit::Clubs, 5)]);
    set_hand(&mut game, 1, &[card(Suit::Spades, 9), card(Suit::Spades, 10)]);
    set_deck_from_draws(
        &mut game,
        &[
            card(Suit::Diamonds, 4),
            card(Suit::Diamonds, 6),
            card(Suit::Clubs, 11),
        ],
    );
    start_play(&mut game);

    let PlayOutcome::TurnPassed(change) = game.play_card(0, 1).unwrap() else {
        panic!("expected the turn to pass");
    };
    assert_eq!(change.player, 1);
    assert_eq!(
        change.forced_draw,
        vec![card(Suit::Diamonds, 4), card(Suit::Diamonds, 6)]
    );
    assert!(!change.deck_exhausted);
    assert!(!game.pending().draw_two);
    assert_eq!(game.hands[1].len(), 4);
    assert_eq!(game.cards_remaining(), 1);

    // A later draw on the same turn is an ordinary single draw.
    game.draw(1, 1).unwrap();
    assert_eq!(game.hands[1].len(), 5);
    assert_eq!(game.pending(), crazy8s::PendingEffects::default());
}

#[test]
fn queen_skips_opponent_once() {
    let mut game = new_game(7);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(
        &mut game,
        0,
        &[card(Suit::Hearts, 12), card(Suit::Hearts, 4), card(Suit::Clubs, 5)],
    );
    start_play(&mut game);

    let PlayOutcome::TurnPassed(change) = game.play_card(0, 1).unwrap() else {
        panic!("expected the turn to pass");
    };
    assert_eq!(change.skipped, Some(1));
    assert_eq!(change.player, 0);
    assert!(!game.pending().skip_turn);
    assert_eq!(game.current_player(), 0);

    let PlayOutcome::TurnPassed(change) = game.play_card(0, 1).unwrap() else {
        panic!("expected the turn to pass");
    };
    assert_eq!(change.skipped, None);
    assert_eq!(change.player, 1);
}

#[test]
fn wild_card_waits_for_suit_declaration() {
    let mut game = new_game(8);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Clubs, 8), card(Suit::Clubs, 5)]);
    start_play(&mut game);

    assert_eq!(game.play_card(0, 1).unwrap(), PlayOutcome::SuitRequired);
    assert_eq!(game.state(), GameState::AwaitingSuitDeclaration);
    assert!(game.pending().choose_suit);
    assert_eq!(game.current_suit(), Suit::Clubs);

    assert_eq!(game.play_card(0, 1).unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.draw(0, 1).unwrap_err(), ActionError::InvalidState);
    assert_eq!(
        game.declare_suit(1, Suit::Spades).unwrap_err(),
        SuitError::NotYourTurn
    );

    let change = game.declare_suit(0, Suit::Spades).unwrap();
    assert_eq!(change.player, 1);
    assert_eq!(game.current_suit(), Suit::Spades);
    assert_eq!(game.top_card().unwrap(), card(Suit::Clubs, 8));
    assert!(!game.pending().choose_suit);
    assert_eq!(game.state(), GameState::AwaitingMove);

    assert_eq!(
        game.declare_suit(1, Suit::Hearts).unwrap_err(),
        SuitError::InvalidState
    );
}

#[test]
fn emptying_hand_wins_the_pot() {
    let mut game = new_game(9);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Hearts, 3)]);
    start_play(&mut game);

    let PlayOutcome::RoundWon(result) = game.play_card(0, 1).unwrap() else {
        panic!("expected a win");
    };
    assert_eq!(result.winner, Some(0));
    assert_eq!(result.pot, 150);
    assert_eq!(result.money, [550, 450]);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.last_result(), Some(result));

    assert_eq!(game.draw(1, 1).unwrap_err(), ActionError::InvalidState);

    game.reset_round().unwrap();
    assert_eq!(game.pot(), 0);
    assert_eq!(game.state(), GameState::AwaitingBets);
    assert_eq!(game.money(0), Some(550));
    assert_eq!(game.money(1), Some(450));
    assert_eq!(game.hands[0].len(), 6);
    assert_eq!(game.cards_remaining(), 39);
    assert_eq!(game.last_result(), None);
}

#[test]
fn winning_with_an_eight_skips_declaration() {
    let mut game = new_game(10);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Spades, 8)]);
    start_play(&mut game);

    let outcome = game.play_card(0, 1).unwrap();
    assert!(matches!(outcome, PlayOutcome::RoundWon(_)));
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(!game.pending().choose_suit);
}

#[test]
fn refill_keeps_only_top_card() {
    let mut game = new_game(11);
    game.deck = Deck::new();
    set_discard(
        &mut game,
        &[
            card(Suit::Clubs, 2),
            card(Suit::Clubs, 3),
            card(Suit::Clubs, 4),
        ],
    );

    assert_eq!(game.refill_deck(), Ok(2));
    assert_eq!(game.discard.cards(), &[card(Suit::Clubs, 4)]);

    let mut deck = game.deck.cards().to_vec();
    deck.sort();
    assert_eq!(deck, vec![card(Suit::Clubs, 2), card(Suit::Clubs, 3)]);

    assert_eq!(game.refill_deck(), Err(RefillError::NoRefillPossible));
    assert_eq!(game.cards_remaining(), 2);
}

#[test]
fn refill_keeps_declared_suit() {
    let mut game = new_game(12);
    game.deck = Deck::new();
    set_discard(&mut game, &[card(Suit::Clubs, 2), card(Suit::Hearts, 8)]);
    game.set_current_suit(Suit::Diamonds);

    game.refill_deck().unwrap();
    assert_eq!(game.current_suit(), Suit::Diamonds);
}

#[test]
fn draw_refills_between_cards() {
    let mut game = new_game(13);
    set_deck_from_draws(&mut game, &[card(Suit::Spades, 1)]);
    set_discard(
        &mut game,
        &[
            card(Suit::Clubs, 2),
            card(Suit::Clubs, 3),
            card(Suit::Clubs, 4),
        ],
    );
    start_play(&mut game);
    let before = game.hands[0].len();

    let drawn = game.draw(0, 2).unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0], card(Suit::Spades, 1));
    assert_eq!(drawn[1].suit, Suit::Clubs);
    assert_eq!(game.hands[0].len(), before + 2);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.discard.cards(), &[card(Suit::Clubs, 4)]);
    assert_eq!(game.current_player(), 0);
}

#[test]
fn exhausted_deck_allows_pass_and_stalemate_refunds() {
    let mut game = new_game(14);
    game.deck = Deck::new();
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Clubs, 3)]);
    set_hand(&mut game, 1, &[card(Suit::Spades, 4), card(Suit::Hearts, 5)]);
    start_play(&mut game);

    assert!(game.deck_exhausted());
    assert_eq!(game.draw(0, 1).unwrap_err(), ActionError::EmptyDeck);

    let PassOutcome::TurnPassed(change) = game.pass(0).unwrap() else {
        panic!("expected the turn to pass");
    };
    assert_eq!(change.player, 1);

    // Player 1 can still follow suit, so passing is refused.
    assert_eq!(game.pass(1).unwrap_err(), ActionError::MovesAvailable);

    set_hand(&mut game, 1, &[card(Suit::Spades, 4)]);
    let PassOutcome::Stalemate(result) = game.pass(1).unwrap() else {
        panic!("expected a stalemate");
    };
    assert_eq!(result.winner, None);
    assert_eq!(result.pot, 150);
    assert_eq!(result.money, [500, 500]);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn pass_refused_while_deck_has_cards() {
    let mut game = new_game(15);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Clubs, 3)]);
    start_play(&mut game);

    assert_eq!(game.pass(0).unwrap_err(), ActionError::MovesAvailable);
}

#[test]
fn forced_draw_recycles_discard_mid_draw() {
    let mut game = new_game(16);
    set_deck_from_draws(&mut game, &[card(Suit::Diamonds, 4)]);
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Hearts, 2), card(Suit::Clubs, 5)]);
    start_play(&mut game);

    let PlayOutcome::TurnPassed(change) = game.play_card(0, 1).unwrap() else {
        panic!("expected the turn to pass");
    };
    // The first draw empties the deck and recycles the seven beneath the two.
    assert_eq!(change.forced_draw.len(), 2);
    assert!(!change.deck_exhausted);
    assert_eq!(change.forced_draw[1], card(Suit::Hearts, 7));
    assert!(game.deck_exhausted());
}

#[test]
fn forced_draw_reports_exhausted_deck() {
    let mut game = new_game(18);
    game.deck = Deck::new();
    set_discard(&mut game, &[card(Suit::Hearts, 7)]);
    set_hand(&mut game, 0, &[card(Suit::Hearts, 2), card(Suit::Clubs, 5)]);
    set_hand(&mut game, 1, &[card(Suit::Spades, 9)]);
    start_play(&mut game);

    let PlayOutcome::TurnPassed(change) = game.play_card(0, 1).unwrap() else {
        panic!("expected the turn to pass");
    };
    assert_eq!(change.forced_draw, vec![card(Suit::Hearts, 7)]);
    assert!(change.deck_exhausted);
    assert_eq!(game.hands[1].len(), 2);
    assert!(game.deck_exhausted());
}

#[test]
fn reset_and_end_session_rules() {
    let mut game = new_game(17);

    game.place_bet(0, 40).unwrap();
    assert_eq!(game.reset_round(), Err(RoundError::RoundInProgress));

    game.place_bet(1, 60).unwrap();
    assert_eq!(game.reset_round(), Err(RoundError::RoundInProgress));

    game.end_session();
    assert_eq!(game.state(), GameState::SessionOver);
    assert_eq!(game.money(0), Some(500));
    assert_eq!(game.money(1), Some(500));
    assert_eq!(game.pot(), 0);
    assert_eq!(game.reset_round(), Err(RoundError::SessionOver));
}
