//! CLI Crazy Eights example for two players sharing a terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use crazy8s::{
    Card, Game, GameOptions, InputProvider, RoundResult, Session, SessionEvent, Suit, TurnAction,
};
use tracing_subscriber::EnvFilter;

const RULES: &str = "\
The goal of the game is to get rid of all cards in your hand.
During your turn, discard a card with the same suit or rank as the card on top of the discard pile.
If you don't have any cards to discard, draw from the deck until you get one.
8's act as wild cards and let you declare a new suit for the discard pile.
If you play a 2, the opponent must draw two cards.
If you play a Queen, the opponent's turn is skipped.";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("Welcome to Crazy Eights! (type 'q' at any prompt to quit)");
    println!("{RULES}");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let Some(first) = read_input("\nEnter Player 1's name: ") else {
        return;
    };
    let Some(second) = read_input("Enter Player 2's name: ") else {
        return;
    };
    let game = Game::new([first, second], GameOptions::default(), seed);

    let mut session = Session::new(game, Terminal);
    let summary = session.run();

    println!("\nThanks for playing! Rounds played: {}", summary.rounds_played);
    for (hand, money) in session.game().hands.iter().zip(summary.money) {
        println!("{} leaves with ${money}.", hand.name());
    }
}

struct Terminal;

impl InputProvider for Terminal {
    fn wager(&mut self, game: &Game, player: usize) -> Option<usize> {
        let hand = &game.hands[player];
        println!("\n{}'s current money is ${}.", hand.name(), hand.money());
        prompt_usize(&format!("How much is {} willing to bet? ", hand.name()))
    }

    fn turn_action(&mut self, game: &Game, player: usize) -> Option<TurnAction> {
        print_table(game, player);
        println!("Enter the number of a card to discard, 0 to draw, or 'p' to pass.");

        loop {
            match prompt_line("Choice: ")?.as_str() {
                "p" | "pass" => return Some(TurnAction::Pass),
                input => match input.parse::<usize>() {
                    Ok(0) => return Some(TurnAction::Draw),
                    Ok(index) => return Some(TurnAction::Play(index)),
                    Err(_) => println!("Please enter a number."),
                },
            }
        }
    }

    fn suit_choice(&mut self, _game: &Game, _player: usize) -> Option<u8> {
        let menu = Suit::ALL
            .iter()
            .enumerate()
            .map(|(index, suit)| format!("{} for {suit}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        loop {
            let input = prompt_line(&format!("Pick a new suit. (Enter {menu}) "))?;
            match input.parse::<u8>() {
                Ok(choice) => return Some(choice),
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    fn play_again(&mut self, _game: &Game, _result: &RoundResult) -> bool {
        matches!(prompt_line("Play again? (y/n): ").as_deref(), Some("y" | "yes"))
    }

    fn notify(&mut self, game: &Game, event: &SessionEvent) {
        let name = move |player: usize| game.hands[player].name();
        match event {
            SessionEvent::BetPlaced { player, amount } => {
                println!("{} bets ${amount}. Pot: ${}", name(*player), game.pot());
            }
            SessionEvent::TurnStarted { player } => {
                println!("\n\n{}'s turn:", name(*player));
            }
            SessionEvent::TurnSkipped { player } => {
                println!("\nSkipping {}'s turn...", name(*player));
            }
            SessionEvent::ForcedDraw {
                player,
                cards,
                deck_exhausted,
            } => {
                println!("\n{} drew {} card(s).", name(*player), cards.len());
                if *deck_exhausted {
                    println!("The deck is exhausted.");
                }
            }
            SessionEvent::Drew { player, cards } => {
                println!("{} drew {}.", name(*player), format_cards(cards));
            }
            SessionEvent::Played { player, card } => {
                println!("{} discards {card}.", name(*player));
            }
            SessionEvent::SuitDeclared { player, suit } => {
                println!("{} declares {suit}.", name(*player));
            }
            SessionEvent::Rejected { error, .. } => {
                println!("{error}!");
            }
            SessionEvent::RoundOver(result) => match result.winner {
                Some(winner) => {
                    println!("\n{} wins!", name(winner));
                    println!("{} earned ${}.", name(winner), result.pot);
                }
                None => println!("\nNobody can move. Wagers returned: ${}.", result.pot),
            },
        }
    }
}

/// Reads one trimmed line; `None` on end of input.
fn read_input(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Reads one lowercased line; `None` on end of input or quit.
fn prompt_line(prompt: &str) -> Option<String> {
    let input = read_input(prompt)?.to_lowercase();
    (input != "q" && input != "quit").then_some(input)
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt)?;
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game, player: usize) {
    println!("\nDeck: {} cards remaining | Pot: ${}", game.cards_remaining(), game.pot());
    println!("{}", game.hands[player]);
    println!("{}\n", game.discard);
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "nothing".to_string();
    }
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
