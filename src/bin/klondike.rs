//! Interactive text front end for the solitaire engine.
//!
//! This binary holds no game logic: it parses command tokens, translates
//! 1-based column numbers to the engine's 0-based indices, and renders
//! read-only snapshots. All legality decisions live in the engine.
//!
//! Commands:
//!   mv        - move card from Stock to Waste
//!   wf        - move card from Waste to Foundation
//!   wt N      - move card from Waste to Tableau column N
//!   mt N      - move top card from Tableau column N to Foundation
//!   mt N M    - move top card from Tableau column N to column M
//!   undo      - undo last move
//!   exit      - exit the game

use std::env;
use std::io::{self, BufRead, Write};

use klondike_engine::{Game, GameStatus, GameView, Suit};

fn main() {
    let mut seed: u64 = rand::random();
    for arg in env::args().skip(1) {
        if let Some(rest) = arg.strip_prefix("--seed=") {
            match rest.parse::<u64>() {
                Ok(v) => seed = v,
                Err(_) => eprintln!("Warning: could not parse seed from '{rest}'"),
            }
        } else {
            eprintln!("Warning: unrecognized argument '{arg}'; supported: --seed=<u64>");
        }
    }

    let mut game = Game::new(seed);

    println!("-------------------------------------------------------------------");
    println!("Welcome to Solitaire! (seed {seed})");
    println!();
    println!("Valid Commands:");
    println!("\tmv      - move card from Stock to Waste");
    println!("\twf      - move card from Waste to Foundation");
    println!("\twt N    - move card from Waste to Tableau column N");
    println!("\tmt N    - move top card from Tableau column N to Foundation");
    println!("\tmt N M  - move top card from Tableau column N to column M");
    println!("\tundo    - undo last move");
    println!("\texit    - exit the game");
    println!("-------------------------------------------------------------------");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&game.view());
        print!("Enter command: ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.as_slice() {
            [] => continue,
            ["exit"] => {
                println!("Thank you for playing!");
                break;
            }
            ["mv"] => report(game.stock_to_waste().map(|()| "Moved from Stock to Waste.")),
            ["wf"] => report(
                game.waste_to_foundation()
                    .map(|()| "Moved from Waste to Foundation."),
            ),
            ["wt", n] => match parse_column(n) {
                Some(index) => report(
                    game.waste_to_tableau(index)
                        .map(|()| "Moved from Waste to Tableau."),
                ),
                None => bad_column(n),
            },
            ["mt", n] => match parse_column(n) {
                Some(index) => report(
                    game.tableau_to_foundation(index)
                        .map(|()| "Moved from Tableau to Foundation."),
                ),
                None => bad_column(n),
            },
            ["mt", n, m] => match (parse_column(n), parse_column(m)) {
                (Some(from), Some(to)) => report(
                    game.tableau_to_tableau(from, to)
                        .map(|()| "Moved from Tableau to Tableau."),
                ),
                (None, _) => bad_column(n),
                (_, None) => bad_column(m),
            },
            ["undo"] => report(game.undo().map(|()| "Undid last move.")),
            _ => println!("Invalid command. Please try again."),
        }

        if game.status() == GameStatus::Won {
            render(&game.view());
            println!("Congratulations! You've won the game!");
            break;
        }
    }
}

/// Parse a 1-based column number into a 0-based engine index.
fn parse_column(token: &str) -> Option<usize> {
    match token.parse::<usize>() {
        Ok(n) if (1..=7).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn bad_column(token: &str) {
    println!("Invalid Tableau index '{token}'; expected a number from 1 to 7.");
}

fn report(result: Result<&str, klondike_engine::MoveError>) {
    match result {
        Ok(message) => println!("{message}"),
        Err(err) => println!("{err}"),
    }
}

/// Render the whole board from a snapshot. Face-down cards show as `xx`.
fn render(view: &GameView) {
    println!();
    println!("--- Game State ---");

    println!("Foundation");
    for (suit, pile) in Suit::ALL.into_iter().zip(&view.foundations) {
        match pile.last() {
            Some(card) => println!("\t{}: {}", suit.letter(), card.abbreviated()),
            None => println!("\t{}:", suit.letter()),
        }
    }

    println!("Tableau");
    for (i, column) in view.columns.iter().enumerate() {
        print!("\t{}:", i + 1);
        for card in column {
            if card.is_face_up() {
                print!(" {}", card.abbreviated());
            } else {
                print!(" xx");
            }
        }
        println!();
    }

    match view.waste {
        Some(card) => println!("Waste: {card}"),
        None => println!("Waste: Empty"),
    }
    println!("Stock: {} cards", view.stock.len());
    println!("-------------------");
}
