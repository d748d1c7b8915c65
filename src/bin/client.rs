//! Interactive client binary.
//!
//! Registers with a table server, then plays one game from the terminal.

use std::io::{self, Write};
use std::process::ExitCode;

use bjduel::transport::{Client, ErrorCode};
use bjduel::{Action, Card, Deck, GameStatus, StatusCode, Suit, TransportError};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Plays a game of two-player blackjack", long_about = None)]
struct Args {
    /// Server address, e.g. 127.0.0.1:8080.
    server: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let client = match Client::new(args.server.as_str()) {
        Ok(client) => client,
        Err(err) => {
            println!("Cannot resolve {}: {err}", args.server);
            return ExitCode::FAILURE;
        }
    };

    let Some((name, game_id)) = register(&client) else {
        return ExitCode::FAILURE;
    };
    println!("Registered in game {game_id}. Waiting for another player to join...\n");

    let code = match play(&client, &name, game_id) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Connection error: {err}");
            ExitCode::FAILURE
        }
    };
    println!("Game ended. Thank you for playing!");
    code
}

fn register(client: &Client) -> Option<(String, usize)> {
    let mut name = prompt_line("Enter your player name: ");

    loop {
        println!("Registering player {name}...");
        match client.register(&name) {
            Ok(game_id) => return Some((name, game_id)),
            Err(TransportError::Remote {
                code: ErrorCode::NameRepeated | ErrorCode::EmptyName,
                message,
            }) => {
                println!("Registration failed: {message}");
                name = prompt_line("Please choose a different name: ");
            }
            Err(TransportError::Remote {
                code: ErrorCode::ServerFull,
                ..
            }) => {
                println!("Server is full. Please try again later.");
                return None;
            }
            Err(err) => {
                println!("Error calling register: {err}");
                return None;
            }
        }
    }
}

fn play(client: &Client, name: &str, game_id: usize) -> Result<(), TransportError> {
    loop {
        let status = client.get_status(name, game_id)?;
        print_status("Game Status", &status);

        match status.code {
            StatusCode::TurnWait => println!("Waiting for rival's move..."),
            StatusCode::TurnPlay => {
                if play_turn(client, name, game_id)? {
                    return Ok(());
                }
            }
            StatusCode::GameWin | StatusCode::GameLose => {
                print_outcome(status.code);
                return Ok(());
            }
        }
    }
}

/// Plays moves until the turn passes. Returns whether the game ended.
fn play_turn(client: &Client, name: &str, game_id: usize) -> Result<bool, TransportError> {
    loop {
        let action = prompt_action();
        let status = client.player_move(name, game_id, action)?;
        print_status("Move Result", &status);

        match status.code {
            StatusCode::TurnPlay if status.points() < bjduel::GOAL => {
                println!("You can make another move.");
            }
            StatusCode::TurnPlay | StatusCode::TurnWait => {
                println!("You finished your turn. Waiting for rival...");
                return Ok(false);
            }
            StatusCode::GameWin | StatusCode::GameLose => {
                print_outcome(status.code);
                return Ok(true);
            }
        }
    }
}

fn prompt_action() -> Action {
    loop {
        let answer = prompt_line(&format!("What is your move? {} ", format_actions()));
        match answer.to_lowercase().as_str() {
            "h" | "hit" => return Action::Hit,
            "s" | "stand" => return Action::Stand,
            _ => println!("Wrong option!"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => {
            println!("\nInput closed, leaving the table.");
            std::process::exit(0);
        }
        Ok(_) => input.trim().to_owned(),
        Err(_) => String::new(),
    }
}

fn print_status(title: &str, status: &GameStatus) {
    println!("\n=== {title} ===");
    println!("{}", status.message);
    println!("Hand: {} | points {}", format_hand(&status.hand), status.points());
    println!("{}\n", "=".repeat(title.len() + 8));
}

fn print_outcome(code: StatusCode) {
    if code == StatusCode::GameWin {
        println!("\n{}\n", colorize("*** CONGRATULATIONS! YOU WON! ***", "32"));
    } else {
        println!("\n{}\n", colorize("*** YOU LOST! BETTER LUCK NEXT TIME! ***", "31"));
    }
}

fn format_actions() -> String {
    format!("{} {}", colorize("[h]it", "32"), colorize("[s]tand", "32"))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_hand(hand: &Deck) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
