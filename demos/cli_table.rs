//! CLI blackjack table example.
//!
//! Usage: `cargo run --example cli_table -- [players] [seed]`. Set
//! `RUST_LOG=debug` to see the engine's log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{Card, CardFace, Game, Hand, Suit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = env::args().skip(1);
    let players = args.next().and_then(|a| a.parse().ok()).unwrap_or(2);
    let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    println!("Blackjack table: {players} player(s), seed {seed} (type 'q' to quit)");

    let mut game = match Game::start_session(players, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Cannot start: {err}");
            return;
        }
    };

    if let Err(err) = game.deal_initial_hands() {
        println!("Deal error: {err}");
        return;
    }

    while let Some(index) = game.current_player_index() {
        print_table(&game, index);

        let result = match prompt_line("Action ([h]it, [s]tand): ").as_str() {
            "h" | "hit" => game.hit_current_player().map(|card| {
                println!("Drew {}", format_card(&card));
            }),
            "s" | "stand" => game.stand_current_player(),
            "q" | "quit" => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        if let Err(err) = result {
            println!("Action error: {err}");
        }
        if let Some(hand) = game.player(index) {
            if hand.is_bust() {
                println!("Player {}: Bust!", hand.id());
            }
        }
    }

    print_final(&game);
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game, index: usize) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    println!(
        "Dealer: {} (showing {})",
        format_faces(&game.dealer_faces()),
        game.dealer().visible_score()
    );

    if let Some(hand) = game.player(index) {
        println!(
            "Player {}'s hand: {}, Score: {}",
            hand.id(),
            format_hand(hand),
            hand.score()
        );
    }
}

fn print_final(game: &Game) {
    println!("\nDealer: {} (score {})", format_faces(&game.dealer_faces()), game.dealer().score());
    for hand in game.players() {
        println!(
            "Player {}: {} (score {})",
            hand.id(),
            format_hand(hand),
            hand.score()
        );
    }
    if let Some(result) = game.result() {
        println!("\n{result}");
    }
}

fn format_faces(faces: &[CardFace]) -> String {
    if faces.is_empty() {
        return "(no cards)".to_string();
    }
    faces
        .iter()
        .map(|face| match face {
            CardFace::Up(card) => format_card(card),
            CardFace::Down => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };
    format!("{}{}", card.rank, colorize(suit, color_code))
}
