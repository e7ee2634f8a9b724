//! Warcaby-Rust: a draughts engine with a minimax AI.
//!
//! ## Usage
//!
//! - `warcaby-rust` - Watch the machine play both sides
//! - `warcaby-rust play` - Play against the machine in the terminal
//! - `warcaby-rust demo` - Watch the machine play both sides

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use warcaby_rust::board::Player;
use warcaby_rust::constants::{DEFAULT_BOARD_SIZE, DEFAULT_PAWN_ROWS, DEFAULT_SEARCH_DEPTH};
use warcaby_rust::game::Game;

/// Warcaby-Rust: a draughts engine with a minimax AI
#[derive(Parser)]
#[command(name = "warcaby-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the machine in the terminal (you are White)
    Play {
        /// Board size
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: i32,
        /// Pawn rows per side at game start
        #[arg(long, default_value_t = DEFAULT_PAWN_ROWS)]
        pawn_rows: i32,
        /// Search depth of the machine player
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u8,
        /// Require captures to be taken when one is available
        #[arg(long)]
        mandatory_capture: bool,
    },
    /// Watch the machine play both sides
    Demo {
        /// Search depth for both sides
        #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
        depth: u8,
        /// Stop after this many plies
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            size,
            pawn_rows,
            depth,
            mandatory_capture,
        }) => run_play(size, pawn_rows, depth, mandatory_capture),
        Some(Commands::Demo { depth, max_plies }) => {
            run_demo(depth, max_plies);
            Ok(())
        }
        None => {
            run_demo(DEFAULT_SEARCH_DEPTH, 200);
            Ok(())
        }
    }
}

fn run_play(size: i32, pawn_rows: i32, depth: u8, mandatory_capture: bool) -> Result<()> {
    let mut game = Game::new(size, pawn_rows);
    game.mandatory_capture = mandatory_capture;

    println!("You are White (w/W), moving up the board.");
    println!("Enter `row col` to list a piece's moves,");
    println!("`row col row col` to move, or `quit`.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.is_running() {
        if game.turn() == Player::Black {
            game.ai_move(depth);
            continue;
        }

        println!("{}", game.board);
        print!("white> ");
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            return Ok(());
        }

        match parse_fields(line) {
            Ok(fields) => match fields.as_slice() {
                [row, col] => {
                    let candidates = game.legal_moves(*row, *col);
                    if candidates.is_empty() {
                        println!("no moves for ({row}, {col})");
                    }
                    for mv in &candidates {
                        println!("  {:?}", mv.path);
                    }
                }
                [row, col, next_row, next_col] => {
                    let candidates = game.legal_moves(*row, *col);
                    if !game.make_move(*row, *col, *next_row, *next_col, &candidates) {
                        println!("no matching move");
                    }
                }
                _ => println!("expected 2 or 4 numbers"),
            },
            Err(err) => println!("{err:#}"),
        }
    }

    println!("{}", game.board);
    report_result(&game);
    Ok(())
}

fn run_demo(depth: u8, max_plies: u32) {
    println!("Warcaby-Rust: machine vs machine at depth {depth}\n");

    let mut game = Game::standard();
    let mut plies = 0;
    while game.is_running() && plies < max_plies {
        game.ai_move(depth);
        plies += 1;
        println!("ply {plies} ({} to move):", game.turn());
        println!("{}", game.board);
    }

    report_result(&game);
}

fn report_result(game: &Game) {
    if game.is_running() {
        println!("Game unfinished.");
    } else {
        match game.winner() {
            Some(winner) => println!("Game over! The winner is: {winner}"),
            None => println!("Game over! It's a draw."),
        }
    }
}

fn parse_fields(line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|field| {
            field
                .parse::<i32>()
                .with_context(|| format!("invalid number: {field}"))
        })
        .collect()
}
