//! Warcaby-Rust: a draughts rules engine with a minimax AI.
//!
//! This crate implements the rules of an 8x8 draughts variant with
//! mandatory-free multi-jump captures and king promotion, plus a
//! depth-limited minimax player with alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`constants`] - Board defaults, evaluation weights, search parameters
//! - [`board`] - Piece and position model, board state, game status
//! - [`moves`] - Move generation, apply/undo, promotion, turn advance
//! - [`eval`] - Static position scoring
//! - [`search`] - Minimax with alpha-beta, move ordering, transposition table
//! - [`game`] - The contract a rendering/input collaborator drives
//!
//! ## Example
//!
//! ```
//! use warcaby_rust::game::Game;
//!
//! // Create a new game
//! let mut game = Game::standard();
//!
//! // Fetch the legal moves for a clicked square and play one
//! let candidates = game.legal_moves(6, 1);
//! assert!(game.make_move(6, 1, 5, 0, &candidates));
//!
//! // Let the machine answer
//! game.ai_move(2);
//! println!("{}", game.board);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod moves;
pub mod search;
