//! The in-process contract a rendering/input layer drives.
//!
//! A collaborator (GUI, terminal front end, test harness) talks to the game
//! through three calls and a handful of read accessors:
//!
//! - [`Game::legal_moves`] - what to highlight after a click
//! - [`Game::make_move`] - attempt the move between two clicked squares
//! - [`Game::ai_move`] - run one machine turn
//! - board accessors and [`Game::is_running`]/[`Game::winner`] for drawing
//!   and for polling the game result after each turn
//!
//! Illegal input never errors: an empty square, a wrong-turn piece or a
//! stray click yields an empty move list or `false`.

use tracing::{debug, info};

use crate::board::{Board, GameState, Player, Pos};
use crate::moves::{Move, advance_turn, apply_move, is_capture, legal_moves, promote};
use crate::search::Searcher;

/// A running game: the board, the searcher that plays the machine side, and
/// the capture policy.
pub struct Game {
    pub board: Board,
    searcher: Searcher,
    /// When set, a side that can capture anywhere must capture: simple moves
    /// are withheld from [`Game::legal_moves`] while a capture exists.
    /// Off by default.
    pub mandatory_capture: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::standard()
    }
}

impl Game {
    pub fn new(size: i32, pawn_rows: i32) -> Self {
        Self {
            board: Board::new(size, pawn_rows),
            searcher: Searcher::new(size),
            mandatory_capture: false,
        }
    }

    /// The default 8x8 game.
    pub fn standard() -> Self {
        Self::new(
            crate::constants::DEFAULT_BOARD_SIZE,
            crate::constants::DEFAULT_PAWN_ROWS,
        )
    }

    /// The moves the piece on the clicked square may play, with the capture
    /// policy applied.
    pub fn legal_moves(&self, row: i32, col: i32) -> Vec<Move> {
        let moves = legal_moves(&self.board, (row, col));
        debug!("square ({row}, {col}): {} candidate moves", moves.len());
        if !self.mandatory_capture {
            return moves;
        }
        if self.side_has_capture(self.board.turn) {
            moves
                .into_iter()
                .filter(|mv| is_capture(&self.board, mv))
                .collect()
        } else {
            moves
        }
    }

    fn side_has_capture(&self, player: Player) -> bool {
        crate::moves::all_moves(&self.board, player)
            .iter()
            .any(|mv| is_capture(&self.board, mv))
    }

    /// Attempt the move from the first to the second clicked square, given
    /// the candidate list previously fetched for the first click. A click
    /// pair matching no candidate is a no-op returning `false`.
    pub fn make_move(
        &mut self,
        row: i32,
        col: i32,
        next_row: i32,
        next_col: i32,
        candidates: &[Move],
    ) -> bool {
        if self.board.state != GameState::Running {
            return false;
        }
        let from = (row, col);
        let to = (next_row, next_col);
        match self.board.piece_at(from) {
            Some(piece) if piece.owner == self.board.turn => {}
            _ => return false,
        }

        let Some(mv) = candidates
            .iter()
            .find(|mv| mv.origin() == from && mv.dest() == to)
            .cloned()
        else {
            return false;
        };

        self.play(&mv);
        true
    }

    /// One machine turn at the given search depth. State changes are
    /// observed by re-reading the board.
    pub fn ai_move(&mut self, depth: u8) {
        if self.board.state != GameState::Running {
            return;
        }
        self.searcher.ai_move(&mut self.board, depth);
    }

    fn play(&mut self, mv: &Move) {
        let captured = apply_move(&mut self.board, mv);
        info!(
            "move made: {:?} -> {:?}, {} captured",
            mv.origin(),
            mv.dest(),
            captured.len()
        );
        promote(&mut self.board, mv.dest());
        advance_turn(&mut self.board);
    }

    /// The side to move.
    pub fn turn(&self) -> Player {
        self.board.turn
    }

    /// Whether the game is still in progress.
    pub fn is_running(&self) -> bool {
        self.board.state == GameState::Running
    }

    /// The winner once the game is over; `None` while running or on a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.board.state {
            GameState::Over(winner) => winner,
            GameState::Running => None,
        }
    }

    /// Click helper for front ends working in (row, col) pairs.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<crate::board::Piece> {
        self.board.piece_at((row, col))
    }

    /// Destination squares of the candidate moves, for highlighting.
    pub fn highlight_squares(candidates: &[Move]) -> Vec<Pos> {
        candidates.iter().map(Move::dest).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Rank};

    #[test]
    fn test_click_flow() {
        let mut game = Game::standard();
        // White man at (6, 1) can step to (5, 0)
        let candidates = game.legal_moves(6, 1);
        assert!(!candidates.is_empty());
        assert!(game.make_move(6, 1, 5, 0, &candidates));
        assert_eq!(game.turn(), Player::Black);
        assert_eq!(
            game.piece_at(5, 0),
            Some(Piece::new(Player::White, Rank::Man))
        );
        assert_eq!(game.piece_at(6, 1), None);
    }

    #[test]
    fn test_stray_click_is_noop() {
        let mut game = Game::standard();
        let candidates = game.legal_moves(6, 1);
        let before = game.board.clone();
        // Destination matches no candidate
        assert!(!game.make_move(6, 1, 3, 3, &candidates));
        // Clicked square is empty
        assert!(!game.make_move(4, 4, 3, 3, &candidates));
        // Not this player's piece
        assert!(!game.make_move(1, 0, 2, 1, &candidates));
        assert_eq!(game.board, before);
    }

    #[test]
    fn test_wrong_turn_yields_no_moves() {
        let game = Game::standard();
        assert!(game.legal_moves(1, 0).is_empty());
        assert!(!game.legal_moves(6, 1).is_empty());
    }

    #[test]
    fn test_mandatory_capture_policy() {
        let mut game = Game::new(8, 2);
        game.board = Board::empty(8, 2);
        game.board
            .place((5, 2), Piece::new(Player::White, Rank::Man));
        game.board
            .place((4, 3), Piece::new(Player::Black, Rank::Man));
        game.board
            .place((0, 7), Piece::new(Player::Black, Rank::Man));

        // Policy off: simple move and capture are both offered
        let moves = game.legal_moves(5, 2);
        assert_eq!(moves.len(), 2);

        // Policy on: only the capture remains
        game.mandatory_capture = true;
        let moves = game.legal_moves(5, 2);
        assert_eq!(moves.len(), 1);
        assert!(is_capture(&game.board, &moves[0]));
    }

    #[test]
    fn test_promotion_during_play() {
        let mut game = Game::new(8, 2);
        game.board = Board::empty(8, 2);
        game.board
            .place((1, 2), Piece::new(Player::White, Rank::Man));
        game.board
            .place((7, 0), Piece::new(Player::Black, Rank::King));

        let candidates = game.legal_moves(1, 2);
        assert!(game.make_move(1, 2, 0, 1, &candidates));
        assert_eq!(
            game.piece_at(0, 1),
            Some(Piece::new(Player::White, Rank::King))
        );
    }

    #[test]
    fn test_game_over_reporting() {
        let mut game = Game::new(8, 2);
        game.board = Board::empty(8, 2);
        game.board
            .place((4, 3), Piece::new(Player::White, Rank::Man));
        game.board
            .place((3, 4), Piece::new(Player::Black, Rank::Man));

        // White jumps the last black piece; the game ends immediately
        let candidates = game.legal_moves(4, 3);
        assert!(game.make_move(4, 3, 2, 5, &candidates));
        assert!(!game.is_running());
        assert_eq!(game.winner(), Some(Player::White));

        // All further input falls through
        assert!(game.legal_moves(2, 5).is_empty());
        assert!(!game.make_move(2, 5, 1, 6, &[]));
    }

    #[test]
    fn test_ai_move_plays_a_turn() {
        let mut game = Game::standard();
        let candidates = game.legal_moves(6, 1);
        assert!(game.make_move(6, 1, 5, 0, &candidates));
        assert_eq!(game.turn(), Player::Black);

        game.ai_move(2);
        assert_eq!(game.turn(), Player::White);
        assert_eq!(game.board.piece_count(Player::Black), 8);
    }

    #[test]
    fn test_highlight_squares() {
        let game = Game::standard();
        let candidates = game.legal_moves(6, 3);
        let squares = Game::highlight_squares(&candidates);
        assert_eq!(squares.len(), candidates.len());
        assert!(squares.contains(&(5, 2)));
        assert!(squares.contains(&(5, 4)));
    }
}
