//! Constants for board geometry, evaluation weights, and search parameters.
//!
//! The board size and the number of pawn rows per side are runtime
//! configuration (see [`crate::board::Board::new`]); the values here are the
//! defaults of the standard game plus the fixed weights used by the
//! evaluator and the move-ordering heuristic.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board size (NxN). The standard game is played on 8x8.
pub const DEFAULT_BOARD_SIZE: i32 = 8;

/// Default number of pawn rows per side at game start.
pub const DEFAULT_PAWN_ROWS: i32 = 2;

/// Minimum side length of the central region used by the evaluator and the
/// move-ordering heuristic. The region is `size/4` squares wide but never
/// smaller than this.
pub const MIN_CENTER_SIZE: i32 = 2;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default minimax search depth in plies.
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

/// Seed for the Zobrist key table. Fixed so that board hashes are
/// reproducible across runs.
pub const ZOBRIST_SEED: u64 = 0x5eed_cab1_e500_0001;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Material value of a man.
pub const MAN_WEIGHT: i32 = 10;

/// Material value of a king. Kings score as men.
pub const KING_WEIGHT: i32 = 10;

/// Bonus per piece occupying the central region.
pub const CENTER_WEIGHT: i32 = 5;

// =============================================================================
// Move Ordering Weights
// =============================================================================

/// Ordering weight per captured piece. Captures dominate the ordering.
pub const ORDER_CAPTURE: i32 = 100;

/// Ordering bonus for a move landing in the central region.
pub const ORDER_CENTER: i32 = 5;

// =============================================================================
// Directions
// =============================================================================

/// The four diagonal directions as (row, column) deltas.
/// Order: down-left, down-right, up-left, up-right.
pub const DIAGONALS: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

// =============================================================================
// Display Colors
// =============================================================================

/// RGB color of white pieces.
pub const WHITE_COLOR: (u8, u8, u8) = (255, 255, 255);

/// RGB color of black pieces.
pub const BLACK_COLOR: (u8, u8, u8) = (0, 0, 0);
