//! Rule engine: move generation, application and undo, promotion, and the
//! turn state machine.
//!
//! This module provides the legality core of the game:
//! - Move generation for men (forward steps, recursive multi-jump chains)
//!   and kings (diagonal slides, direction-changing multi-jump chains)
//! - Move application returning the captured pieces, and its exact inverse
//! - Promotion and the turn/terminal-state machine
//!
//! Generation never mutates the board: a chain is enumerated with the moving
//! piece still on its origin square, so a chain can neither pass through nor
//! land on the square it started from. Captured pieces are not stored in a
//! move; they are derived by scanning the squares strictly between
//! consecutive path entries.

use tracing::{debug, info};

use crate::board::{Board, GameState, Piece, Player, Pos, Rank};
use crate::constants::DIAGONALS;

/// A move as the sequence of squares the piece occupies: the origin followed
/// by every landing square. A 2-entry path onto an adjacent square is a
/// simple move; any path with an enemy piece between two consecutive entries
/// is a capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub path: Vec<Pos>,
}

impl Move {
    pub fn new(path: Vec<Pos>) -> Self {
        debug_assert!(path.len() >= 2, "a move needs an origin and a destination");
        Self { path }
    }

    /// The square the piece moves from.
    pub fn origin(&self) -> Pos {
        self.path[0]
    }

    /// The square the piece ends on.
    pub fn dest(&self) -> Pos {
        self.path[self.path.len() - 1]
    }
}

/// The squares strictly between two positions on a shared diagonal.
fn between(a: Pos, b: Pos) -> Vec<Pos> {
    debug_assert_eq!(
        (b.0 - a.0).abs(),
        (b.1 - a.1).abs(),
        "path entries must share a diagonal"
    );
    let step = ((b.0 - a.0).signum(), (b.1 - a.1).signum());
    let mut squares = Vec::new();
    let mut cur = (a.0 + step.0, a.1 + step.1);
    while cur != b {
        squares.push(cur);
        cur = (cur.0 + step.0, cur.1 + step.1);
    }
    squares
}

/// The occupied squares a move jumps over, derived from its path.
pub fn captured_positions(board: &Board, mv: &Move) -> Vec<Pos> {
    let mut captured = Vec::new();
    for pair in mv.path.windows(2) {
        for sq in between(pair[0], pair[1]) {
            if board.piece_at(sq).is_some() {
                captured.push(sq);
            }
        }
    }
    captured
}

/// Whether a move jumps over at least one piece.
pub fn is_capture(board: &Board, mv: &Move) -> bool {
    !captured_positions(board, mv).is_empty()
}

/// Every move the piece on `pos` may play this turn. Fails closed: empty if
/// the game is over, the square is empty or off-board, or the piece does not
/// belong to the side to move.
pub fn legal_moves(board: &Board, pos: Pos) -> Vec<Move> {
    if board.state != GameState::Running {
        return Vec::new();
    }
    match board.piece_at(pos) {
        Some(piece) if piece.owner == board.turn => piece_moves(board, pos, piece),
        _ => Vec::new(),
    }
}

/// Move generation without the turn and game-state gates. The search engine
/// uses this entry point and decides itself whose pieces to probe.
pub fn moves_ignoring_turn(board: &Board, pos: Pos) -> Vec<Move> {
    match board.piece_at(pos) {
        Some(piece) => piece_moves(board, pos, piece),
        None => Vec::new(),
    }
}

fn piece_moves(board: &Board, pos: Pos, piece: Piece) -> Vec<Move> {
    match piece.rank {
        Rank::Man => {
            let mut moves = Vec::new();
            man_capture_moves(board, pos, piece.owner, &[pos], &mut moves);
            man_normal_moves(board, pos, piece.owner, &mut moves);
            moves
        }
        Rank::King => king_moves(board, pos, piece.owner),
    }
}

/// The two forward-diagonal steps onto empty squares.
fn man_normal_moves(board: &Board, pos: Pos, player: Player, out: &mut Vec<Move>) {
    let dir = player.forward();
    for dc in [-1, 1] {
        let next = (pos.0 + dir, pos.1 + dc);
        if board.field_exists(next) && board.piece_at(next).is_none() {
            out.push(Move::new(vec![pos, next]));
        }
    }
}

/// Recursive man jump chains. From the end of `path`, probe the two forward
/// diagonals; an adjacent enemy with an empty square beyond it extends the
/// chain. Each partial chain is emitted as a move in its own right. Landing
/// squares already on the path are skipped.
fn man_capture_moves(board: &Board, pos: Pos, player: Player, path: &[Pos], out: &mut Vec<Move>) {
    let dir = player.forward();
    for dc in [-1, 1] {
        let over = (pos.0 + dir, pos.1 + dc);
        if !board.field_exists(over) {
            continue;
        }
        let Some(piece) = board.piece_at(over) else {
            continue;
        };
        if piece.owner == player {
            continue;
        }
        let landing = (over.0 + dir, over.1 + dc);
        if !board.field_exists(landing) || board.piece_at(landing).is_some() {
            continue;
        }
        if path.contains(&landing) {
            continue;
        }
        let mut chain = path.to_vec();
        chain.push(landing);
        out.push(Move::new(chain.clone()));
        man_capture_moves(board, landing, player, &chain, out);
    }
}

/// King moves: one slide move per reachable empty square on each diagonal,
/// plus jump chains starting at the first enemy piece met on a diagonal.
fn king_moves(board: &Board, pos: Pos, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for (dr, dc) in DIAGONALS {
        let mut next = (pos.0 + dr, pos.1 + dc);
        while board.field_exists(next) && board.piece_at(next).is_none() {
            moves.push(Move::new(vec![pos, next]));
            next = (next.0 + dr, next.1 + dc);
        }
        if !board.field_exists(next) {
            continue;
        }
        let blocker = board.piece_at(next).expect("slide stopped on occupied square");
        if blocker.owner == player {
            continue;
        }
        let landing = (next.0 + dr, next.1 + dc);
        if !board.field_exists(landing) || board.piece_at(landing).is_some() {
            continue;
        }
        let chain = vec![pos, landing];
        moves.push(Move::new(chain.clone()));
        king_capture_chains(board, player, &chain, &[next], &mut moves);
    }
    moves
}

/// Continuation jumps for a king chain. From the last landing square, slide
/// along all four diagonals to the first occupied square; an enemy with an
/// empty square beyond it extends the chain. A chain may not land on a
/// square already on its path and may not jump a square it already jumped,
/// which permits direction changes and guarantees termination.
fn king_capture_chains(
    board: &Board,
    player: Player,
    path: &[Pos],
    jumped: &[Pos],
    out: &mut Vec<Move>,
) {
    let current = path[path.len() - 1];
    for (dr, dc) in DIAGONALS {
        let mut over = (current.0 + dr, current.1 + dc);
        while board.field_exists(over) && board.piece_at(over).is_none() {
            over = (over.0 + dr, over.1 + dc);
        }
        if !board.field_exists(over) || jumped.contains(&over) {
            continue;
        }
        let piece = board.piece_at(over).expect("slide stopped on occupied square");
        if piece.owner == player {
            continue;
        }
        let landing = (over.0 + dr, over.1 + dc);
        if !board.field_exists(landing) || board.piece_at(landing).is_some() {
            continue;
        }
        if path.contains(&landing) {
            continue;
        }
        let mut chain = path.to_vec();
        chain.push(landing);
        let mut taken = jumped.to_vec();
        taken.push(over);
        out.push(Move::new(chain.clone()));
        king_capture_chains(board, player, &chain, &taken, out);
    }
}

/// Apply a move: lift the piece off its origin, remove every piece the path
/// jumps over, and put the mover down on the destination with its rank
/// unchanged. Returns the removed pieces so the move can be reversed
/// exactly. Turn, promotion and game state are left untouched; those belong
/// to [`advance_turn`] and [`promote`].
pub fn apply_move(board: &mut Board, mv: &Move) -> Vec<(Pos, Piece)> {
    let piece = board
        .take(mv.origin())
        .expect("move origin holds no piece");
    let mut captured = Vec::new();
    for pair in mv.path.windows(2) {
        for sq in between(pair[0], pair[1]) {
            if let Some(taken) = board.take(sq) {
                captured.push((sq, taken));
            }
        }
    }
    board.place(mv.dest(), piece);
    captured
}

/// Exact inverse of [`apply_move`]: move the piece back to its origin and
/// reinsert every captured piece. Used only by the search engine; played
/// games never roll back.
pub fn undo_move(board: &mut Board, mv: &Move, captured: &[(Pos, Piece)]) {
    let piece = board
        .take(mv.dest())
        .expect("move destination holds no piece");
    board.place(mv.origin(), piece);
    for &(pos, taken) in captured {
        board.place(pos, taken);
    }
}

/// Promote the man on `pos` to a king if it stands on its owner's promotion
/// row. Returns whether a promotion happened.
pub fn promote(board: &mut Board, pos: Pos) -> bool {
    let Some(piece) = board.piece_at(pos) else {
        return false;
    };
    if piece.rank != Rank::Man || pos.0 != piece.owner.promotion_row(board.size) {
        return false;
    }
    board.take(pos);
    board.place(pos, Piece::new(piece.owner, Rank::King));
    info!("{} man promoted to king at {:?}", piece.owner, pos);
    true
}

/// Advance the turn state machine. A side with no pieces loses immediately.
/// Otherwise the turn flips; a player with no legal move is skipped, and if
/// neither player can move the game ends in a draw.
pub fn advance_turn(board: &mut Board) {
    for player in [Player::White, Player::Black] {
        if board.piece_count(player) == 0 {
            let winner = player.opponent();
            info!("game over: {winner} wins");
            board.state = GameState::Over(Some(winner));
            return;
        }
    }

    board.turn = board.turn.opponent();
    if !has_any_move(board, board.turn) {
        debug!("no possible moves for {}, turn skipped", board.turn);
        board.turn = board.turn.opponent();
        if !has_any_move(board, board.turn) {
            info!("game over: neither player can move");
            board.state = GameState::Over(None);
        }
    }
}

/// Whether the player has at least one move anywhere on the board.
pub fn has_any_move(board: &Board, player: Player) -> bool {
    board
        .sorted_positions(player)
        .iter()
        .any(|&pos| !moves_ignoring_turn(board, pos).is_empty())
}

/// Every move of every piece the player owns, pieces enumerated in sorted
/// position order. This is the canonical enumeration the search engine uses.
pub fn all_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for pos in board.sorted_positions(player) {
        moves.extend(moves_ignoring_turn(board, pos));
    }
    moves
}
