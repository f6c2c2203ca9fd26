//! Legal move enumeration and move application.

use super::turn::to_move;
use crate::{Board, MoveError, Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the positions of all empty squares, in row-major order.
///
/// The order carries no game meaning but is fixed so callers and
/// tests see deterministic enumeration. Returns an empty vector on a
/// full board.
#[instrument]
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::iter().filter(|&pos| board.is_empty(pos)).collect()
}

/// Applies a move at `pos` for the player to move, returning the
/// resulting board. The input board is left untouched.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the target square is not
/// empty. This never arises for positions taken from [`legal_moves`].
#[instrument]
pub fn apply(board: &Board, pos: Position) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    Ok(board.with(pos, Square::Occupied(to_move(board))))
}
