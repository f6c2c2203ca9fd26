//! Turn order for tic-tac-toe.

use crate::{Board, Player};
use tracing::instrument;

/// Returns the player who has the next turn on the board.
///
/// X goes first, so X is to move exactly when the mark counts are
/// equal. Only meaningful on boards reachable through alternating
/// play; the function is total regardless.
#[instrument]
pub fn to_move(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}
