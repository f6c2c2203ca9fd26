//! Compact board encoding for memoization.

use crate::{Board, Player, Square};
use tracing::instrument;

/// Encodes a board into a compact cache key.
///
/// Each square contributes 2 bits (00 = empty, 01 = X, 10 = O),
/// accumulated big-endian over the 9 squares in row-major order: the
/// key is shifted left by 2 before each square's code is added. Every
/// distinct board maps to a distinct key in `[0, 4^9)`, including
/// boards unreachable through legal play.
#[instrument]
pub fn board_key(board: &Board) -> u32 {
    board.squares().iter().fold(0u32, |key, &square| {
        let code = match square {
            Square::Empty => 0,
            Square::Occupied(Player::X) => 1,
            Square::Occupied(Player::O) => 2,
        };
        (key << 2) | code
    })
}
