//! Terminal detection and utility scoring.

use super::draw::is_full;
use super::win::check_winner;
use crate::{Board, Player};
use tracing::instrument;

/// Checks if the game is over: someone won, or the board is full.
#[instrument]
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}

/// Returns the score of a finished board: +1 if X won, -1 if O won,
/// 0 otherwise.
///
/// Only meaningful on terminal boards. A board still in play has no
/// winner and scores 0 by the same rule.
#[instrument]
pub fn utility(board: &Board) -> i8 {
    match check_winner(board) {
        Some(Player::X) => 1,
        Some(Player::O) => -1,
        None => 0,
    }
}
