//! Memoized minimax search for the optimal move.
//!
//! The search walks the full game tree, alternating a maximizing step
//! (X to move) and a minimizing step (O to move). Subtrees overlap
//! heavily across move orders, so evaluated boards are cached by their
//! encoded key and reused on every later visit.

use crate::encode::board_key;
use crate::{rules, Board, Player, Position};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Exhaustive minimax solver with a memoized evaluation cache.
///
/// The solver owns its cache; its lifetime is the caller's to manage.
/// Entries never go stale within a process because a board's minimax
/// value depends only on its squares, not on how play reached it.
///
/// Recursion depth is bounded by the number of empty squares (at most
/// 9), and the full tree has well under 9! distinct boards, so a
/// search from any position completes without pruning.
///
/// # Example
///
/// ```
/// use tictactoe_solver::{Board, Position, Solver};
///
/// let mut solver = Solver::new();
/// let best = solver.best_move(&Board::new()).expect("moves available");
/// // Every opening move draws under perfect play, so the tie-break
/// // picks the first position in enumeration order.
/// assert_eq!(best, Position::TopLeft);
/// ```
#[derive(Debug, Default)]
pub struct Solver {
    /// Minimax value per encoded board, for the side to move there.
    cache: HashMap<u32, i8>,
}

impl Solver {
    /// Creates a solver with an empty cache.
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Returns the number of boards with cached values.
    pub fn cached_boards(&self) -> usize {
        self.cache.len()
    }

    /// Computes the optimal move for the side to move.
    ///
    /// Returns `None` if the board is terminal. Otherwise X picks the
    /// child maximizing the minimizing branch's value and O picks the
    /// child minimizing the maximizing branch's value. Ties go to the
    /// first move in enumeration order: a later candidate replaces the
    /// incumbent only when strictly better.
    #[instrument(skip(self))]
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        if rules::is_terminal(board) {
            return None;
        }

        let mover = rules::to_move(board);
        let mut best: Option<(Position, i8)> = None;

        for pos in rules::legal_moves(board) {
            let child = rules::apply(board, pos).expect("legal move targets an empty square");
            let value = match mover {
                Player::X => self.min_value(&child),
                Player::O => self.max_value(&child),
            };
            let better = match best {
                None => true,
                Some((_, incumbent)) => match mover {
                    Player::X => value > incumbent,
                    Player::O => value < incumbent,
                },
            };
            if better {
                best = Some((pos, value));
            }
        }

        let (pos, value) = best?;
        debug!(%mover, %pos, value, cached = self.cache.len(), "solved position");
        Some(pos)
    }

    /// Returns the memoized minimax value of the board for the side
    /// to move: +1 means X forces a win, -1 means O does, 0 a draw.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self, board: &Board) -> i8 {
        if rules::is_terminal(board) {
            return rules::utility(board);
        }
        match rules::to_move(board) {
            Player::X => self.max_value(board),
            Player::O => self.min_value(board),
        }
    }

    // The cache key carries no side-to-move bit: the mover is already
    // determined by the mark counts, so a given board is always
    // evaluated by the same branch and the cached value is unambiguous.

    /// Value of a board with X to move: the maximum over X's replies.
    fn max_value(&mut self, board: &Board) -> i8 {
        let key = board_key(board);
        if let Some(&value) = self.cache.get(&key) {
            return value;
        }

        let value = if rules::is_terminal(board) {
            rules::utility(board)
        } else {
            let mut best = -1;
            for pos in rules::legal_moves(board) {
                let child = rules::apply(board, pos).expect("legal move targets an empty square");
                best = best.max(self.min_value(&child));
            }
            best
        };

        self.cache.insert(key, value);
        value
    }

    /// Value of a board with O to move: the minimum over O's replies.
    fn min_value(&mut self, board: &Board) -> i8 {
        let key = board_key(board);
        if let Some(&value) = self.cache.get(&key) {
            return value;
        }

        let value = if rules::is_terminal(board) {
            rules::utility(board)
        } else {
            let mut best = 1;
            for pos in rules::legal_moves(board) {
                let child = rules::apply(board, pos).expect("legal move targets an empty square");
                best = best.min(self.max_value(&child));
            }
            best
        };

        self.cache.insert(key, value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn place(board: Board, player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(board, |b, &pos| b.with(pos, Square::Occupied(player)))
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let board = place(
            Board::new(),
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(Solver::new().best_move(&board), None);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(Solver::new().evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_x_takes_immediate_win() {
        // X X . / O O . / . . .  with X to move
        let board = place(
            place(
                Board::new(),
                Player::X,
                &[Position::TopLeft, Position::TopCenter],
            ),
            Player::O,
            &[Position::MiddleLeft, Position::Center],
        );
        let mut solver = Solver::new();
        assert_eq!(solver.best_move(&board), Some(Position::TopRight));
        assert_eq!(solver.evaluate(&board), 1);
    }

    #[test]
    fn test_o_blocks_open_threat() {
        // X X . / . O . / . . .  with O to move: anything but the
        // block loses.
        let board = place(
            place(
                Board::new(),
                Player::X,
                &[Position::TopLeft, Position::TopCenter],
            ),
            Player::O,
            &[Position::Center],
        );
        assert_eq!(Solver::new().best_move(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_o_prefers_immediate_win_over_block() {
        // X X . / O O . / X . .  with O to move: completing the
        // middle row wins outright.
        let board = place(
            place(
                Board::new(),
                Player::X,
                &[Position::TopLeft, Position::TopCenter, Position::BottomLeft],
            ),
            Player::O,
            &[Position::MiddleLeft, Position::Center],
        );
        let mut solver = Solver::new();
        assert_eq!(solver.best_move(&board), Some(Position::MiddleRight));
        assert_eq!(solver.evaluate(&board), -1);
    }

    #[test]
    fn test_cache_reused_across_calls() {
        let mut solver = Solver::new();
        let _ = solver.best_move(&Board::new());
        let filled = solver.cached_boards();
        assert!(filled > 0);

        // Same query again: no new boards to evaluate.
        let _ = solver.best_move(&Board::new());
        assert_eq!(solver.cached_boards(), filled);
    }

    #[test]
    fn test_best_move_is_deterministic() {
        let board = place(Board::new(), Player::X, &[Position::Center]);
        let shared = {
            let mut solver = Solver::new();
            let first = solver.best_move(&board);
            assert_eq!(solver.best_move(&board), first);
            first
        };
        // A fresh cache makes the same decision.
        assert_eq!(Solver::new().best_move(&board), shared);
    }
}
