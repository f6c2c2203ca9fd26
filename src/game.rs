//! Stateful game session over the pure rules.
//!
//! [`Game`] is the surface a match loop drives: it validates moves,
//! records history, and reports the outcome. All rule decisions
//! delegate to the pure functions in [`crate::rules`].

use crate::{rules, Board, Move, MoveError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// A tic-tac-toe game, in progress or finished.
///
/// The board is the single source of truth: the player to move and
/// the outcome are derived from it, so the struct cannot drift into
/// an inconsistent state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        rules::to_move(&self.board)
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions still open, in row-major order.
    pub fn open_positions(&self) -> Vec<Position> {
        rules::legal_moves(&self.board)
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        rules::is_terminal(&self.board)
    }

    /// Returns the outcome, or `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = rules::check_winner(&self.board) {
            Some(Outcome::Winner(winner))
        } else if rules::is_full(&self.board) {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Plays a move, validating it first.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already finished.
    /// - [`MoveError::WrongPlayer`] if it is not the mover's turn.
    /// - [`MoveError::SquareOccupied`] if the target square is taken.
    #[instrument(skip(self))]
    pub fn play(&mut self, action: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move() {
            return Err(MoveError::WrongPlayer(action.player));
        }
        self.board = rules::apply(&self.board, action.position)?;
        self.history.push(action);
        debug!(%action, over = self.is_over(), "move played");
        Ok(())
    }

    /// Replays a recorded move sequence from the empty board.
    ///
    /// # Errors
    ///
    /// Fails with the first invalid move's [`MoveError`].
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Game::new();
        for &action in moves {
            game.play(action)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
