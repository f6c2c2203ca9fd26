//! Tic-tac-toe rules and a memoized minimax solver.
//!
//! This library is the pure core of a tic-tac-toe engine: board
//! representation, legal-move enumeration, move application, winner
//! and terminal detection, and game-theoretically optimal move
//! selection through exhaustive adversarial search. Rendering, input
//! handling, and loop control belong to the caller.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Square`], [`Position`] - value
//!   objects, every mutation yields a new board
//! - **Rules**: pure functions in [`rules`] - turn order, legal moves,
//!   move application, win/draw/terminal detection, utility scoring
//! - **Encoding**: [`board_key`] packs a board into a collision-free
//!   `u32` for memoization
//! - **Search**: [`Solver`] computes optimal moves by minimax with a
//!   solver-owned evaluation cache
//! - **Session**: [`Game`] wraps the rules into a validated, replayable
//!   match state
//!
//! # Example
//!
//! ```
//! use tictactoe_solver::{Game, Move, Solver};
//!
//! let mut game = Game::new();
//! let mut solver = Solver::new();
//!
//! // Let the solver play both sides to the end.
//! while let Some(pos) = solver.best_move(game.board()) {
//!     game.play(Move::new(game.to_move(), pos))?;
//! }
//!
//! // Perfect play from the empty board is always a draw.
//! assert!(game.outcome().expect("game finished").is_draw());
//! # Ok::<(), tictactoe_solver::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod encode;
mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use encode::board_key;
pub use game::{Game, Outcome};
pub use position::Position;
pub use search::Solver;
pub use types::{Board, Player, Square};
