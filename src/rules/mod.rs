//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and session wrapper can compose them
//! without carrying any state of their own.

pub mod draw;
pub mod moves;
pub mod score;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::{apply, legal_moves};
pub use score::{is_terminal, utility};
pub use turn::to_move;
pub use win::{check_winner, WINNING_LINES};
