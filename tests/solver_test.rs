//! End-to-end tests for the minimax solver.

use tictactoe_solver::{rules, Board, Game, Move, Outcome, Player, Position, Solver};

/// Builds a board by replaying positions with alternating players, X first.
fn board_from(positions: &[Position]) -> Board {
    let mut game = Game::new();
    for &pos in positions {
        game.play(Move::new(game.to_move(), pos)).expect("legal move");
    }
    *game.board()
}

#[test]
fn test_perfect_play_from_empty_board_is_a_draw() {
    let mut game = Game::new();
    let mut solver = Solver::new();

    while let Some(pos) = solver.best_move(game.board()) {
        game.play(Move::new(game.to_move(), pos)).expect("legal move");
    }

    assert!(game.is_over());
    assert_eq!(game.outcome(), Some(Outcome::Draw));
    assert_eq!(rules::utility(game.board()), 0);
}

#[test]
fn test_solver_x_never_loses_to_first_available_opponent() {
    // O plays the first open square every turn; the solver plays X.
    let mut game = Game::new();
    let mut solver = Solver::new();

    while !game.is_over() {
        let pos = match game.to_move() {
            Player::X => solver.best_move(game.board()).expect("game not over"),
            Player::O => game.open_positions()[0],
        };
        game.play(Move::new(game.to_move(), pos)).expect("legal move");
    }

    assert_ne!(game.outcome(), Some(Outcome::Winner(Player::O)));
}

#[test]
fn test_solver_o_never_loses_to_first_available_opponent() {
    let mut game = Game::new();
    let mut solver = Solver::new();

    while !game.is_over() {
        let pos = match game.to_move() {
            Player::X => game.open_positions()[0],
            Player::O => solver.best_move(game.board()).expect("game not over"),
        };
        game.play(Move::new(game.to_move(), pos)).expect("legal move");
    }

    assert_ne!(game.outcome(), Some(Outcome::Winner(Player::X)));
}

#[test]
fn test_forced_move_with_one_open_square() {
    // X O X / X O O / O X . - one square left, X to move.
    let board = board_from(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
    ]);
    assert_eq!(rules::to_move(&board), Player::X);
    assert_eq!(rules::legal_moves(&board), vec![Position::BottomRight]);
    assert_eq!(
        Solver::new().best_move(&board),
        Some(Position::BottomRight)
    );
}

#[test]
fn test_best_move_idempotent_shared_and_fresh_cache() {
    let board = board_from(&[Position::TopLeft, Position::Center]);

    let mut shared = Solver::new();
    let first = shared.best_move(&board);
    assert_eq!(shared.best_move(&board), first);
    assert_eq!(Solver::new().best_move(&board), first);
}

#[test]
fn test_tie_break_prefers_first_enumerated_move() {
    // Every opening reply's value is a draw, so the tie-break keeps
    // the first legal move.
    let mut solver = Solver::new();
    assert_eq!(solver.best_move(&Board::new()), Some(Position::TopLeft));

    let board = board_from(&[Position::TopLeft]);
    let reply = solver.best_move(&board).expect("moves available");
    // O's only drawing reply to a corner opening is the center.
    assert_eq!(reply, Position::Center);
}

#[test]
fn test_evaluate_known_positions() {
    let mut solver = Solver::new();

    // X about to complete the top row: X to move wins.
    let winning = board_from(&[
        Position::TopLeft,
        Position::MiddleLeft,
        Position::TopCenter,
        Position::Center,
    ]);
    assert_eq!(solver.evaluate(&winning), 1);

    // Corner opening answered with the opposite corner: only the
    // center reply draws, so X forces a win from here.
    let corner_trap = board_from(&[Position::TopLeft, Position::BottomRight]);
    assert_eq!(solver.evaluate(&corner_trap), 1);

    // O forked three lines (corner, center, corner); X to move can
    // block only one of them.
    let losing = board_from(&[
        Position::TopCenter,
        Position::TopLeft,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::MiddleRight,
        Position::Center,
    ]);
    assert_eq!(solver.evaluate(&losing), -1);
}

#[test]
fn test_cache_shared_across_positions() {
    let mut solver = Solver::new();
    let _ = solver.best_move(&Board::new());
    let after_full_search = solver.cached_boards();

    // Any later position was already explored from the empty board.
    let board = board_from(&[Position::TopLeft, Position::Center, Position::TopRight]);
    let _ = solver.best_move(&board);
    assert_eq!(solver.cached_boards(), after_full_search);
}
