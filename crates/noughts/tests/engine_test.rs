//! Tests for the pure engine functions.

use noughts::{
    Board, Cell, GameStatus, Mark, MoveError, ScoreTally, WIN_LINES, apply_move, evaluate,
    record_result, reset, status_of, winning_line,
};

fn play(moves: &[usize]) -> (Board, GameStatus) {
    let mut board = reset();
    let mut mark = Mark::X;
    let mut status = GameStatus::InProgress;
    for &index in moves {
        board = apply_move(&board, index, mark).expect("legal move");
        status = evaluate(&board, mark);
        mark = mark.opponent();
    }
    (board, status)
}

#[test]
fn test_reset_is_empty_regardless_of_prior_board() {
    let (played, _) = play(&[4, 0, 8]);
    assert!(!played.empty_cells().is_empty());

    let fresh = reset();
    assert!(fresh.cells().iter().all(|cell| *cell == Cell::Empty));
    assert_eq!(status_of(&fresh), GameStatus::InProgress);
}

#[test]
fn test_every_line_wins() {
    for line in WIN_LINES {
        let board = line
            .cells()
            .iter()
            .fold(Board::new(), |board, &i| board.with(i, Mark::O));
        assert_eq!(evaluate(&board, Mark::O), GameStatus::Won(Mark::O));
        assert_eq!(winning_line(&board, Mark::O), Some(line));
        assert_eq!(winning_line(&board, Mark::X), None);
    }
}

#[test]
fn test_evaluate_checks_only_last_mover() {
    let (board, status) = play(&[0, 3, 1, 4, 2]);
    assert_eq!(status, GameStatus::Won(Mark::X));
    assert_eq!(evaluate(&board, Mark::O), GameStatus::InProgress);
}

#[test]
fn test_terminal_board_rejects_every_cell() {
    let (board, _) = play(&[0, 3, 1, 4, 2]);
    for index in board.empty_cells() {
        assert_eq!(
            apply_move(&board, index, Mark::O),
            Err(MoveError::GameAlreadyOver)
        );
    }
}

#[test]
fn test_x_win_round_scores_once() {
    let (_, status) = play(&[0, 3, 1, 4, 2]);
    let tally = record_result(ScoreTally::new(), status);
    assert_eq!(tally.x_wins(), 1);
    assert_eq!(tally.o_wins(), 0);
    assert_eq!(tally.draws(), 0);
}

#[test]
fn test_move_error_display() {
    assert_eq!(MoveError::CellOccupied(3).to_string(), "Cell 3 is already occupied");
    assert_eq!(MoveError::GameAlreadyOver.to_string(), "Game is already over");
    assert_eq!(MoveError::NotYourTurn(Mark::X).to_string(), "It's not X's turn");
}
