//! Game engine: pure transition functions over a [`Board`].
//!
//! Nothing here owns state. Callers thread the board through
//! [`apply_move`] and [`evaluate`]; [`crate::Session`] is the owned
//! wrapper that also tracks turn order and score.

use crate::action::MoveError;
use crate::rules::{has_won, is_full};
use crate::types::{Board, GameStatus, Mark};
use tracing::{debug, instrument};

pub use crate::rules::winning_line;

/// Places `mark` at `index` and returns the resulting board.
///
/// The input board is never modified. Checks run in order: a board that
/// is already won or drawn rejects with [`MoveError::GameAlreadyOver`],
/// an index past the board with [`MoveError::OutOfBounds`], and a filled
/// cell with [`MoveError::CellOccupied`].
///
/// # Errors
///
/// Returns the first failed check; the board is dropped unchanged.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    if status_of(board).is_terminal() {
        debug!("Rejecting move on finished board");
        return Err(MoveError::GameAlreadyOver);
    }

    if index >= Board::SIZE {
        debug!("Rejecting out-of-bounds move");
        return Err(MoveError::OutOfBounds(index));
    }

    if !board.is_empty(index) {
        debug!("Rejecting move on occupied cell");
        return Err(MoveError::CellOccupied(index));
    }

    Ok(board.with(index, mark))
}

/// Derives the status after `last_mover` has played.
///
/// Only `last_mover` can have just completed a line, so only its lines
/// are checked. Call after every move, before toggling the turn.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, last_mover: Mark) -> GameStatus {
    if has_won(board, last_mover) {
        GameStatus::Won(last_mover)
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

/// Derives the status of any board without knowing who moved last.
///
/// X is checked before O. On reachable boards at most one of them holds.
pub fn status_of(board: &Board) -> GameStatus {
    if has_won(board, Mark::X) {
        GameStatus::Won(Mark::X)
    } else if has_won(board, Mark::O) {
        GameStatus::Won(Mark::O)
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

/// Returns a fresh board for a new round. X moves first on it.
#[instrument]
pub fn reset() -> Board {
    Board::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn play(moves: &[(usize, Mark)]) -> Board {
        moves
            .iter()
            .try_fold(reset(), |board, &(index, mark)| apply_move(&board, index, mark))
            .expect("legal sequence")
    }

    #[test]
    fn test_apply_move_places_mark() {
        let board = reset();
        let next = apply_move(&board, 4, Mark::X).unwrap();
        assert_eq!(next.get(4), Some(Cell::Occupied(Mark::X)));
        assert!(board.is_empty(4));
    }

    #[test]
    fn test_apply_move_rejects_occupied() {
        let board = play(&[(4, Mark::X)]);
        assert_eq!(
            apply_move(&board, 4, Mark::O),
            Err(MoveError::CellOccupied(4))
        );
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        assert_eq!(
            apply_move(&reset(), 9, Mark::X),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_apply_move_rejects_after_win() {
        let board = play(&[
            (0, Mark::X),
            (3, Mark::O),
            (1, Mark::X),
            (4, Mark::O),
            (2, Mark::X),
        ]);
        assert_eq!(evaluate(&board, Mark::X), GameStatus::Won(Mark::X));
        assert_eq!(
            apply_move(&board, 8, Mark::O),
            Err(MoveError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_evaluate_in_progress() {
        let board = play(&[(0, Mark::X), (4, Mark::O)]);
        assert_eq!(evaluate(&board, Mark::O), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_draw() {
        // X O X / X O O / O X X
        let board = play(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (4, Mark::O),
            (3, Mark::X),
            (5, Mark::O),
            (7, Mark::X),
            (6, Mark::O),
            (8, Mark::X),
        ]);
        assert_eq!(evaluate(&board, Mark::X), GameStatus::Drawn);
        assert_eq!(status_of(&board), GameStatus::Drawn);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        // The ninth mark completes the main diagonal.
        let board = play(&[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (5, Mark::O),
            (3, Mark::X),
            (6, Mark::O),
            (4, Mark::X),
            (7, Mark::O),
            (8, Mark::X),
        ]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board, Mark::X), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_winning_line_reexport() {
        let board = play(&[
            (2, Mark::X),
            (0, Mark::O),
            (4, Mark::X),
            (1, Mark::O),
            (6, Mark::X),
        ]);
        assert_eq!(
            winning_line(&board, Mark::X).map(|line| line.cells()),
            Some([2, 4, 6])
        );
    }
}
