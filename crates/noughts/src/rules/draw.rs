//! Draw detection logic for tic-tac-toe.

use crate::types::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::has_won;
    use super::*;
    use crate::types::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && !has_won(board, Mark::X) && !has_won(board, Mark::O)
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(&Board::new().with(4, Mark::X)));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ]
        .iter()
        .enumerate()
        .fold(Board::new(), |board, (i, &mark)| board.with(i, mark));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::new()
            .with(0, Mark::X)
            .with(1, Mark::X)
            .with(2, Mark::X)
            .with(3, Mark::O)
            .with(4, Mark::O);
        assert!(!is_draw(&board));
    }
}
