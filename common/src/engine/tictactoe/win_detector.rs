use super::board::Board;
use super::types::{Mark, Outcome, WINNING_LINES, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// First completed line in `WINNING_LINES` order.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

/// Win beats draw: a full board with a completed line is a win.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::from_winner(winner);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Computer as O, Empty as E, Human as X};

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
        assert_eq!(check_win(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for line in WINNING_LINES {
            for mark in [X, O] {
                let mut cells = [E; 9];
                for index in line {
                    cells[index] = mark;
                }
                let board = Board::from_cells(cells);
                assert_eq!(check_win_with_line(&board), Some(WinningLine::new(mark, line)));
                assert_eq!(evaluate(&board), Outcome::from_winner(mark));
            }
        }
    }

    #[test]
    fn test_human_completes_top_row() {
        let mut board = Board::from_cells([X, X, E, O, O, E, E, E, E]);
        assert_eq!(evaluate(&board), Outcome::Ongoing);
        board.place(2, X).unwrap();
        assert_eq!(evaluate(&board), Outcome::HumanWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert!(board.is_full());
        assert_eq!(evaluate(&board), Outcome::HumanWins);
    }

    #[test]
    fn test_rows_are_checked_before_columns() {
        // Column 0 and row 0 both belong to X; the row is reported.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        assert_eq!(check_win_with_line(&board).map(|line| line.cells), Some([0, 1, 2]));
    }
}
