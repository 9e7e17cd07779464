use super::types::{Board, LINES, Mark, WinningLine};

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in LINES {
        let [a, b, c] = line;
        let mark = board[a];
        if mark == Mark::Empty {
            continue;
        }
        if board[b] == mark && board[c] == mark {
            return Some(WinningLine::new(mark, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::empty_board;

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_win(&empty_board()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for mark in [Mark::X, Mark::O] {
                let mut board = empty_board();
                for index in line {
                    board[index] = mark;
                }

                let winning_line = check_win_with_line(&board).unwrap();
                assert_eq!(winning_line.mark, mark);
                assert_eq!(winning_line.cells, line);
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[1] = Mark::O;
        board[2] = Mark::X;

        assert_eq!(check_win(&board), None);
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let mut board = empty_board();
        board[6] = Mark::O;
        board[7] = Mark::O;

        assert_eq!(check_win(&board), None);
    }
}
