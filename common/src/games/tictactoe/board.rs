use super::types::{BOARD_SIZE, Board, Mark};

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_SIZE]
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    if index >= BOARD_SIZE {
        return false;
    }
    board[index].is_empty()
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|cell| !cell.is_empty())
}

pub fn count_marks(board: &Board) -> usize {
    board.iter().filter(|cell| !cell.is_empty()).count()
}
