use super::board::{get_available_moves, is_board_full};
use super::game_state::TicTacToeGameState;
use super::types::{Board, Mark};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board_snapshot(),
            current_mark: state.current_mark(),
        }
    }
}

/// Exhaustive minimax from the side to move. Returns `None` on a decided or
/// full board. Ties go to the lowest cell index.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent()?;

    if check_win(&input.board).is_some() {
        return None;
    }

    let available_moves = get_available_moves(&input.board);
    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        board[index] = bot_mark;
        let score = minimax(&mut board, 0, false, bot_mark, opponent_mark);
        board[index] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> i32 {
    if let Some(winner) = check_win(board) {
        return if winner == bot_mark {
            WIN_SCORE - depth
        } else {
            depth - WIN_SCORE
        };
    }

    if is_board_full(board) {
        return 0;
    }

    let moves = get_available_moves(board);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board[index] = bot_mark;
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark);
            board[index] = Mark::Empty;
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board[index] = opponent_mark;
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark);
            board[index] = Mark::Empty;
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::empty_board;
    use crate::games::tictactoe::types::GameStatus;

    fn board_from(x_cells: &[usize], o_cells: &[usize]) -> Board {
        let mut board = empty_board();
        for &index in x_cells {
            board[index] = Mark::X;
        }
        for &index in o_cells {
            board[index] = Mark::O;
        }
        board
    }

    fn o_to_move(x_cells: &[usize], o_cells: &[usize]) -> BotInput {
        BotInput {
            board: board_from(x_cells, o_cells),
            current_mark: Mark::O,
        }
    }

    fn play_every_human_line(state: &TicTacToeGameState, finished_games: &mut usize) {
        if state.is_terminal() {
            assert_ne!(
                state.current_status(),
                GameStatus::Won(Mark::X),
                "opponent lost on board {:?}",
                state.board_snapshot()
            );
            *finished_games += 1;
            return;
        }

        if state.is_opponent_turn() {
            let index = state.compute_opponent_move().unwrap();
            let mut next = state.clone();
            next.apply_opponent_move(index).unwrap();
            play_every_human_line(&next, finished_games);
            return;
        }

        for index in get_available_moves(&state.board_snapshot()) {
            let mut next = state.clone();
            next.apply_human_move(index).unwrap();
            play_every_human_line(&next, finished_games);
        }
    }

    #[test]
    fn test_opponent_never_loses() {
        let mut finished_games = 0;

        play_every_human_line(&TicTacToeGameState::new(), &mut finished_games);

        assert!(finished_games > 0);
    }

    #[test]
    fn test_center_opening_gets_first_corner() {
        let input = o_to_move(&[4], &[]);

        assert_eq!(calculate_minimax_move(&input), Some(0));
    }

    #[test]
    fn test_corner_opening_gets_center() {
        for corner in [0, 2, 6, 8] {
            let input = o_to_move(&[corner], &[]);

            assert_eq!(calculate_minimax_move(&input), Some(4));
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let input = o_to_move(&[1, 4, 8], &[0, 3]);

        assert_eq!(calculate_minimax_move(&input), Some(6));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let input = o_to_move(&[0, 1], &[4]);

        assert_eq!(calculate_minimax_move(&input), Some(2));
    }

    #[test]
    fn test_prefers_faster_win() {
        // 1 and 2 both fork into a forced win, 8 wins on the spot.
        let input = o_to_move(&[3, 5, 7], &[0, 4]);

        assert_eq!(calculate_minimax_move(&input), Some(8));
    }

    #[test]
    fn test_is_deterministic() {
        let input = o_to_move(&[0], &[]);

        let first = calculate_minimax_move(&input);
        for _ in 0..5 {
            assert_eq!(calculate_minimax_move(&input), first);
        }
    }

    #[test]
    fn test_no_move_on_decided_or_full_board() {
        let won = o_to_move(&[0, 1, 2], &[3, 4]);
        assert_eq!(calculate_minimax_move(&won), None);

        let full = o_to_move(&[1, 2, 3, 4, 8], &[0, 5, 6, 7]);
        assert_eq!(calculate_minimax_move(&full), None);
    }

    #[test]
    fn test_empty_mark_has_no_move() {
        let input = BotInput {
            board: empty_board(),
            current_mark: Mark::Empty,
        };

        assert_eq!(calculate_minimax_move(&input), None);
    }

    #[test]
    fn test_search_works_for_x_side() {
        let input = BotInput {
            board: board_from(&[0, 1], &[3, 4]),
            current_mark: Mark::X,
        };

        assert_eq!(calculate_minimax_move(&input), Some(2));
    }
}
