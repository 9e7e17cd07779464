use super::board::{empty_board, is_board_full};
use super::bot_controller::{BotInput, calculate_minimax_move};
use super::error::InvalidMove;
use super::types::{BOARD_SIZE, Board, GameStatus, Mark, WinningLine};
use super::win_detector::check_win_with_line;

/// Human plays X and always moves first; the minimax opponent plays O.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub const HUMAN_MARK: Mark = Mark::X;
    pub const OPPONENT_MARK: Mark = Mark::O;

    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn apply_human_move(&mut self, index: usize) -> Result<(), InvalidMove> {
        self.place_mark(Self::HUMAN_MARK, index)
    }

    pub fn apply_opponent_move(&mut self, index: usize) -> Result<(), InvalidMove> {
        self.place_mark(Self::OPPONENT_MARK, index)
    }

    /// Runs a fresh full-depth search; never mutates the game.
    pub fn compute_opponent_move(&self) -> Result<usize, InvalidMove> {
        self.check_turn(Self::OPPONENT_MARK)?;
        calculate_minimax_move(&BotInput::from_game_state(self)).ok_or(InvalidMove::GameOver)
    }

    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    pub fn board_snapshot(&self) -> Board {
        self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.status {
            GameStatus::Won(_) => check_win_with_line(&self.board),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn is_opponent_turn(&self) -> bool {
        !self.is_terminal() && self.current_mark == Self::OPPONENT_MARK
    }

    fn check_turn(&self, mark: Mark) -> Result<(), InvalidMove> {
        if self.status.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if mark != self.current_mark {
            return Err(InvalidMove::NotYourTurn {
                expected: self.current_mark,
                got: mark,
            });
        }
        Ok(())
    }

    fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), InvalidMove> {
        self.check_turn(mark)?;

        if index >= BOARD_SIZE {
            return Err(InvalidMove::OutOfRange { index });
        }

        if !self.board[index].is_empty() {
            return Err(InvalidMove::CellOccupied { index });
        }

        self.board[index] = mark;
        self.last_move = Some(index);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_win_with_line(&self.board) {
            self.status = GameStatus::Won(line.mark);
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }
}
