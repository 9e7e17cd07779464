use super::game_state::TicTacToeGameState;
use super::types::{Board, GameStatus, Mark, Scoreboard, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeCommand {
    PlaceMark { index: usize },
    Reset,
}

/// Render-ready view of a session, broadcast after every processed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeStateUpdate {
    pub board: Board,
    pub status: GameStatus,
    pub current_mark: Mark,
    pub winning_line: Option<WinningLine>,
    pub last_move: Option<usize>,
    pub opponent_thinking: bool,
    pub scoreboard: Scoreboard,
    pub generation: u64,
}

impl TicTacToeStateUpdate {
    pub fn from_game_state(
        game_state: &TicTacToeGameState,
        opponent_thinking: bool,
        scoreboard: Scoreboard,
        generation: u64,
    ) -> Self {
        Self {
            board: game_state.board_snapshot(),
            status: game_state.current_status(),
            current_mark: game_state.current_mark(),
            winning_line: game_state.winning_line(),
            last_move: game_state.last_move(),
            opponent_thinking,
            scoreboard,
            generation,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress
            && self.current_mark == TicTacToeGameState::HUMAN_MARK
            && !self.opponent_thinking
    }

    pub fn status_text(&self) -> &'static str {
        match self.status {
            GameStatus::Won(mark) if mark == TicTacToeGameState::HUMAN_MARK => "You win!",
            GameStatus::Won(_) => "Opponent wins!",
            GameStatus::Draw => "Draw",
            GameStatus::InProgress if self.current_mark == TicTacToeGameState::HUMAN_MARK => {
                "Your turn"
            }
            GameStatus::InProgress => "Opponent is thinking...",
        }
    }
}
