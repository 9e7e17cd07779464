mod board;
mod bot_controller;
mod error;
mod game_state;
mod session;
mod settings;
mod state_update;
mod types;
mod win_detector;

pub use board::{empty_board, get_available_moves, is_board_full, is_valid_move};
pub use bot_controller::{BotInput, calculate_minimax_move};
pub use error::InvalidMove;
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use settings::{DEFAULT_OPPONENT_DELAY_MS, TicTacToeSessionSettings};
pub use state_update::{TicTacToeCommand, TicTacToeStateUpdate};
pub use types::{BOARD_SIZE, BOARD_WIDTH, Board, GameStatus, LINES, Mark, Scoreboard, WinningLine};
pub use win_detector::{check_win, check_win_with_line};
