use common::config::Validate;
use common::games::tictactoe::{DEFAULT_OPPONENT_DELAY_MS, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

pub const MAX_OPPONENT_DELAY_MS: u64 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub opponent_delay_ms: u64,
}

impl TicTacToeConfig {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings::from_delay_ms(self.opponent_delay_ms)
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.opponent_delay_ms > MAX_OPPONENT_DELAY_MS {
            return Err(format!(
                "opponent_delay_ms must not exceed {} (got {})",
                MAX_OPPONENT_DELAY_MS, self.opponent_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: DEFAULT_OPPONENT_DELAY_MS,
        }
    }
}
