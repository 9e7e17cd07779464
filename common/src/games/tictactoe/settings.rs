use std::time::Duration;

pub const DEFAULT_OPPONENT_DELAY_MS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub opponent_delay: Duration,
}

impl TicTacToeSessionSettings {
    pub fn from_delay_ms(opponent_delay_ms: u64) -> Self {
        Self {
            opponent_delay: Duration::from_millis(opponent_delay_ms),
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self::from_delay_ms(DEFAULT_OPPONENT_DELAY_MS)
    }
}
