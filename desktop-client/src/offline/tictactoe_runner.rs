use common::games::tictactoe::{TicTacToeCommand, TicTacToeSession, TicTacToeSessionSettings};
use common::log;
use tokio::sync::mpsc;

use crate::state::SharedState;

use super::LocalBroadcaster;

pub async fn run_tictactoe_game(
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<TicTacToeCommand>,
    settings: TicTacToeSessionSettings,
) {
    log!(
        "Starting local game, opponent delay {} ms",
        settings.opponent_delay.as_millis()
    );

    let broadcaster = LocalBroadcaster::new(shared_state);
    let scoreboard = TicTacToeSession::run(settings, command_rx, broadcaster).await;

    log!(
        "Local game finished: {} won, {} lost, {} drawn",
        scoreboard.human_wins,
        scoreboard.opponent_wins,
        scoreboard.draws
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use common::games::tictactoe::Mark;

    async fn wait_for<F>(shared_state: &SharedState, predicate: F)
    where
        F: Fn(&common::games::tictactoe::TicTacToeStateUpdate) -> bool,
    {
        let wait = async {
            loop {
                if let Some(update) = shared_state.get_game_state()
                    && predicate(&update)
                {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(Duration::from_secs(5), wait)
            .await
            .expect("state never reached");
    }

    #[tokio::test]
    async fn test_runner_publishes_opponent_reply() {
        let shared_state = SharedState::new();
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_tictactoe_game(
            shared_state.clone(),
            command_rx,
            TicTacToeSessionSettings::from_delay_ms(10),
        ));

        wait_for(&shared_state, |update| update.is_human_turn()).await;
        command_tx.send(TicTacToeCommand::PlaceMark { index: 4 }).unwrap();
        wait_for(&shared_state, |update| update.board[0] == Mark::O).await;

        drop(command_tx);
        tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("runner did not stop")
            .unwrap();
    }
}
