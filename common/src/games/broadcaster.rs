use std::future::Future;

use super::tictactoe::TicTacToeStateUpdate;

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: TicTacToeStateUpdate) -> impl Future<Output = ()> + Send;
}
