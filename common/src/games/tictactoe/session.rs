use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::games::GameBroadcaster;
use crate::log;
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::state_update::{TicTacToeCommand, TicTacToeStateUpdate};
use super::types::Scoreboard;

/// Deferred opponent move. The timer task only reports back through
/// `due_tx`; aborting it guarantees nothing fires for a superseded board.
struct OpponentScheduler {
    settings: TicTacToeSessionSettings,
    due_tx: mpsc::UnboundedSender<u64>,
    pending: Option<JoinHandle<()>>,
}

impl OpponentScheduler {
    fn new(settings: TicTacToeSessionSettings, due_tx: mpsc::UnboundedSender<u64>) -> Self {
        Self {
            settings,
            due_tx,
            pending: None,
        }
    }

    fn schedule(&mut self, generation: u64) {
        self.cancel();

        let due_tx = self.due_tx.clone();
        let delay = self.settings.opponent_delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = due_tx.send(generation);
        }));
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    fn complete(&mut self) {
        self.pending = None;
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for OpponentScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

struct TicTacToeSessionState {
    game_state: TicTacToeGameState,
    generation: u64,
    scoreboard: Scoreboard,
    scheduler: OpponentScheduler,
}

impl TicTacToeSessionState {
    fn to_update(&self) -> TicTacToeStateUpdate {
        TicTacToeStateUpdate::from_game_state(
            &self.game_state,
            self.scheduler.is_pending(),
            self.scoreboard,
            self.generation,
        )
    }

    fn handle_command(&mut self, command: TicTacToeCommand) {
        match command {
            TicTacToeCommand::PlaceMark { index } => match self.game_state.apply_human_move(index) {
                Ok(()) => {
                    self.record_if_finished();
                    if self.game_state.is_opponent_turn() {
                        self.scheduler.schedule(self.generation);
                    }
                }
                Err(e) => {
                    log!("[game:{}] Rejected human move at {}: {}", self.generation, index, e);
                }
            },
            TicTacToeCommand::Reset => {
                self.scheduler.cancel();
                self.generation += 1;
                self.game_state.reset();
                log!("[game:{}] New game started", self.generation);
            }
        }
    }

    async fn play_opponent_turn(&mut self, generation: u64) {
        if generation != self.generation {
            log!("[game:{}] Dropping stale opponent move from game {}", self.generation, generation);
            return;
        }
        self.scheduler.complete();

        if !self.game_state.is_opponent_turn() {
            return;
        }

        let snapshot = self.game_state.clone();
        let result = tokio::task::spawn_blocking(move || snapshot.compute_opponent_move()).await;

        match result {
            Ok(Ok(index)) => match self.game_state.apply_opponent_move(index) {
                Ok(()) => self.record_if_finished(),
                Err(e) => {
                    log!("[game:{}] Opponent failed to place mark at {}: {}", self.generation, index, e);
                }
            },
            Ok(Err(e)) => {
                log!("[game:{}] Opponent has no move: {}", self.generation, e);
            }
            Err(e) => {
                log!("[game:{}] Opponent search task failed: {}", self.generation, e);
            }
        }
    }

    fn record_if_finished(&mut self) {
        if self.game_state.is_terminal() {
            let status = self.game_state.current_status();
            self.scoreboard.record(status);
            log!("[game:{}] Game over: {:?}", self.generation, status);
        }
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Runs until every command sender is dropped, then returns the final
    /// scoreboard. A pending opponent move is cancelled on reset and on exit.
    pub async fn run(
        settings: TicTacToeSessionSettings,
        mut command_rx: mpsc::UnboundedReceiver<TicTacToeCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> Scoreboard {
        let (due_tx, mut due_rx) = mpsc::unbounded_channel();
        let mut session = TicTacToeSessionState {
            game_state: TicTacToeGameState::new(),
            generation: 0,
            scoreboard: Scoreboard::default(),
            scheduler: OpponentScheduler::new(settings, due_tx),
        };

        broadcaster.broadcast_state(session.to_update()).await;

        loop {
            tokio::select! {
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    session.handle_command(command);
                }
                Some(generation) = due_rx.recv() => {
                    session.play_opponent_turn(generation).await;
                }
            }

            broadcaster.broadcast_state(session.to_update()).await;
        }

        session.scheduler.cancel();
        log!("Session closed after {} games", session.scoreboard.games_played());
        session.scoreboard
    }
}
