use std::sync::{Arc, Mutex};

use common::games::tictactoe::TicTacToeStateUpdate;
use eframe::egui;

/// Latest session snapshot, written by the session task and read by the UI.
#[derive(Clone, Default)]
pub struct SharedState {
    game_state: Arc<Mutex<Option<TicTacToeStateUpdate>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_game_state(&self, state: TicTacToeStateUpdate) {
        if let Ok(mut current) = self.game_state.lock() {
            *current = Some(state);
        }
        self.request_repaint();
    }

    pub fn get_game_state(&self) -> Option<TicTacToeStateUpdate> {
        self.game_state.lock().ok().and_then(|state| *state)
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().map(|ctx| ctx.is_some()).unwrap_or(false)
    }

    pub fn set_context(&self, ctx: egui::Context) {
        if let Ok(mut current) = self.context.lock() {
            *current = Some(ctx);
        }
    }

    fn request_repaint(&self) {
        if let Ok(ctx) = self.context.lock()
            && let Some(ctx) = ctx.as_ref()
        {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{Scoreboard, TicTacToeGameState};

    #[test]
    fn test_latest_update_wins() {
        let shared_state = SharedState::new();
        assert!(shared_state.get_game_state().is_none());

        let mut game_state = TicTacToeGameState::new();
        let first = TicTacToeStateUpdate::from_game_state(&game_state, false, Scoreboard::default(), 0);
        shared_state.update_game_state(first);
        game_state.apply_human_move(4).unwrap();
        let second = TicTacToeStateUpdate::from_game_state(&game_state, true, Scoreboard::default(), 0);
        shared_state.clone().update_game_state(second);

        assert_eq!(shared_state.get_game_state(), Some(second));
    }

    #[test]
    fn test_context_is_stored_once_set() {
        let shared_state = SharedState::new();
        assert!(!shared_state.has_context());

        shared_state.set_context(egui::Context::default());

        assert!(shared_state.has_context());
    }
}
