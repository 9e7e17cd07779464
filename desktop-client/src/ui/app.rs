use common::games::tictactoe::TicTacToeCommand;
use common::log;
use eframe::egui;
use tokio::sync::mpsc;

use crate::config::{ClientConfigManager, Config};
use crate::state::SharedState;

use super::game::TicTacToeGameUi;

pub struct TicTacToeApp {
    shared_state: SharedState,
    command_tx: Option<mpsc::UnboundedSender<TicTacToeCommand>>,
    config_manager: ClientConfigManager,
    config: Config,
    game_ui: TicTacToeGameUi,
}

impl TicTacToeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<TicTacToeCommand>,
        config_manager: ClientConfigManager,
        config: Config,
    ) -> Self {
        apply_theme(&cc.egui_ctx, config.window.dark_mode);
        shared_state.set_context(cc.egui_ctx.clone());

        Self {
            shared_state,
            command_tx: Some(command_tx),
            config_manager,
            config,
            game_ui: TicTacToeGameUi::new(),
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.config.window.dark_mode = !self.config.window.dark_mode;
        apply_theme(ctx, self.config.window.dark_mode);

        if let Err(e) = self.config_manager.set_config(&self.config) {
            log!("Failed to save theme choice: {}", e);
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("New game").clicked()
                    && let Some(command_tx) = &self.command_tx
                {
                    let _ = command_tx.send(TicTacToeCommand::Reset);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.config.window.dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });
    }
}

fn apply_theme(ctx: &egui::Context, dark_mode: bool) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        // Dropping the sender ends the session and cancels a pending opponent move.
        if ctx.input(|i| i.viewport().close_requested()) && self.command_tx.take().is_some() {
            log!("Window closing, stopping game session");
        }

        self.render_top_bar(ctx);

        let game_state = self.shared_state.get_game_state();
        egui::CentralPanel::default().show(ctx, |ui| match (game_state, &self.command_tx) {
            (Some(state), Some(command_tx)) => self.game_ui.render_game(ui, &state, command_tx),
            _ => {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            }
        });
    }
}
