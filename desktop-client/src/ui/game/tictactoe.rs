use common::games::tictactoe::{BOARD_SIZE, BOARD_WIDTH, Mark, TicTacToeCommand, TicTacToeStateUpdate};
use eframe::egui;
use tokio::sync::mpsc;

pub struct TicTacToeGameUi {
    last_hover: Option<usize>,
}

impl TicTacToeGameUi {
    const MIN_CELL_SIZE: f32 = 40.0;
    const MAX_CELL_SIZE: f32 = 120.0;
    const LINE_WIDTH: f32 = 2.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    pub fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let cell_size = available_width.min(available_height) / BOARD_WIDTH as f32;
        cell_size.clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Maps a pointer position inside the board rect to a row-major cell index.
    pub fn cell_at(rect: egui::Rect, pos: egui::Pos2) -> Option<usize> {
        if !rect.contains(pos) {
            return None;
        }
        let cell_size = rect.width() / BOARD_WIDTH as f32;
        let x = (((pos.x - rect.left()) / cell_size) as usize).min(BOARD_WIDTH - 1);
        let y = (((pos.y - rect.top()) / cell_size) as usize).min(BOARD_WIDTH - 1);
        Some(y * BOARD_WIDTH + x)
    }

    pub fn cell_rect(rect: egui::Rect, index: usize) -> egui::Rect {
        let cell_size = rect.width() / BOARD_WIDTH as f32;
        let x = (index % BOARD_WIDTH) as f32;
        let y = (index / BOARD_WIDTH) as f32;
        egui::Rect::from_min_size(
            egui::pos2(rect.left() + x * cell_size, rect.top() + y * cell_size),
            egui::vec2(cell_size, cell_size),
        )
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeStateUpdate,
        command_tx: &mpsc::UnboundedSender<TicTacToeCommand>,
    ) {
        ui.vertical_centered(|ui| {
            ui.heading(state.status_text());
            if state.opponent_thinking {
                ui.spinner();
            }
            ui.add_space(8.0);

            let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height() - 80.0);
            self.render_board(ui, state, cell_size, command_tx);

            ui.add_space(8.0);
            self.render_scoreboard(ui, state);
        });
    }

    fn render_board(
        &mut self,
        ui: &mut egui::Ui,
        state: &TicTacToeStateUpdate,
        cell_size: f32,
        command_tx: &mpsc::UnboundedSender<TicTacToeCommand>,
    ) {
        let board_size = cell_size * BOARD_WIDTH as f32;
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());

        let painter = ui.painter();
        let dark_mode = ui.visuals().dark_mode;
        let background = if dark_mode {
            egui::Color32::from_rgb(40, 40, 40)
        } else {
            egui::Color32::from_rgb(240, 240, 240)
        };
        let grid_color = if dark_mode {
            egui::Color32::LIGHT_GRAY
        } else {
            egui::Color32::BLACK
        };

        painter.rect_filled(rect, 0.0, background);

        if let Some(line) = state.winning_line {
            for index in line.cells {
                painter.rect_filled(
                    Self::cell_rect(rect, index),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(80, 200, 120, 90),
                );
            }
        }

        for i in 1..BOARD_WIDTH {
            let offset = i as f32 * cell_size;
            painter.line_segment(
                [
                    egui::pos2(rect.left() + offset, rect.top()),
                    egui::pos2(rect.left() + offset, rect.bottom()),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, grid_color),
            );
            painter.line_segment(
                [
                    egui::pos2(rect.left(), rect.top() + offset),
                    egui::pos2(rect.right(), rect.top() + offset),
                ],
                egui::Stroke::new(Self::LINE_WIDTH, grid_color),
            );
        }

        for index in 0..BOARD_SIZE {
            let cell_rect = Self::cell_rect(rect, index);
            match state.board[index] {
                Mark::X => self.draw_x(painter, cell_rect),
                Mark::O => self.draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        self.last_hover = None;
        if !state.is_human_turn() {
            return;
        }

        if let Some(hover_pos) = response.hover_pos()
            && let Some(index) = Self::cell_at(rect, hover_pos)
            && state.board[index].is_empty()
        {
            painter.rect_filled(
                Self::cell_rect(rect, index),
                0.0,
                egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
            );
            self.last_hover = Some(index);
        }

        if response.clicked()
            && let Some(index) = self.last_hover
        {
            let _ = command_tx.send(TicTacToeCommand::PlaceMark { index });
        }
    }

    fn render_scoreboard(&self, ui: &mut egui::Ui, state: &TicTacToeStateUpdate) {
        let scoreboard = state.scoreboard;
        ui.horizontal(|ui| {
            ui.label(format!("You: {}", scoreboard.human_wins));
            ui.separator();
            ui.label(format!("Opponent: {}", scoreboard.opponent_wins));
            ui.separator();
            ui.label(format!("Draws: {}", scoreboard.draws));
        });
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(4.0, egui::Color32::from_rgb(50, 90, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0))
    }

    #[test]
    fn test_cell_at_maps_row_major() {
        let rect = board_rect();

        assert_eq!(TicTacToeGameUi::cell_at(rect, egui::pos2(15.0, 25.0)), Some(0));
        assert_eq!(TicTacToeGameUi::cell_at(rect, egui::pos2(160.0, 170.0)), Some(4));
        assert_eq!(TicTacToeGameUi::cell_at(rect, egui::pos2(305.0, 25.0)), Some(2));
        assert_eq!(TicTacToeGameUi::cell_at(rect, egui::pos2(15.0, 315.0)), Some(6));
        assert_eq!(TicTacToeGameUi::cell_at(rect, egui::pos2(310.0, 320.0)), Some(8));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let rect = board_rect();

        assert_eq!(TicTacToeGameUi::cell_at(rect, egui::pos2(5.0, 25.0)), None);
        assert_eq!(TicTacToeGameUi::cell_at(rect, egui::pos2(100.0, 400.0)), None);
    }

    #[test]
    fn test_cell_rect_matches_cell_at() {
        let rect = board_rect();

        for index in 0..BOARD_SIZE {
            let cell_rect = TicTacToeGameUi::cell_rect(rect, index);
            assert_eq!(TicTacToeGameUi::cell_at(rect, cell_rect.center()), Some(index));
        }
    }

    #[test]
    fn test_cell_size_is_clamped() {
        assert_eq!(TicTacToeGameUi::calculate_cell_size(60.0, 60.0), 40.0);
        assert_eq!(TicTacToeGameUi::calculate_cell_size(1000.0, 1000.0), 120.0);
        assert_eq!(TicTacToeGameUi::calculate_cell_size(300.0, 600.0), 100.0);
    }
}
