mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::get_config_manager;
use offline::run_tictactoe_game;
use state::SharedState;
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_desktop")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Path to the YAML config; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        config::Config::default()
    });

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let runtime = tokio::runtime::Runtime::new()?;
    let shared_state_clone = shared_state.clone();
    let settings = config.tictactoe.session_settings();
    std::thread::spawn(move || {
        runtime.block_on(run_tictactoe_game(shared_state_clone, command_rx, settings));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| {
            Ok(Box::new(TicTacToeApp::new(
                cc,
                shared_state,
                command_tx,
                config_manager,
                config,
            )))
        }),
    )?;

    log!("Client shut down");

    Ok(())
}
