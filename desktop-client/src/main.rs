mod client_task;
mod config;
mod grpc_client;
mod offline;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use common::games::snake::{ConfigHighScoreStore, SnakeSession};
use common::leaderboard::{InMemoryScoreStore, Leaderboard, LocalScoreReporter};
use common::{log, logger};
use client_task::run_client_task;
use config::{Config, get_config_manager, resolve_data_path};
use grpc_client::GrpcScoreReporter;
use offline::LocalBroadcaster;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Keep the leaderboard in this process instead of a server.
    #[arg(long)]
    offline: bool,

    /// Leaderboard server address, overrides the config file.
    #[arg(long)]
    server: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager();
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Using default config: {}", e);
            Config::default()
        }
    };

    let server_address = if args.offline {
        None
    } else {
        args.server.or_else(|| config.server_address.clone())
    };
    let mode_label = match &server_address {
        Some(address) => format!("Leaderboard server: {}", address),
        None => "Offline: scores stay on this computer".to_string(),
    };

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let high_score_store = ConfigHighScoreStore::from_yaml_file(resolve_data_path(&config.high_score_file));
    let session = SnakeSession::new(
        &config.game,
        rand::random(),
        LocalBroadcaster::new(shared_state.clone()),
        high_score_store,
    )?;

    let runtime = tokio::runtime::Runtime::new()?;
    let shared_state_clone = shared_state.clone();
    let task_thread = std::thread::spawn(move || {
        runtime.block_on(async move {
            let offline_reporter = || LocalScoreReporter::new(Leaderboard::new(InMemoryScoreStore::new()));

            match server_address.map(|address| GrpcScoreReporter::connect_lazy(&address)) {
                Some(Ok(reporter)) => {
                    run_client_task(session, reporter, shared_state_clone, command_rx).await;
                }
                Some(Err(e)) => {
                    log!("{}, playing offline", e);
                    run_client_task(session, offline_reporter(), shared_state_clone, command_rx).await;
                }
                None => {
                    run_client_task(session, offline_reporter(), shared_state_clone, command_rx).await;
                }
            }
        });
    });

    let board_size = config.game.board_size as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size + 260.0, board_size + 170.0])
            .with_title("Snake"),
        ..Default::default()
    };

    let player_name = config.player_name.clone();
    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                command_tx,
                config_manager,
                player_name,
                mode_label,
            )))
        }),
    )?;

    if task_thread.join().is_err() {
        log!("Game task panicked");
    }

    Ok(())
}
