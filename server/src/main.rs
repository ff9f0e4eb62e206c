mod grpc_service;
mod server_config;
mod web_server;

use std::path::PathBuf;

use clap::Parser;
use tonic::transport::Server;

use common::config::{ConfigManager, FileContentConfigProvider};
use common::leaderboard::{InMemoryScoreStore, Leaderboard, ScoreStore, YamlFileScoreStore};
use common::proto::leaderboard_service_server::LeaderboardServiceServer;
use common::{log, logger};
use grpc_service::LeaderboardGrpcService;
use server_config::{DEFAULT_CONFIG_FILE, ServerConfig, StorageConfig};

#[derive(Parser)]
#[command(name = "snake_leaderboard_server")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML config file; created with defaults when missing.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, ServerConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;
    if !args.config.exists() {
        config_manager.set_config(&config)?;
        log!("Wrote default config to {}", args.config.display());
    }

    match &config.storage {
        StorageConfig::Memory => {
            log!("Keeping scores in memory");
            let store = InMemoryScoreStore::new();
            serve(store, &config).await
        }
        StorageConfig::File { path } => {
            log!("Keeping scores in {}", path.display());
            let store = YamlFileScoreStore::from_yaml_file(path);
            serve(store, &config).await
        }
    }
}

async fn serve<S: ScoreStore>(store: S, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let leaderboard = Leaderboard::with_limits(store, config.leaderboard_limit, config.max_player_name_len);

    let grpc_addr = config.grpc_address.parse()?;
    let listener = tokio::net::TcpListener::bind(&config.http_address).await?;
    let web_server = tokio::spawn(web_server::run_web_server(listener, leaderboard.clone()));

    log!("Leaderboard gRPC service listening on {}", grpc_addr);

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    Server::builder()
        .add_service(LeaderboardServiceServer::new(LeaderboardGrpcService::new(leaderboard)))
        .serve_with_shutdown(grpc_addr, shutdown_signal)
        .await?;

    web_server.abort();
    log!("Server shut down gracefully");

    Ok(())
}
