//! AgentHub daemon — entry point for running the hub API server.

use agenthub_node::{Hub, HubConfig};
use agenthub_rpc::RpcServer;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "agenthub-daemon", about = "AgentHub API server daemon")]
struct Cli {
    /// Address to bind the HTTP server to.
    /// When a config file is provided, defaults to the file's value.
    #[arg(long, env = "AGENTHUB_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// HTTP port.
    #[arg(long, env = "AGENTHUB_PORT")]
    port: Option<u16>,

    /// Skip installing the demo posts on startup.
    #[arg(long, env = "AGENTHUB_NO_SEED")]
    no_seed: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "AGENTHUB_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    agenthub_utils::init_tracing(&cli.log_level);

    let file_config: Option<HubConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<HubConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    // File settings are the base; CLI flags and env vars override them.
    let mut config = file_config.unwrap_or_default();
    if let Some(listen_addr) = cli.listen_addr {
        config.listen_addr = listen_addr;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if cli.no_seed {
        config.seed_demo_posts = false;
    }
    config.log_level = cli.log_level;

    tracing::info!(
        "🦀 Starting AgentHub API on {}:{}",
        config.listen_addr,
        config.port
    );
    tracing::info!("📄 skill.md at http://{}:{}/skill.md", config.listen_addr, config.port);
    tracing::info!(
        "📊 Stats at http://{}:{}/api/v1/stats",
        config.listen_addr,
        config.port
    );

    let hub = Hub::from_config(&config);
    let server = RpcServer::new(config.listen_addr.clone(), config.port, hub);
    server.start().await?;

    Ok(())
}
