use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use greeting_service::lifecycle::{resolve_config, shutdown_signal, StartupOptions};
use greeting_service::observability::init_logging;
use greeting_service::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "greeting-service")]
#[command(about = "HTTP service that validates a name and returns a greeting", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind (overrides config and HOST).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config and PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let options = StartupOptions {
        config_path: cli.config,
        host: cli.host,
        port: cli.port,
    };

    let config = resolve_config(&options, |key| std::env::var(key).ok())?;
    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.listener.host,
        port = config.listener.port,
        request_timeout_secs = config.timeouts.request_secs,
        shutdown_timeout_secs = config.timeouts.shutdown_secs,
        "Configuration loaded"
    );

    let addr = config.listener.socket_addr()?;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = %addr, error = %e, "Server failed to bind");
            return Err(e.into());
        }
    };
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_shutdown.trigger();
    });

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Server exited");
    Ok(())
}
