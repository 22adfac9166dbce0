//! Console serving shell
//!
//! Serves the compiled dashboard bundle and a liveness endpoint. Routing of
//! `/api/*` to the platform backends is a deployment concern, not handled
//! here.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::Level;

mod server;

#[derive(Parser)]
#[command(name = "console")]
#[command(about = "CloudForge platform status console")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Directory holding the compiled site (cargo-leptos output)
    #[arg(long, default_value = "target/site")]
    site_root: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let router = server::build_router(&args.site_root);
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Console listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Console stopped");
    Ok(())
}
