//! Server entry point.
//!
//! # Responsibility
//! - Read configuration, start logging, and serve the HTTP API.
//! - Print the endpoint banner once the listener is bound.

use flowdemo_api::{router, AppState, ServerConfig, ENDPOINTS};
use flowdemo_core::{core_version, init_logging};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let addr = config.socket_addr()?;
    let state = AppState::seeded(config.simulated_latency).shared();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!(
        "event=server_start module=server status=ok addr={local_addr} version={} latency_ms={}",
        core_version(),
        config.simulated_latency.as_millis()
    );
    print_banner(&local_addr.to_string());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

fn print_banner(addr: &str) {
    println!("Server running at http://{addr}");
    println!("Available endpoints:");
    for (method, path, description) in ENDPOINTS {
        println!("  {method} {path} - {description}");
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
}
