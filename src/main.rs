//! Relay server binary
//!
//! Run with: camrelay [BIND_ADDR]
//!
//! Examples:
//!   camrelay                    # binds to 0.0.0.0:8002
//!   camrelay 127.0.0.1          # binds to 127.0.0.1:8002
//!   camrelay 127.0.0.1:9000     # binds to 127.0.0.1:9000
//!   camrelay :9000              # binds to 0.0.0.0:9000

use std::net::SocketAddr;

use camrelay::{RelayServer, ServerConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8002;

/// Parse `host`, `host:port`, or `:port` into a socket address
fn parse_bind_addr(arg: &str) -> Option<SocketAddr> {
    if let Ok(addr) = arg.parse::<SocketAddr>() {
        return Some(addr);
    }
    if let Some(port) = arg.strip_prefix(':') {
        let port: u16 = port.parse().ok()?;
        return Some(SocketAddr::from(([0, 0, 0, 0], port)));
    }
    if let Ok(ip) = arg.parse::<std::net::IpAddr>() {
        return Some(SocketAddr::new(ip, DEFAULT_PORT));
    }
    if arg == "localhost" {
        return Some(SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)));
    }
    None
}

#[tokio::main]
async fn main() -> camrelay::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(arg) => match parse_bind_addr(&arg) {
            Some(addr) => ServerConfig::with_addr(addr),
            None => {
                eprintln!("Invalid bind address: {arg}");
                eprintln!("Usage: camrelay [BIND_ADDR]  (host, host:port, or :port)");
                std::process::exit(1);
            }
        },
        None => ServerConfig::default(),
    };

    let server = RelayServer::new(config);

    tracing::info!("Camera & audio relay server");
    tracing::info!(addr = %server.bind_addr(), "Viewer page at http://{}/", server.bind_addr());
    tracing::info!("Press Ctrl+C to exit");

    server
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
}
