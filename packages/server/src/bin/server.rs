//! Chat room HTTP server.
//!
//! Creates rooms, lets clients join them by key, and stores posted messages.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin irori-server -- --port 5000 --database-url sqlite://irori.db?mode=rwc
//! ```

use clap::Parser;
use irori_server::ServerConfig;
use irori_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server
    if let Err(e) = irori_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
