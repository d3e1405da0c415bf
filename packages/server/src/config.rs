//! Server configuration.
//!
//! Every option can be given as a command line flag or an environment variable.

use std::time::Duration;

use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://irori.db?mode=rwc";

/// Command line / environment configuration for the server
#[derive(Debug, Clone, Parser)]
#[command(name = "irori-server", version, about = "Chat room HTTP server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "IRORI_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "IRORI_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Room storage URL (`sqlite://...`, or `memory://` for a non-persistent store)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum number of pooled database connections
    #[arg(
        long,
        env = "IRORI_DB_MAX_CONNECTIONS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_connections: u32,

    /// Seconds to wait for a free database connection
    #[arg(long, env = "IRORI_DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

impl ServerConfig {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}
