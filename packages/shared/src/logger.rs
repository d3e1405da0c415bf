//! Logger setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise the binary itself, the
/// server library and `tower_http` are logged at `default_level`.
pub fn setup_logger(name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(name, default_level)));

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(true)
        .try_init();
}

fn default_directives(name: &str, default_level: &str) -> String {
    let mut targets = vec![name.replace('-', "_")];
    for target in ["irori_server", "tower_http"] {
        if !targets.iter().any(|t| t == target) {
            targets.push(target.to_string());
        }
    }
    targets
        .iter()
        .map(|target| format!("{target}={default_level}"))
        .collect::<Vec<_>>()
        .join(",")
}
