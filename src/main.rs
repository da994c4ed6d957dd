//! Command-line entry point: export the admin user listing to CSV.
//!
//! Takes no arguments. Settings come from the environment or a `.env` file
//! (`API_URL`, `ADMIN_PASSWORD`, `CSV_FILENAME`, `REQUEST_TIMEOUT_SECS`).
//! Logs go to stderr and honour `RUST_LOG`; diagnostics go to stdout.

use admin_user_export::{Config, run};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };
    tracing::debug!(?config, "loaded configuration");

    let outcome = run(&config).await;
    tracing::debug!(written = outcome.is_written(), "export finished");
}
