//! # admin-user-export
//!
//! Exports the admin user listing of a contest backend to a CSV file.
//!
//! A run is one authenticated `GET <API_URL>/api/admin/all-users-details`
//! followed, if the backend returned any users, by one CSV write. Failures are
//! printed as diagnostics and returned as values; nothing panics and the
//! binary always exits normally.
//!
//! ## Quick Start
//!
//! ```no_run
//! use admin_user_export::{Config, ExportOutcome, run};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         api_url: "https://backend.example.dev".to_string(),
//!         admin_password: "s3cret".to_string(),
//!         ..Default::default()
//!     };
//!
//!     if let ExportOutcome::Written { count, path } = run(&config).await {
//!         println!("{count} rows in {}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Fetch-then-write orchestration
pub mod export;
/// Admin API client
pub mod fetcher;
/// Core types
pub mod types;
/// CSV serialization
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use export::{fetch_users, run, run_with_output, write_users};
pub use fetcher::AdminClient;
pub use types::{ExportOutcome, UserList, UserRecord};
