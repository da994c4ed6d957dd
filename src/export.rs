//! The fetch-then-write export run and its operator-facing diagnostics.
//!
//! Each stage reports its own failures to the diagnostics sink (stdout for the
//! binary) at the point of detection and hands the error back as a value, so
//! a run never ends in a panic or a non-zero exit.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fetcher::AdminClient;
use crate::types::{ExportOutcome, UserRecord};
use crate::writer::write_to_csv;
use std::io::Write;
use std::path::Path;
use tracing::{error, info, warn};

/// Fetch the admin user listing, reporting progress and failures to `out`
///
/// A placeholder credential is reported and rejected before any request is
/// made. An empty listing is returned as `Ok` with a "0 users" diagnostic.
pub async fn fetch_users(config: &Config, out: &mut impl Write) -> Result<Vec<UserRecord>> {
    let client = match AdminClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            report_error(&e, out);
            return Err(e);
        }
    };

    writeln!(out, "Connecting to {} ...", client.endpoint()).ok();

    match client.fetch_users().await {
        Ok(users) => {
            if users.is_empty() {
                writeln!(out, "API returned 0 users.").ok();
            }
            Ok(users)
        }
        Err(e) => {
            report_error(&e, out);
            Err(e)
        }
    }
}

/// Write users to `path` as CSV, reporting the result to `out`
///
/// Empty input is reported and nothing is written.
pub fn write_users(users: &[UserRecord], path: &Path, out: &mut impl Write) -> Result<usize> {
    if users.is_empty() {
        writeln!(out, "No user data to write.").ok();
        return Ok(0);
    }

    match write_to_csv(users, path) {
        Ok(count) => {
            info!(path = %path.display(), count, "export written");
            writeln!(
                out,
                "\nSuccessfully saved {} users to {}",
                count,
                path.display()
            )
            .ok();
            Ok(count)
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to write export");
            writeln!(out, "Error writing to CSV file: {}", e).ok();
            Err(e)
        }
    }
}

/// Run one complete export, printing diagnostics to stdout
pub async fn run(config: &Config) -> ExportOutcome {
    run_with_output(config, &mut std::io::stdout()).await
}

/// Run one complete export, printing diagnostics to `out`
///
/// At most one HTTP request and one file write happen. The writer only runs
/// when the fetch produced at least one user.
pub async fn run_with_output(config: &Config, out: &mut impl Write) -> ExportOutcome {
    let users = match fetch_users(config, out).await {
        Ok(users) => users,
        Err(e) => return ExportOutcome::Failed(e),
    };

    if users.is_empty() {
        return ExportOutcome::NoData;
    }

    match write_users(&users, &config.csv_filename, out) {
        Ok(count) => ExportOutcome::Written {
            count,
            path: config.csv_filename.clone(),
        },
        Err(e) => ExportOutcome::Failed(e),
    }
}

fn report_error(err: &Error, out: &mut impl Write) {
    warn!(error = %err, "admin user fetch failed");
    match err {
        Error::Config { message, .. } => {
            writeln!(out, "Error: {}", message).ok();
        }
        Error::Network(e) => {
            writeln!(out, "An error occurred: {}", e).ok();
        }
        other => {
            writeln!(out, "{}", other).ok();
        }
    }
    if let Some(body) = err.response_body() {
        writeln!(out, "Response content: {}", body).ok();
    }
    if let Some(hint) = err.hint() {
        writeln!(out, "{}", hint).ok();
    }
}
