//! Core data types shared by the fetcher, the writer, and the export run

use crate::error::Error;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// One user as returned by the admin listing: field name to scalar value
///
/// Keys keep the order they had in the response body.
pub type UserRecord = Map<String, Value>;

/// All users from a single response, in response order
pub type UserList = Vec<UserRecord>;

/// Result of one complete export run
#[derive(Debug)]
pub enum ExportOutcome {
    /// The CSV file was written
    Written {
        /// Number of user rows written (header excluded)
        count: usize,
        /// File that was written
        path: PathBuf,
    },
    /// The endpoint answered with an empty list; nothing was written
    NoData,
    /// The run stopped at the given error; nothing further was attempted
    Failed(Error),
}

impl ExportOutcome {
    /// Whether the run produced an output file
    pub fn is_written(&self) -> bool {
        matches!(self, ExportOutcome::Written { .. })
    }
}
