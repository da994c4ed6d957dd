//! Configuration types for admin-user-export

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf, time::Duration};

/// Path of the admin listing resource, appended to [`Config::api_url`]
pub const USERS_PATH: &str = "/api/admin/all-users-details";

/// Credential value shipped in templates; never a real password
pub const PLACEHOLDER_PASSWORD: &str = "YOUR_ADMIN_PASSWORD_HERE";

/// Environment variable holding the backend base URL
pub const ENV_API_URL: &str = "API_URL";
/// Environment variable holding the bearer credential
pub const ENV_ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
/// Environment variable holding the output file name
pub const ENV_CSV_FILENAME: &str = "CSV_FILENAME";
/// Environment variable holding the request timeout in whole seconds
pub const ENV_REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT_SECS";

/// Export configuration
///
/// All three required values have defaults so the binary starts without any
/// environment, but the default credential is [`PLACEHOLDER_PASSWORD`] and
/// [`Config::validate`] refuses it.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the backend (default: "http://127.0.0.1:8787")
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer credential sent as `Authorization: Bearer <admin_password>`
    #[serde(default = "default_admin_password")]
    pub admin_password: String,

    /// Output file, truncated on every successful run (default: "username.csv")
    #[serde(default = "default_csv_filename")]
    pub csv_filename: PathBuf,

    /// Whole-request timeout (None = HTTP client default, which never times out)
    #[serde(default)]
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            admin_password: default_admin_password(),
            csv_filename: default_csv_filename(),
            request_timeout: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("admin_password", &"<redacted>")
            .field("csv_filename", &self.csv_filename)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first; variables already
    /// present in the environment take precedence over it.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values count as unset and fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let request_timeout = match get(ENV_REQUEST_TIMEOUT) {
            Some(raw) => Some(parse_timeout(&raw)?),
            None => None,
        };

        Ok(Self {
            api_url: get(ENV_API_URL).unwrap_or(defaults.api_url),
            admin_password: get(ENV_ADMIN_PASSWORD).unwrap_or(defaults.admin_password),
            csv_filename: get(ENV_CSV_FILENAME)
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_filename),
            request_timeout,
        })
    }

    /// Full request target: base URL followed by [`USERS_PATH`]
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), USERS_PATH)
    }

    /// Check the configuration before any network traffic happens
    pub fn validate(&self) -> Result<()> {
        let password = self.admin_password.trim();
        if password.is_empty() || password == PLACEHOLDER_PASSWORD {
            return Err(Error::config(
                "Please fill in your ADMIN_PASSWORD before running the export",
                ENV_ADMIN_PASSWORD,
            ));
        }

        let url = url::Url::parse(&self.api_url).map_err(|e| {
            Error::config(
                format!("API_URL '{}' is not a valid URL: {}", self.api_url, e),
                ENV_API_URL,
            )
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(
                format!("API_URL must use http or https, got '{}'", url.scheme()),
                ENV_API_URL,
            ));
        }

        if self.csv_filename.as_os_str().is_empty() {
            return Err(Error::config("CSV_FILENAME must not be empty", ENV_CSV_FILENAME));
        }

        Ok(())
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::config(
            format!("REQUEST_TIMEOUT_SECS must be a positive number of seconds, got '{raw}'"),
            ENV_REQUEST_TIMEOUT,
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:8787".to_string()
}

fn default_admin_password() -> String {
    PLACEHOLDER_PASSWORD.to_string()
}

fn default_csv_filename() -> PathBuf {
    PathBuf::from("username.csv")
}
