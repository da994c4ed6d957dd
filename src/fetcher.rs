//! Authenticated fetch of the admin user listing.
//!
//! [`AdminClient`] issues exactly one `GET` per call to
//! [`AdminClient::fetch_users`]. There is no retry and no pagination: the
//! backend returns every user in one JSON array.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::UserList;
use serde_json::Value;
use tracing::{debug, info, warn};

/// HTTP client bound to one admin endpoint and credential
pub struct AdminClient {
    /// HTTP client for the admin API
    http_client: reqwest::Client,

    /// Full request target (base URL + users path)
    endpoint: String,

    /// Bearer credential
    token: String,
}

impl AdminClient {
    /// Create a client from validated configuration
    ///
    /// # Errors
    /// Returns a configuration error if the credential is still the placeholder
    /// or the base URL is unusable, and an error if the HTTP client cannot be built.
    /// No request is sent in either case.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("admin-user-export/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint(),
            token: config.admin_password.clone(),
        })
    }

    /// URL this client requests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch every user visible to the admin credential
    ///
    /// An empty list is returned as `Ok(vec![])`; deciding that nothing should
    /// be written is left to the caller.
    ///
    /// # Errors
    /// - [`Error::Unauthorized`] for HTTP 401
    /// - [`Error::HttpStatus`] for any other non-success status
    /// - [`Error::Network`] for connection-level faults and timeouts
    /// - [`Error::InvalidResponse`] / [`Error::Serialization`] if the body is not
    ///   a JSON array of objects
    pub async fn fetch_users(&self) -> Result<UserList> {
        debug!(url = %self.endpoint, "requesting admin user listing");

        let response = self
            .http_client
            .get(&self.endpoint)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url = %self.endpoint, status = %status, "admin listing request failed");
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(Error::Unauthorized { body });
            }
            return Err(Error::HttpStatus { status, body });
        }

        let bytes = response.bytes().await?;
        let users = parse_users(&bytes)?;
        info!(url = %self.endpoint, count = users.len(), "fetched admin user listing");
        Ok(users)
    }
}

/// Parse a response body into user records
///
/// The body must be a JSON array whose elements are all objects.
pub fn parse_users(body: &[u8]) -> Result<UserList> {
    let value: Value = serde_json::from_slice(body)?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::InvalidResponse(format!(
                "expected a JSON array of users, got {}",
                json_kind(&other)
            )));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(Error::InvalidResponse(format!(
                "user at index {index} is {}, expected an object",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_array_of_objects_in_key_order() {
        let users =
            parse_users(br#"[{"name":"Alice","id":"1"},{"name":"Bob","id":"2"}]"#).unwrap();

        assert_eq!(users.len(), 2);
        let keys: Vec<&str> = users[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "id"], "response key order must survive parsing");
    }

    #[test]
    fn empty_array_is_ok() {
        assert!(parse_users(b"[]").unwrap().is_empty());
    }

    #[test]
    fn object_body_is_rejected() {
        let err = parse_users(br#"{"users":[]}"#).unwrap_err();

        assert!(matches!(err, Error::InvalidResponse(ref msg) if msg.contains("an object")));
    }

    #[test]
    fn non_object_element_is_rejected() {
        let err = parse_users(br#"[{"id":1}, 7]"#).unwrap_err();

        assert!(matches!(err, Error::InvalidResponse(ref msg) if msg.contains("index 1")));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(parse_users(b"not json"), Err(Error::Serialization(_))));
    }

    #[test]
    fn placeholder_credential_refuses_to_build_client() {
        let result = AdminClient::new(&Config::default());

        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[tokio::test]
    async fn client_targets_users_endpoint() {
        let config = Config {
            api_url: "http://localhost:8787/".to_string(),
            admin_password: "token".to_string(),
            ..Default::default()
        };

        let client = AdminClient::new(&config).unwrap();

        assert_eq!(
            client.endpoint(),
            "http://localhost:8787/api/admin/all-users-details"
        );
    }
}
