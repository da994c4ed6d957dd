//! Common test utilities for admin-user-export integration tests

use admin_user_export::Config;
use admin_user_export::config::USERS_PATH;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Credential the mock server accepts
pub const TEST_TOKEN: &str = "test-admin-token";

/// Config pointing at `server` and writing into `dir`
pub fn config_for(server: &MockServer, dir: &TempDir) -> Config {
    Config {
        api_url: server.uri(),
        admin_password: TEST_TOKEN.to_string(),
        csv_filename: dir.path().join("username.csv"),
        request_timeout: None,
    }
}

/// Mount the admin listing endpoint, expecting exactly `calls` authenticated GETs
pub async fn mount_users(server: &MockServer, template: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path(USERS_PATH))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .respond_with(template)
        .expect(calls)
        .mount(server)
        .await;
}

/// JSON response with the given raw body
pub fn json_body(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "application/json")
}
