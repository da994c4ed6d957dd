//! Loading configuration from the process environment

use admin_user_export::config::{
    ENV_ADMIN_PASSWORD, ENV_API_URL, ENV_CSV_FILENAME, ENV_REQUEST_TIMEOUT, PLACEHOLDER_PASSWORD,
};
use admin_user_export::{Config, Error};
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

const KEYS: [&str; 4] = [
    ENV_API_URL,
    ENV_ADMIN_PASSWORD,
    ENV_CSV_FILENAME,
    ENV_REQUEST_TIMEOUT,
];

fn set_env(pairs: &[(&str, &str)]) {
    // SAFETY: every test touching the environment is #[serial].
    unsafe {
        for key in KEYS {
            std::env::remove_var(key);
        }
        for (key, value) in pairs {
            std::env::set_var(key, value);
        }
    }
}

#[test]
fn unset_settings_yield_defaults() {
    let config = Config::from_lookup(|_| None).unwrap();

    assert_eq!(config.admin_password, PLACEHOLDER_PASSWORD);
    assert_eq!(config.csv_filename, PathBuf::from("username.csv"));
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn environment_overrides_every_setting() {
    set_env(&[
        (ENV_API_URL, "https://backend.example.dev"),
        (ENV_ADMIN_PASSWORD, "from-env"),
        (ENV_CSV_FILENAME, "export.csv"),
        (ENV_REQUEST_TIMEOUT, "20"),
    ]);

    let config = Config::from_env().unwrap();

    assert_eq!(config.api_url, "https://backend.example.dev");
    assert_eq!(config.admin_password, "from-env");
    assert_eq!(config.csv_filename, PathBuf::from("export.csv"));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(20)));
    assert!(config.validate().is_ok());
    set_env(&[]);
}

#[test]
#[serial]
fn invalid_timeout_in_environment_is_rejected() {
    set_env(&[(ENV_REQUEST_TIMEOUT, "soon")]);

    let result = Config::from_env();

    assert!(matches!(result, Err(Error::Config { .. })));
    set_env(&[]);
}

#[test]
#[serial]
fn dotenv_file_in_working_directory_is_loaded() {
    set_env(&[(ENV_CSV_FILENAME, "from-process.csv")]);
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "API_URL=https://dotenv.example.dev\n\
         ADMIN_PASSWORD=from-dotenv\n\
         CSV_FILENAME=from-dotenv.csv\n",
    )
    .unwrap();
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = Config::from_env();

    std::env::set_current_dir(original_dir).unwrap();
    set_env(&[]);
    let config = result.unwrap();
    assert_eq!(config.api_url, "https://dotenv.example.dev");
    assert_eq!(config.admin_password, "from-dotenv");
    assert_eq!(
        config.csv_filename,
        PathBuf::from("from-process.csv"),
        "process environment wins over .env"
    );
}
