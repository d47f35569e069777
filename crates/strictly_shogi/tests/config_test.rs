//! Tests for client configuration loading.

use std::io::Write;
use strictly_shogi::{ClientConfig, HttpAreaClient, Participant};

#[test]
fn test_load_full_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
server_url = "http://shogi.example:8080"
area_id = "dojo"
player_id = "alice"
player_name = "Alice"
poll_interval_ms = 250

[[roster]]
id = "bob"
user_name = "Bob"
"#
    )
    .unwrap();

    let config = ClientConfig::from_file(file.path()).unwrap();

    assert_eq!(config.server_url(), "http://shogi.example:8080");
    assert_eq!(config.area_id(), "dojo");
    assert_eq!(*config.poll_interval_ms(), 250);
    assert_eq!(config.participant(), Participant::new("alice", "Alice"));
    assert_eq!(config.roster(), &vec![Participant::new("bob", "Bob")]);

    let client = HttpAreaClient::from_config(&config);
    assert_eq!(client.area_url(), "http://shogi.example:8080/api/areas/dojo");
    assert_eq!(
        client.commands_url(),
        "http://shogi.example:8080/api/areas/dojo/commands"
    );
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ClientConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_toml_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "area_id = [").unwrap();

    let err = ClientConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}
