// Test module - relaxed lint rules
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use wallet_launcher::config::load_config_file;
use wallet_launcher::ErrorCode;

#[test]
fn loads_yaml_with_defaults_for_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("launcher.yaml");
    std::fs::write(
        &path,
        "application_name: Gram Wallet Beta\nmax_probe_attempts: 8\n",
    )
    .unwrap();

    let config = load_config_file(&path).unwrap();

    assert_eq!(config.application_name, "Gram Wallet Beta");
    assert_eq!(config.max_probe_attempts, 8);
    assert_eq!(config.portable_dir_name, "WalletForcePortable");
}

#[test]
fn loads_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("launcher.json");
    std::fs::write(&path, r#"{"app_binary": "Wallet-app"}"#).unwrap();

    let config = load_config_file(&path).unwrap();

    assert_eq!(config.app_binary.as_deref(), Some("Wallet-app"));
}

#[test]
fn unknown_field_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("launcher.json");
    std::fs::write(&path, r#"{"portable": true}"#).unwrap();

    let err = load_config_file(&path).unwrap_err();

    assert_eq!(err.code(), ErrorCode::Config);
}

#[test]
fn invalid_values_are_rejected_after_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("launcher.yml");
    std::fs::write(&path, "data_dir_name: ../escape\n").unwrap();

    let err = load_config_file(&path).unwrap_err();

    assert_eq!(err.code(), ErrorCode::Config);
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_file(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Io);
}
