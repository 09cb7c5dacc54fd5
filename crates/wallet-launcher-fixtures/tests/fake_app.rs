// Test module - relaxed lint rules
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(missing_docs)]

use std::process::Command;

fn fake_app() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wallet-launcher-fake-app"));
    cmd.env_remove("WALLET_WORKING_PATH")
        .env_remove("WALLET_OPENED_URL")
        .env_remove("FAKE_APP_EXIT_CODE");
    cmd
}

#[test]
fn reports_arguments_and_environment() {
    let output = fake_app()
        .args(["-startintray"])
        .env("WALLET_WORKING_PATH", "/opt/wallet/data/")
        .env("WALLET_OPENED_URL", "ton://x")
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["args"], serde_json::json!(["-startintray"]));
    assert_eq!(report["working_path"], "/opt/wallet/data/");
    assert_eq!(report["opened_url"], "ton://x");
}

#[test]
fn exits_with_requested_code() {
    let output = fake_app()
        .env("FAKE_APP_EXIT_CODE", "3")
        .output()
        .expect("failed to execute");

    assert_eq!(output.status.code(), Some(3));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["working_path"].is_null());
}
