// Test module - relaxed lint rules
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::process::{Command, Output};

use wallet_launcher_fixtures::InstallLayout;

fn ctl_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wallet-launcher-ctl"));
    cmd.env_remove("WALLET_LAUNCHER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn json_of(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|err| {
        panic!(
            "invalid json ({err}); stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        )
    })
}

fn paths_json(layout: &InstallLayout, platform: &str, variant: &str) -> serde_json::Value {
    let output = ctl_bin()
        .args(["paths", "--json", "--platform", platform, "--variant", variant])
        .arg("--exe")
        .arg(layout.exe_path())
        .arg("--data-dir")
        .arg(layout.data_root())
        .output()
        .expect("failed to execute");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    json_of(&output)
}

#[test]
fn args_splits_url_and_forwarded_arguments() {
    let output = ctl_bin()
        .args(["args", "--json", "--", "Wallet", "-startintray", "--", "ton://x"])
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    let report = json_of(&output);
    assert_eq!(
        report["arguments"],
        serde_json::json!(["Wallet", "-startintray", "--", "ton://x"])
    );
    assert_eq!(report["opened_url"], "ton://x");
    assert_eq!(report["filtered"], serde_json::json!(["Wallet"]));
}

#[test]
fn probe_reports_writable_directory() {
    let layout = InstallLayout::new("Wallet").with_leftover_temp_files(2);

    let output = ctl_bin()
        .args(["probe", "--json"])
        .arg(layout.exe_dir())
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    let outcome = json_of(&output);
    assert_eq!(outcome["outcome"], "writable");
    assert_eq!(outcome["attempts"], 3);
}

#[test]
fn probe_exits_nonzero_when_denied() {
    let layout = InstallLayout::new("Wallet").with_blocked_data_dir();

    let output = ctl_bin()
        .args(["probe", "--json"])
        .arg(layout.exe_dir())
        .output()
        .expect("failed to execute");

    assert_eq!(output.status.code(), Some(1));
    let outcome = json_of(&output);
    assert_eq!(outcome["outcome"], "denied");
    assert_eq!(outcome["reason"], "data_dir_unavailable");
}

#[test]
fn probe_rejects_zero_attempts() {
    let layout = InstallLayout::new("Wallet");

    let output = ctl_bin()
        .args(["probe", "--max-attempts", "0"])
        .arg(layout.exe_dir())
        .output()
        .expect("failed to execute");

    assert!(!output.status.success());
}

#[test]
fn paths_prefers_portable_marker() {
    let layout = InstallLayout::new("Wallet").with_portable_marker();

    let report = paths_json(&layout, "linux", "release");

    assert_eq!(report["base_source"], "portable");
    assert_eq!(report["executable_name"], "Wallet");
    assert!(report["working_path"]
        .as_str()
        .is_some_and(|path| path.ends_with("/install/WalletForcePortable/data/")));
}

#[test]
fn paths_uses_app_data_for_release_builds() {
    let layout = InstallLayout::new("Wallet");

    let report = paths_json(&layout, "macos", "release");

    assert_eq!(report["base_source"], "app_data");
    assert!(report["working_path"]
        .as_str()
        .is_some_and(|path| path.ends_with("/appdata/Gram Wallet/data/")));
}

#[test]
fn paths_falls_back_when_executable_dir_is_blocked() {
    let layout = InstallLayout::new("Wallet.exe").with_blocked_data_dir();

    let report = paths_json(&layout, "windows", "release");

    assert_eq!(report["base_source"], "app_data");
}

#[test]
fn paths_rejects_unknown_platform() {
    let output = ctl_bin()
        .args(["paths", "--platform", "beos"])
        .output()
        .expect("failed to execute");

    assert!(!output.status.success());
}

#[test]
fn completions_name_the_binary() {
    let output = ctl_bin()
        .args(["completions", "bash"])
        .output()
        .expect("failed to execute");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("wallet-launcher-ctl"));
}

#[test]
fn color_flag_rejects_invalid() {
    let output = ctl_bin()
        .arg("--color=invalid")
        .arg("--help")
        .output()
        .expect("failed to execute");

    assert!(!output.status.success());
}
