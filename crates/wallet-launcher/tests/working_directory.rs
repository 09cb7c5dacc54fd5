// Test module - relaxed lint rules
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

use std::path::Path;

use wallet_launcher::policy::{base_choice, BaseChoice, WorkingDirectoryPolicy};
use wallet_launcher::probe::WritabilityProbe;
use wallet_launcher::{BaseSource, BuildVariant, LauncherConfig, Platform};
use wallet_launcher_fixtures::InstallLayout;

fn policy() -> WorkingDirectoryPolicy {
    WorkingDirectoryPolicy::new(&LauncherConfig::default())
}

fn all_pairs() -> impl Iterator<Item = (Platform, BuildVariant)> {
    Platform::ALL
        .into_iter()
        .flat_map(|platform| BuildVariant::ALL.into_iter().map(move |variant| (platform, variant)))
}

#[test]
fn portable_marker_wins_on_every_branch() {
    let layout = InstallLayout::new("Wallet")
        .with_portable_marker()
        .with_blocked_data_dir();
    let app_data = layout.data_root().join("Gram Wallet");
    for (platform, variant) in all_pairs() {
        let selection =
            policy().select_base(Some(layout.exe_dir()), &app_data, platform, variant);
        assert_eq!(selection.source, BaseSource::Portable, "{platform}/{variant}");
        assert_eq!(
            policy().working_path(&selection.base),
            layout.exe_dir().join("WalletForcePortable").join("data")
        );
    }
}

#[test]
fn portable_marker_must_be_a_directory() {
    let layout = InstallLayout::new("Wallet");
    std::fs::write(layout.exe_dir().join("WalletForcePortable"), b"").unwrap();
    assert!(policy().portable_base(layout.exe_dir()).is_none());
}

#[test]
fn unwritable_executable_dir_falls_back_to_app_data() {
    let layout = InstallLayout::new("Wallet").with_blocked_data_dir();
    let app_data = layout.data_root().join("Gram Wallet");
    for (platform, variant) in all_pairs() {
        let selection =
            policy().select_base(Some(layout.exe_dir()), &app_data, platform, variant);
        let expected = match base_choice(platform, variant) {
            BaseChoice::ExecutableDir => BaseSource::ExecutableDir,
            BaseChoice::AppData | BaseChoice::ExecutableDirIfWritable => BaseSource::AppData,
        };
        assert_eq!(selection.source, expected, "{platform}/{variant}");
        if expected == BaseSource::AppData {
            assert_eq!(selection.base, app_data);
        }
    }
}

#[test]
fn writable_executable_dir_is_used_on_plain_windows() {
    let layout = InstallLayout::new("Wallet.exe");
    let app_data = layout.data_root().join("Gram Wallet");
    for variant in [BuildVariant::Debug, BuildVariant::Release] {
        let selection = policy().select_base(
            Some(layout.exe_dir()),
            &app_data,
            Platform::Windows,
            variant,
        );
        assert_eq!(selection.source, BaseSource::ExecutableDir);
        assert_eq!(selection.base, layout.exe_dir());
    }
    assert!(layout.probe_files().is_empty());
}

#[test]
fn release_unix_builds_never_probe() {
    let layout = InstallLayout::new("Wallet");
    let app_data = layout.data_root().join("Gram Wallet");
    let selection = policy().select_base(
        Some(layout.exe_dir()),
        &app_data,
        Platform::Linux,
        BuildVariant::Release,
    );
    assert_eq!(selection.source, BaseSource::AppData);
    assert!(!layout.exe_dir().join("data").exists());
}

#[test]
fn working_path_is_under_selected_base() {
    let base = Path::new("/opt/wallet");
    assert_eq!(policy().working_path(base), base.join("data"));
}

#[test]
fn uncreatable_temp_file_falls_back_to_app_data_on_windows() {
    let layout = InstallLayout::new("Wallet.exe");
    let app_data = layout.data_root().join("Gram Wallet");
    let config = LauncherConfig {
        temp_prefix: "t".repeat(300),
        ..LauncherConfig::default()
    };

    let selection = WorkingDirectoryPolicy::new(&config).select_base(
        Some(layout.exe_dir()),
        &app_data,
        Platform::Windows,
        BuildVariant::Release,
    );

    assert_eq!(selection.source, BaseSource::AppData);
    assert_eq!(selection.base, app_data);
}

#[test]
fn replaced_attempt_ceiling_drives_selection() {
    let layout = InstallLayout::new("Wallet.exe").with_leftover_temp_files(2);
    let app_data = layout.data_root().join("Gram Wallet");
    let config = LauncherConfig::default();
    let select = |max_attempts: u32| {
        WorkingDirectoryPolicy::new(&config)
            .with_probe(WritabilityProbe::new(&config).with_max_attempts(max_attempts))
            .select_base(
                Some(layout.exe_dir()),
                &app_data,
                Platform::Windows,
                BuildVariant::Debug,
            )
            .source
    };

    assert_eq!(select(2), BaseSource::AppData);
    assert_eq!(select(3), BaseSource::ExecutableDir);
}
