//! Fake install layouts on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A throwaway install tree.
///
/// ```text
/// <root>/install/<exe_name>        executable file
/// <root>/appdata/                  per-user data root
/// ```
///
/// The tree is removed when the layout is dropped.
pub struct InstallLayout {
    root: TempDir,
    exe_dir: PathBuf,
    exe_path: PathBuf,
    data_root: PathBuf,
}

impl InstallLayout {
    /// Create the tree with an executable file named `exe_name`.
    pub fn new(exe_name: &str) -> Self {
        let root = tempfile::Builder::new()
            .prefix("wallet-launcher-")
            .tempdir()
            .expect("failed to create temp directory");
        let exe_dir = root.path().join("install");
        let data_root = root.path().join("appdata");
        fs::create_dir_all(&exe_dir).expect("failed to create install directory");
        fs::create_dir_all(&data_root).expect("failed to create appdata directory");
        let exe_path = exe_dir.join(exe_name);
        fs::write(&exe_path, b"#!/bin/sh\n").expect("failed to write executable");
        Self {
            root,
            exe_dir,
            exe_path,
            data_root,
        }
    }

    /// Add `<exe_dir>/WalletForcePortable/`.
    #[must_use]
    pub fn with_portable_marker(self) -> Self {
        self.with_dir("WalletForcePortable")
    }

    /// Add an arbitrary directory under the executable directory.
    #[must_use]
    pub fn with_dir(self, name: &str) -> Self {
        fs::create_dir_all(self.exe_dir.join(name)).expect("failed to create directory");
        self
    }

    /// Add `<exe_dir>/data/salt`.
    #[must_use]
    pub fn with_salt(self) -> Self {
        let data = self.exe_dir.join("data");
        fs::create_dir_all(&data).expect("failed to create data directory");
        fs::write(data.join("salt"), b"salt").expect("failed to write salt");
        self
    }

    /// Add `<exe_dir>/data/temp1` through `temp<count>`.
    #[must_use]
    pub fn with_leftover_temp_files(self, count: u32) -> Self {
        let data = self.exe_dir.join("data");
        fs::create_dir_all(&data).expect("failed to create data directory");
        for index in 1..=count {
            fs::write(data.join(format!("temp{index}")), b"leftover")
                .expect("failed to write leftover probe file");
        }
        self
    }

    /// Put a regular file where `<exe_dir>/data` should be, so the probe
    /// cannot create its directory. Works regardless of the user's privileges.
    #[must_use]
    pub fn with_blocked_data_dir(self) -> Self {
        fs::write(self.exe_dir.join("data"), b"not a directory")
            .expect("failed to write blocking file");
        self
    }

    /// Create a symlink to the executable in a separate `bin` directory.
    #[cfg(unix)]
    pub fn symlink_executable(&self, link_name: &str) -> PathBuf {
        let bin = self.root.path().join("bin");
        fs::create_dir_all(&bin).expect("failed to create bin directory");
        let link = bin.join(link_name);
        std::os::unix::fs::symlink(&self.exe_path, &link).expect("failed to create symlink");
        link
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn exe_dir(&self) -> &Path {
        &self.exe_dir
    }

    pub fn exe_path(&self) -> &Path {
        &self.exe_path
    }

    /// The OS-level data root (without the application name).
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Names of `temp*` files currently in `<exe_dir>/data`.
    pub fn probe_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.exe_dir.join("data")) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name.starts_with("temp"))
            .collect();
        names.sort();
        names
    }
}

/// Get path to a fixture binary built next to `sibling` (usually
/// `env!("CARGO_BIN_EXE_...")` of the crate under test).
pub fn fixture_path(sibling: &str, name: &str) -> PathBuf {
    let dir = Path::new(sibling)
        .parent()
        .expect("binary path has a parent directory");
    let fixture = dir.join(format!("{name}{}", std::env::consts::EXE_SUFFIX));
    if !fixture.exists() {
        panic!(
            "Fixture binary not found: {}. Run 'cargo build --workspace' first.",
            fixture.display()
        );
    }
    fixture
}
