use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the running executable lives, after one level of symlink resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutableLocation {
    /// Absolute directory containing the executable.
    pub dir: PathBuf,
    /// File name of the executable.
    pub name: String,
}

/// Which alternative the working-directory decision landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseSource {
    /// `WalletForcePortable` marker next to the executable.
    Portable,
    /// The executable directory itself.
    ExecutableDir,
    /// The per-user application-data directory.
    AppData,
}

/// All paths resolved during bootstrap.
///
/// `executable` is `None` when the executable location could not be
/// determined; callers treat that as "unknown, use fallback".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSet {
    pub executable: Option<ExecutableLocation>,
    pub app_data_dir: PathBuf,
    pub base_source: BaseSource,
    pub working_path: PathBuf,
}

impl PathSet {
    pub fn executable_dir(&self) -> Option<&Path> {
        self.executable.as_ref().map(|exe| exe.dir.as_path())
    }

    /// Render with slash-terminated directory strings; unknown values are empty.
    pub fn report(&self) -> PathSetReport {
        PathSetReport {
            executable_dir: self
                .executable_dir()
                .map(dir_string)
                .unwrap_or_default(),
            executable_name: self
                .executable
                .as_ref()
                .map(|exe| exe.name.clone())
                .unwrap_or_default(),
            app_data_dir: dir_string(&self.app_data_dir),
            base_source: self.base_source,
            working_path: dir_string(&self.working_path),
        }
    }
}

/// String form of [`PathSet`] for display and JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSetReport {
    pub executable_dir: String,
    pub executable_name: String,
    pub app_data_dir: String,
    pub base_source: BaseSource,
    pub working_path: String,
}

/// Render a directory as a forward-slash, slash-terminated string.
///
/// An empty path renders as an empty string.
pub fn dir_string(path: &Path) -> String {
    let mut rendered = path.to_string_lossy().into_owned();
    if rendered.is_empty() {
        return rendered;
    }
    if cfg!(windows) {
        rendered = rendered.replace('\\', "/");
    }
    if !rendered.ends_with('/') {
        rendered.push('/');
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_string_appends_single_trailing_slash() {
        assert_eq!(dir_string(Path::new("/opt/wallet")), "/opt/wallet/");
        assert_eq!(dir_string(Path::new("/opt/wallet/")), "/opt/wallet/");
        assert_eq!(dir_string(Path::new("")), "");
    }

    #[test]
    fn report_leaves_unknown_executable_empty() {
        let paths = PathSet {
            executable: None,
            app_data_dir: PathBuf::from("/home/user/.local/share/Gram Wallet"),
            base_source: BaseSource::AppData,
            working_path: PathBuf::from("/home/user/.local/share/Gram Wallet/data"),
        };
        let report = paths.report();
        assert_eq!(report.executable_dir, "");
        assert_eq!(report.executable_name, "");
        assert_eq!(report.working_path, "/home/user/.local/share/Gram Wallet/data/");
    }
}
