//! Executable and application-data path resolution.
//!
//! Resolution never fails loudly: an executable that cannot be located yields
//! `None`, and the application-data directory falls back to the current
//! directory when the OS does not report one.

use crate::model::{ExecutableLocation, ExecutionContext};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Where the resolver gets its OS facts from.
pub trait PathSource {
    /// Path of the running executable, before symlink resolution.
    fn current_executable(&self, context: &ExecutionContext) -> Option<PathBuf>;
    /// Conventional per-user data root (without the application name).
    fn data_dir(&self) -> Option<PathBuf>;
    fn temp_dir(&self) -> PathBuf;
}

/// Facts reported by the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemPaths;

impl PathSource for SystemPaths {
    fn current_executable(&self, context: &ExecutionContext) -> Option<PathBuf> {
        match std::env::current_exe() {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::debug!(
                    op = "launcher.paths.current_exe",
                    error = %err,
                    "current_exe unavailable, falling back to argv[0]"
                );
                context
                    .program()
                    .filter(|program| !program.is_empty())
                    .map(PathBuf::from)
            }
        }
    }

    fn data_dir(&self) -> Option<PathBuf> {
        dirs::data_dir()
    }

    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }
}

/// Fixed facts, for diagnostics and tests.
#[derive(Clone, Debug, Default)]
pub struct FixedPaths {
    pub executable: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub temp_dir: PathBuf,
}

impl PathSource for FixedPaths {
    fn current_executable(&self, _context: &ExecutionContext) -> Option<PathBuf> {
        self.executable.clone()
    }

    fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone()
    }

    fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone()
    }
}

pub fn resolve_executable_path(
    source: &dyn PathSource,
    context: &ExecutionContext,
) -> Option<ExecutableLocation> {
    let path = source.current_executable(context)?;
    let location = locate_executable(&path);
    if location.is_none() {
        tracing::debug!(
            op = "launcher.paths.executable_unknown",
            path = %path.display(),
            "executable could not be located"
        );
    }
    location
}

/// Locate an executable file, following at most one symlink.
///
/// Returns `None` when the path is empty or the resolved file does not exist.
pub fn locate_executable(path: &Path) -> Option<ExecutableLocation> {
    let absolute = absolutize(path)?;
    let target = follow_symlink(&absolute);
    if !target.exists() {
        return None;
    }
    let name = target.file_name()?.to_string_lossy().into_owned();
    let dir = target.parent()?.to_path_buf();
    Some(ExecutableLocation { dir, name })
}

fn follow_symlink(path: &Path) -> PathBuf {
    let is_symlink = fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false);
    if !is_symlink {
        return path.to_path_buf();
    }
    match fs::read_link(path) {
        Ok(target) if target.is_absolute() => normalize(&target),
        Ok(target) => {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            normalize(&base.join(target))
        }
        Err(_) => path.to_path_buf(),
    }
}

/// Per-user application-data directory for `application_name`.
pub fn resolve_app_data_path(source: &dyn PathSource, application_name: &str) -> PathBuf {
    app_data_from(source.data_dir(), application_name)
}

/// Join the OS data root with the application name, falling back to the
/// current directory (and finally `.`) when the OS reports none.
pub fn app_data_from(data_dir: Option<PathBuf>, application_name: &str) -> PathBuf {
    if let Some(root) = data_dir.filter(|root| !root.as_os_str().is_empty()) {
        let joined = root.join(application_name);
        return absolutize(&joined).unwrap_or(joined);
    }
    tracing::warn!(
        op = "launcher.paths.app_data_fallback",
        "no application-data directory reported, using the current directory"
    );
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn absolutize(path: &Path) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        return None;
    }
    if path.is_absolute() {
        return Some(normalize(path));
    }
    let cwd = std::env::current_dir().ok()?;
    Some(normalize(&cwd.join(path)))
}

/// Lexically remove `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
