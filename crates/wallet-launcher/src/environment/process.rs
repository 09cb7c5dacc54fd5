use super::{ExecutionEnvironment, LaunchContext, OPENED_URL_ENV, WORKING_PATH_ENV};
use crate::error::{LauncherError, LauncherResult};
use crate::model::dir_string;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// Runs the application binary as a child process and waits for it.
///
/// The child receives the forwarded arguments after the program path, and
/// the working path and opened URL through its environment.
#[derive(Clone, Debug)]
pub struct ProcessEnvironment {
    program: PathBuf,
}

impl ProcessEnvironment {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ExecutionEnvironment for ProcessEnvironment {
    fn run(&mut self, context: &LaunchContext<'_>) -> LauncherResult<i32> {
        tracing::info!(
            op = "launcher.environment.spawn",
            program = %self.program.display(),
            working_path = %context.working_path.display(),
            "starting application"
        );
        let status = Command::new(&self.program)
            .args(context.arguments.rest())
            .env(WORKING_PATH_ENV, dir_string(context.working_path))
            .env(OPENED_URL_ENV, context.opened_url.as_str())
            .status()
            .map_err(|err| {
                LauncherError::environment(
                    format!("failed to start {}", self.program.display()),
                    err,
                )
            })?;
        let code = exit_code(status);
        tracing::info!(op = "launcher.environment.exit", code, "application exited");
        Ok(code)
    }
}

/// Exit code of the child; signal deaths map to `128 + signal` on Unix.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
