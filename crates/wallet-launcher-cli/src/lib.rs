//! Shared plumbing for the `wallet-launcher` and `wallet-launcher-ctl` binaries.

use std::path::Path;
use std::sync::Once;

use wallet_launcher::environment::{
    ExecutionEnvironment, HeadlessEnvironment, ProcessEnvironment, TracingPlatform,
};
use wallet_launcher::{
    ExecutionContext, Launcher, LauncherConfig, LauncherError, LauncherOptions, LauncherResult,
};

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// The level comes from `RUST_LOG` and defaults to `warn`. Calls after the
/// first are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(false)
            .with_env_filter(filter)
            .try_init();
    });
}

/// Pick the environment that runs the application.
///
/// With `app_binary` configured the binary next to the executable is spawned;
/// otherwise the launch context is written to stdout.
pub fn select_environment(
    config: &LauncherConfig,
    executable_dir: Option<&Path>,
) -> LauncherResult<Box<dyn ExecutionEnvironment>> {
    let Some(binary) = config.app_binary.as_deref() else {
        return Ok(Box::new(HeadlessEnvironment::new(std::io::stdout())));
    };
    let Some(dir) = executable_dir else {
        return Err(LauncherError::Environment {
            message: format!("cannot locate `{binary}`: executable directory is unknown"),
            source: None,
        });
    };
    Ok(Box::new(ProcessEnvironment::new(
        dir.join(with_exe_suffix(binary)),
    )))
}

fn with_exe_suffix(binary: &str) -> String {
    let suffix = std::env::consts::EXE_SUFFIX;
    if suffix.is_empty() || binary.ends_with(suffix) {
        binary.to_string()
    } else {
        format!("{binary}{suffix}")
    }
}

/// Run the whole bootstrap and return the application's exit status.
pub fn run_launcher(context: ExecutionContext, options: LauncherOptions) -> LauncherResult<i32> {
    let mut launcher = Launcher::new(context, options);
    let mut platform = TracingPlatform::default();
    launcher.init(&mut platform)?;
    let executable_dir = launcher.path_set().and_then(|paths| paths.executable_dir());
    let mut environment = select_environment(launcher.config(), executable_dir)?;
    launcher.exec(&mut platform, environment.as_mut())
}
