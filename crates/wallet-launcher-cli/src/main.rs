//! Wallet launcher entry point.
//!
//! The command line is passed through untouched so the bootstrap sees exactly
//! what the OS delivered. The process exits with the application's status,
//! or with the error's sysexits code when the bootstrap itself fails.

// CLI-specific lint allowances (CLI binary, not library)
#![allow(missing_docs)]
#![allow(clippy::print_stderr)] // CLI must print to stderr
#![allow(clippy::exit)] // CLI uses exit codes

use wallet_launcher::config::load_config_from_env;
use wallet_launcher::{ExecutionContext, LauncherError, LauncherOptions};
use wallet_launcher_cli::{init_tracing, run_launcher};

fn main() {
    init_tracing();
    let code = match launch() {
        Ok(code) => code,
        Err(err) => {
            let exit_code = err.exit_code();
            eprintln!("{:?}", miette::Report::new(err));
            exit_code
        }
    };
    std::process::exit(code);
}

fn launch() -> Result<i32, LauncherError> {
    let options = LauncherOptions {
        config: load_config_from_env()?,
        ..LauncherOptions::default()
    };
    run_launcher(ExecutionContext::from_env(), options)
}
