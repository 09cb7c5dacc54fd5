//! Wallet launcher diagnostics tool.
//!
//! Shows what the launcher would decide on this machine without starting the
//! application: resolved paths, writability of a directory, and how a command
//! line is split into the opened URL and forwarded arguments.

// CLI-specific lint allowances (CLI binary, not library)
#![allow(missing_docs)]
#![allow(clippy::print_stdout)] // CLI must print to stdout
#![allow(clippy::print_stderr)] // CLI must print to stderr
#![allow(clippy::exit)] // CLI uses exit codes

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use wallet_launcher::args;
use wallet_launcher::config::{load_config_file, load_config_from_env};
use wallet_launcher::environment::TracingPlatform;
use wallet_launcher::paths::{FixedPaths, PathSource, SystemPaths};
use wallet_launcher::probe::WritabilityProbe;
use wallet_launcher::{
    BuildVariant, ExecutionContext, Launcher, LauncherConfig, LauncherOptions, Platform,
};
use wallet_launcher_cli::init_tracing;

/// Color output mode
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and `NO_COLOR` env
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Parser)]
#[command(
    name = "wallet-launcher-ctl",
    version,
    about = "Inspect wallet launcher decisions"
)]
struct Cli {
    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the executable, application-data and working paths
    Paths {
        #[arg(long)]
        json: bool,
        #[arg(long, help = "Launcher configuration file (yaml or json)")]
        config: Option<PathBuf>,
        #[arg(long, help = "Decide as this platform (macos, linux, windows)")]
        platform: Option<Platform>,
        #[arg(
            long,
            help = "Decide as this build variant (debug, release, store-debug, store-release)"
        )]
        variant: Option<BuildVariant>,
        #[arg(long, help = "Treat this file as the running executable")]
        exe: Option<PathBuf>,
        #[arg(long, help = "Use this directory as the OS application-data root")]
        data_dir: Option<PathBuf>,
    },
    /// Probe whether a directory can hold the wallet's data directory
    Probe {
        dir: PathBuf,
        #[arg(long)]
        json: bool,
        #[arg(long, help = "Launcher configuration file (yaml or json)")]
        config: Option<PathBuf>,
        #[arg(long, help = "Give up after this many probe file names")]
        max_attempts: Option<u32>,
    },
    /// Show how a command line is split
    Args {
        #[arg(long)]
        json: bool,
        #[arg(last = true)]
        args: Vec<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn configure_colors(mode: ColorMode) {
    let use_color = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            if std::env::var("NO_COLOR").is_ok() {
                false
            } else {
                supports_color::on(supports_color::Stream::Stderr).is_some()
            }
        }
    };

    miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .color(use_color)
                .unicode(use_color)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    configure_colors(cli.color);
    init_tracing();
    match cli.command {
        Commands::Paths {
            json,
            config,
            platform,
            variant,
            exe,
            data_dir,
        } => cmd_paths(json, config, platform, variant, exe, data_dir),
        Commands::Probe {
            dir,
            json,
            config,
            max_attempts,
        } => cmd_probe(&dir, json, config, max_attempts),
        Commands::Args { json, args } => cmd_args(json, args),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

fn load_config(path: Option<PathBuf>) -> Result<LauncherConfig> {
    let config = match path {
        Some(path) => load_config_file(&path)?,
        None => load_config_from_env()?,
    };
    Ok(config)
}

fn cmd_paths(
    json: bool,
    config: Option<PathBuf>,
    platform: Option<Platform>,
    variant: Option<BuildVariant>,
    exe: Option<PathBuf>,
    data_dir: Option<PathBuf>,
) -> Result<()> {
    let paths: Arc<dyn PathSource + Send + Sync> = if exe.is_some() || data_dir.is_some() {
        let context = ExecutionContext::from_env();
        Arc::new(FixedPaths {
            executable: exe.or_else(|| SystemPaths.current_executable(&context)),
            data_dir: data_dir.or_else(|| SystemPaths.data_dir()),
            temp_dir: SystemPaths.temp_dir(),
        })
    } else {
        Arc::new(SystemPaths)
    };
    let options = LauncherOptions {
        config: load_config(config)?,
        platform: platform.unwrap_or_else(Platform::current),
        variant: variant.unwrap_or_else(BuildVariant::current),
        paths,
        ..LauncherOptions::default()
    };
    let mut launcher = Launcher::new(ExecutionContext::from_env(), options);
    launcher.init(&mut TracingPlatform::default())?;
    let Some(report) = launcher.path_set().map(|paths| paths.report()) else {
        return Err(miette::miette!("launcher did not resolve any paths"));
    };

    if json {
        let payload = serde_json::to_string(&report).into_diagnostic()?;
        println!("{payload}");
    } else {
        println!("executable_dir:  {}", report.executable_dir);
        println!("executable_name: {}", report.executable_name);
        println!("app_data_dir:    {}", report.app_data_dir);
        println!("base:            {}", base_label(report.base_source));
        println!("working_path:    {}", report.working_path);
    }
    Ok(())
}

fn base_label(source: wallet_launcher::BaseSource) -> &'static str {
    match source {
        wallet_launcher::BaseSource::Portable => "portable",
        wallet_launcher::BaseSource::ExecutableDir => "executable_dir",
        wallet_launcher::BaseSource::AppData => "app_data",
    }
}

fn cmd_probe(
    dir: &std::path::Path,
    json: bool,
    config: Option<PathBuf>,
    max_attempts: Option<u32>,
) -> Result<()> {
    let config = load_config(config)?;
    let mut probe = WritabilityProbe::new(&config);
    if let Some(max_attempts) = max_attempts {
        if max_attempts == 0 {
            return Err(miette::miette!("--max-attempts must be at least 1"));
        }
        probe = probe.with_max_attempts(max_attempts);
    }
    let outcome = probe.probe(dir);

    if json {
        let payload = serde_json::to_string(&outcome).into_diagnostic()?;
        println!("{payload}");
    } else if outcome.is_writable() {
        println!("writable: {}", dir.display());
    } else {
        eprintln!("not writable: {} ({outcome:?})", dir.display());
    }
    if !outcome.is_writable() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_args(json: bool, raw: Vec<String>) -> Result<()> {
    let parsed = args::parse(&ExecutionContext::new(raw));
    if json {
        let payload = serde_json::json!({
            "arguments": parsed.arguments.as_slice(),
            "opened_url": parsed.opened_url.as_str(),
            "filtered": parsed.filtered.to_lossy_strings(),
        });
        println!("{payload}");
    } else {
        println!("arguments:  {}", parsed.arguments.joined());
        println!("opened_url: {}", parsed.opened_url.as_str());
        println!("filtered:   {}", parsed.filtered.to_lossy_strings().join(" "));
    }
    Ok(())
}

fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
