//! Boundaries to the collaborators the launcher hands off to.
//!
//! The launcher does not own the UI toolkit, the message-queue processor, or
//! the timer environment. It talks to them through two traits:
//! [`PlatformIntegration`] for the pre-init/post-shutdown hooks and
//! [`ExecutionEnvironment`] for the sandboxed main loop.

mod headless;
mod process;

pub use headless::HeadlessEnvironment;
pub use process::ProcessEnvironment;

use crate::config::LauncherConfig;
use crate::error::LauncherResult;
use crate::model::{dir_string, ExecutableLocation, FilteredArguments, OpenedUrl};
use crate::policy::ScalingPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable carrying the working path to a spawned application.
pub const WORKING_PATH_ENV: &str = "WALLET_WORKING_PATH";
/// Environment variable carrying the opened URL to a spawned application.
pub const OPENED_URL_ENV: &str = "WALLET_OPENED_URL";

/// Configuration for the platform pre-init hook.
///
/// Serializes to exactly two keys: where the bundled font configuration
/// comes from and where it is staged before the UI toolkit initializes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformStartOptions {
    pub custom_font_config_src: String,
    pub custom_font_config_dst: String,
}

impl PlatformStartOptions {
    pub fn new(config: &LauncherConfig, temp_dir: &Path) -> Self {
        Self {
            custom_font_config_src: config.font_config_source.clone(),
            custom_font_config_dst: format!(
                "{}{}",
                dir_string(temp_dir),
                config.font_config_file_name
            ),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "custom_font_config_src": self.custom_font_config_src,
            "custom_font_config_dst": self.custom_font_config_dst,
        })
    }
}

/// Platform hooks around the application's lifetime.
pub trait PlatformIntegration {
    fn set_application_name(&mut self, name: &str);
    fn apply_display_scaling(&mut self, policy: ScalingPolicy);
    fn start(&mut self, options: &PlatformStartOptions);
    fn finish(&mut self);
}

/// Records each platform hook as a tracing event.
#[derive(Clone, Debug, Default)]
pub struct TracingPlatform {
    application_name: Option<String>,
}

impl TracingPlatform {
    pub fn application_name(&self) -> Option<&str> {
        self.application_name.as_deref()
    }
}

impl PlatformIntegration for TracingPlatform {
    fn set_application_name(&mut self, name: &str) {
        tracing::debug!(op = "launcher.platform.identity", name, "application name set");
        self.application_name = Some(name.to_string());
    }

    fn apply_display_scaling(&mut self, policy: ScalingPolicy) {
        tracing::debug!(
            op = "launcher.platform.scaling",
            high_dpi = policy.high_dpi_scaling,
            custom = policy.custom_scaling,
            "display scaling applied"
        );
    }

    fn start(&mut self, options: &PlatformStartOptions) {
        tracing::debug!(
            op = "launcher.platform.start",
            options = %options.to_json(),
            "platform start"
        );
    }

    fn finish(&mut self) {
        tracing::debug!(op = "launcher.platform.finish", "platform finish");
    }
}

/// What the execution environment receives from the launcher.
#[derive(Clone, Copy, Debug)]
pub struct LaunchContext<'a> {
    pub working_path: &'a Path,
    pub opened_url: &'a OpenedUrl,
    pub arguments: &'a FilteredArguments,
    pub executable: Option<&'a ExecutableLocation>,
}

impl LaunchContext<'_> {
    pub fn report(&self) -> LaunchReport {
        LaunchReport {
            working_path: dir_string(self.working_path),
            opened_url: self.opened_url.as_str().to_string(),
            arguments: self.arguments.to_lossy_strings(),
            executable_dir: self
                .executable
                .map(|exe| dir_string(&exe.dir))
                .unwrap_or_default(),
            executable_name: self
                .executable
                .map(|exe| exe.name.clone())
                .unwrap_or_default(),
        }
    }
}

/// Serializable form of a [`LaunchContext`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchReport {
    pub working_path: String,
    pub opened_url: String,
    pub arguments: Vec<String>,
    pub executable_dir: String,
    pub executable_name: String,
}

/// The sandboxed environment that runs the application's main loop.
///
/// Implementations own the UI message-queue and timer-environment lifetimes
/// for the duration of [`ExecutionEnvironment::run`].
pub trait ExecutionEnvironment {
    /// Run to completion and return the process exit status.
    fn run(&mut self, context: &LaunchContext<'_>) -> LauncherResult<i32>;
}
