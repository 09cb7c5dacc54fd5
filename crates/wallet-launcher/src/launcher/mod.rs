//! Bootstrap orchestrator.
//!
//! # Startup Order
//!
//! 1. Decode arguments and extract the opened URL
//! 2. Set the application identity
//! 3. Apply the display-scaling policy
//! 4. Resolve the executable and application-data paths
//! 5. Select the working-directory base and compute the working path
//! 6. Platform pre-init with the font-configuration staging options
//! 7. Run the execution environment with the filtered arguments
//! 8. Platform post-shutdown
//! 9. Return the environment's exit status unchanged
//!
//! Steps 1-5 happen in [`Launcher::init`]; [`Launcher::exec`] runs `init` if
//! it has not run yet and then performs the rest.

use crate::args::{self, ParsedCommandLine};
use crate::config::LauncherConfig;
use crate::diagnostics::{expects, DiagnosticSink, TracingSink};
use crate::environment::{
    ExecutionEnvironment, LaunchContext, PlatformIntegration, PlatformStartOptions,
};
use crate::error::LauncherResult;
use crate::model::{
    dir_string, BuildVariant, ExecutionContext, OpenedUrl, PathSet, Platform,
    FORWARD_ARGUMENT_COUNT,
};
use crate::paths::{resolve_app_data_path, resolve_executable_path, PathSource, SystemPaths};
use crate::policy::{ScalingPolicy, WorkingDirectoryPolicy};
use std::path::Path;
use std::sync::Arc;

/// Everything the launcher needs besides the raw arguments.
#[derive(Clone)]
pub struct LauncherOptions {
    pub config: LauncherConfig,
    pub platform: Platform,
    pub variant: BuildVariant,
    pub paths: Arc<dyn PathSource + Send + Sync>,
    pub sink: Arc<dyn DiagnosticSink>,
}

impl Default for LauncherOptions {
    fn default() -> Self {
        Self {
            config: LauncherConfig::default(),
            platform: Platform::current(),
            variant: BuildVariant::current(),
            paths: Arc::new(SystemPaths),
            sink: Arc::new(TracingSink),
        }
    }
}

impl std::fmt::Debug for LauncherOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LauncherOptions")
            .field("config", &self.config)
            .field("platform", &self.platform)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Prepared {
    command_line: ParsedCommandLine,
    paths: PathSet,
}

/// Bootstrap context, built once per process and passed by reference.
#[derive(Debug)]
pub struct Launcher {
    context: ExecutionContext,
    options: LauncherOptions,
    prepared: Option<Prepared>,
}

impl Launcher {
    pub fn new(context: ExecutionContext, options: LauncherOptions) -> Self {
        Self {
            context,
            options,
            prepared: None,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.options.config
    }

    pub fn is_initialized(&self) -> bool {
        self.prepared.is_some()
    }

    /// Parse arguments, announce identity and scaling, and resolve paths.
    pub fn init(&mut self, platform: &mut dyn PlatformIntegration) -> LauncherResult<()> {
        let prepared = self.prepare(platform)?;
        self.prepared = Some(prepared);
        Ok(())
    }

    fn prepare(&self, platform: &mut dyn PlatformIntegration) -> LauncherResult<Prepared> {
        let sink = self.options.sink.as_ref();
        expects(
            sink,
            self.options.config.validate().is_ok(),
            "launcher configuration is valid",
        )?;

        let command_line = args::parse(&self.context);
        expects(
            sink,
            command_line.arguments.len() == self.context.len(),
            "every raw argument decodes to exactly one argument",
        )?;

        platform.set_application_name(&self.options.config.application_name);
        platform.apply_display_scaling(ScalingPolicy::for_platform(self.options.platform));

        let paths = self.resolve_paths();
        tracing::debug!(
            op = "launcher.init.complete",
            working_path = %paths.working_path.display(),
            base = ?paths.base_source,
            opened_url = command_line.opened_url.as_str(),
            "working path resolved"
        );
        Ok(Prepared {
            command_line,
            paths,
        })
    }

    fn resolve_paths(&self) -> PathSet {
        let options = &self.options;
        let executable = resolve_executable_path(options.paths.as_ref(), &self.context);
        let app_data_dir =
            resolve_app_data_path(options.paths.as_ref(), &options.config.application_name);
        let policy = WorkingDirectoryPolicy::new(&options.config);
        let selection = policy.select_base(
            executable.as_ref().map(|exe| exe.dir.as_path()),
            &app_data_dir,
            options.platform,
            options.variant,
        );
        let working_path = policy.working_path(&selection.base);
        PathSet {
            executable,
            app_data_dir,
            base_source: selection.source,
            working_path,
        }
    }

    /// Run the full bootstrap and hand off to `environment`.
    ///
    /// The platform post-shutdown hook runs even when the environment fails.
    pub fn exec(
        &mut self,
        platform: &mut dyn PlatformIntegration,
        environment: &mut dyn ExecutionEnvironment,
    ) -> LauncherResult<i32> {
        let prepared = match self.prepared.take() {
            Some(prepared) => prepared,
            None => self.prepare(platform)?,
        };
        let prepared = self.prepared.insert(prepared);
        let sink = self.options.sink.as_ref();

        let start_options =
            PlatformStartOptions::new(&self.options.config, &self.options.paths.temp_dir());
        platform.start(&start_options);

        let filtered = &prepared.command_line.filtered;
        if let Err(err) = expects(
            sink,
            filtered.len() == self.context.len().min(FORWARD_ARGUMENT_COUNT),
            "forwarded arguments are bounded",
        ) {
            platform.finish();
            return Err(err);
        }

        let context = LaunchContext {
            working_path: &prepared.paths.working_path,
            opened_url: &prepared.command_line.opened_url,
            arguments: filtered,
            executable: prepared.paths.executable.as_ref(),
        };
        let result = environment.run(&context);

        platform.finish();
        result
    }

    pub fn path_set(&self) -> Option<&PathSet> {
        self.prepared.as_ref().map(|prepared| &prepared.paths)
    }

    /// Executable directory, slash-terminated, or empty when unknown.
    pub fn executable_path(&self) -> String {
        self.path_set()
            .and_then(PathSet::executable_dir)
            .map(dir_string)
            .unwrap_or_default()
    }

    pub fn executable_name(&self) -> String {
        self.path_set()
            .and_then(|paths| paths.executable.as_ref())
            .map(|exe| exe.name.clone())
            .unwrap_or_default()
    }

    pub fn app_data_path(&self) -> String {
        self.path_set()
            .map(|paths| dir_string(&paths.app_data_dir))
            .unwrap_or_default()
    }

    /// Working path, slash-terminated. Empty before [`Launcher::init`].
    pub fn working_path(&self) -> String {
        self.path_set()
            .map(|paths| dir_string(&paths.working_path))
            .unwrap_or_default()
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.path_set().map(|paths| paths.working_path.as_path())
    }

    pub fn opened_url(&self) -> OpenedUrl {
        self.prepared
            .as_ref()
            .map(|prepared| prepared.command_line.opened_url.clone())
            .unwrap_or_default()
    }

    /// Decoded arguments joined by single spaces.
    pub fn arguments_string(&self) -> String {
        self.prepared
            .as_ref()
            .map(|prepared| prepared.command_line.arguments.joined())
            .unwrap_or_default()
    }
}
