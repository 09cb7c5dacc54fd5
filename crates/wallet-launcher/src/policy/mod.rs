//! Working-directory selection.
//!
//! The platform/build branching is a plain decision table ([`base_choice`]),
//! so every branch can be exercised on any host. [`WorkingDirectoryPolicy`]
//! layers the portable override and the writability probe on top of it.

pub mod scaling;

use crate::config::LauncherConfig;
use crate::model::{BaseSource, BuildVariant, Platform};
use crate::probe::WritabilityProbe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use scaling::ScalingPolicy;

/// What the decision table asks for, before any filesystem check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseChoice {
    ExecutableDir,
    AppData,
    /// Executable directory if the writability probe passes, app data otherwise.
    ExecutableDirIfWritable,
}

pub fn base_choice(platform: Platform, variant: BuildVariant) -> BaseChoice {
    match (platform, variant) {
        (Platform::MacOs | Platform::Linux, BuildVariant::Debug) => BaseChoice::ExecutableDir,
        (
            Platform::MacOs | Platform::Linux,
            BuildVariant::Release | BuildVariant::StoreDebug | BuildVariant::StoreRelease,
        ) => BaseChoice::AppData,
        (Platform::Windows, BuildVariant::StoreDebug) => BaseChoice::ExecutableDir,
        (Platform::Windows, BuildVariant::StoreRelease) => BaseChoice::AppData,
        (Platform::Windows, BuildVariant::Debug | BuildVariant::Release) => {
            BaseChoice::ExecutableDirIfWritable
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseSelection {
    pub base: PathBuf,
    pub source: BaseSource,
}

#[derive(Clone, Debug)]
pub struct WorkingDirectoryPolicy {
    portable_dir_name: String,
    data_dir_name: String,
    probe: WritabilityProbe,
}

impl WorkingDirectoryPolicy {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            portable_dir_name: config.portable_dir_name.clone(),
            data_dir_name: config.data_dir_name.clone(),
            probe: WritabilityProbe::new(config),
        }
    }

    #[must_use]
    pub fn with_probe(mut self, probe: WritabilityProbe) -> Self {
        self.probe = probe;
        self
    }

    /// `<executable_dir>/WalletForcePortable/` when that directory exists.
    pub fn portable_base(&self, executable_dir: &Path) -> Option<PathBuf> {
        let portable = executable_dir.join(&self.portable_dir_name);
        portable.is_dir().then_some(portable)
    }

    /// Pick the base directory for mutable state.
    ///
    /// An unknown executable directory skips the portable check and turns
    /// every executable-directory branch into app data.
    pub fn select_base(
        &self,
        executable_dir: Option<&Path>,
        app_data_dir: &Path,
        platform: Platform,
        variant: BuildVariant,
    ) -> BaseSelection {
        let app_data = || BaseSelection {
            base: app_data_dir.to_path_buf(),
            source: BaseSource::AppData,
        };
        let Some(executable_dir) = executable_dir else {
            return app_data();
        };
        if let Some(portable) = self.portable_base(executable_dir) {
            return BaseSelection {
                base: portable,
                source: BaseSource::Portable,
            };
        }
        let executable = || BaseSelection {
            base: executable_dir.to_path_buf(),
            source: BaseSource::ExecutableDir,
        };
        match base_choice(platform, variant) {
            BaseChoice::ExecutableDir => executable(),
            BaseChoice::AppData => app_data(),
            BaseChoice::ExecutableDirIfWritable => {
                let outcome = self.probe.probe(executable_dir);
                tracing::debug!(
                    op = "launcher.policy.probe",
                    dir = %executable_dir.display(),
                    ?outcome,
                    "executable directory probed"
                );
                if outcome.is_writable() {
                    executable()
                } else {
                    app_data()
                }
            }
        }
    }

    /// `<base>/data`, the directory handed to the rest of the application.
    pub fn working_path(&self, base: &Path) -> PathBuf {
        base.join(&self.data_dir_name)
    }
}
