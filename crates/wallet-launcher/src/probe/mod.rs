//! Empirical writability check for a candidate state root.
//!
//! Permission-query APIs disagree across platforms, so the probe performs the
//! operation the caller actually needs: it creates a file under
//! `<dir>/data/` and removes it again. Names already taken by another
//! instance (or left behind by a crashed one) are skipped, up to a fixed
//! ceiling.

use crate::config::LauncherConfig;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Why a directory was judged not writable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// The data subdirectory is missing and could not be created.
    DataDirUnavailable,
    /// A probe file could not be created and nothing exists at its name.
    CreateFailed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The salt marker exists; a prior run already initialized this location.
    AlreadyInitialized,
    /// A probe file was created and removed on the given attempt (1-based).
    Writable { attempts: u32 },
    Denied { reason: DenyReason },
    /// Every candidate name up to the ceiling was already taken.
    Exhausted { attempts: u32 },
}

impl ProbeOutcome {
    pub fn is_writable(&self) -> bool {
        matches!(self, Self::AlreadyInitialized | Self::Writable { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WritabilityProbe {
    data_dir_name: String,
    salt_marker: String,
    temp_prefix: String,
    max_attempts: u32,
}

impl WritabilityProbe {
    pub fn new(config: &LauncherConfig) -> Self {
        Self {
            data_dir_name: config.data_dir_name.clone(),
            salt_marker: config.salt_marker.clone(),
            temp_prefix: config.temp_prefix.clone(),
            max_attempts: config.max_probe_attempts,
        }
    }

    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn can_write(&self, dir: &Path) -> bool {
        self.probe(dir).is_writable()
    }

    pub fn probe(&self, dir: &Path) -> ProbeOutcome {
        let data_dir = dir.join(&self.data_dir_name);
        if !data_dir.is_dir() {
            if let Err(err) = fs::create_dir_all(&data_dir) {
                tracing::debug!(
                    op = "launcher.probe.mkdir_failed",
                    dir = %data_dir.display(),
                    error = %err,
                    "cannot create probe directory"
                );
                return ProbeOutcome::Denied {
                    reason: DenyReason::DataDirUnavailable,
                };
            }
        }
        if data_dir.join(&self.salt_marker).exists() {
            return ProbeOutcome::AlreadyInitialized;
        }

        for attempt in 1..=self.max_attempts {
            let candidate = data_dir.join(format!("{}{attempt}", self.temp_prefix));
            // create_new: an existing name is a collision, never truncated.
            match OpenOptions::new().write(true).create_new(true).open(&candidate) {
                Ok(file) => {
                    drop(file);
                    if let Err(err) = fs::remove_file(&candidate) {
                        tracing::warn!(
                            op = "launcher.probe.cleanup_failed",
                            file = %candidate.display(),
                            error = %err,
                            "probe file left behind"
                        );
                    }
                    return ProbeOutcome::Writable { attempts: attempt };
                }
                Err(err) if candidate.exists() => {
                    tracing::trace!(
                        op = "launcher.probe.collision",
                        file = %candidate.display(),
                        error = %err,
                        "probe name taken"
                    );
                }
                Err(err) => {
                    tracing::debug!(
                        op = "launcher.probe.denied",
                        file = %candidate.display(),
                        error = %err,
                        "probe file could not be created"
                    );
                    return ProbeOutcome::Denied {
                        reason: DenyReason::CreateFailed,
                    };
                }
            }
        }

        ProbeOutcome::Exhausted {
            attempts: self.max_attempts,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn probe() -> WritabilityProbe {
        WritabilityProbe::new(&LauncherConfig::default())
    }

    #[test]
    fn fresh_directory_is_writable_on_first_attempt() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(probe().probe(dir.path()), ProbeOutcome::Writable { attempts: 1 });
        assert!(dir.path().join("data").is_dir());
        assert!(!dir.path().join("data").join("temp1").exists());
    }

    #[test]
    fn zero_ceiling_is_exhausted_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = probe().with_max_attempts(0).probe(dir.path());
        assert_eq!(outcome, ProbeOutcome::Exhausted { attempts: 0 });
        assert!(!outcome.is_writable());
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let json = serde_json::to_value(ProbeOutcome::Denied {
            reason: DenyReason::CreateFailed,
        })
        .unwrap();
        assert_eq!(json["outcome"], "denied");
        assert_eq!(json["reason"], "create_failed");
    }
}
