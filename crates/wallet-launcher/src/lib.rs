//! Wallet launcher: bootstrap and working-directory resolution.
//!
//! This crate runs before any other subsystem of the desktop wallet is
//! initialized. It decides where mutable state lives (portable install next to
//! the executable, or the per-user application-data directory), probes whether
//! the executable directory is writable, extracts the deep-link URL from the
//! command line, and hands a bounded argument list to the execution
//! environment that runs the application proper.
//!
//! Nothing here depends on a logging subscriber being installed. Events are
//! emitted through `tracing` and are dropped when no subscriber exists.

#![forbid(unsafe_code)]
// Entry points and bootstrap types carry docs; plain accessors and report
// fields are left undocumented for now.
#![allow(missing_docs)]

pub mod args;
pub mod config;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod launcher;
pub mod model;
pub mod paths;
pub mod policy;
pub mod probe;

pub use crate::config::LauncherConfig;
pub use crate::error::{ErrorCode, LauncherError, LauncherResult};
pub use crate::launcher::{Launcher, LauncherOptions};
pub use crate::model::*;
