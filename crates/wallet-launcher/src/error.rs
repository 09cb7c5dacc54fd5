use crate::diagnostics::AssertionFailure;
use miette::Diagnostic;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

pub type LauncherResult<T> = Result<T, LauncherError>;

/// Stable machine-readable error codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "E_IO")]
    Io,
    #[serde(rename = "E_CONFIG")]
    Config,
    #[serde(rename = "E_ASSERTION")]
    Assertion,
    #[serde(rename = "E_ENVIRONMENT")]
    Environment,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Io => "E_IO",
            Self::Config => "E_CONFIG",
            Self::Assertion => "E_ASSERTION",
            Self::Environment => "E_ENVIRONMENT",
        }
    }

    /// Process exit code reported when bootstrap fails with this code.
    ///
    /// Values follow `sysexits.h`.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Environment => 69,
            Self::Assertion => 70,
            Self::Io => 74,
            Self::Config => 78,
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum LauncherError {
    #[error("failed to read {}", path.display())]
    #[diagnostic(code(E_IO))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid launcher configuration: {message}")]
    #[diagnostic(
        code(E_CONFIG),
        help("check the file named by WALLET_LAUNCHER_CONFIG")
    )]
    Config { message: String },

    #[error("{failure}")]
    #[diagnostic(code(E_ASSERTION))]
    Assertion { failure: AssertionFailure },

    #[error("execution environment failed: {message}")]
    #[diagnostic(code(E_ENVIRONMENT))]
    Environment {
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

impl LauncherError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn environment(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Environment {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::Io,
            Self::Config { .. } => ErrorCode::Config,
            Self::Assertion { .. } => ErrorCode::Assertion,
            Self::Environment { .. } => ErrorCode::Environment,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }
}
