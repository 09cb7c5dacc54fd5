use serde::{Deserialize, Serialize};
use std::ffi::{OsStr, OsString};

/// Number of raw arguments forwarded to the execution environment.
///
/// Only the program's own invocation path is forwarded; everything else is
/// hidden from the windowing runtime's own argument parser.
pub const FORWARD_ARGUMENT_COUNT: usize = 1;

/// Raw process arguments exactly as received at process entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    raw: Vec<OsString>,
}

impl ExecutionContext {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            raw: raw.into_iter().map(Into::into).collect(),
        }
    }

    /// Snapshot the arguments of the current process.
    pub fn from_env() -> Self {
        Self::new(std::env::args_os())
    }

    pub fn raw(&self) -> &[OsString] {
        &self.raw
    }

    /// The invocation path (`argv[0]`), when present.
    pub fn program(&self) -> Option<&OsStr> {
        self.raw.first().map(OsString::as_os_str)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Arguments decoded to text, one element per raw argument, order preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedArguments(Vec<String>);

impl ParsedArguments {
    pub fn new(arguments: Vec<String>) -> Self {
        Self(arguments)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Arguments joined by single spaces.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }
}

impl<'a> IntoIterator for &'a ParsedArguments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Deep-link URL passed on the command line. Empty when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpenedUrl(String);

impl OpenedUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The bounded argument list handed to the execution environment.
///
/// Holds the first `min(argc, FORWARD_ARGUMENT_COUNT)` raw arguments unmodified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredArguments(Vec<OsString>);

impl FilteredArguments {
    pub(crate) fn new(arguments: Vec<OsString>) -> Self {
        Self(arguments)
    }

    pub fn as_slice(&self) -> &[OsString] {
        &self.0
    }

    pub fn program(&self) -> Option<&OsStr> {
        self.0.first().map(OsString::as_os_str)
    }

    /// Forwarded arguments after the program path.
    pub fn rest(&self) -> &[OsString] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_lossy_strings(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }
}
