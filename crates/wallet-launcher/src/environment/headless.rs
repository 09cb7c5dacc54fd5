use super::{ExecutionEnvironment, LaunchContext};
use crate::error::{LauncherError, LauncherResult};
use std::io::Write;

/// Writes the launch context as one JSON line and exits successfully.
///
/// Used when no application binary is configured.
#[derive(Debug)]
pub struct HeadlessEnvironment<W: Write> {
    writer: W,
}

impl<W: Write> HeadlessEnvironment<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExecutionEnvironment for HeadlessEnvironment<W> {
    fn run(&mut self, context: &LaunchContext<'_>) -> LauncherResult<i32> {
        let line = serde_json::to_string(&context.report())
            .map_err(|err| LauncherError::Environment {
                message: format!("failed to encode launch report: {err}"),
                source: None,
            })?;
        writeln!(self.writer, "{line}")
            .and_then(|()| self.writer.flush())
            .map_err(|err| LauncherError::environment("failed to write launch report", err))?;
        Ok(0)
    }
}
