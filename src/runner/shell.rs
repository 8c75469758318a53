//! Runner that executes commands through the system shell.

use std::ffi::OsString;
use std::process::{Command, Stdio};
use std::time::Instant;

use super::Runner;
use crate::command::CommandLine;
use crate::error::{Error, Result};
use crate::output::ExecOutput;

/// Default shell used to interpret command lines.
pub const DEFAULT_SHELL: &str = "sh";

/// Runs commands as `sh -c '<command line> 2>&1'`.
///
/// The rendered command line quotes every caller value (see
/// [`escape_arg`](crate::escape_arg)), so the shell only ever sees them as
/// single words. stderr is redirected into stdout inside the shell so
/// diagnostics keep their position relative to variable lines. Anything the
/// shell itself writes to its own stderr is appended after stdout.
///
/// There is no wall-clock limit on the child: the `-t` option is enforced
/// by the tool, and this call blocks until the process exits.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: OsString,
}

impl ShellRunner {
    /// Runner using `sh` from `PATH`.
    pub fn new() -> Self {
        Self {
            shell: DEFAULT_SHELL.into(),
        }
    }

    /// Runner using a specific POSIX shell binary.
    pub fn with_shell(shell: impl Into<OsString>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner for ShellRunner {
    fn run(&self, command: &CommandLine) -> Result<ExecOutput> {
        let tool = command.tool();
        let line = format!("{} 2>&1", command.to_shell());
        tracing::trace!(target: "snmp_shell::runner", { command = %command }, "spawning");

        let start = Instant::now();
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(&line)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn { tool, source }.boxed())?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        let exec = ExecOutput::new(&text, output.status.code());
        tracing::debug!(
            target: "snmp_shell::runner",
            { %tool, status = ?exec.status, lines = exec.lines.len(), elapsed_ms = start.elapsed().as_millis() as u64 },
            "tool finished"
        );
        Ok(exec)
    }
}
