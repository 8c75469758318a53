//! Process runner abstraction.
//!
//! Provides the [`Runner`] trait and implementations: [`ShellRunner`] runs
//! commands through `sh -c`, and `MockRunner` (feature `testing`) replays
//! scripted output without spawning anything.

mod shell;

#[cfg(any(test, feature = "testing"))]
mod mock;

pub use shell::*;

#[cfg(any(test, feature = "testing"))]
pub use mock::*;

use crate::command::CommandLine;
use crate::error::Result;
use crate::output::ExecOutput;

/// Executes a built [`CommandLine`] and captures its output.
///
/// Implementations must merge stderr into the captured lines (the tools
/// print diagnostics such as `Error in packet` on stderr) and report the
/// exit status unchanged, including 127 for "command not found".
///
/// Only failures of the runner itself (the shell could not be spawned) are
/// returned as errors. A tool that ran and failed is a successful run with a
/// non-zero status.
pub trait Runner: Send + Sync {
    /// Run the command to completion.
    fn run(&self, command: &CommandLine) -> Result<ExecOutput>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn run(&self, command: &CommandLine) -> Result<ExecOutput> {
        (**self).run(command)
    }
}

impl<R: Runner + ?Sized> Runner for Box<R> {
    fn run(&self, command: &CommandLine) -> Result<ExecOutput> {
        (**self).run(command)
    }
}

impl<R: Runner + ?Sized> Runner for std::sync::Arc<R> {
    fn run(&self, command: &CommandLine) -> Result<ExecOutput> {
        (**self).run(command)
    }
}
