//! Mock runner for testing.
//!
//! Replays scripted tool output without spawning processes, and records
//! every command it was asked to run.

use super::Runner;
use crate::command::CommandLine;
use crate::error::{Error, Result};
use crate::output::{EXIT_COMMAND_NOT_FOUND, ExecOutput};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A scripted result for one command.
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Return this output.
    Output(ExecOutput),
    /// Simulate the shell not finding the tool (exit 127).
    NotFound,
    /// Simulate a tool timeout (exit 1, `Timeout: No Response from <host>.`).
    Timeout,
    /// Simulate a failure to spawn the shell.
    SpawnError(String),
}

struct MockRunnerInner {
    responses: VecDeque<MockResponse>,
    commands: Vec<CommandLine>,
    default_response: Option<MockResponse>,
}

/// Mock runner for testing session behaviour.
///
/// # Example
///
/// ```rust
/// use snmp_shell::Session;
/// use snmp_shell::runner::MockRunner;
///
/// let mock = MockRunner::new();
/// mock.queue_lines([".1.3.6.1.2.1.1.3.0 5040854"], 0);
///
/// let session = Session::builder("192.0.2.1")
///     .build_with_runner(mock.clone())
///     .unwrap();
/// let map = session.get(".1.3.6.1.2.1.1.3.0").unwrap();
///
/// assert_eq!(map.get_str(".1.3.6.1.2.1.1.3.0"), Some("5040854"));
/// assert_eq!(mock.commands().len(), 1);
/// ```
///
/// When the queue is empty the default response is used; without one the
/// mock answers like a tool that timed out.
#[derive(Clone)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

impl MockRunner {
    /// Create a mock with an empty queue.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockRunnerInner {
                responses: VecDeque::new(),
                commands: Vec::new(),
                default_response: None,
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockRunnerInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue a response.
    pub fn queue(&self, response: MockResponse) {
        self.lock().responses.push_back(response);
    }

    /// Queue output lines with an exit status.
    pub fn queue_lines<I, S>(&self, lines: I, status: i32)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.queue(MockResponse::Output(ExecOutput::from_lines(lines, status)));
    }

    /// Queue a "command not found" result.
    pub fn queue_not_found(&self) {
        self.queue(MockResponse::NotFound);
    }

    /// Queue a timeout.
    pub fn queue_timeout(&self) {
        self.queue(MockResponse::Timeout);
    }

    /// Set the response used when the queue is empty.
    pub fn set_default_response(&self, response: MockResponse) {
        self.lock().default_response = Some(response);
    }

    /// All commands run so far.
    pub fn commands(&self) -> Vec<CommandLine> {
        self.lock().commands.clone()
    }

    /// Forget recorded commands.
    pub fn clear_commands(&self) {
        self.lock().commands.clear();
    }

    /// Number of queued responses remaining.
    pub fn queued_response_count(&self) -> usize {
        self.lock().responses.len()
    }
}

impl Default for MockRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner for MockRunner {
    fn run(&self, command: &CommandLine) -> Result<ExecOutput> {
        let response = {
            let mut inner = self.lock();
            inner.commands.push(command.clone());
            inner
                .responses
                .pop_front()
                .or_else(|| inner.default_response.clone())
        };

        let tool = command.tool();
        match response {
            Some(MockResponse::Output(output)) => Ok(output),
            Some(MockResponse::NotFound) => Ok(ExecOutput::from_lines(
                [format!("sh: 1: {}: not found", command.program())],
                EXIT_COMMAND_NOT_FOUND,
            )),
            Some(MockResponse::SpawnError(msg)) => Err(Error::Spawn {
                tool,
                source: std::io::Error::other(msg),
            }
            .boxed()),
            Some(MockResponse::Timeout) | None => Ok(ExecOutput::from_lines(
                [format!("Timeout: No Response from {}.", command.host())],
                1,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionConfig;

    fn walk_cmd() -> CommandLine {
        let config = SessionConfig {
            hostname: "192.0.2.7".into(),
            ..Default::default()
        };
        crate::command::walk(&config, ".1.3.6.1.2.1.1")
    }

    #[test]
    fn replays_in_order_and_records() {
        let mock = MockRunner::new();
        mock.queue_lines(["first"], 0);
        mock.queue_lines(["second"], 2);

        let cmd = walk_cmd();
        assert_eq!(mock.run(&cmd).unwrap().lines, ["first"]);
        let second = mock.run(&cmd).unwrap();
        assert_eq!(second.lines, ["second"]);
        assert_eq!(second.status, Some(2));
        assert_eq!(mock.commands().len(), 2);
        assert_eq!(mock.queued_response_count(), 0);
    }

    #[test]
    fn empty_queue_times_out() {
        let mock = MockRunner::new();
        let out = mock.run(&walk_cmd()).unwrap();
        assert_eq!(out.status, Some(1));
        assert_eq!(out.lines, ["Timeout: No Response from 192.0.2.7."]);
    }

    #[test]
    fn not_found_is_exit_127() {
        let mock = MockRunner::new();
        mock.queue_not_found();
        let out = mock.run(&walk_cmd()).unwrap();
        assert!(out.is_command_not_found());
        assert_eq!(out.lines, ["sh: 1: snmpwalk: not found"]);
    }

    #[test]
    fn default_response_repeats() {
        let mock = MockRunner::new();
        mock.set_default_response(MockResponse::Output(ExecOutput::from_lines(["x"], 0)));
        let cmd = walk_cmd();
        assert_eq!(mock.run(&cmd).unwrap().lines, ["x"]);
        assert_eq!(mock.run(&cmd).unwrap().lines, ["x"]);
    }

    #[test]
    fn spawn_error() {
        let mock = MockRunner::new();
        mock.queue(MockResponse::SpawnError("boom".into()));
        assert!(matches!(*mock.run(&walk_cmd()).unwrap_err(), Error::Spawn { .. }));
    }
}
