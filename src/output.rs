//! Output parser for net-snmp tool output.
//!
//! The tools are run with `-O 0efnqt`, which prints one variable per line as
//! `<numeric OID> <value>`:
//!
//! ```text
//! .1.3.6.1.2.1.1.3.0 5040854
//! .1.3.6.1.2.1.1.1.0 "Linux box
//! kernel 5.4"
//! ```
//!
//! A line whose first token does not start with `.1.` continues the value of
//! the previous OID (multi-line strings), or is diagnostic text the tool
//! printed before any variable (`Error in packet`, `Timeout: No Response`),
//! which is dropped.
//!
//! Exit status 127 means the shell could not find the tool and is the only
//! status turned into an error. Everything else, including 1 (timeout) and
//! 2 (packet error with partial results), yields whatever could be parsed.

use crate::command::Tool;
use crate::error::{Error, Result};
use crate::value::{Value, VarMap};

/// Shell exit status for "command not found".
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Prefix every numeric OID printed with `-On` starts with.
const OID_PREFIX: &str = ".1.";

/// Captured output of one tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutput {
    /// stdout and stderr, merged, split into lines without terminators.
    pub lines: Vec<String>,
    /// Exit status; `None` if the process was terminated by a signal.
    pub status: Option<i32>,
}

impl ExecOutput {
    /// Build from captured text and an exit status.
    pub fn new(text: &str, status: Option<i32>) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
            status,
        }
    }

    /// Build from individual lines.
    pub fn from_lines<I, S>(lines: I, status: i32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            status: Some(status),
        }
    }

    /// True if the shell reported that the tool does not exist.
    pub fn is_command_not_found(&self) -> bool {
        self.status == Some(EXIT_COMMAND_NOT_FOUND)
    }
}

/// Parse the output of one tool invocation.
///
/// # Errors
///
/// Returns [`Error::ToolNotFound`] if the exit status is 127, carrying the
/// first output line.
///
/// # Example
///
/// ```rust
/// use snmp_shell::{ExecOutput, Tool, parse_output};
///
/// let out = ExecOutput::from_lines([".1.3.6.1.2.1.1.3.0 5040854"], 0);
/// let map = parse_output(Tool::Get, &out).unwrap();
/// assert_eq!(map.get_str(".1.3.6.1.2.1.1.3.0"), Some("5040854"));
/// ```
pub fn parse_output(tool: Tool, output: &ExecOutput) -> Result<VarMap> {
    if output.is_command_not_found() {
        let message = output.lines.first().map(String::as_str).unwrap_or_default();
        tracing::debug!(target: "snmp_shell::output", { %tool, message }, "tool not found");
        return Err(Error::ToolNotFound {
            tool,
            message: message.into(),
        }
        .boxed());
    }

    match output.status {
        Some(0) => {}
        Some(status) => {
            tracing::debug!(target: "snmp_shell::output", { %tool, status, lines = output.lines.len() }, "tool exited with non-zero status, keeping partial output");
        }
        None => {
            tracing::debug!(target: "snmp_shell::output", { %tool }, "tool terminated by signal, keeping partial output");
        }
    }

    Ok(parse_lines(&output.lines))
}

/// Parse output lines into a [`VarMap`], ignoring the exit status.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> VarMap {
    let mut map = VarMap::new();
    let mut current: Option<String> = None;

    for line in lines {
        let line = line.as_ref();
        match first_token(line) {
            Some(oid) if oid.starts_with(OID_PREFIX) => {
                map.insert(oid, Value::from_text(value_text(line, oid)));
                current = Some(oid.to_owned());
            }
            _ => match current.as_deref() {
                Some(oid) => {
                    map.push_line(oid, line);
                }
                None => {
                    tracing::trace!(target: "snmp_shell::output", { line }, "dropping line before first OID");
                }
            },
        }
    }

    map
}

/// First whitespace-delimited token, skipping leading whitespace.
fn first_token(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// Value text for an OID line.
///
/// Every occurrence of the OID is removed, leading whitespace trimmed and
/// double quotes dropped. A leading `= ` separator (output without `-Oq`)
/// is dropped too.
fn value_text(line: &str, oid: &str) -> String {
    let rest = line.replace(oid, "");
    let mut rest = rest.trim_start();
    if let Some(after) = rest.strip_prefix('=')
        && (after.is_empty() || after.starts_with(char::is_whitespace))
    {
        rest = after.trim_start();
    }
    rest.replace('"', "")
}
