//! Error types for snmp-shell.
//!
//! This module provides:
//!
//! - [`Error`] - The main error type (3 variants covering all hard failures)
//! - [`Result`] - Boxed result alias used throughout the crate
//!
//! # Hard vs. soft failures
//!
//! Only conditions that make the whole call meaningless are raised as errors:
//! the tool binary could not be found (shell exit status 127), the shell could
//! not be spawned at all, or the session was misconfigured.
//!
//! Every other non-zero exit of the net-snmp tools (timeouts, `noSuchName`
//! packet errors, authentication failures) is *soft*: the call returns
//! whatever the tool printed, and missing OIDs simply do not appear in the
//! returned [`VarMap`](crate::VarMap). Use [`VarMap::missing`](crate::VarMap::missing)
//! to cross-check a result against the request.
//!
//! ```rust
//! use snmp_shell::{Error, Result};
//!
//! fn handle_error(result: Result<()>) {
//!     match result {
//!         Ok(()) => println!("Success"),
//!         Err(e) => match &*e {
//!             Error::ToolNotFound { tool, message } => {
//!                 println!("{} is not installed: {}", tool, message);
//!             }
//!             _ => println!("Error: {}", e),
//!         }
//!     }
//! }
//! ```

use crate::command::Tool;

/// Result type alias using the library's boxed Error type.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The main error type for all snmp-shell operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The tool could not be resolved by the shell (exit status 127).
    ///
    /// `message` is the first line the shell printed, typically
    /// `sh: 1: snmpget: not found`.
    #[error("{tool} not found: {message}")]
    ToolNotFound { tool: Tool, message: Box<str> },

    /// The shell process itself could not be started.
    #[error("failed to spawn shell for {tool}: {source}")]
    Spawn {
        tool: Tool,
        #[source]
        source: std::io::Error,
    },

    /// Invalid session configuration.
    #[error("configuration error: {0}")]
    Config(Box<str>),
}

impl Error {
    /// Box this error (convenience for constructing boxed errors).
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Returns true if this error means the net-snmp tools are not installed.
    pub fn is_tool_missing(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. })
    }
}
