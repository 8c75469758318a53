//! Session builder.
//!
//! This module provides the [`SessionBuilder`] type, the entry point for
//! constructing sessions with the system shell or a custom [`Runner`].

use std::path::PathBuf;

use crate::error::Result;
use crate::runner::{Runner, ShellRunner};
use crate::version::Version;

use super::{ChunkMode, Session, SessionConfig};

/// Builder for constructing sessions.
///
/// # Example
///
/// ```rust
/// use snmp_shell::{ChunkMode, SessionBuilder, Version};
///
/// # fn example() -> snmp_shell::Result<()> {
/// let session = SessionBuilder::new("core-sw1.example.net")
///     .community("monitoring")
///     .version(Version::V2c)
///     .timeout_secs(5)
///     .get_max_oids(20)
///     .chunk_mode(ChunkMode::Accumulate)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    /// Create a new session builder for an agent host.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            config: SessionConfig {
                hostname: hostname.into(),
                ..SessionConfig::default()
            },
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Set the community string (default: "public").
    pub fn community(mut self, community: impl Into<String>) -> Self {
        self.config.community = community.into();
        self
    }

    /// Set the SNMP version (default: v1).
    pub fn version(mut self, version: Version) -> Self {
        self.config.version = version;
        self
    }

    /// Set the SNMP version from a string.
    ///
    /// Anything other than `"1"` or `"2c"` silently selects v1.
    pub fn version_str(mut self, version: &str) -> Self {
        self.config.version = Version::parse_lenient(version);
        self
    }

    /// Set the per-request timeout passed as `-t` (default: 30 seconds).
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the output options passed as `-O` (default: "0efnqt").
    ///
    /// The output parser expects numeric OIDs at the start of each line;
    /// option strings without `n` and `f` will yield empty results.
    pub fn output_options(mut self, options: impl Into<String>) -> Self {
        self.config.output_options = options.into();
        self
    }

    /// Set the maximum OIDs per snmpget/snmpgetnext invocation (default: 10).
    pub fn get_max_oids(mut self, max: usize) -> Self {
        self.config.get_max_oids = max;
        self
    }

    /// Set the maximum entries per snmpset invocation (default: 10).
    pub fn set_max_oids(mut self, max: usize) -> Self {
        self.config.set_max_oids = max;
        self
    }

    /// Set how results of chunked requests are combined (default: Accumulate).
    pub fn chunk_mode(mut self, mode: ChunkMode) -> Self {
        self.config.chunk_mode = mode;
        self
    }

    /// Run the tools from this directory instead of resolving them via `PATH`.
    pub fn tool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.tool_dir = Some(dir.into());
        self
    }

    /// The configuration built so far.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Build a session that runs commands through `sh`.
    ///
    /// # Errors
    ///
    /// [`Error::Config`](crate::Error::Config) if the host is empty or a batch
    /// limit is zero.
    pub fn build(self) -> Result<Session<ShellRunner>> {
        self.build_with_runner(ShellRunner::new())
    }

    /// Build a session with a custom runner.
    pub fn build_with_runner<R: Runner>(self, runner: R) -> Result<Session<R>> {
        let session = Session::new(runner, self.config)?;
        tracing::debug!(target: "snmp_shell::session", { config = ?session.config() }, "session created");
        Ok(session)
    }
}
