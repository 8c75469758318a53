//! Session: immutable connection parameters plus the four operations.

mod builder;

pub use builder::SessionBuilder;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::instrument;

use crate::command::{self, CommandLine, Tool};
use crate::error::{Error, Result};
use crate::oids::Oids;
use crate::output::{ExecOutput, parse_output};
use crate::runner::{Runner, ShellRunner};
use crate::value::VarMap;
use crate::version::Version;

/// Default `-t` value in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default `-O` option string.
///
/// - `0`: leading zero on single-digit hex bytes
/// - `e`: enums printed numerically
/// - `f`: full OIDs
/// - `n`: numeric OIDs
/// - `q`: quick print (`OID value`, no type prefix)
/// - `t`: timeticks as raw integers
pub const DEFAULT_OUTPUT_OPTIONS: &str = "0efnqt";

/// Default number of OIDs per snmpget/snmpgetnext invocation.
pub const DEFAULT_GET_MAX_OIDS: usize = 10;

/// Default number of entries per snmpset invocation.
pub const DEFAULT_SET_MAX_OIDS: usize = 10;

/// How results of a request split across several invocations are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChunkMode {
    /// Parse every chunk and merge all results, in chunk order (default).
    ///
    /// A `ToolNotFound` on any chunk aborts the call.
    #[default]
    Accumulate,
    /// Run every chunk but parse only the last one's output and status.
    ///
    /// Earlier chunks' results are discarded, matching the older
    /// single-chunk result shape some consumers depend on.
    LastOnly,
}

/// Session configuration.
///
/// Most users should use [`SessionBuilder`] rather than constructing this directly.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Agent host name or address, passed as-is to the tools.
    pub hostname: String,
    /// Community string (default: "public")
    pub community: String,
    /// SNMP version (default: V1)
    pub version: Version,
    /// Per-request timeout passed as `-t` (default: 30 seconds)
    pub timeout_secs: u64,
    /// Output options passed as `-O` (default: "0efnqt")
    pub output_options: String,
    /// Maximum OIDs per snmpget/snmpgetnext invocation (default: 10)
    pub get_max_oids: usize,
    /// Maximum entries per snmpset invocation (default: 10)
    pub set_max_oids: usize,
    /// How chunked results are combined (default: Accumulate)
    pub chunk_mode: ChunkMode,
    /// Directory containing the tools; `None` resolves them through `PATH`
    pub tool_dir: Option<PathBuf>,
}

impl Default for SessionConfig {
    /// Returns configuration for SNMPv1 with community "public" and no host.
    fn default() -> Self {
        Self {
            hostname: String::new(),
            community: "public".to_string(),
            version: Version::V1,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_options: DEFAULT_OUTPUT_OPTIONS.to_string(),
            get_max_oids: DEFAULT_GET_MAX_OIDS,
            set_max_oids: DEFAULT_SET_MAX_OIDS,
            chunk_mode: ChunkMode::Accumulate,
            tool_dir: None,
        }
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("hostname", &self.hostname)
            .field("community", &"***")
            .field("version", &self.version)
            .field("timeout_secs", &self.timeout_secs)
            .field("output_options", &self.output_options)
            .field("get_max_oids", &self.get_max_oids)
            .field("set_max_oids", &self.set_max_oids)
            .field("chunk_mode", &self.chunk_mode)
            .field("tool_dir", &self.tool_dir)
            .finish()
    }
}

impl SessionConfig {
    /// Check the configuration can produce valid command lines.
    pub fn validate(&self) -> Result<()> {
        if self.hostname.is_empty() {
            return Err(Error::Config("hostname must not be empty".into()).boxed());
        }
        if self.get_max_oids == 0 {
            return Err(Error::Config("get_max_oids must be at least 1".into()).boxed());
        }
        if self.set_max_oids == 0 {
            return Err(Error::Config("set_max_oids must be at least 1".into()).boxed());
        }
        Ok(())
    }
}

/// A target agent plus the parameters every command is built from.
///
/// Generic over the process runner, with [`ShellRunner`] as default. The
/// configuration is fixed at construction: two calls with the same OIDs and
/// operation produce byte-identical command lines.
///
/// Each operation blocks until every invocation it needs has exited.
/// Sessions are cheap to clone and can be shared between threads.
///
/// # Example
///
/// ```rust,no_run
/// use snmp_shell::Session;
///
/// # fn example() -> snmp_shell::Result<()> {
/// let session = Session::builder("192.0.2.1")
///     .community("public")
///     .version_str("2c")
///     .timeout_secs(5)
///     .build()?;
///
/// let map = session.get([".1.3.6.1.2.1.1.3.0", ".1.3.6.1.2.1.1.5.0"])?;
/// for (oid, value) in &map {
///     println!("{} = {}", oid, value);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session<R: Runner = ShellRunner> {
    inner: Arc<SessionInner<R>>,
}

struct SessionInner<R: Runner> {
    runner: R,
    config: SessionConfig,
}

impl Session<ShellRunner> {
    /// Create a new session builder.
    ///
    /// This is the usual entry point for session construction.
    pub fn builder(hostname: impl Into<String>) -> SessionBuilder {
        SessionBuilder::new(hostname)
    }
}

impl<R: Runner> Session<R> {
    /// Create a session from a runner and a validated configuration.
    pub fn new(runner: R, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            inner: Arc::new(SessionInner { runner, config }),
        })
    }

    /// The configuration this session builds commands from.
    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// The runner executing commands.
    pub fn runner(&self) -> &R {
        &self.inner.runner
    }

    /// Commands [`get`](Self::get) would run for these OIDs.
    pub fn plan_get(&self, oids: impl Into<Oids>) -> Vec<CommandLine> {
        self.plan_read(Tool::Get, &oids.into())
    }

    /// Commands [`getnext`](Self::getnext) would run for these OIDs.
    pub fn plan_getnext(&self, oids: impl Into<Oids>) -> Vec<CommandLine> {
        self.plan_read(Tool::GetNext, &oids.into())
    }

    /// Commands [`set`](Self::set) would run for these entries.
    pub fn plan_set(&self, entries: impl Into<Oids>) -> Vec<CommandLine> {
        let config = &self.inner.config;
        command::plan(entries.into().as_slice(), config.set_max_oids, |chunk| {
            command::set_chunk(config, chunk)
        })
    }

    /// The command [`walk`](Self::walk) would run for this root.
    pub fn plan_walk(&self, root: &str) -> CommandLine {
        command::walk(&self.inner.config, root)
    }

    fn plan_read(&self, tool: Tool, oids: &Oids) -> Vec<CommandLine> {
        let config = &self.inner.config;
        command::plan(oids.as_slice(), config.get_max_oids, |chunk| {
            command::read_chunk(tool, config, chunk)
        })
    }

    /// GET one or more OIDs with `snmpget`.
    ///
    /// Requests larger than `get_max_oids` are split into consecutive
    /// invocations. Missing OIDs are not an error; see [`VarMap::missing`].
    ///
    /// # Errors
    ///
    /// [`Error::ToolNotFound`] if `snmpget` is not installed,
    /// [`Error::Spawn`] if the shell could not be started.
    pub fn get(&self, oids: impl Into<Oids>) -> Result<VarMap> {
        let oids = oids.into();
        self.execute(Tool::Get, self.plan_read(Tool::Get, &oids))
    }

    /// GETNEXT one or more OIDs with `snmpgetnext`.
    ///
    /// The returned keys are the successor OIDs the agent reported, not the
    /// requested ones.
    pub fn getnext(&self, oids: impl Into<Oids>) -> Result<VarMap> {
        let oids = oids.into();
        self.execute(Tool::GetNext, self.plan_read(Tool::GetNext, &oids))
    }

    /// SET one or more `OID TYPE VALUE` entries with `snmpset`.
    ///
    /// Entries are passed to the shell verbatim (for example
    /// `.1.3.6.1.2.1.1.5.0 s "core-sw1"`), so values from untrusted input
    /// must be quoted by the caller with [`escape_arg`](crate::escape_arg).
    pub fn set(&self, entries: impl Into<Oids>) -> Result<VarMap> {
        self.execute(Tool::Set, self.plan_set(entries))
    }

    /// Walk the subtree under `root` with `snmpwalk -Cc`.
    ///
    /// Always a single invocation, however many variables come back.
    pub fn walk(&self, root: &str) -> Result<VarMap> {
        self.execute(Tool::Walk, vec![self.plan_walk(root)])
    }

    #[instrument(
        level = "debug",
        skip(self, commands),
        err,
        fields(snmp.host = %self.inner.config.hostname, snmp.chunk_count = commands.len())
    )]
    fn execute(&self, tool: Tool, commands: Vec<CommandLine>) -> Result<VarMap> {
        if commands.len() > 1 {
            tracing::debug!(target: "snmp_shell::session", { %tool, snmp.chunk_count = commands.len(), snmp.chunk_mode = ?self.inner.config.chunk_mode }, "splitting request into chunks");
        }

        match self.inner.config.chunk_mode {
            ChunkMode::Accumulate => {
                let mut all = VarMap::new();
                for (idx, cmd) in commands.iter().enumerate() {
                    tracing::trace!(target: "snmp_shell::session", { snmp.chunk = idx + 1, snmp.arg_count = cmd.args().len() }, "running chunk");
                    let output = self.inner.runner.run(cmd)?;
                    all.extend(parse_output(tool, &output)?);
                }
                Ok(all)
            }
            ChunkMode::LastOnly => {
                let mut last: Option<ExecOutput> = None;
                for cmd in &commands {
                    last = Some(self.inner.runner.run(cmd)?);
                }
                match last {
                    Some(output) => parse_output(tool, &output),
                    None => Ok(VarMap::new()),
                }
            }
        }
    }
}

impl<R: Runner> fmt::Debug for Session<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}
