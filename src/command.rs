//! Command-line construction for the net-snmp tools.
//!
//! A [`CommandLine`] is an argument vector plus enough type information to
//! render it safely as a single POSIX shell line. Values that come from the
//! caller (host, community, version, timeout, output options, OIDs) are
//! always rendered through [`escape_arg`], so they stay exactly one shell
//! word no matter which metacharacters they contain.
//!
//! The one deliberate exception is `snmpset`: each set entry is a complete
//! `OID TYPE VALUE` fragment (for example `.1.3.6.1.2.1.1.5.0 s "core-sw1"`)
//! that the shell must split into words, so set entries are emitted as
//! [`Arg::Raw`]. Callers building set entries from untrusted input must
//! quote the value part themselves, e.g. with [`escape_arg`].

use std::fmt;
use std::path::Path;

use crate::session::SessionConfig;

/// One of the four net-snmp tools this crate drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// `snmpget`
    Get,
    /// `snmpgetnext`
    GetNext,
    /// `snmpset`
    Set,
    /// `snmpwalk`
    Walk,
}

impl Tool {
    /// Executable name, resolved through `PATH` unless a tool directory is set.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Get => "snmpget",
            Self::GetNext => "snmpgetnext",
            Self::Set => "snmpset",
            Self::Walk => "snmpwalk",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// A single argument of a [`CommandLine`].
#[derive(Clone, PartialEq, Eq)]
pub enum Arg {
    /// Fixed text owned by this crate (flags such as `-c` or `-Cc`).
    Literal(&'static str),
    /// Caller-supplied value, rendered as one single-quoted shell word.
    Quoted(String),
    /// Quoted like [`Arg::Quoted`] but masked in [`CommandLine::redacted`].
    Secret(String),
    /// Verbatim shell text (set entries).
    Raw(String),
}

impl Arg {
    /// The argument text before any shell quoting.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(s) => *s,
            Self::Quoted(s) | Self::Secret(s) | Self::Raw(s) => s.as_str(),
        }
    }

    fn render(&self, out: &mut String, redact: bool) {
        match self {
            Self::Literal(s) => out.push_str(s),
            Self::Quoted(s) => out.push_str(&escape_arg(s)),
            Self::Secret(_) if redact => out.push_str("'***'"),
            Self::Secret(s) => out.push_str(&escape_arg(s)),
            Self::Raw(s) => out.push_str(s),
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Self::Quoted(s) => f.debug_tuple("Quoted").field(s).finish(),
            Self::Secret(_) => f.debug_tuple("Secret").field(&"***").finish(),
            Self::Raw(s) => f.debug_tuple("Raw").field(s).finish(),
        }
    }
}

/// Quote a string as a single POSIX shell word.
///
/// The value is wrapped in single quotes and every embedded `'` becomes
/// `'\''`. Inside single quotes the shell performs no expansion at all, so
/// `$()`, backticks, `;`, globs and whitespace are all inert.
///
/// ```rust
/// use snmp_shell::escape_arg;
///
/// assert_eq!(escape_arg("public"), "'public'");
/// assert_eq!(escape_arg("it's"), r"'it'\''s'");
/// assert_eq!(escape_arg(""), "''");
/// ```
pub fn escape_arg(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push_str(r"'\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}

/// A fully built invocation of one net-snmp tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tool: Tool,
    host: String,
    program: Arg,
    args: Vec<Arg>,
}

impl CommandLine {
    fn new(tool: Tool, config: &SessionConfig) -> Self {
        let tool_dir: Option<&Path> = config.tool_dir.as_deref();
        let program = match tool_dir {
            Some(dir) => Arg::Quoted(dir.join(tool.binary()).to_string_lossy().into_owned()),
            None => Arg::Literal(tool.binary()),
        };
        Self {
            tool,
            host: config.hostname.clone(),
            program,
            args: Vec::new(),
        }
    }

    fn push(&mut self, arg: Arg) -> &mut Self {
        self.args.push(arg);
        self
    }

    /// Which tool this command runs.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Agent host this command targets.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Program token (bare binary name or path inside the tool directory).
    pub fn program(&self) -> &str {
        self.program.as_str()
    }

    /// Arguments after the program token.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Argument texts after the program token, unquoted.
    pub fn argv(&self) -> Vec<&str> {
        self.args.iter().map(Arg::as_str).collect()
    }

    /// Render as a shell command line.
    pub fn to_shell(&self) -> String {
        self.render(false)
    }

    /// Render as a shell command line with the community masked.
    pub fn redacted(&self) -> String {
        self.render(true)
    }

    fn render(&self, redact: bool) -> String {
        let mut out = String::new();
        self.program.render(&mut out, redact);
        for arg in &self.args {
            out.push(' ');
            arg.render(&mut out, redact);
        }
        out
    }
}

impl fmt::Display for CommandLine {
    /// Displays the redacted form; use [`CommandLine::to_shell`] for the real line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

/// Common `<host> -c <community> -v <version> -t <timeout> -O <options>` prefix
/// shared by snmpget, snmpgetnext and snmpwalk.
fn read_command(tool: Tool, config: &SessionConfig) -> CommandLine {
    let mut cmd = CommandLine::new(tool, config);
    cmd.push(Arg::Quoted(config.hostname.clone()))
        .push(Arg::Literal("-c"))
        .push(Arg::Secret(config.community.clone()))
        .push(Arg::Literal("-v"))
        .push(Arg::Quoted(config.version.as_str().to_owned()))
        .push(Arg::Literal("-t"))
        .push(Arg::Quoted(config.timeout_secs.to_string()))
        .push(Arg::Literal("-O"))
        .push(Arg::Quoted(config.output_options.clone()));
    cmd
}

/// Build one `snmpget` / `snmpgetnext` invocation for a chunk of OIDs.
pub(crate) fn read_chunk(tool: Tool, config: &SessionConfig, oids: &[String]) -> CommandLine {
    let mut cmd = read_command(tool, config);
    for oid in oids {
        cmd.push(Arg::Quoted(oid.clone()));
    }
    cmd
}

/// Build the single `snmpwalk` invocation for a subtree root.
pub(crate) fn walk(config: &SessionConfig, root: &str) -> CommandLine {
    let mut cmd = read_command(Tool::Walk, config);
    cmd.push(Arg::Literal("-Cc")).push(Arg::Quoted(root.to_owned()));
    cmd
}

/// Build one `snmpset` invocation for a chunk of `OID TYPE VALUE` entries.
///
/// snmpset takes the agent after the options, so the host is placed last.
pub(crate) fn set_chunk(config: &SessionConfig, entries: &[String]) -> CommandLine {
    let mut cmd = CommandLine::new(Tool::Set, config);
    cmd.push(Arg::Literal("-v"))
        .push(Arg::Quoted(config.version.as_str().to_owned()))
        .push(Arg::Literal("-O"))
        .push(Arg::Quoted(config.output_options.clone()))
        .push(Arg::Literal("-c"))
        .push(Arg::Secret(config.community.clone()))
        .push(Arg::Literal("-t"))
        .push(Arg::Quoted(config.timeout_secs.to_string()))
        .push(Arg::Quoted(config.hostname.clone()));
    for entry in entries {
        cmd.push(Arg::Raw(entry.clone()));
    }
    cmd
}

/// Split `items` into consecutive chunks of at most `max` and build one
/// command per chunk.
pub(crate) fn plan<F>(items: &[String], max: usize, build: F) -> Vec<CommandLine>
where
    F: Fn(&[String]) -> CommandLine,
{
    // Builders reject zero limits; clamp anyway so chunks() cannot panic.
    items.chunks(max.max(1)).map(build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Version;

    fn config() -> SessionConfig {
        SessionConfig {
            hostname: "192.0.2.10".into(),
            community: "public".into(),
            ..SessionConfig::default()
        }
    }

    fn oids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!(".1.3.6.1.2.1.2.2.1.2.{}", i)).collect()
    }

    #[test]
    fn escape_plain_and_quote() {
        assert_eq!(escape_arg("abc"), "'abc'");
        assert_eq!(escape_arg("a'b"), r"'a'\''b'");
        assert_eq!(escape_arg("''"), r"''\'''\'''");
    }

    #[test]
    fn get_command_layout() {
        let cmd = read_chunk(Tool::Get, &config(), &oids(2));
        assert_eq!(cmd.program(), "snmpget");
        assert_eq!(
            cmd.to_shell(),
            "snmpget '192.0.2.10' -c 'public' -v '1' -t '30' -O '0efnqt' \
             '.1.3.6.1.2.1.2.2.1.2.0' '.1.3.6.1.2.1.2.2.1.2.1'"
        );
    }

    #[test]
    fn getnext_uses_same_flag_order() {
        let get = read_chunk(Tool::Get, &config(), &oids(1));
        let next = read_chunk(Tool::GetNext, &config(), &oids(1));
        assert_eq!(next.program(), "snmpgetnext");
        assert_eq!(get.argv(), next.argv());
    }

    #[test]
    fn walk_appends_cc_before_root() {
        let cmd = walk(&config(), ".1.3.6.1.2.1.1");
        let argv = cmd.argv();
        assert_eq!(&argv[argv.len() - 2..], ["-Cc", ".1.3.6.1.2.1.1"]);
    }

    #[test]
    fn set_places_host_last() {
        let mut cfg = config();
        cfg.version = Version::V2c;
        let cmd = set_chunk(&cfg, &[".1.3.6.1.2.1.1.5.0 s core-sw1".to_string()]);
        assert_eq!(
            cmd.to_shell(),
            "snmpset -v '2c' -O '0efnqt' -c 'public' -t '30' '192.0.2.10' \
             .1.3.6.1.2.1.1.5.0 s core-sw1"
        );
    }

    #[test]
    fn community_is_redacted() {
        let mut cfg = config();
        cfg.community = "s3cret".into();
        let cmd = read_chunk(Tool::Get, &cfg, &oids(1));
        assert!(cmd.to_shell().contains("'s3cret'"));
        assert!(!cmd.redacted().contains("s3cret"));
        assert!(!cmd.to_string().contains("s3cret"));
        assert!(!format!("{:?}", cmd).contains("s3cret"));
    }

    #[test]
    fn tool_dir_prefixes_program() {
        let mut cfg = config();
        cfg.tool_dir = Some("/opt/net snmp/bin".into());
        let cmd = walk(&cfg, ".1.3");
        assert_eq!(cmd.program(), "/opt/net snmp/bin/snmpwalk");
        assert!(cmd.to_shell().starts_with("'/opt/net snmp/bin/snmpwalk' "));
    }

    #[test]
    fn plan_chunks_in_order() {
        let items = oids(23);
        let cfg = config();
        let cmds = plan(&items, 10, |chunk| read_chunk(Tool::Get, &cfg, chunk));
        let sizes: Vec<usize> = cmds.iter().map(|c| c.args().len() - 9).collect();
        assert_eq!(sizes, [10, 10, 3]);
        assert_eq!(cmds[2].argv()[9], ".1.3.6.1.2.1.2.2.1.2.20");
    }

    #[test]
    fn plan_empty_is_empty() {
        let cfg = config();
        assert!(plan(&[], 10, |chunk| read_chunk(Tool::Get, &cfg, chunk)).is_empty());
    }
}
