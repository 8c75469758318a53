//! Command-line argument structures for the snmp-shell CLI tools.
//!
//! This module provides reusable clap argument structures for the `ssnmp-*` tools.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::session::{ChunkMode, SessionBuilder};

/// Output format for CLI tools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `OID = value` per line.
    #[default]
    Human,
    /// JSON array of `{oid, type, value}` objects, in result order.
    Json,
    /// Raw tab-separated output for scripting.
    Raw,
}

/// Common arguments shared across all CLI tools.
#[derive(Debug, Parser)]
pub struct CommonArgs {
    /// Agent host name or address.
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// SNMP version: 1 or 2c. Anything else selects 1.
    #[arg(short = 'v', long = "snmp-version", default_value = "1")]
    pub snmp_version: String,

    /// Community string.
    #[arg(short = 'c', long = "community", default_value = "public")]
    pub community: String,

    /// Request timeout in seconds, passed to the net-snmp tool.
    #[arg(short = 't', long = "timeout", default_value = "30")]
    pub timeout: u64,

    /// Maximum OIDs (or set entries) per tool invocation.
    #[arg(long = "max-oids", default_value = "10")]
    pub max_oids: usize,

    /// Directory containing the net-snmp tools (default: search PATH).
    #[arg(long = "tool-dir", value_name = "DIR")]
    pub tool_dir: Option<PathBuf>,

    /// Keep only the last chunk's output when a request is split.
    #[arg(long = "last-chunk-only")]
    pub last_chunk_only: bool,
}

impl CommonArgs {
    /// Build a session builder from the CLI arguments.
    pub fn session_builder(&self) -> SessionBuilder {
        let mut builder = SessionBuilder::new(self.target.clone())
            .community(self.community.clone())
            .version_str(&self.snmp_version)
            .timeout_secs(self.timeout)
            .get_max_oids(self.max_oids)
            .set_max_oids(self.max_oids)
            .chunk_mode(if self.last_chunk_only {
                ChunkMode::LastOnly
            } else {
                ChunkMode::Accumulate
            });
        if let Some(ref dir) = self.tool_dir {
            builder = builder.tool_dir(dir.clone());
        }
        builder
    }
}

/// Output control arguments.
#[derive(Debug, Parser)]
pub struct OutputArgs {
    /// Output format: human, json, or raw.
    #[arg(short = 'O', long = "output", default_value = "human")]
    pub format: OutputFormat,

    /// Print the command lines that would run, community masked, and exit.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Enable debug logging (snmp_shell=debug).
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Enable trace logging (snmp_shell=trace).
    #[arg(short = 'D', long = "trace")]
    pub trace: bool,
}

impl OutputArgs {
    /// Initialize tracing based on debug/trace flags.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.trace {
            "snmp_shell=trace"
        } else if self.debug {
            "snmp_shell=debug"
        } else {
            "snmp_shell=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }
}

/// Value type letters accepted by snmpset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// INTEGER
    #[value(name = "i")]
    Integer,
    /// Unsigned32/Gauge32
    #[value(name = "u")]
    Unsigned,
    /// STRING
    #[value(name = "s")]
    String,
    /// Hex-STRING
    #[value(name = "x")]
    HexString,
    /// Decimal STRING
    #[value(name = "d")]
    DecimalString,
    /// BITS
    #[value(name = "b")]
    Bits,
    /// OBJECT IDENTIFIER
    #[value(name = "o")]
    Oid,
    /// IpAddress
    #[value(name = "a")]
    IpAddress,
    /// TimeTicks
    #[value(name = "t")]
    TimeTicks,
    /// Counter32
    #[value(name = "c")]
    Counter32,
    /// Counter64
    #[value(name = "C")]
    Counter64,
}

impl ValueType {
    /// Type letter understood by snmpset.
    pub fn letter(&self) -> char {
        match self {
            ValueType::Integer => 'i',
            ValueType::Unsigned => 'u',
            ValueType::String => 's',
            ValueType::HexString => 'x',
            ValueType::DecimalString => 'd',
            ValueType::Bits => 'b',
            ValueType::Oid => 'o',
            ValueType::IpAddress => 'a',
            ValueType::TimeTicks => 't',
            ValueType::Counter32 => 'c',
            ValueType::Counter64 => 'C',
        }
    }
}

impl std::str::FromStr for ValueType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, false).map_err(|_| format!("invalid type specifier: {}", s))
    }
}

/// Build a shell-safe `OID TYPE VALUE` set entry.
///
/// The OID and value are quoted so that values from the command line can
/// never be interpreted by the shell.
pub fn set_entry(oid: &str, value_type: ValueType, value: &str) -> String {
    format!(
        "{} {} {}",
        crate::escape_arg(oid),
        value_type.letter(),
        crate::escape_arg(value)
    )
}

/// Parse `OID TYPE VALUE` triples from a flat argument list.
pub fn parse_set_triples(args: &[String]) -> Result<Vec<String>, String> {
    if args.is_empty() || !args.len().is_multiple_of(3) {
        return Err("set arguments must be OID TYPE VALUE triples".into());
    }
    args.chunks(3)
        .map(|t| {
            let value_type: ValueType = t[1].parse()?;
            Ok(set_entry(&t[0], value_type, &t[2]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    fn common(target: &str) -> CommonArgs {
        CommonArgs {
            target: target.to_string(),
            snmp_version: "2c".to_string(),
            community: "public".to_string(),
            timeout: 5,
            max_oids: 3,
            tool_dir: None,
            last_chunk_only: false,
        }
    }

    #[test]
    fn test_session_builder_from_args() {
        let builder = common("192.0.2.1").session_builder();
        let cfg = builder.config();
        assert_eq!(cfg.hostname, "192.0.2.1");
        assert_eq!(cfg.version, Version::V2c);
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.get_max_oids, 3);
        assert_eq!(cfg.set_max_oids, 3);
        assert_eq!(cfg.chunk_mode, ChunkMode::Accumulate);
        assert_eq!(cfg.tool_dir, None);
    }

    #[test]
    fn test_unsupported_version_falls_back_to_v1() {
        let args = CommonArgs::try_parse_from(["ssnmp-get", "-v", "3", "192.0.2.1"]).unwrap();
        assert_eq!(args.snmp_version, "3");
        assert_eq!(args.session_builder().config().version, Version::V1);

        let args = CommonArgs::try_parse_from(["ssnmp-get", "-v", "2c", "192.0.2.1"]).unwrap();
        assert_eq!(args.session_builder().config().version, Version::V2c);
    }

    #[test]
    fn test_last_chunk_only_flag() {
        let mut args = common("192.0.2.1");
        args.last_chunk_only = true;
        args.tool_dir = Some("/opt/snmp/bin".into());
        let builder = args.session_builder();
        assert_eq!(builder.config().chunk_mode, ChunkMode::LastOnly);
        assert_eq!(builder.config().tool_dir, Some(PathBuf::from("/opt/snmp/bin")));
    }

    #[test]
    fn test_value_type_from_str() {
        assert_eq!("s".parse::<ValueType>().unwrap(), ValueType::String);
        assert_eq!("C".parse::<ValueType>().unwrap(), ValueType::Counter64);
        assert!("z".parse::<ValueType>().is_err());
    }

    #[test]
    fn test_set_entry_quotes_value() {
        assert_eq!(
            set_entry(".1.3.6.1.2.1.1.5.0", ValueType::String, "core sw'1; reboot"),
            r"'.1.3.6.1.2.1.1.5.0' s 'core sw'\''1; reboot'"
        );
    }

    #[test]
    fn test_parse_set_triples() {
        let args: Vec<String> = [".1.3.6.1.2.1.1.5.0", "s", "sw1", ".1.3.6.1.2.1.1.6.0", "s", "lab"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let entries = parse_set_triples(&args).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], "'.1.3.6.1.2.1.1.6.0' s 'lab'");

        assert!(parse_set_triples(&args[..4]).is_err());
        assert!(parse_set_triples(&[]).is_err());
    }
}
