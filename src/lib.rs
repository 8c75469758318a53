//! # snmp-shell
//!
//! Typed wrapper around the net-snmp command-line tools.
//!
//! This crate does not speak SNMP itself. It builds safely quoted command
//! lines for `snmpget`, `snmpgetnext`, `snmpset` and `snmpwalk`, runs them,
//! and parses their text output into an ordered OID → value map.
//!
//! ## Features
//!
//! - SNMPv1 and v2c community access
//! - Automatic chunking of large requests, results merged across chunks
//! - Shell-escaped arguments for every caller-supplied value
//! - Pluggable [`Runner`](runner::Runner) for tests without a net-snmp install
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use snmp_shell::Session;
//!
//! fn main() -> Result<(), Box<snmp_shell::Error>> {
//!     let session = Session::builder("192.168.1.1")
//!         .community("public")
//!         .version_str("2c")
//!         .build()?;
//!
//!     let result = session.get(".1.3.6.1.2.1.1.1.0")?;
//!     println!("sysDescr: {:?}", result.get_str(".1.3.6.1.2.1.1.1.0"));
//!
//!     let system = session.walk(".1.3.6.1.2.1.1")?;
//!     for (oid, value) in &system {
//!         println!("{} = {}", oid, value);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Partial results
//!
//! Only a missing tool (exit status 127) is an error. Timeouts and agent
//! errors produce a map without the affected OIDs:
//!
//! ```rust,no_run
//! # use snmp_shell::Session;
//! # fn example() -> snmp_shell::Result<()> {
//! # let session = Session::builder("192.168.1.1").build()?;
//! let wanted = [".1.3.6.1.2.1.1.3.0", ".1.3.6.1.2.1.1.5.0"];
//! let result = session.get(wanted)?;
//! for oid in result.missing(&wanted) {
//!     eprintln!("no answer for {}", oid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod error;
pub mod oids;
pub mod output;
pub mod runner;
pub mod session;
pub mod value;
pub mod version;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use command::{CommandLine, Tool, escape_arg};
pub use error::{Error, Result};
pub use oids::Oids;
pub use output::{ExecOutput, parse_lines, parse_output};
pub use runner::{Runner, ShellRunner};
pub use session::{ChunkMode, Session, SessionBuilder, SessionConfig};
pub use value::{Value, VarMap};
pub use version::Version;
