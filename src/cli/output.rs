//! Result writers for the CLI tools.

use std::io::{self, Write};

use super::args::OutputFormat;
use crate::command::CommandLine;
use crate::error::Error;
use crate::value::{Value, VarMap};

/// Exit code when every requested OID was answered (or nothing was requested).
pub const EXIT_OK: u8 = 0;
/// Exit code for hard errors.
pub const EXIT_ERROR: u8 = 1;
/// Exit code when the result is missing some requested OIDs.
pub const EXIT_PARTIAL: u8 = 2;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Text(_) => "text",
        Value::NoSuchObject => "noSuchObject",
        Value::NoSuchInstance => "noSuchInstance",
    }
}

/// Write a result map in the requested format.
pub fn write_results<W: Write>(out: &mut W, format: OutputFormat, map: &VarMap) -> io::Result<()> {
    match format {
        OutputFormat::Human => {
            for (oid, value) in map {
                match value {
                    Value::Text(s) => writeln!(out, "{} = {}", oid, s)?,
                    Value::NoSuchObject => writeln!(out, "{} = <no such object>", oid)?,
                    Value::NoSuchInstance => writeln!(out, "{} = <no such instance>", oid)?,
                }
            }
        }
        OutputFormat::Raw => {
            for (oid, value) in map {
                // one record per line
                writeln!(out, "{}\t{}", oid, value.as_str().replace('\n', "\\n"))?;
            }
        }
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = map
                .iter()
                .map(|(oid, value)| {
                    serde_json::json!({
                        "oid": oid,
                        "type": kind(value),
                        "value": value.as_str(),
                    })
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &items)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print planned command lines (community masked).
pub fn write_plan<W: Write>(out: &mut W, commands: &[CommandLine]) -> io::Result<()> {
    for cmd in commands {
        writeln!(out, "{}", cmd.redacted())?;
    }
    Ok(())
}

/// Report requested OIDs that are absent from the result on stderr.
///
/// Returns the exit code to use.
pub fn report_missing(map: &VarMap, requested: &[String]) -> u8 {
    let missing = map.missing(requested);
    if missing.is_empty() {
        return EXIT_OK;
    }
    for oid in missing {
        eprintln!("No response for {}", oid);
    }
    EXIT_PARTIAL
}

/// Print an error to stderr.
pub fn write_error(err: &Error) {
    eprintln!("Error: {}", err);
    if err.is_tool_missing() {
        eprintln!("Hint: install net-snmp's command-line tools or pass --tool-dir");
    }
}
