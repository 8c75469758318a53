//! ssnmp-set: Set SNMP values with snmpset.
//!
//! Part of the snmp-shell CLI utilities.

use clap::Parser;
use snmp_shell::cli::args::{CommonArgs, OutputArgs, parse_set_triples};
use snmp_shell::cli::output::{EXIT_ERROR, write_error, write_plan, write_results};
use std::process::ExitCode;

/// Set one or more SNMP values with snmpset.
///
/// Values are given as OID TYPE VALUE triples, where TYPE is one of the
/// snmpset type letters (i, u, s, x, d, b, o, a, t, c, C).
#[derive(Debug, Parser)]
#[command(name = "ssnmp-set", version, about)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// OID TYPE VALUE triples.
    #[arg(required = true, value_name = "OID TYPE VALUE", num_args = 3..)]
    triples: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.output.init_tracing();

    let entries = match parse_set_triples(&args.triples) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let session = match args.common.session_builder().build() {
        Ok(session) => session,
        Err(e) => {
            write_error(&e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if args.output.dry_run {
        let plan = session.plan_set(entries);
        if let Err(e) = write_plan(&mut std::io::stdout().lock(), &plan) {
            eprintln!("Error writing output: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    match session.set(entries) {
        Ok(map) => {
            if let Err(e) = write_results(&mut std::io::stdout().lock(), args.output.format, &map) {
                eprintln!("Error writing output: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
            if map.is_empty() {
                // snmpset echoes every variable it set; nothing back means it failed
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            write_error(&e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
